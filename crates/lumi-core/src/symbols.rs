//! Symbol definitions and the default symbol roster

use serde::{Deserialize, Serialize};

/// A single symbol on a reel strip.
///
/// Identity is the `id` string alone; `art_ref` is inert metadata for the
/// presentation layer and never takes part in comparison or scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID (e.g., "CHERRY", "SEVEN", "WILD")
    pub id: String,
    /// Art asset reference for the presentation layer
    pub art_ref: String,
}

impl Symbol {
    /// Sentinel ID for an unset or out-of-range read. Consumers must not
    /// score or display it; the payout table refuses to match any line
    /// containing it.
    pub const INVALID_ID: &'static str = "INVALID";

    /// Create a symbol
    pub fn new(id: impl Into<String>, art_ref: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            art_ref: art_ref.into(),
        }
    }

    /// The sentinel symbol returned for unset or out-of-range reads
    pub fn invalid() -> Self {
        Self::new(Self::INVALID_ID, "")
    }

    /// Check if this is the sentinel symbol
    pub fn is_invalid(&self) -> bool {
        self.id == Self::INVALID_ID
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Default symbol roster for a classic 3-reel machine
pub fn standard_symbols() -> Vec<Symbol> {
    vec![
        Symbol::new("CHERRY", "assets/symbols/cherry.png"),
        Symbol::new("LEMON", "assets/symbols/lemon.png"),
        Symbol::new("BAR", "assets/symbols/bar.png"),
        Symbol::new("BELL", "assets/symbols/bell.png"),
        Symbol::new("SEVEN", "assets/symbols/seven.png"),
        Symbol::new("WILD", "assets/symbols/wild.png"),
    ]
}

/// Default reel strip. Repeated symbols raise their effective probability;
/// SEVEN and WILD appear once each.
pub fn standard_strip() -> Vec<Symbol> {
    let copies: [usize; 6] = [4, 4, 3, 2, 1, 1];
    let mut strip = Vec::with_capacity(copies.iter().sum());
    for (symbol, count) in standard_symbols().into_iter().zip(copies) {
        for _ in 0..count {
            strip.push(symbol.clone());
        }
    }
    strip
}
