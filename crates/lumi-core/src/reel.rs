//! A single spinning reel

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{SlotError, SlotResult};
use crate::symbols::Symbol;

/// One independently spinning column of symbols.
///
/// A reel owns its strip and its random generator exclusively. The
/// generator is seeded once at construction and never reseeded per spin,
/// so successive spins are independent draws from one stream.
pub struct Reel {
    strip: Vec<Symbol>,
    /// Index of the symbol on the payline; `None` while the strip is empty
    position: Option<usize>,
    rng: StdRng,
}

impl Reel {
    /// Create an empty reel seeded from OS entropy
    pub fn new() -> Self {
        Self {
            strip: Vec::new(),
            position: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an empty reel with a fixed seed, for deterministic runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            strip: Vec::new(),
            position: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the symbol strip. Resets the position to 0, or clears it
    /// when the new strip is empty.
    pub fn set_strip(&mut self, strip: Vec<Symbol>) {
        self.position = if strip.is_empty() { None } else { Some(0) };
        self.strip = strip;
    }

    /// Append one symbol to the strip
    pub fn push_symbol(&mut self, symbol: Symbol) {
        self.strip.push(symbol);
        if self.position.is_none() {
            self.position = Some(0);
        }
    }

    /// Draw a new uniformly random position over the strip. An empty strip
    /// clears the position instead.
    pub fn spin(&mut self) {
        if self.strip.is_empty() {
            self.position = None;
            return;
        }
        self.position = Some(self.rng.random_range(0..self.strip.len()));
    }

    /// Replace the generator with a seeded one, for deterministic runs
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Pin the position explicitly, for scripted outcomes
    pub fn force_position(&mut self, position: usize) -> SlotResult<()> {
        if position >= self.strip.len() {
            return Err(SlotError::StripPositionOutOfRange {
                position,
                len: self.strip.len(),
            });
        }
        self.position = Some(position);
        Ok(())
    }

    /// Symbol on the payline, or the sentinel when the strip is empty
    pub fn current_symbol(&self) -> Symbol {
        self.symbol_at_offset(0)
    }

    /// Symbol one step above the payline, wrapping at the strip ends
    pub fn symbol_above(&self) -> Symbol {
        self.symbol_at_offset(-1)
    }

    /// Symbol one step below the payline, wrapping at the strip ends
    pub fn symbol_below(&self) -> Symbol {
        self.symbol_at_offset(1)
    }

    fn symbol_at_offset(&self, offset: isize) -> Symbol {
        let Some(position) = self.position else {
            return Symbol::invalid();
        };
        let len = self.strip.len();
        if position >= len {
            return Symbol::invalid();
        }
        let index = (position as isize + offset).rem_euclid(len as isize) as usize;
        self.strip[index].clone()
    }

    /// The full strip, for drawing
    pub fn strip(&self) -> &[Symbol] {
        &self.strip
    }

    /// Current position; `None` while the strip is empty
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Strip length
    pub fn len(&self) -> usize {
        self.strip.len()
    }

    /// Check if the strip is empty
    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }
}

impl Default for Reel {
    fn default() -> Self {
        Self::new()
    }
}
