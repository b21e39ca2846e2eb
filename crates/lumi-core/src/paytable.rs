//! Payout rules, paylines, and win calculation

use serde::{Deserialize, Serialize};

use crate::config::{REEL_COUNT, VISIBLE_ROWS};
use crate::symbols::Symbol;

/// A single winning combination and its payout per unit bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRule {
    /// Symbol IDs, one per reel, left to right. Matched literally; only
    /// drawn symbols substitute as wild.
    pub combination: Vec<String>,
    /// Base payout per 1 unit of bet
    pub payout: u64,
}

impl PayoutRule {
    /// Create a rule from symbol IDs
    pub fn new<S: Into<String>>(combination: impl IntoIterator<Item = S>, payout: u64) -> Self {
        Self {
            combination: combination.into_iter().map(Into::into).collect(),
            payout,
        }
    }
}

/// A payline: the row read from each reel's visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline {
    /// Payline index (0-based)
    pub index: u8,
    /// Row per reel: 0 = top, 1 = middle, 2 = bottom
    pub rows: [u8; REEL_COUNT],
}

/// The five standard paylines: three rows and both diagonals
pub fn standard_paylines() -> Vec<Payline> {
    vec![
        Payline { index: 0, rows: [0, 0, 0] },
        Payline { index: 1, rows: [1, 1, 1] },
        Payline { index: 2, rows: [2, 2, 2] },
        Payline { index: 3, rows: [0, 1, 2] },
        Payline { index: 4, rows: [2, 1, 0] },
    ]
}

/// A win on a single payline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    /// Payline index
    pub line_index: u8,
    /// Base payout per unit bet
    pub payout: u64,
}

/// Result of scoring a full visible grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEvaluation {
    /// Per-line wins; lines that paid nothing are omitted
    pub line_wins: Vec<LineWin>,
    /// Sum of base payouts across all lines
    pub total_base: u64,
}

impl GridEvaluation {
    /// Check if any line paid
    pub fn is_win(&self) -> bool {
        self.total_base > 0
    }
}

/// Priority-ordered payout rules.
///
/// Rules are sorted once at construction, highest payout first; equal
/// payouts keep their declaration order. Line evaluation stops at the
/// first structural match, so the highest-paying match wins within a line.
/// Deliberately not deserializable: tables only come from [`PayoutTable::new`],
/// which establishes the sort.
#[derive(Debug, Clone)]
pub struct PayoutTable {
    rules: Vec<PayoutRule>,
}

impl PayoutTable {
    /// Build a table from rules in any order
    pub fn new(mut rules: Vec<PayoutRule>) -> Self {
        // Stable sort keeps declaration order among equal payouts.
        rules.sort_by(|a, b| b.payout.cmp(&a.payout));
        Self { rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[PayoutRule] {
        &self.rules
    }

    /// Score one line of drawn symbol IDs.
    ///
    /// Returns the payout of the first matching rule, or 0. A drawn wild
    /// stands in for any required symbol; a line containing the invalid
    /// sentinel never matches.
    pub fn evaluate_line(&self, line: &[&str], wild_id: &str) -> u64 {
        if line.iter().any(|&id| id == Symbol::INVALID_ID) {
            return 0;
        }
        for rule in &self.rules {
            if rule.combination.len() != line.len() {
                continue;
            }
            let matches = rule
                .combination
                .iter()
                .zip(line)
                .all(|(required, &drawn)| drawn == required || drawn == wild_id);
            if matches {
                return rule.payout;
            }
        }
        0
    }

    /// Score a visible grid (columns = reels) across the given paylines.
    ///
    /// Lines are additive: each payline is scored independently and the
    /// base payouts summed. First-match-wins applies only within a single
    /// line's rule search.
    pub fn evaluate_grid(
        &self,
        grid: &[[Symbol; VISIBLE_ROWS]; REEL_COUNT],
        paylines: &[Payline],
        wild_id: &str,
    ) -> GridEvaluation {
        let mut eval = GridEvaluation::default();
        for payline in paylines {
            let line: Vec<&str> = payline
                .rows
                .iter()
                .enumerate()
                .map(|(reel, &row)| {
                    grid[reel]
                        .get(row as usize)
                        .map(|symbol| symbol.id.as_str())
                        .unwrap_or(Symbol::INVALID_ID)
                })
                .collect();
            let payout = self.evaluate_line(&line, wild_id);
            if payout > 0 {
                eval.line_wins.push(LineWin {
                    line_index: payline.index,
                    payout,
                });
                eval.total_base += payout;
            }
        }
        eval
    }
}
