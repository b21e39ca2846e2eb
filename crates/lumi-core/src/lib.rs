//! # lumi-core — Slot machine simulation core for Lumi Slots
//!
//! The game logic behind Lumi Slots: independently spinning reels, a
//! credit/bet ledger, and a rule-based payout evaluator that scores the
//! 3×3 visible grid across five paylines with wildcard substitution.
//! Presentation (windowing, animation timing, sound) lives outside this
//! crate and drives it through the [`SlotMachine`] call surface.
//!
//! ## Architecture
//!
//! ```text
//! SlotMachine
//!     │
//!     ├── Reel × 3 (strip, position, own RNG)
//!     ├── PayoutTable (rules sorted by payout, first match wins per line)
//!     ├── Paylines (3 rows + 2 diagonals, additive)
//!     └── SessionStats (RTP, hit rate)
//!           │
//!           v
//!     spin_reels() → check_win_condition() → award
//! ```

pub mod config;
pub mod error;
pub mod machine;
pub mod paytable;
pub mod reel;
pub mod stats;
pub mod symbols;

pub use config::*;
pub use error::*;
pub use machine::*;
pub use paytable::*;
pub use reel::*;
pub use stats::*;
pub use symbols::*;
