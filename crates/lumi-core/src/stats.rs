//! Session statistics

use serde::{Deserialize, Serialize};

/// Running statistics for one machine session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Successful spins
    pub total_spins: u64,
    /// Credits deducted by spins
    pub total_wagered: u64,
    /// Credits awarded by win checks
    pub total_won: u64,
    /// Win checks that paid something
    pub wins: u64,
    /// Win checks that paid nothing
    pub losses: u64,
    /// Largest single award
    pub max_award: u64,
}

impl SessionStats {
    /// Return-to-player percentage
    pub fn rtp(&self) -> f64 {
        if self.total_wagered > 0 {
            (self.total_won as f64 / self.total_wagered as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Percentage of win checks that paid
    pub fn hit_rate(&self) -> f64 {
        let checks = self.wins + self.losses;
        if checks > 0 {
            (self.wins as f64 / checks as f64) * 100.0
        } else {
            0.0
        }
    }
}
