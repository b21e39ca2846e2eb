//! Machine configuration

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::paytable::PayoutRule;
use crate::symbols::{Symbol, standard_strip};

/// Number of reels the payline evaluator is built for
pub const REEL_COUNT: usize = 3;

/// Visible rows per reel (above, payline, below)
pub const VISIBLE_ROWS: usize = 3;

/// Full machine configuration: grid shape, bankroll, bets, strips, rules.
///
/// The wild symbol ID is per-instance configuration; two machines built
/// from different configs never share it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Number of reels; the five-payline evaluator needs exactly 3
    pub reel_count: usize,
    /// Starting credit balance
    pub starting_credits: u64,
    /// Allowed bet sizes, strictly ascending
    pub allowed_bets: Vec<u64>,
    /// Drawn symbol ID that substitutes for any required symbol
    pub wild_symbol_id: String,
    /// One symbol strip per reel
    pub strips: Vec<Vec<Symbol>>,
    /// Payout rules in any order; the table sorts them
    pub rules: Vec<PayoutRule>,
}

/// Default rule set: triples of each paying symbol, per unit bet
pub fn standard_rules() -> Vec<PayoutRule> {
    vec![
        PayoutRule::new(["WILD", "WILD", "WILD"], 100),
        PayoutRule::new(["SEVEN", "SEVEN", "SEVEN"], 50),
        PayoutRule::new(["BELL", "BELL", "BELL"], 20),
        PayoutRule::new(["BAR", "BAR", "BAR"], 15),
        PayoutRule::new(["CHERRY", "CHERRY", "CHERRY"], 10),
        PayoutRule::new(["LEMON", "LEMON", "LEMON"], 8),
    ]
}

impl Default for MachineConfig {
    fn default() -> Self {
        let strip = standard_strip();
        Self {
            reel_count: REEL_COUNT,
            starting_credits: 100,
            allowed_bets: vec![1, 2, 5, 10, 25],
            wild_symbol_id: "WILD".to_string(),
            strips: vec![strip.clone(), strip.clone(), strip],
            rules: standard_rules(),
        }
    }
}

impl MachineConfig {
    /// Validate the configuration. Construction refuses anything that
    /// fails here; everything past this point is recoverable.
    pub fn validate(&self) -> SlotResult<()> {
        if self.reel_count != REEL_COUNT {
            return Err(SlotError::UnsupportedReelCount(self.reel_count));
        }
        if self.allowed_bets.is_empty() {
            return Err(SlotError::Config("allowed_bets must not be empty".into()));
        }
        if self.allowed_bets.contains(&0) {
            return Err(SlotError::Config("bets must be positive".into()));
        }
        if !self.allowed_bets.windows(2).all(|w| w[0] < w[1]) {
            return Err(SlotError::Config(
                "allowed_bets must be strictly ascending".into(),
            ));
        }
        if self.strips.len() != self.reel_count {
            return Err(SlotError::Config(format!(
                "expected {} strips, got {}",
                self.reel_count,
                self.strips.len()
            )));
        }
        if self.strips.iter().any(|strip| strip.is_empty()) {
            return Err(SlotError::Config("reel strips must not be empty".into()));
        }
        if self
            .strips
            .iter()
            .flatten()
            .any(|symbol| symbol.id.is_empty() || symbol.is_invalid())
        {
            return Err(SlotError::Config(
                "strip symbols need a non-empty, non-sentinel ID".into(),
            ));
        }
        if self.rules.is_empty() {
            return Err(SlotError::Config("rule list must not be empty".into()));
        }
        for rule in &self.rules {
            if rule.combination.len() != self.reel_count {
                return Err(SlotError::Config(format!(
                    "rule combination length {} does not match reel count {}",
                    rule.combination.len(),
                    self.reel_count
                )));
            }
            if rule.combination.iter().any(|id| id == Symbol::INVALID_ID) {
                return Err(SlotError::Config(
                    "rules must not reference the sentinel ID".into(),
                ));
            }
        }
        if self.wild_symbol_id.is_empty() || self.wild_symbol_id == Symbol::INVALID_ID {
            return Err(SlotError::Config(
                "wild_symbol_id must be a valid symbol ID".into(),
            ));
        }
        Ok(())
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> SlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlotError::Config(e.to_string()))
    }

    /// Import from JSON and validate
    pub fn from_json(json: &str) -> SlotResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SlotError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MachineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_reel_count() {
        let mut config = MachineConfig::default();
        config.reel_count = 5;
        assert_eq!(
            config.validate(),
            Err(SlotError::UnsupportedReelCount(5))
        );
        config.reel_count = 0;
        assert_eq!(config.validate(), Err(SlotError::UnsupportedReelCount(0)));
    }

    #[test]
    fn test_rejects_bad_bets() {
        let mut config = MachineConfig::default();
        config.allowed_bets = vec![];
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));

        config.allowed_bets = vec![0, 1];
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));

        config.allowed_bets = vec![5, 2, 10];
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_strips() {
        let mut config = MachineConfig::default();
        config.strips.pop();
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));

        let mut config = MachineConfig::default();
        config.strips[1].clear();
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));

        let mut config = MachineConfig::default();
        config.strips[0].push(Symbol::invalid());
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_rules() {
        let mut config = MachineConfig::default();
        config.rules.push(PayoutRule::new(["SEVEN", "SEVEN"], 5));
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));

        let mut config = MachineConfig::default();
        config.rules = vec![];
        assert!(matches!(config.validate(), Err(SlotError::Config(_))));
    }

    #[test]
    fn test_json_import_rejects_garbage() {
        assert!(matches!(
            MachineConfig::from_json("not json"),
            Err(SlotError::Config(_))
        ));
    }

    #[test]
    fn test_json_import_validates() {
        let mut config = MachineConfig::default();
        config.allowed_bets = vec![10, 5];
        let json = config.to_json().unwrap();
        // Parses fine, fails validation.
        assert!(matches!(
            MachineConfig::from_json(&json),
            Err(SlotError::Config(_))
        ));
    }
}
