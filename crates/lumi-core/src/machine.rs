//! The slot machine: reels, credit ledger, and win evaluation

use log::debug;

use crate::config::{MachineConfig, REEL_COUNT, VISIBLE_ROWS};
use crate::error::{SlotError, SlotResult};
use crate::paytable::{GridEvaluation, Payline, PayoutTable, standard_paylines};
use crate::reel::Reel;
use crate::stats::SessionStats;
use crate::symbols::Symbol;

/// Manages the overall state of one machine: reels, credit balance, bet,
/// payout table, and session statistics.
///
/// Every operation is synchronous and runs to completion. Credits, bet,
/// and reel positions form one consistency unit; an embedder driving the
/// machine from several threads must serialize access around the whole
/// instance.
pub struct SlotMachine {
    reels: Vec<Reel>,
    credits: u64,
    selected_bet: u64,
    allowed_bets: Vec<u64>,
    payout_table: PayoutTable,
    paylines: Vec<Payline>,
    wild_symbol_id: String,
    stats: SessionStats,
}

impl SlotMachine {
    /// Build a machine from the default configuration
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default()).expect("default configuration is valid")
    }

    /// Build a machine from a configuration. The configuration is
    /// validated first; this is the only fatal error path.
    pub fn with_config(config: MachineConfig) -> SlotResult<Self> {
        config.validate()?;

        let mut reels = Vec::with_capacity(config.reel_count);
        for strip in config.strips {
            let mut reel = Reel::new();
            reel.set_strip(strip);
            reels.push(reel);
        }

        let selected_bet = config.allowed_bets[0];
        Ok(Self {
            reels,
            credits: config.starting_credits,
            selected_bet,
            allowed_bets: config.allowed_bets,
            payout_table: PayoutTable::new(config.rules),
            paylines: standard_paylines(),
            wild_symbol_id: config.wild_symbol_id,
            stats: SessionStats::default(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // BETTING
    // ═══════════════════════════════════════════════════════════════════════════

    /// Select a bet size. Fails without state change unless `bet` is one
    /// of the allowed bets.
    pub fn set_selected_bet(&mut self, bet: u64) -> SlotResult<()> {
        if !self.allowed_bets.contains(&bet) {
            return Err(SlotError::InvalidBet(bet));
        }
        self.selected_bet = bet;
        Ok(())
    }

    /// Currently selected bet
    pub fn selected_bet(&self) -> u64 {
        self.selected_bet
    }

    /// Allowed bet sizes, ascending
    pub fn allowed_bets(&self) -> &[u64] {
        &self.allowed_bets
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN
    // ═══════════════════════════════════════════════════════════════════════════

    /// Deduct the selected bet and randomize every reel.
    ///
    /// Fails without any state change when the balance does not cover the
    /// bet.
    pub fn spin_reels(&mut self) -> SlotResult<()> {
        if self.credits < self.selected_bet {
            return Err(SlotError::InsufficientCredits {
                balance: self.credits,
                bet: self.selected_bet,
            });
        }

        self.credits -= self.selected_bet;
        for reel in &mut self.reels {
            reel.spin();
        }

        self.stats.total_spins += 1;
        self.stats.total_wagered += self.selected_bet;
        debug!(
            "spin: bet {} deducted, balance {}",
            self.selected_bet, self.credits
        );
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // WIN EVALUATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// The `[above, current, below]` window for one reel
    pub fn visible_symbols(&self, reel_index: usize) -> SlotResult<[Symbol; VISIBLE_ROWS]> {
        let reel = self.reel(reel_index)?;
        Ok([
            reel.symbol_above(),
            reel.current_symbol(),
            reel.symbol_below(),
        ])
    }

    /// Score the current visible grid across the five paylines without
    /// touching the balance.
    pub fn evaluate_visible_grid(&self) -> GridEvaluation {
        let grid = self.visible_grid();
        self.payout_table
            .evaluate_grid(&grid, &self.paylines, &self.wild_symbol_id)
    }

    /// Score the current grid and credit any win.
    ///
    /// Returns the total award (`total base payout × selected bet`), or 0
    /// when nothing paid. Never decreases the balance. The machine does
    /// not track spin phases: calling this without a prior spin, or twice
    /// in a row, re-scores the same static grid and credits the same
    /// amount again — sequencing is the caller's responsibility.
    pub fn check_win_condition(&mut self) -> u64 {
        let eval = self.evaluate_visible_grid();
        if !eval.is_win() {
            self.stats.losses += 1;
            return 0;
        }

        let award = eval.total_base * self.selected_bet;
        self.credits += award;
        self.stats.wins += 1;
        self.stats.total_won += award;
        if award > self.stats.max_award {
            self.stats.max_award = award;
        }
        debug!(
            "win: {} line(s), base {} x bet {} = {}, balance {}",
            eval.line_wins.len(),
            eval.total_base,
            self.selected_bet,
            award,
            self.credits
        );
        award
    }

    /// The symbol currently on a reel's payline, for simple display use
    pub fn symbol_at(&self, reel_index: usize) -> SlotResult<Symbol> {
        Ok(self.reel(reel_index)?.current_symbol())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // READS & DETERMINISM HOOKS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Current credit balance
    pub fn credits(&self) -> u64 {
        self.credits
    }

    /// Number of reels
    pub fn reel_count(&self) -> usize {
        self.reels.len()
    }

    /// Session statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session statistics
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }

    /// Reseed every reel from one master seed, for deterministic runs.
    /// Each reel gets its own derived seed so the streams stay distinct.
    pub fn seed_reels(&mut self, seed: u64) {
        for (index, reel) in self.reels.iter_mut().enumerate() {
            reel.seed(seed.wrapping_add(index as u64));
        }
    }

    /// Pin one reel's position, for scripted outcomes
    pub fn force_reel_position(&mut self, reel_index: usize, position: usize) -> SlotResult<()> {
        let count = self.reels.len();
        let reel = self
            .reels
            .get_mut(reel_index)
            .ok_or(SlotError::ReelIndexOutOfRange {
                index: reel_index,
                count,
            })?;
        reel.force_position(position)
    }

    fn reel(&self, reel_index: usize) -> SlotResult<&Reel> {
        self.reels
            .get(reel_index)
            .ok_or(SlotError::ReelIndexOutOfRange {
                index: reel_index,
                count: self.reels.len(),
            })
    }

    /// Assemble the visible grid, columns = reels. The reel count is
    /// pinned to [`REEL_COUNT`] at construction.
    fn visible_grid(&self) -> [[Symbol; VISIBLE_ROWS]; REEL_COUNT] {
        std::array::from_fn(|index| {
            let reel = &self.reels[index];
            [
                reel.symbol_above(),
                reel.current_symbol(),
                reel.symbol_below(),
            ]
        })
    }
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paytable::PayoutRule;

    /// 3 reels with strip [A, B, C] and a single A-A-A rule paying 100
    fn abc_config() -> MachineConfig {
        let strip = vec![
            Symbol::new("A", ""),
            Symbol::new("B", ""),
            Symbol::new("C", ""),
        ];
        MachineConfig {
            reel_count: 3,
            starting_credits: 100,
            allowed_bets: vec![1, 5, 10],
            wild_symbol_id: "W".to_string(),
            strips: vec![strip.clone(), strip.clone(), strip],
            rules: vec![PayoutRule::new(["A", "A", "A"], 100)],
        }
    }

    fn abc_machine() -> SlotMachine {
        SlotMachine::with_config(abc_config()).unwrap()
    }

    #[test]
    fn test_default_machine() {
        let machine = SlotMachine::new();
        assert_eq!(machine.reel_count(), 3);
        assert_eq!(machine.credits(), 100);
        assert_eq!(machine.selected_bet(), machine.allowed_bets()[0]);
    }

    #[test]
    fn test_invalid_bet_leaves_state_unchanged() {
        let mut machine = abc_machine();
        machine.set_selected_bet(5).unwrap();
        assert_eq!(
            machine.set_selected_bet(3),
            Err(SlotError::InvalidBet(3))
        );
        assert_eq!(machine.selected_bet(), 5);
    }

    #[test]
    fn test_spin_deducts_exactly_the_bet() {
        let mut machine = abc_machine();
        machine.set_selected_bet(10).unwrap();
        let before = machine.credits();
        machine.spin_reels().unwrap();
        assert_eq!(machine.credits(), before - 10);
        assert_eq!(machine.stats().total_spins, 1);
        assert_eq!(machine.stats().total_wagered, 10);
    }

    #[test]
    fn test_spin_with_insufficient_credits_is_a_no_op() {
        let mut config = abc_config();
        config.starting_credits = 5;
        let mut machine = SlotMachine::with_config(config).unwrap();
        machine.set_selected_bet(10).unwrap();

        // Pin a known grid so we can see it survive the failed spin.
        for reel in 0..3 {
            machine.force_reel_position(reel, 1).unwrap();
        }
        assert_eq!(
            machine.spin_reels(),
            Err(SlotError::InsufficientCredits { balance: 5, bet: 10 })
        );
        assert_eq!(machine.credits(), 5);
        assert_eq!(machine.stats().total_spins, 0);
        for reel in 0..3 {
            assert_eq!(machine.symbol_at(reel).unwrap().id, "B");
        }
    }

    #[test]
    fn test_middle_line_win_scales_by_bet() {
        let mut machine = abc_machine();
        machine.set_selected_bet(5).unwrap();
        machine.spin_reels().unwrap();
        assert_eq!(machine.credits(), 95);

        // Position 0 on [A, B, C]: above = C, current = A, below = B,
        // so only the middle row holds A-A-A.
        for reel in 0..3 {
            machine.force_reel_position(reel, 0).unwrap();
        }
        let window = machine.visible_symbols(0).unwrap();
        assert_eq!(window[0].id, "C");
        assert_eq!(window[1].id, "A");
        assert_eq!(window[2].id, "B");

        let eval = machine.evaluate_visible_grid();
        assert_eq!(eval.line_wins.len(), 1);
        assert_eq!(eval.line_wins[0].line_index, 1);

        let award = machine.check_win_condition();
        assert_eq!(award, 500);
        assert_eq!(machine.credits(), 595);
    }

    #[test]
    fn test_losing_check_never_decreases_credits() {
        let mut machine = abc_machine();
        machine.force_reel_position(0, 0).unwrap();
        machine.force_reel_position(1, 1).unwrap();
        machine.force_reel_position(2, 2).unwrap();

        let before = machine.credits();
        assert_eq!(machine.check_win_condition(), 0);
        assert_eq!(machine.credits(), before);
        assert_eq!(machine.stats().losses, 1);
    }

    #[test]
    fn test_double_check_credits_twice() {
        // No spun/evaluated phase tag: re-checking the same static grid
        // pays the same award again.
        let mut machine = abc_machine();
        for reel in 0..3 {
            machine.force_reel_position(reel, 0).unwrap();
        }
        let first = machine.check_win_condition();
        let second = machine.check_win_condition();
        assert_eq!(first, 100);
        assert_eq!(second, 100);
        assert_eq!(machine.credits(), 300);
    }

    #[test]
    fn test_drawn_wilds_complete_a_line() {
        let mut config = abc_config();
        for strip in &mut config.strips {
            // [A, B, W, C]: both A and W sit between inert neighbors, so
            // only the middle row can match below.
            strip.insert(2, Symbol::new("W", ""));
        }
        let mut machine = SlotMachine::with_config(config).unwrap();

        // Middle row A-W-W matches the A-A-A rule via wild substitution;
        // every other payline crosses a B or C cell.
        machine.force_reel_position(0, 0).unwrap();
        machine.force_reel_position(1, 2).unwrap();
        machine.force_reel_position(2, 2).unwrap();

        let eval = machine.evaluate_visible_grid();
        assert_eq!(eval.line_wins.len(), 1);
        assert_eq!(eval.line_wins[0].line_index, 1);
        assert_eq!(machine.check_win_condition(), 100);
    }

    #[test]
    fn test_reel_index_out_of_range() {
        let machine = abc_machine();
        assert_eq!(
            machine.visible_symbols(3),
            Err(SlotError::ReelIndexOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(
            machine.symbol_at(7),
            Err(SlotError::ReelIndexOutOfRange { index: 7, count: 3 })
        );
    }

    #[test]
    fn test_construction_rejects_bad_config() {
        let mut config = abc_config();
        config.reel_count = 4;
        config.strips.push(vec![Symbol::new("A", "")]);
        config.rules = vec![PayoutRule::new(["A", "A", "A", "A"], 1)];
        assert_eq!(
            SlotMachine::with_config(config).err(),
            Some(SlotError::UnsupportedReelCount(4))
        );
    }

    #[test]
    fn test_seeded_machines_spin_identically() {
        let mut a = abc_machine();
        let mut b = abc_machine();
        a.seed_reels(1234);
        b.seed_reels(1234);

        for _ in 0..10 {
            a.spin_reels().unwrap();
            b.spin_reels().unwrap();
            for reel in 0..3 {
                assert_eq!(
                    a.symbol_at(reel).unwrap(),
                    b.symbol_at(reel).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_stats_track_wins_and_resets() {
        let mut machine = abc_machine();
        machine.set_selected_bet(5).unwrap();
        machine.spin_reels().unwrap();
        for reel in 0..3 {
            machine.force_reel_position(reel, 0).unwrap();
        }
        machine.check_win_condition();

        let stats = machine.stats();
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.total_won, 500);
        assert_eq!(stats.max_award, 500);
        assert!(stats.rtp() > 100.0);

        machine.reset_stats();
        assert_eq!(machine.stats().total_spins, 0);
        assert_eq!(machine.stats().total_won, 0);
    }
}
