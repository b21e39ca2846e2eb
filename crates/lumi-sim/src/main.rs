//! Batch spin simulator for the Lumi Slots core.
//!
//! Runs one machine through many spin/evaluate cycles and reports session
//! statistics. Useful for eyeballing the RTP and hit rate of a rule set
//! before handing it to the presentation layer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use lumi_core::{MachineConfig, SlotMachine};

#[derive(Parser, Debug)]
#[command(name = "lumi-sim", about = "Batch spin simulator for Lumi Slots")]
struct Args {
    /// Number of spin/evaluate cycles to run
    #[arg(long, default_value_t = 10_000)]
    spins: u64,

    /// Bet per spin; must be one of the machine's allowed bets
    #[arg(long, default_value_t = 1)]
    bet: u64,

    /// Seed for deterministic runs; omit to seed from OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Machine configuration file (JSON); omit for the default machine
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting bankroll override; defaults to spins × bet so the run
    /// cannot stop short
    #[arg(long)]
    credits: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            MachineConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => MachineConfig::default(),
    };
    config.starting_credits = args
        .credits
        .unwrap_or_else(|| args.spins.saturating_mul(args.bet));

    let mut machine = SlotMachine::with_config(config).context("building machine")?;
    machine
        .set_selected_bet(args.bet)
        .with_context(|| format!("allowed bets are {:?}", machine.allowed_bets()))?;
    if let Some(seed) = args.seed {
        machine.seed_reels(seed);
    }

    info!("running {} spins at bet {}", args.spins, args.bet);
    for spin in 0..args.spins {
        if machine.spin_reels().is_err() {
            warn!("bankroll exhausted after {spin} spins");
            break;
        }
        machine.check_win_condition();
    }

    let stats = machine.stats();
    println!("spins      {}", stats.total_spins);
    println!("wagered    {}", stats.total_wagered);
    println!("won        {}", stats.total_won);
    println!("RTP        {:.2}%", stats.rtp());
    println!("hit rate   {:.2}%", stats.hit_rate());
    println!("max award  {}", stats.max_award);
    println!("balance    {}", machine.credits());

    Ok(())
}
