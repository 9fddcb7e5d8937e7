use std::env;

use anyhow::{bail, Context};
use sorteo::config::Config;
use sorteo::logging;
use sorteo::lottery::Pool;

const DEFAULT_ROUNDS: u32 = 10_000;
const DEFAULT_CHITS: [usize; 2] = [3, 1];

fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    logging::init_log_filter(&cfg.log_filter);

    // uso: demo_draw [ROUNDS] [CHITS...]
    let mut args = env::args().skip(1);
    let rounds = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid number of rounds {:?}", arg))?,
        None => DEFAULT_ROUNDS,
    };
    let mut chits = args
        .map(|arg| {
            arg.parse::<usize>()
                .with_context(|| format!("invalid chit count {:?}", arg))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if chits.is_empty() {
        chits = DEFAULT_CHITS.to_vec();
    }

    println!("========================================");
    println!("   DEMO DRAW: {} rounds", rounds);
    println!("========================================\n");

    let pool = Pool::from_chits(&chits);
    println!("Teams:");
    for (idx, c) in chits.iter().enumerate() {
        println!("  Team {} chits={}", idx + 1, c);
    }

    if pool.is_empty() {
        bail!("no chits in the bowl, nothing to draw");
    }

    let mut rng = cfg.rng();
    let counts = pool.tally(&mut rng, rounds);
    let total = pool.len() as f64;

    println!("\nWins per team ({} rounds):", rounds);
    for (team, wins) in &counts {
        let observed = if rounds == 0 {
            0.0
        } else {
            *wins as f64 * 100.0 / rounds as f64
        };
        let expected = pool.chits_of(*team).unwrap_or(0) as f64 * 100.0 / total;
        println!(
            "  Team {}: {} wins ({:.1}%, expected {:.1}%)",
            team, wins, observed, expected
        );
    }

    println!("\nDemo finished.");
    Ok(())
}
