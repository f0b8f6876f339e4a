// demos/unbiased.rs
// Run with:
//   cargo run --example unbiased
//
// Compares step counts of biased and unbiased walks over the same seeds.

use citadel_walk::scenarios::{batch_stats, run_seeds};
use citadel_walk::systems::walk::WalkConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = WalkConfig { max_steps: 50_000, ..WalkConfig::default() };

    println!("== Steps home over 200 seeds ==");
    for alpha in [0.0, 0.005, 0.025, 0.1] {
        let cfg = base.with_alpha(alpha);
        let outs = match run_seeds(&cfg, 0..200) {
            Ok(outs) => outs,
            Err(e) => {
                eprintln!("alpha {alpha}: {e}");
                continue;
            }
        };
        let s = batch_stats(&outs);
        println!(
            "alpha {:<6} -> converged {:>3}/{} mean steps {:>9.1} max {}",
            alpha, s.converged, s.runs, s.mean_steps, s.max_steps
        );
    }
}
