// demos/citadel.rs
// Run with:
//   RUST_LOG=citadel_walk=debug cargo run --example citadel --features scenario-citadel

use citadel_walk::scenarios::citadel::*;
use citadel_walk::systems::walk::WalkConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = WalkConfig::default();
    let out = match run(&cfg, &citadel_source(), 42) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("citadel scenario failed: {e}");
            std::process::exit(1);
        }
    };

    println!("== Citadel walk (L = {}, α = {}) ==", cfg.perimeter, cfg.alpha);
    println!("Entrance        -> ({:.2}, {:.2})", out.entrance.x, out.entrance.y);
    for (label, w) in [("Forced left ", &out.left), ("Forced right", &out.right)] {
        let s = w.outcome.walk().summary();
        let end = w.path.last().copied().unwrap_or(out.entrance);
        println!(
            "{label}    -> converged={} steps={} ccw={} cw={} mean p={:.3} end=({:.2}, {:.2})",
            w.outcome.is_converged(),
            s.steps,
            s.counter_clockwise_steps,
            s.clockwise_steps,
            s.mean_probability,
            end.x,
            end.y,
        );
    }
}
