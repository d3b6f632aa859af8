//! Lockstep and auto-tick runs of a Beacon, printed to stdout.
//!
//! Run with `RUST_LOG=debug cargo run -p golem-engine --example beacon`.

use std::thread;
use std::time::Duration;

use golem_engine::{Runner, RunnerConfig, SimulationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut engine = SimulationEngine::new();
    engine.initialize(6, "Beacon")?;
    for _ in 0..3 {
        let report = engine.tick()?;
        println!(
            "cycle {} alive {} period {:?}",
            report.cycle, report.alive, report.period
        );
        if let Some(grid) = engine.grid() {
            println!("{grid}\n");
        }
    }

    let runner = Runner::spawn(
        engine,
        RunnerConfig {
            tick_interval: Duration::from_millis(50),
            ..Default::default()
        },
    )?;
    runner.start()?;
    thread::sleep(Duration::from_millis(300));
    runner.pause()?;
    let obs = runner.observe()?;
    println!(
        "after auto-ticking: cycle {} alive {}",
        obs.total_cycles, obs.total_alive_cells
    );

    let engine = runner.shutdown()?;
    println!("recovered engine at cycle {}", engine.total_cycles());
    Ok(())
}
