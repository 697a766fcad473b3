use anyhow::{bail, Result};
use clap::Parser;

use lander_sim::io::csv::write_trajectory_file;
use lander_sim::io::summary::{write_summary_file, DescentSummary};
use lander_sim::sim::runner::simulate;
use lander_sim::sim::scenario;

/// Planetary lander descent simulator.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Scenario preset index (0-9)
    #[arg(short, long, default_value_t = 6)]
    scenario: usize,

    /// Simulated duration, seconds
    #[arg(short, long, default_value_t = 300.0)]
    duration: f64,

    /// Write the full trajectory to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Write a JSON run summary to a file
    #[arg(long, value_name = "PATH")]
    json: Option<String>,

    /// List the available presets and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let presets = scenario::presets();
    if args.list {
        println!("Available scenarios:");
        for (i, s) in presets.iter().enumerate() {
            let name = if s.description.is_empty() { "(user-defined slot)" } else { s.description };
            println!("  {}  {}", i, name);
        }
        return Ok(());
    }

    if args.scenario >= presets.len() {
        bail!("scenario index {} out of range (0-{})", args.scenario, presets.len() - 1);
    }
    if !(args.duration > 0.0) {
        bail!("duration must be positive");
    }
    let preset = &presets[args.scenario];

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let trajectory = simulate(preset, args.duration);

    // Displayed portion ends where the trace first goes below the surface
    let shown = trajectory
        .iter()
        .position(|s| s.altitude() < 0.0)
        .map(|i| &trajectory[..=i])
        .unwrap_or(&trajectory[..]);

    let summary = DescentSummary::from_trajectory(shown);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!(
        "  LANDER DESCENT SIMULATION — scenario {}: {}",
        args.scenario,
        if preset.description.is_empty() { "user-defined" } else { preset.description }
    );
    println!("====================================================================");
    println!();
    println!("  Initial Conditions");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Altitude:      {:>10.1} m     Speed:        {:>8.1} m/s",
        shown[0].altitude(),
        shown[0].speed()
    );
    println!(
        "  Timestep:      {:>10.3} s     Autopilot:    {:>8}",
        preset.delta_t,
        if preset.autopilot_enabled { "ON" } else { "OFF" }
    );
    println!(
        "  Attitude hold: {:>10}       Parachute:    {:>8}",
        if preset.stabilized_attitude { "ON" } else { "OFF" },
        format!("{:?}", preset.parachute)
    );
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>11}  {:>10}  {:>10}  {:>8}",
        "t (s)", "alt (m)", "speed(m/s)", "sink(m/s)", "throttle"
    );
    println!("  {}", "─".repeat(56));

    let sample_interval = (shown.len() / 25).max(1);
    for (i, s) in shown.iter().enumerate() {
        if i % sample_interval != 0 && i != shown.len() - 1 {
            continue;
        }
        println!(
            "  {:>8.2}  {:>11.1}  {:>10.1}  {:>10.2}  {:>8.3}",
            s.time,
            s.altitude(),
            s.speed(),
            s.descent_rate(),
            s.throttle
        );
    }
    println!();

    println!("  Flight Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Lowest point:  {:>10.1} m   at t={:.1} s",
        summary.min_altitude, summary.min_altitude_time
    );
    println!("  Max speed:     {:>10.1} m/s", summary.max_speed);
    println!(
        "  Final state:   {:>10.1} m/s at {:.2} m/s descent rate",
        summary.final_speed, summary.final_descent_rate
    );
    println!(
        "  Simulation: {} steps, dt={} s",
        trajectory.len() - 1,
        preset.delta_t
    );
    println!("====================================================================");
    println!();

    // -----------------------------------------------------------------------
    // Optional exports
    // -----------------------------------------------------------------------
    if let Some(path) = &args.csv {
        write_trajectory_file(path, &trajectory)?;
        println!("Trajectory written to {}", path);
    }
    if let Some(path) = &args.json {
        write_summary_file(path, preset, &summary)?;
        println!("Summary written to {}", path);
    }

    Ok(())
}
