use std::io::{self, Write};

use crate::sim::runner::Sample;
use crate::sim::scenario::Scenario;

/// Summary statistics computed from a descent trajectory.
#[derive(Debug, Clone)]
pub struct DescentSummary {
    pub flight_time: f64,
    pub min_altitude: f64,
    pub min_altitude_time: f64,
    pub max_speed: f64,
    pub final_speed: f64,
    pub final_descent_rate: f64,
}

impl DescentSummary {
    /// Compute summary from trajectory data.
    pub fn from_trajectory(trajectory: &[Sample]) -> Self {
        let lowest = trajectory
            .iter()
            .min_by(|a, b| a.altitude().partial_cmp(&b.altitude()).unwrap())
            .expect("empty trajectory");

        let max_speed = trajectory
            .iter()
            .map(|s| s.speed())
            .fold(0.0_f64, f64::max);

        let last = trajectory.last().expect("empty trajectory");

        DescentSummary {
            flight_time: last.time,
            min_altitude: lowest.altitude(),
            min_altitude_time: lowest.time,
            max_speed,
            final_speed: last.speed(),
            final_descent_rate: last.descent_rate(),
        }
    }
}

/// Write a run summary as JSON.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
    summary: &DescentSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"scenario\": {{")?;
    writeln!(writer, "    \"description\": \"{}\",", scenario.description)?;
    writeln!(writer, "    \"delta_t_s\": {},", scenario.delta_t)?;
    writeln!(writer, "    \"autopilot\": {}", scenario.autopilot_enabled)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"flight\": {{")?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time)?;
    writeln!(writer, "    \"min_altitude_m\": {:.2},", summary.min_altitude)?;
    writeln!(writer, "    \"min_altitude_time_s\": {:.2},", summary.min_altitude_time)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2},", summary.final_speed)?;
    writeln!(writer, "    \"final_descent_rate_ms\": {:.2}", summary.final_descent_rate)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a run summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    scenario: &Scenario,
    summary: &DescentSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scenario, summary)
}
