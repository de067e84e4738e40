//! This is the module handling the `info` sub-command.
//!

use eyre::Result;
use tabled::{builder::Builder, settings::Style};
use tracing::trace;

use navette_formats::Scenario;
use navette_geo::Trajectory;

use crate::InfoOpts;

/// Describe the route of a scenario, one table row per leg.
///
#[tracing::instrument]
pub fn print_info(opts: &InfoOpts) -> Result<()> {
    trace!("info");

    let scenario = Scenario::load(&opts.scenario)?;
    let trajectory = scenario.trajectory()?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&trajectory)?);
        return Ok(());
    }

    println!("{}", trajectory);
    println!(
        "Total {:.1} m, full cycle {} s, clock rate x{}",
        trajectory.length_meters(),
        trajectory.cycle_seconds(),
        scenario.time_ratio,
    );
    println!("{}", legs_table(&trajectory));
    Ok(())
}

/// Lay out all legs as a table.
///
fn legs_table(trajectory: &Trajectory) -> String {
    let header = vec!["Leg", "From", "To", "Length (m)", "Speed (m/s)", "Duration (s)"];

    let mut builder = Builder::default();
    builder.push_record(header);

    trajectory.legs().iter().enumerate().for_each(|(n, leg)| {
        let row = vec![
            (n + 1).to_string(),
            format!("{:.3}, {:.3}", leg.start.latitude, leg.start.longitude),
            format!("{:.3}, {:.3}", leg.end.latitude, leg.end.longitude),
            format!("{:.1}", leg.length),
            format!("{:.2}", leg.speed),
            leg.duration.to_string(),
        ];
        builder.push_record(row);
    });

    builder.build().with(Style::modern()).to_string()
}
