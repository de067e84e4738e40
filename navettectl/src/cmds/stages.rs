//! This is the module handling the `stages` sub-command.
//!

use std::fs::File;
use std::io::{self, Write};

use eyre::Result;
use tracing::{info, trace};

use navette_formats::Scenario;

use crate::StagesOpts;

/// Sample the whole route and write it out as CSV, one line per point.
///
#[tracing::instrument]
pub fn export_stages(opts: &StagesOpts) -> Result<()> {
    trace!("stages");

    let scenario = Scenario::load(&opts.scenario)?;
    let trajectory = scenario.trajectory()?;
    let points = trajectory.stages(opts.every)?;
    info!("{} points every {} s", points.len(), opts.every);

    let out: Box<dyn Write> = match &opts.output {
        Some(fname) => Box::new(File::create(fname)?),
        None => Box::new(io::stdout()),
    };

    let mut wtr = csv::Writer::from_writer(out);
    for point in &points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}
