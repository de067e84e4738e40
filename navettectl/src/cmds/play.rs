//! This is the module handling the `play` sub-command.
//!
//! The loop wakes up every `interval` seconds, asks the feed where the craft is right now and
//! writes one dated sentence.  With `-n 0` it runs until interrupted, like the original
//! ground feeder did.
//!

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use eyre::{eyre, Result};
use tracing::{info, trace};

use navette_formats::{nmea, Scenario};
use navette_geo::PositionFeed;

use crate::PlayOpts;

/// Replay a scenario as a live position feed.
///
#[tracing::instrument]
pub fn play_scenario(opts: &PlayOpts) -> Result<()> {
    trace!("play");

    let scenario = Scenario::load(&opts.scenario)?;
    let rate = opts.rate.unwrap_or(scenario.time_ratio);
    if rate <= 0. {
        return Err(eyre!("clock rate must be positive, got {}", rate));
    }

    let trajectory = scenario.trajectory()?;
    info!("Playing {} at x{}", trajectory, rate);

    let mut out: Box<dyn Write> = match &opts.output {
        Some(fname) => Box::new(BufWriter::new(File::create(fname)?)),
        None => Box::new(io::stdout()),
    };

    let feed = PositionFeed::new(trajectory).with_rate(rate);
    let mut sent = 0usize;
    loop {
        let position = feed.current_position()?;
        let line = nmea::feed_line(
            &Utc::now(),
            &position,
            feed.trajectory().origin(),
            feed.trajectory().destination(),
        );
        writeln!(out, "{}", line)?;
        out.flush()?;

        sent += 1;
        if opts.count != 0 && sent >= opts.count {
            break;
        }
        thread::sleep(Duration::from_secs(opts.interval));
    }
    Ok(())
}
