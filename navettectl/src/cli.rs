//! Module describing all possible commands and sub-commands of the `navettectl` main driver.
//!
//! We have the following commands:
//!
//! - `play`
//! - `info`
//! - `stages`
//! - `dist`
//!
//! `play` loads a scenario file and feeds the current position on the route as a pseudo-NMEA
//! sentence at a fixed cadence, forever unless a line count is set.  This is the normal mode,
//! whatever sits at the other end of the pipe believes it is listening to a moving receiver.
//!
//! `info` prints what the route looks like once the legs are computed, `stages` samples the
//! whole loop at a fixed period and writes the points as CSV.
//!
//! `dist` is a standalone calculator for the supported distance methods.
//!
//! `completion` is here just to configure the various shells completion system.
//!
use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, Parser};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!())]
pub struct Opts {
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Display utility full version.
    #[clap(short = 'V', long)]
    pub version: bool,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: Option<SubCommand>,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `dist [-m METHOD] LAT1 LON1 LAT2 LON2`
/// `info [-j] SCENARIO`
/// `play [-n COUNT] [-i SECS] [-r RATE] [-o FILE] SCENARIO`
/// `stages [-e SECS] [-o FILE] SCENARIO`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Distance between two points
    Dist(DistOpts),
    /// Describe the route of a scenario
    Info(InfoOpts),
    /// Replay a scenario as a position feed
    Play(PlayOpts),
    /// Sample the whole route as CSV
    Stages(StagesOpts),
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// Options for the standalone distance calculator.
///
#[derive(Debug, Parser)]
pub struct DistOpts {
    /// Only this method (default: all of them).
    #[clap(short = 'm', long)]
    pub method: Option<String>,
    /// Latitude of the first point.
    #[clap(allow_negative_numbers = true)]
    pub lat1: f64,
    /// Longitude of the first point.
    #[clap(allow_negative_numbers = true)]
    pub lon1: f64,
    /// Latitude of the second point.
    #[clap(allow_negative_numbers = true)]
    pub lat2: f64,
    /// Longitude of the second point.
    #[clap(allow_negative_numbers = true)]
    pub lon2: f64,
}

// ------

/// Options for describing a scenario route.
///
#[derive(Debug, Parser)]
pub struct InfoOpts {
    /// Dump the whole route as JSON.
    #[clap(short = 'j', long)]
    pub json: bool,
    /// Scenario file.
    pub scenario: PathBuf,
}

// ------

/// Options for replaying a scenario.
///
#[derive(Debug, Parser)]
pub struct PlayOpts {
    /// Stop after that many lines (0 means forever).
    #[clap(short = 'n', long, default_value = "0")]
    pub count: usize,
    /// Seconds between two lines.
    #[clap(short = 'i', long, default_value = "1")]
    pub interval: u64,
    /// Output file (default is stdout).
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Override the scenario clock rate.
    #[clap(short = 'r', long)]
    pub rate: Option<f64>,
    /// Scenario file.
    pub scenario: PathBuf,
}

// ------

/// Options for sampling a route.
///
#[derive(Debug, Parser)]
pub struct StagesOpts {
    /// Seconds between two points, must divide every leg duration.
    #[clap(short = 'e', long, default_value = "1")]
    pub every: u64,
    /// Output file (default is stdout).
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Scenario file.
    pub scenario: PathBuf,
}
