//! Main navettectl binary.
//!
//! Everything is dispatched from here, the actual work happens in the `cmds` modules.
//!

use std::io;

use clap::{crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::{eyre, Result};
use tracing::trace;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use navettectl::{export_stages, play_scenario, print_distances, print_info, Opts, SubCommand};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    let fmt = fmt::layer()
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .compact();

    // Load filters from the environment unless -v said otherwise.
    //
    let filter = match opts.verbose {
        0 => EnvFilter::from_default_env(),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Combine filter & specific format
    //
    tracing_subscriber::registry().with(filter).with(fmt).init();

    if opts.version {
        return banner();
    }

    let subcmd = match &opts.subcmd {
        Some(subcmd) => subcmd,
        None => {
            Opts::command().print_help()?;
            return Err(eyre!("missing sub-command"));
        }
    };

    handle_subcmd(subcmd)
}

/// Dispatch to the right handler.
///
#[tracing::instrument]
fn handle_subcmd(subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        SubCommand::Completion(copts) => {
            trace!("completion");

            generate(copts.shell, &mut Opts::command(), NAME, &mut io::stdout());
            Ok(())
        }
        SubCommand::Dist(dopts) => {
            trace!("dist");

            print_distances(dopts)
        }
        SubCommand::Info(iopts) => {
            trace!("info");

            print_info(iopts)
        }
        SubCommand::Play(popts) => {
            trace!("play");

            play_scenario(popts)
        }
        SubCommand::Stages(sopts) => {
            trace!("stages");

            export_stages(sopts)
        }
    }
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{}
{}

Modules:
  {}
  {}
"##,
        NAME,
        VERSION,
        crate_description!(),
        navette_geo::version(),
        navette_formats::version()
    ))
}
