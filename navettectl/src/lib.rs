//! Library part of the `navettectl` utility.
//!
//! The CLI declarations live in `cli`, the sub-command implementations in `cmds`, the binary in
//! `main.rs` only does the wiring.  Scenario parsing and sentence output come from the
//! `navette-formats` crate, everything geodesic from `navette-geo`.
//!

/// Re-export
///
pub use cli::*;
pub use cmds::*;

mod cli;
mod cmds;
