//! All the sub-command handlers.
//!

pub use dist::*;
pub use info::*;
pub use play::*;
pub use stages::*;

mod dist;
mod info;
mod play;
mod stages;
