//! Configuration handling for lsr.
//!
//! Invocation defaults come from an optional `lsr.toml`; command-line
//! flags override them. [load] owns file discovery and parsing, [general]
//! the `[general]` table itself.

pub mod general;
pub mod load;

pub use general::{Defaults, General};
pub use load::Config;
