//! Utility modules for lsr.
//!
//! Holds the [cli] submodule with all command-line argument parsing and
//! help text, and [helpers] for small shared utilities.

pub mod cli;
pub mod helpers;

pub use helpers::get_home;
