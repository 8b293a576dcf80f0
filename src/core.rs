//! Core listing logic for lsr.
//!
//! This module contains the engine pieces behind the command-line surface:
//! - [entry]: metadata records, per-path stat lookup, and directory collection.
//! - [formatter]: the sort engine and long-form/column rendering.
//! - [terminal]: terminal width discovery for the column layout.
//!
//! Most callers will import [collect_dir], [Entry], and [Formatter] from this module.

pub mod entry;
pub mod formatter;
pub mod terminal;

pub use entry::{Entry, EntryKind, collect_dir, stat_entry};
pub use formatter::{
    Formatter, SortKey, column_rows, format_mtime, group_name, long_line, long_line_named,
    owner_name, permission_string,
};
pub use terminal::console_width;
