//! Invocation driver for lsr.
//!
//! Resolves each command-line target as file-or-directory and sequences
//! collection, sorting, and rendering. Failures stay scoped to the
//! smallest unit of work: a failed entry skips that entry, a failed
//! argument skips that argument, and the run continues with whatever
//! remains.

use crate::config::Config;
use crate::core::{EntryKind, Formatter, collect_dir, console_width, long_line_named, stat_entry};
use crate::utils::cli::Request;

use std::io;
use std::path::Path;
use std::process::ExitCode;

/// Runs the listings for one invocation.
///
/// Config values supply the defaults; flags switch options on over them.
/// The terminal width is read once here, so every listing of the
/// invocation renders against the same width.
///
/// # Returns
/// `ExitCode::FAILURE` when at least one argument could not be listed at
/// all; per-entry metadata failures alone still count as success.
pub fn run(request: &Request, config: &Config) -> ExitCode {
    let defaults = config.general();
    let show_hidden = request.all() || defaults.show_hidden();
    let formatter = Formatter::new(
        request.long() || defaults.long_listing(),
        request.sort().unwrap_or(defaults.sort()),
        request.reverse() || defaults.reverse(),
        console_width(),
    );

    let mut failed = false;

    if request.paths().is_empty() {
        if let Err(e) = list_directory(Path::new("."), show_hidden, &formatter) {
            eprintln!("[lsr] cannot open directory '.': {}", e);
            failed = true;
        }
        return exit_code(failed);
    }

    let many = request.paths().len() > 1;
    for target in request.paths() {
        let path = Path::new(target);
        let entry = match stat_entry(path) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("[lsr] cannot access '{}': {}", target, e);
                failed = true;
                continue;
            }
        };

        let is_dir = entry.kind() == EntryKind::Directory;
        let headed = many || is_dir;
        if headed {
            println!("Directory listing of {} :", target);
        }

        if is_dir {
            if let Err(e) = list_directory(path, show_hidden, &formatter) {
                eprintln!("[lsr] cannot open directory '{}': {}", target, e);
                failed = true;
            }
        } else if formatter.long() {
            println!("{}", long_line_named(&entry, target));
        } else {
            println!("{}", target);
        }
        if headed {
            println!();
        }
    }

    exit_code(failed)
}

/// Collects, sorts, and prints one directory listing.
fn list_directory(path: &Path, show_hidden: bool, formatter: &Formatter) -> io::Result<()> {
    let mut entries = collect_dir(path, show_hidden)?;
    formatter.sort_entries(&mut entries);
    for line in formatter.render(&entries) {
        println!("{}", line);
    }
    Ok(())
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
