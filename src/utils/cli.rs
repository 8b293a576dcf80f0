//! Command-line argument parsing and help for lsr.
//!
//! This module handles the flag surface (`-l`, `-a`, `-t`, `-S`, `-r`,
//! combinable in one group such as `-latr`), the `--help`/`--version`/
//! `--init` actions, and collects positional paths.

use crate::config::Config;
use crate::core::SortKey;

/// What the process should do after argument handling.
pub enum CliAction {
    Run(Request),
    Exit,
}

/// Flags and paths of one invocation, before config defaults are applied.
#[derive(Debug, Default)]
pub struct Request {
    long: bool,
    all: bool,
    sort: Option<SortKey>,
    reverse: bool,
    paths: Vec<String>,
}

impl Request {
    // Accessors

    #[inline]
    pub fn long(&self) -> bool {
        self.long
    }

    #[inline]
    pub fn all(&self) -> bool {
        self.all
    }

    #[inline]
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Parses raw arguments into a [CliAction].
///
/// Anything not starting with `-`, and `-` on its own, is a path. When
/// both `-t` and `-S` are given the last one wins. Unknown flags print an
/// error plus a usage hint and exit without listing anything.
pub fn parse_args(args: &[String]) -> CliAction {
    let mut request = Request::default();

    for arg in args {
        match arg.as_str() {
            "--version" => {
                print_version();
                return CliAction::Exit;
            }
            "--help" => {
                print_help();
                return CliAction::Exit;
            }
            "--init" => {
                if let Err(e) = Config::generate_default(&Config::default_path()) {
                    eprintln!("[lsr] Error: {}", e);
                }
                return CliAction::Exit;
            }
            long if long.starts_with("--") => {
                eprintln!("Unknown option: {}", long);
                eprintln!("Try --help for available options");
                return CliAction::Exit;
            }
            flags if flags.starts_with('-') && flags.len() > 1 => {
                for flag in flags.chars().skip(1) {
                    match flag {
                        'l' => request.long = true,
                        'a' => request.all = true,
                        't' => request.sort = Some(SortKey::Time),
                        'S' => request.sort = Some(SortKey::Size),
                        'r' => request.reverse = true,
                        other => {
                            eprintln!("Unknown option: -{}", other);
                            eprintln!("Try --help for available options");
                            return CliAction::Exit;
                        }
                    }
                }
            }
            path => request.paths.push(path.to_string()),
        }
    }

    CliAction::Run(request)
}

fn print_version() {
    println!("lsr {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lsr - a small and fast directory listing tool written in Rust

USAGE:
  lsr [OPTIONS] [PATH...]

PATH:
  Files or directories to list (defaults to the current directory)

OPTIONS:
  -l              Long listing: permissions, links, owner, group, size, time
  -a              Show hidden entries (names starting with '.')
  -t              Sort by modification time, newest first
  -S              Sort by size, largest first
  -r              Reverse the sort order
      --init      Generate a default configuration file
      --help      Print help information
      --version   Display the current installed version of lsr

Flags may be grouped, e.g. `lsr -latr`.

ENVIRONMENT:
  LSR_CONFIG      Override the default config path
"#
    );
}
