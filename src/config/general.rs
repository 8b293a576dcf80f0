//! The general configuration settings for lsr.
//!
//! This module defines the [General] struct for deserializing the
//! `[general]` table of `lsr.toml` and the validated [Defaults] struct
//! used internally.
//!
//! Config values supply the defaults for one invocation; command-line
//! flags switch options on over them.

use crate::core::SortKey;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    long_listing: bool,
    sort: String,
    reverse: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            long_listing: false,
            sort: "name".to_string(),
            reverse: false,
        }
    }
}

/// Validated form of [General]: the sort spelling is parsed into a
/// [SortKey], warning and falling back to name order when unrecognized.
#[derive(Debug)]
pub struct Defaults {
    show_hidden: bool,
    long_listing: bool,
    sort: SortKey,
    reverse: bool,
}

impl From<General> for Defaults {
    fn from(g: General) -> Self {
        let sort = match SortKey::from_name(&g.sort) {
            Some(key) => key,
            None => {
                eprintln!(
                    "[lsr] Warning: unknown sort \"{}\" in config (expected \"name\", \"time\" or \"size\"), using \"name\"",
                    g.sort
                );
                SortKey::Name
            }
        };
        Self {
            show_hidden: g.show_hidden,
            long_listing: g.long_listing,
            sort,
            reverse: g.reverse,
        }
    }
}

impl Defaults {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn long_listing(&self) -> bool {
        self.long_listing
    }

    #[inline]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }
}
