//! Sorting and display formatting for directory entries in lsr.
//!
//! The [Formatter] struct holds the rules for one invocation: long or
//! column output, sort key and direction, and the terminal width the column
//! layout is sized to.
//!
//! Also holds the free formatting helpers for permission strings,
//! owner/group names, and modification times used by the long form.

use crate::core::Entry;

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

use std::time::SystemTime;

// Gutter between columns in the grid layout.
const COLUMN_GUTTER: usize = 2;
// Placeholder when an owner or group id has no name mapping.
const UNRESOLVED_NAME: &str = "unknown";

/// Sort keys for a listing.
///
/// `Time` and `Size` order newest-first and largest-first respectively, the
/// usual `ls -t` / `ls -S` directions; `Name` is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Time,
    Size,
}

impl SortKey {
    /// Parses the configuration spelling of a sort key.
    pub fn from_name(name: &str) -> Option<SortKey> {
        match name {
            "name" => Some(SortKey::Name),
            "time" => Some(SortKey::Time),
            "size" => Some(SortKey::Size),
            _ => None,
        }
    }
}

/// Formatter struct to handle the ordering and rendering of collected
/// entries based on the flags and configuration of one invocation.
pub struct Formatter {
    long: bool,
    sort: SortKey,
    reverse: bool,
    width: usize,
}

impl Formatter {
    pub fn new(long: bool, sort: SortKey, reverse: bool, width: usize) -> Self {
        Formatter {
            long,
            sort,
            reverse,
            width,
        }
    }

    #[inline]
    pub fn long(&self) -> bool {
        self.long
    }

    /// Sorts the given entries in place according to the formatter's key
    /// and direction.
    ///
    /// Ties on the primary key always fall back to ascending name order, so
    /// the result is deterministic whatever order enumeration produced. The
    /// reverse flag flips the completed comparison as a whole, which makes
    /// the reversed listing an exact mirror of the forward one for every
    /// key.
    pub fn sort_entries(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| {
            let ordering = match self.sort {
                SortKey::Name => a.name().cmp(b.name()),
                SortKey::Time => b
                    .modified()
                    .cmp(&a.modified())
                    .then_with(|| a.name().cmp(b.name())),
                SortKey::Size => b
                    .size()
                    .cmp(&a.size())
                    .then_with(|| a.name().cmp(b.name())),
            };
            if self.reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Renders the ordered entries into output lines: one detailed line per
    /// entry in long form, or a column-major grid sized to the terminal
    /// width otherwise.
    pub fn render(&self, entries: &[Entry]) -> Vec<String> {
        if self.long {
            entries.iter().map(long_line).collect()
        } else {
            let names: Vec<String> = entries
                .iter()
                .map(|e| e.name_str().into_owned())
                .collect();
            column_rows(&names, self.width)
        }
    }
}

/// Formats the detailed one-line record for an entry under its own name.
pub fn long_line(entry: &Entry) -> String {
    long_line_named(entry, &entry.name_str())
}

/// Formats the detailed one-line record with an explicit display name, used
/// for bare file arguments which are shown as given on the command line.
///
/// Field order: permission string, link count, owner, group, size in bytes,
/// modification time, name. The metadata already carried by the entry is
/// reused; nothing is re-stat'ed here.
pub fn long_line_named(entry: &Entry, name: &str) -> String {
    format!(
        "{} {:>2} {:<8} {:<8} {:>8} {} {}",
        permission_string(entry),
        entry.nlink(),
        owner_name(entry.uid()),
        group_name(entry.gid()),
        entry.size(),
        format_mtime(entry.modified()),
        name
    )
}

/// Builds the 10-character permission string: the type glyph followed by
/// `r`, `w`, `x` (or `-`) for owner, group, and other.
pub fn permission_string(entry: &Entry) -> String {
    let mode = entry.mode();
    let mut chars = [
        entry.kind().glyph(),
        '-',
        '-',
        '-',
        '-',
        '-',
        '-',
        '-',
        '-',
        '-',
    ];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Resolves an owner id to a user name.
///
/// Resolution is best-effort and never an error: an id with no mapping
/// renders as the placeholder.
#[cfg(unix)]
pub fn owner_name(uid: u32) -> String {
    uzers::get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| UNRESOLVED_NAME.to_string())
}

#[cfg(not(unix))]
pub fn owner_name(_uid: u32) -> String {
    UNRESOLVED_NAME.to_string()
}

/// Resolves a group id to a group name, with the same fallback rule as
/// [owner_name].
#[cfg(unix)]
pub fn group_name(gid: u32) -> String {
    uzers::get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| UNRESOLVED_NAME.to_string())
}

#[cfg(not(unix))]
pub fn group_name(_gid: u32) -> String {
    UNRESOLVED_NAME.to_string()
}

/// Formats the modification time as `Mmm dd HH:MM` in the local timezone.
pub fn format_mtime(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format("%b %d %H:%M").to_string()
}

/// Lays the given names out as a column-major grid sized to `width`.
///
/// The widest name (by display width) plus a two-character gutter sets the
/// column width; names fill top-to-bottom within a column, columns left to
/// right. The cell at column `c`, row `r` holds the name at flat index
/// `c * rows + r`; indices past the end are skipped, not padded.
///
/// # Returns
/// The grid as one string per row, empty for an empty name list.
pub fn column_rows(names: &[String], width: usize) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }

    let max_len = names.iter().map(|n| n.width()).max().unwrap_or(0);
    let col_width = max_len + COLUMN_GUTTER;
    let cols = std::cmp::max(1, width / col_width);
    let rows = names.len().div_ceil(cols);

    let mut lines = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut line = String::with_capacity(cols * col_width);
        for c in 0..cols {
            let i = c * rows + r;
            if let Some(name) = names.get(i) {
                line.push_str(name);
                line.push_str(&" ".repeat(col_width - name.width()));
            }
        }
        line.truncate(line.trim_end().len());
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryKind;
    use std::ffi::OsString;
    use std::time::Duration;

    fn entry(name: &str, kind: EntryKind, mode: u32, size: u64, mtime_secs: u64) -> Entry {
        Entry::new(
            OsString::from(name),
            kind,
            mode,
            1,
            u32::MAX,
            u32::MAX,
            size,
            SystemTime::UNIX_EPOCH + Duration::from_secs(mtime_secs),
        )
    }

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn permission_string_regular_file() {
        let e = entry("a", EntryKind::Regular, 0o644, 0, 0);
        assert_eq!(permission_string(&e), "-rw-r--r--");
    }

    #[test]
    fn permission_string_directory() {
        let e = entry("a", EntryKind::Directory, 0o755, 0, 0);
        assert_eq!(permission_string(&e), "drwxr-xr-x");
    }

    #[test]
    fn permission_string_type_glyphs() {
        let cases = [
            (EntryKind::Symlink, 'l'),
            (EntryKind::CharDevice, 'c'),
            (EntryKind::BlockDevice, 'b'),
            (EntryKind::Fifo, 'p'),
            (EntryKind::Socket, 's'),
            (EntryKind::Unknown, '-'),
        ];
        for (kind, glyph) in cases {
            let e = entry("a", kind, 0, 0, 0);
            assert_eq!(
                permission_string(&e).chars().next(),
                Some(glyph),
                "wrong glyph for {:?}",
                kind
            );
        }
    }

    #[test]
    fn sort_by_name_ascending() {
        let formatter = Formatter::new(false, SortKey::Name, false, 80);
        let mut entries = vec![
            entry("cherry", EntryKind::Regular, 0o644, 1, 1),
            entry("apple", EntryKind::Regular, 0o644, 2, 2),
            entry("banana", EntryKind::Regular, 0o644, 3, 3),
        ];
        formatter.sort_entries(&mut entries);
        assert_eq!(names(&entries), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn sort_by_time_newest_first() {
        let formatter = Formatter::new(false, SortKey::Time, false, 80);
        let mut entries = vec![
            entry("old", EntryKind::Regular, 0o644, 0, 100),
            entry("new", EntryKind::Regular, 0o644, 0, 300),
            entry("mid", EntryKind::Regular, 0o644, 0, 200),
        ];
        formatter.sort_entries(&mut entries);
        assert_eq!(names(&entries), ["new", "mid", "old"]);
    }

    #[test]
    fn sort_by_size_largest_first() {
        let formatter = Formatter::new(false, SortKey::Size, false, 80);
        let mut entries = vec![
            entry("ten", EntryKind::Regular, 0o644, 10, 0),
            entry("thirty", EntryKind::Regular, 0o644, 30, 0),
            entry("twenty", EntryKind::Regular, 0o644, 20, 0),
        ];
        formatter.sort_entries(&mut entries);
        assert_eq!(names(&entries), ["thirty", "twenty", "ten"]);
    }

    #[test]
    fn equal_keys_tie_break_by_name() {
        let formatter = Formatter::new(false, SortKey::Size, false, 80);
        let mut entries = vec![
            entry("zeta", EntryKind::Regular, 0o644, 5, 0),
            entry("alpha", EntryKind::Regular, 0o644, 5, 0),
            entry("mike", EntryKind::Regular, 0o644, 5, 0),
        ];
        formatter.sort_entries(&mut entries);
        assert_eq!(names(&entries), ["alpha", "mike", "zeta"]);
    }

    #[test]
    fn tie_break_ignores_enumeration_order() {
        let build = |order: &[&str]| -> Vec<Entry> {
            order
                .iter()
                .map(|n| entry(n, EntryKind::Regular, 0o644, 7, 50))
                .collect()
        };
        let formatter = Formatter::new(false, SortKey::Time, false, 80);

        let mut first = build(&["b", "c", "a"]);
        let mut second = build(&["c", "a", "b"]);
        formatter.sort_entries(&mut first);
        formatter.sort_entries(&mut second);
        assert_eq!(names(&first), names(&second));
        assert_eq!(names(&first), ["a", "b", "c"]);
    }

    #[test]
    fn reverse_is_the_exact_mirror_for_every_key() {
        for key in [SortKey::Name, SortKey::Time, SortKey::Size] {
            let build = || {
                vec![
                    entry("delta", EntryKind::Regular, 0o644, 4, 40),
                    entry("alpha", EntryKind::Regular, 0o644, 9, 10),
                    entry("bravo", EntryKind::Regular, 0o644, 9, 30),
                    entry("charlie", EntryKind::Regular, 0o644, 2, 30),
                ]
            };
            let forward = Formatter::new(false, key, false, 80);
            let backward = Formatter::new(false, key, true, 80);

            let mut plain = build();
            let mut reversed = build();
            forward.sort_entries(&mut plain);
            backward.sort_entries(&mut reversed);

            let mut mirrored = names(&plain);
            mirrored.reverse();
            assert_eq!(
                names(&reversed),
                mirrored,
                "reverse order is not a mirror for {:?}",
                key
            );
        }
    }

    #[test]
    fn column_grid_is_column_major() {
        // 7 names of length 5 at width 40: col_width 7, 5 cols, 2 rows.
        let names: Vec<String> = (0..7).map(|i| format!("name{}", i)).collect();
        let rows = column_rows(&names, 40);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "name0  name2  name4  name6");
        assert_eq!(rows[1], "name1  name3  name5");
    }

    #[test]
    fn column_grid_empty() {
        let rows = column_rows(&[], 80);
        assert!(rows.is_empty(), "no output lines expected for no entries");
    }

    #[test]
    fn column_grid_narrow_width_keeps_one_column() {
        let names: Vec<String> = vec!["first".into(), "second".into(), "third".into()];
        let rows = column_rows(&names, 4);
        assert_eq!(rows, ["first", "second", "third"]);
    }

    #[test]
    fn column_grid_measures_display_width() {
        // Crab emoji is two cells wide, so both names occupy width 4.
        let names: Vec<String> = vec!["🦀🦀".into(), "abcd".into()];
        let rows = column_rows(&names, 12);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], "🦀🦀  abcd");
    }

    #[test]
    fn long_line_field_layout() {
        let secs = 1_750_000_000; // mid-month, same date in any timezone
        let e = entry("notes.txt", EntryKind::Regular, 0o644, 1234, secs);
        let line = long_line(&e);

        assert!(
            line.starts_with("-rw-r--r--  1 unknown  unknown      1234 "),
            "unexpected field layout: '{}'",
            line
        );
        assert!(line.ends_with(" notes.txt"), "unexpected tail: '{}'", line);
    }

    #[test]
    fn long_line_with_explicit_name() {
        let e = entry("notes.txt", EntryKind::Regular, 0o644, 1, 0);
        let line = long_line_named(&e, "docs/notes.txt");
        assert!(line.ends_with(" docs/notes.txt"));
    }

    #[test]
    fn mtime_format_shape() {
        let formatted = format_mtime(SystemTime::UNIX_EPOCH + Duration::from_secs(1_750_000_000));
        assert_eq!(
            formatted.len(),
            12,
            "expected 'Mmm dd HH:MM', got '{}'",
            formatted
        );
        assert_eq!(formatted.as_bytes()[9], b':');
    }
}
