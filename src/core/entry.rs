//! Directory entry records and metadata collection for lsr.
//!
//! Provides the [Entry] struct which is the unit record flowing through a
//! listing: collected here, ordered by the sort engine, and rendered by the
//! formatter. Also holds [stat_entry] for per-path metadata lookup and
//! [collect_dir] for enumerating a directory into a list of entries.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// File type categories reported for an entry.
///
/// Symlinks are reported as [EntryKind::Symlink] for the link itself,
/// never for its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Type glyph shown as the first character of the permission string.
    pub(crate) fn glyph(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::CharDevice => 'c',
            EntryKind::BlockDevice => 'b',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Regular | EntryKind::Unknown => '-',
        }
    }
}

/// Represents a single entry in a directory listing.
/// Holds the base name plus the metadata needed for sorting and for the
/// long-form display: permission bits, link count, owner/group ids, size,
/// and modification time.
///
/// Created by [stat_entry] for the duration of one listing operation and
/// discarded after rendering.
#[derive(Debug, Clone)]
pub struct Entry {
    name: Box<OsStr>,
    kind: EntryKind,
    mode: u32,
    nlink: u64,
    uid: u32,
    gid: u32,
    size: u64,
    modified: SystemTime,
}

impl Entry {
    pub fn new(
        name: OsString,
        kind: EntryKind,
        mode: u32,
        nlink: u64,
        uid: u32,
        gid: u32,
        size: u64,
        modified: SystemTime,
    ) -> Self {
        Entry {
            name: name.into_boxed_os_str(),
            kind,
            mode,
            nlink,
            uid,
            gid,
            size,
            modified,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn nlink(&self) -> u64 {
        self.nlink
    }

    #[inline]
    pub fn uid(&self) -> u32 {
        self.uid
    }

    #[inline]
    pub fn gid(&self) -> u32 {
        self.gid
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

#[cfg(unix)]
fn kind_of(ft: fs::FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if ft.is_file() {
        EntryKind::Regular
    } else if ft.is_dir() {
        EntryKind::Directory
    } else if ft.is_symlink() {
        EntryKind::Symlink
    } else if ft.is_char_device() {
        EntryKind::CharDevice
    } else if ft.is_block_device() {
        EntryKind::BlockDevice
    } else if ft.is_fifo() {
        EntryKind::Fifo
    } else if ft.is_socket() {
        EntryKind::Socket
    } else {
        EntryKind::Unknown
    }
}

#[cfg(not(unix))]
fn kind_of(ft: fs::FileType) -> EntryKind {
    if ft.is_file() {
        EntryKind::Regular
    } else if ft.is_dir() {
        EntryKind::Directory
    } else if ft.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Unknown
    }
}

/// Hidden entries are those whose name begins with a period; `.` and `..`
/// fall under the same rule.
pub(crate) fn is_hidden(name: &OsStr) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        name.as_bytes().first() == Some(&b'.')
    }
    #[cfg(not(unix))]
    {
        name.to_string_lossy().starts_with('.')
    }
}

/// Fetches the metadata record for a single path.
///
/// Symlinks are not followed: the record describes the link itself, so a
/// dangling link still resolves.
///
/// # Returns
/// A Result containing the populated [Entry], or the underlying error when
/// the path cannot be stat'ed (vanished entry, permission denied).
pub fn stat_entry(path: &Path) -> io::Result<Entry> {
    let metadata = fs::symlink_metadata(path)?;
    let name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();
    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        Ok(Entry::new(
            name,
            kind_of(metadata.file_type()),
            metadata.mode() & 0o777,
            metadata.nlink(),
            metadata.uid(),
            metadata.gid(),
            metadata.len(),
            modified,
        ))
    }
    #[cfg(not(unix))]
    {
        Ok(Entry::new(
            name,
            kind_of(metadata.file_type()),
            0,
            1,
            0,
            0,
            metadata.len(),
            modified,
        ))
    }
}

/// Reads the contents of the provided directory and returns them as a
/// vector of fully resolved [Entry] records.
///
/// Hidden names are skipped before any metadata lookup when `show_hidden`
/// is off. Entries whose metadata cannot be fetched are reported on stderr
/// and dropped; the rest of the directory is still collected. Output order
/// is whatever the OS returned.
///
/// # Returns
/// A Result containing the collected entries, or an std::io::Error when the
/// directory itself cannot be opened.
pub fn collect_dir(path: &Path, show_hidden: bool) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("[lsr] cannot read entry in '{}': {}", path.display(), e);
                continue;
            }
        };

        let name = entry.file_name();
        if !show_hidden && is_hidden(&name) {
            continue;
        }

        match stat_entry(&entry.path()) {
            Ok(resolved) => entries.push(resolved),
            Err(e) => {
                eprintln!("[lsr] cannot access '{}': {}", entry.path().display(), e);
            }
        }
    }
    Ok(entries)
}
