//! Per-database log of committed input lines.
//!
//! One JSON file holds the logs of every database the user has edited,
//! keyed by a crc32 of an opaque database-identity string the host
//! supplies (the CLI uses the database file path). Each log keeps the
//! newest line first, collapses duplicates, and is capped at
//! [`HIST_LEN`] entries. A navigation cursor walks older/newer lines the
//! way Up/Down arrows do.
//!
//! A missing file is created on save; an unparseable one is discarded and
//! replaced rather than treated as fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Maximum lines kept per database.
pub const HIST_LEN: usize = 15;

/// History for one database, with a navigation cursor.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    key: String,
    all: IndexMap<String, Vec<String>>,
    lines: Vec<String>,
    /// 0 = not navigating; n = on `lines[n - 1]`.
    cursor: usize,
}

/// Stable hex key for a database identity string.
pub fn database_key(identity: &str) -> String {
    format!("{:08x}", crc32fast::hash(identity.as_bytes()))
}

impl History {
    /// Open the shared history file and select the given database's log.
    ///
    /// The file not existing yet is fine; corrupt contents are dropped and
    /// overwritten on the next [`History::save`].
    pub fn open(path: impl Into<PathBuf>, db_identity: &str) -> io::Result<Self> {
        let path = path.into();
        let all: IndexMap<String, Vec<String>> = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => IndexMap::new(),
            Err(err) => return Err(err),
        };

        let key = database_key(db_identity);
        let mut lines = all.get(&key).cloned().unwrap_or_default();
        lines.truncate(HIST_LEN);

        Ok(Self {
            path,
            key,
            all,
            lines,
            cursor: 0,
        })
    }

    /// Record a committed line as the newest entry.
    ///
    /// Any identical older entry is dropped, the log is re-capped, and the
    /// navigation cursor resets.
    pub fn append(&mut self, line: &str) {
        self.lines.retain(|existing| existing != line);
        self.lines.insert(0, line.to_string());
        self.lines.truncate(HIST_LEN);
        self.cursor = 0;
    }

    /// Step to the next-older line, sticking at the oldest.
    pub fn prev(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1).min(self.lines.len());
        Some(&self.lines[self.cursor - 1])
    }

    /// Step back toward the newest line; `None` once past it.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor > 1 {
            self.cursor -= 1;
            Some(&self.lines[self.cursor - 1])
        } else {
            self.cursor = 0;
            None
        }
    }

    /// Newest-first view of this database's log.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the shared file back, folding this database's log in.
    ///
    /// An empty log writes nothing (and leaves other databases' logs
    /// untouched on disk).
    pub fn save(&mut self) -> io::Result<()> {
        if self.lines.is_empty() {
            return Ok(());
        }
        self.all.insert(self.key.clone(), self.lines.clone());
        let text = serde_json::to_string_pretty(&self.all).expect("history map serializes");
        fs::write(&self.path, text)
    }
}
