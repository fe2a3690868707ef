//! Optional on-disk record of miss letters
//!
//! The session's [`MissLetters`](crate::core::MissLetters) is the source of
//! truth. A `MissLog` mirrors it to a text file: created empty when a session
//! starts, appended after every attempt, and readable back into the same set.

use crate::core::MissLetters;
use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MissLog {
    path: PathBuf,
}

impl MissLog {
    /// Create the log, replacing any file left by an earlier session
    ///
    /// # Errors
    /// Returns an error if the old file cannot be removed or the new one
    /// cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        match fs::remove_file(&path) {
            Ok(()) => log::debug!("removed previous miss log {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        File::create(&path)?;
        Ok(Self { path })
    }

    /// Append the missed letters of one attempt
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, letters: &[char]) -> io::Result<()> {
        if letters.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        let text: String = letters.iter().collect();
        file.write_all(text.as_bytes())
    }

    /// Distinct letters written so far, uppercased and sorted
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn read_back(&self) -> io::Result<BTreeSet<char>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.to_ascii_uppercase())
            .collect())
    }

    /// Append one attempt's letters, then read the file back and check it
    /// against the session's accumulator
    ///
    /// Returns `false` and logs a warning if the file no longer matches.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written or read.
    pub fn mirror(&self, letters: &[char], misses: &MissLetters) -> io::Result<bool> {
        self.append(letters)?;
        let on_disk = self.read_back()?;
        let in_sync = on_disk.iter().copied().eq(misses.letters());
        if !in_sync {
            log::warn!(
                "miss log {} is out of sync with the session",
                self.path.display()
            );
        }
        Ok(in_sync)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
