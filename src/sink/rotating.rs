//! Size-based rotating file sink.
//!
//! When the next entry would push the file past `max_bytes`, the file is
//! renamed to `<path>.1`, older backups shift up by one, and anything past
//! `<path>.<backup_count>` is deleted. A zero threshold or zero backup count
//! disables rotation and the file grows without bound.

use super::Sink;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct FileState {
    /// Opened lazily so configuring a file sink never touches the disk.
    file: Option<File>,
    size: u64,
}

#[derive(Debug)]
pub struct RotatingFileSink {
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// `~` in `path` is expanded to the home directory.
    #[must_use]
    pub fn new(path: impl AsRef<Path>, max_bytes: u64, backup_count: u32) -> Self {
        let raw = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&raw).into_owned();
        Self {
            path: PathBuf::from(expanded),
            max_bytes,
            backup_count,
            state: Mutex::new(FileState::default()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<path>.<index>`.
    #[must_use]
    pub fn backup_path(&self, index: u32) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    const fn rotates(&self) -> bool {
        self.max_bytes > 0 && self.backup_count > 0
    }

    fn open(&self, state: &mut FileState) -> Result<(), crate::Error> {
        if state.file.is_some() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        state.size = file.metadata()?.len();
        state.file = Some(file);
        Ok(())
    }

    fn rollover(&self, state: &mut FileState) -> Result<(), crate::Error> {
        state.file = None;
        state.size = 0;

        for index in (1..self.backup_count).rev() {
            let source = self.backup_path(index);
            if source.exists() {
                let target = self.backup_path(index + 1);
                if target.exists() {
                    fs::remove_file(&target)?;
                }
                fs::rename(&source, &target)?;
            }
        }

        let first = self.backup_path(1);
        if first.exists() {
            fs::remove_file(&first)?;
        }
        if self.path.exists() {
            fs::rename(&self.path, &first)?;
        }
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn write_entry(&self, entry: &str) -> Result<(), crate::Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let line = format!("{entry}\n");
        let len = line.len() as u64;

        self.open(&mut state)?;
        // An empty file is never rotated, so one oversized entry can't cascade.
        if self.rotates() && state.size > 0 && state.size + len >= self.max_bytes {
            self.rollover(&mut state)?;
            self.open(&mut state)?;
        }

        if let Some(file) = state.file.as_mut() {
            file.write_all(line.as_bytes())?;
        }
        state.size += len;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = state.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
