//! High-score persistence seam.
//!
//! Exactly one value is persisted across sessions: the best score
//! ever achieved. `MemoryScoreStore` keeps it for the process
//! lifetime; `JsonScoreStore` writes it to a small JSON file so it
//! survives restarts. The engine treats store failures as soft: a
//! failed read starts the session at zero, a failed write keeps the
//! high score in memory for the rest of the session.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure on the persistence seam.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score storage I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed high score record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persistent holder of the single high-score value.
pub trait ScoreStore {
    /// Read the stored high score. A store with no record yet
    /// reports 0.
    fn get(&self) -> Result<u32, StoreError>;

    /// Replace the stored high score.
    fn set(&mut self, value: u32) -> Result<(), StoreError>;
}

/// In-memory store; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    value: Rc<Cell<u32>>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing high score.
    #[must_use]
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> Result<u32, StoreError> {
        Ok(self.value.get())
    }

    fn set(&mut self, value: u32) -> Result<(), StoreError> {
        self.value.set(value);
        Ok(())
    }
}

/// On-disk record format.
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// File-backed store persisting the high score as JSON.
#[derive(Clone, Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Create a store backed by the given file. The file is created
    /// on the first successful `set`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn get(&self) -> Result<u32, StoreError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path)?;
        let record: HighScoreRecord = serde_json::from_str(&raw)?;
        Ok(record.high_score)
    }

    fn set(&mut self, value: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(&HighScoreRecord { high_score: value })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
