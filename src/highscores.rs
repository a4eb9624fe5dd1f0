//! High score persistence
//!
//! The high score is a single integer. Storage is best-effort: a missing or
//! corrupt value reads as 0 and a failed write is logged and forgotten.

use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

/// Why a high score could not be read or written
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(ParseIntError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Parse(e) => write!(f, "Corrupted high score: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<ParseIntError> for StoreError {
    fn from(err: ParseIntError) -> Self {
        StoreError::Parse(err)
    }
}

/// Somewhere the high score survives between sessions
pub trait HighScoreStore {
    /// Read the stored high score. An absent value is `Ok(0)`.
    fn load(&mut self) -> Result<u32, StoreError>;

    /// Replace the stored high score
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Load the high score, treating any failure as 0
pub fn load_or_default(store: &mut dyn HighScoreStore) -> u32 {
    match store.load() {
        Ok(score) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Err(e) => {
            log::warn!("Could not load high score, starting at 0: {}", e);
            0
        }
    }
}

/// High score kept as decimal text in a file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        Ok(text.trim().parse()?)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        std::fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-process store; remembers every save
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    /// Every value passed to `save`, oldest first
    pub saves: Vec<u32>,
    /// Make every `save` fail with an IO error
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.saves.push(score);
        if self.fail_writes {
            return Err(std::io::Error::other("write refused").into());
        }
        self.value = Some(score);
        Ok(())
    }
}
