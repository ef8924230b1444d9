//! File system repository
//!
//! The whole vocabulary database is one JSON snapshot inside the
//! `.memorize` directory. A batch of core mutations is committed as a
//! unit by writing a temporary file and renaming it over the snapshot;
//! the core itself performs no I/O.

use crate::domain::tags::ObjectId;
use crate::domain::word::Word;
use crate::domain::TagIndex;
use crate::error::{MemorizeError, Result};
use crate::infrastructure::Config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Date-index entry: one reviewable meaning of one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueEntry {
    pub word: ObjectId,
    pub meaning: usize,
}

/// The persisted state: the tag index of words plus the date-ordered
/// review index.
///
/// The date index maps each meaning's [`date_sort_key`] to the meaning it
/// belongs to. Schedules never index themselves; whenever a plan moves a
/// due date the old key must be deleted and the new one inserted.
///
/// [`date_sort_key`]: crate::domain::ReviewSchedule::date_sort_key
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    pub index: TagIndex<Word>,
    pub date_index: BTreeMap<String, DueEntry>,
}

impl Database {
    pub fn new() -> Self {
        Database::default()
    }

    /// Inserts date-index entries for every meaning of the given word.
    pub fn index_word_meanings(&mut self, id: ObjectId) -> Result<()> {
        let word = self.index.get_object(id)?;
        let keys: Vec<(String, usize)> = word
            .meanings
            .iter()
            .enumerate()
            .map(|(position, meaning)| (meaning.schedule.date_sort_key(), position))
            .collect();
        for (key, meaning) in keys {
            self.date_index.insert(key, DueEntry { word: id, meaning });
        }
        Ok(())
    }

    /// Re-keys one meaning after its schedule changed.
    ///
    /// The meaning is resolved and the new key computed before the old
    /// key is touched, so a failed call leaves the date index unchanged.
    pub fn reindex_meaning(&mut self, old_key: &str, id: ObjectId, meaning: usize) -> Result<()> {
        let word = self.index.get_object(id)?;
        let schedule = word
            .meanings
            .get(meaning)
            .map(|m| &m.schedule)
            .ok_or(MemorizeError::UnknownMeaning { word: id, meaning })?;
        let new_key = schedule.date_sort_key();
        self.date_index.remove(old_key);
        self.date_index
            .insert(new_key, DueEntry { word: id, meaning });
        Ok(())
    }

    /// Drops every date-index entry belonging to the given word.
    pub fn unindex_word(&mut self, id: ObjectId) {
        self.date_index.retain(|_, entry| entry.word != id);
    }

    /// Entries due at the given moment, earliest first.
    ///
    /// Keys sort lexically as timestamps, so everything due is below the
    /// bound formed from `now`.
    pub fn due(&self, now: DateTime<Utc>) -> Vec<(String, DueEntry)> {
        let bound = format!("{}~", now.format("%Y-%m-%dT%H:%M:%S"));
        self.date_index
            .range(..bound)
            .map(|(key, entry)| (key.clone(), *entry))
            .collect()
    }
}

/// Abstract repository for vocabulary storage
pub trait VocabularyRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .memorize/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .memorize/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .memorize directory exists
    fn is_initialized(&self) -> bool;

    /// Create .memorize directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the database snapshot
    fn load_database(&self, config: &Config) -> Result<Database>;

    /// Persist the database snapshot atomically
    fn save_database(&self, config: &Config, database: &Database) -> Result<()>;
}

/// File system implementation of VocabularyRepository
#[derive(Debug, Clone)]
pub struct FileRepository {
    pub root: PathBuf,
}

impl FileRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileRepository { root }
    }

    /// Discover the vocabulary root by walking up from the current directory.
    /// First checks the MEMORIZE_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MEMORIZE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_memorize_dir(&path) {
                return Ok(FileRepository::new(path));
            } else {
                return Err(MemorizeError::Config(format!(
                    "MEMORIZE_ROOT is set to '{}' but no .memorize directory found. \
                    Run 'memorize init' in that directory or unset MEMORIZE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the vocabulary root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_memorize_dir(&current) {
                return Ok(FileRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MemorizeError::NotMemorizeDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .memorize directory
    fn has_memorize_dir(path: &Path) -> bool {
        path.join(".memorize").is_dir()
    }

    fn database_path(&self, config: &Config) -> PathBuf {
        self.root.join(".memorize").join(&config.database)
    }
}

impl VocabularyRepository for FileRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_memorize_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let memorize_dir = self.root.join(".memorize");

        if memorize_dir.exists() {
            return Err(MemorizeError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&memorize_dir)?;
        Ok(())
    }

    fn load_database(&self, config: &Config) -> Result<Database> {
        let path = self.database_path(config);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            // No snapshot yet: a freshly initialized repository.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Database::new());
            }
            Err(e) => return Err(MemorizeError::Io(e)),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    fn save_database(&self, config: &Config, database: &Database) -> Result<()> {
        let path = self.database_path(config);
        let temp_path = path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(database)?;
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}
