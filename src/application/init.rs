//! Initialize vocabulary database use case

use crate::error::Result;
use crate::infrastructure::{Config, Database, FileRepository, VocabularyRepository};
use std::fs;
use std::path::Path;

/// Initialize a new vocabulary database at the specified path.
pub struct InitService;

impl InitService {
    pub fn execute(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;

        // An empty snapshot, so the first add starts from a valid database.
        repo.save_database(&config, &Database::new())?;

        println!("Initialized memorize database at {}", path.display());

        Ok(())
    }
}
