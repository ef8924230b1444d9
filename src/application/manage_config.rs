//! Config management use case

use crate::domain::TagSet;
use crate::error::{MemorizeError, Result};
use crate::infrastructure::{Config, FileRepository, VocabularyRepository};

/// Service for managing configuration
pub struct ConfigService {
    repository: FileRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "database" => Ok(config.database.clone()),
            "default_tags" => Ok(config.default_tags.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MemorizeError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: database, default_tags, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "database" => {
                config.database = value.to_string();
            }
            "default_tags" => {
                // Must be a valid tag blob.
                TagSet::parse(value)?;
                config.default_tags = value.to_string();
            }
            "created" => {
                return Err(MemorizeError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MemorizeError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: database, default_tags",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::InitService;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        let service = ConfigService::new(FileRepository::new(temp.path().to_path_buf()));
        (temp, service)
    }

    #[test]
    fn test_get_and_set_default_tags() {
        let (_temp, service) = setup();
        assert_eq!(service.get("default_tags").unwrap(), "word");
        service.set("default_tags", "word lesson.3").unwrap();
        assert_eq!(service.get("default_tags").unwrap(), "word lesson.3");
    }

    #[test]
    fn test_set_invalid_default_tags_fails() {
        let (_temp, service) = setup();
        assert!(service.set("default_tags", "word..noun").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = setup();
        assert!(service.set("created", "2026-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = setup();
        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
