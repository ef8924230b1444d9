//! Error types for memorize

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the memorize application
#[derive(Debug, Error)]
pub enum MemorizeError {
    #[error("Malformed tag: {0}")]
    MalformedTag(String),

    #[error("Tag node already has a child named '{0}'")]
    DuplicateChild(String),

    #[error("Tag node has no child named '{0}'")]
    UnknownChild(String),

    #[error("Object {0} is already registered at this tag node")]
    DuplicateRegistration(u64),

    #[error("Object id {0} is already taken")]
    DuplicateId(u64),

    #[error("Object is already assigned to a tag index")]
    AlreadyAssigned,

    #[error("Object is not assigned to this tag index")]
    NotAssigned,

    #[error("No object with id {0}")]
    UnknownObject(u64),

    #[error("Object is already tagged with '{0}'")]
    DuplicateTag(String),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Object is not assigned to a tag index")]
    NotIndexed,

    #[error("Unknown word kind: {0}")]
    UnknownKind(String),

    #[error("Word {word} has no meaning {meaning}")]
    UnknownMeaning { word: u64, meaning: usize },

    #[error("Rating must be between 0 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Not a memorize directory: {0}")]
    NotMemorizeDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MemorizeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MemorizeError::NotMemorizeDirectory(_) => 2,
            MemorizeError::MalformedTag(_) | MemorizeError::UnknownTag(_) => 3,
            MemorizeError::UnknownObject(_) => 4,
            MemorizeError::InvalidRating(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MemorizeError::NotMemorizeDirectory(path) => {
                format!(
                    "Not a memorize directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'memorize init' in this directory to create a new vocabulary database\n\
                    • Navigate to an existing memorize directory\n\
                    • Set MEMORIZE_ROOT environment variable to your database path",
                    path.display()
                )
            }
            MemorizeError::MalformedTag(text) => {
                format!(
                    "Malformed tag: '{}'\n\n\
                    Tags are dot-separated paths of non-empty segments:\n\
                    • word\n\
                    • word.noun\n\
                    • word.noun.masculine\n\n\
                    Separate multiple tags with whitespace: 'word.noun lesson.3'",
                    text
                )
            }
            MemorizeError::UnknownTag(text) => {
                format!(
                    "Unknown tag: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'memorize tags' to see the existing tag tree\n\
                    • Tags must be created before use (adding a word creates its tags)",
                    text
                )
            }
            MemorizeError::UnknownObject(id) => {
                format!(
                    "No object with id {}\n\n\
                    Suggestions:\n\
                    • Use 'memorize list' to see stored words and their ids\n\
                    • The word may have been removed",
                    id
                )
            }
            MemorizeError::InvalidRating(rating) => {
                format!(
                    "Rating must be between 0 and 5, got {}\n\n\
                    Rating scale:\n\
                    • 0-2: failed to recall\n\
                    • 3: recalled with serious difficulty\n\
                    • 4-5: recalled correctly",
                    rating
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MemorizeError
pub type Result<T> = std::result::Result<T, MemorizeError>;
