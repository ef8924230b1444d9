//! Word kind registry
//!
//! An explicit table from kind discriminator to word constructor.
//! Kinds are registered by explicit calls at startup; nothing is
//! discovered implicitly.

use crate::domain::word::Word;
use crate::error::{MemorizeError, Result};
use std::collections::BTreeMap;

/// Constructor for words of one kind.
pub type WordFactory = fn(value: &str) -> Word;

/// Registry of word kinds available to the importer and the CLI.
#[derive(Debug, Default, Clone)]
pub struct KindRegistry {
    factories: BTreeMap<String, WordFactory>,
}

fn make_noun(value: &str) -> Word {
    Word::new(value, "noun")
}

fn make_verb(value: &str) -> Word {
    Word::new(value, "verb")
}

fn make_adjective(value: &str) -> Word {
    Word::new(value, "adjective")
}

fn make_phrase(value: &str) -> Word {
    Word::new(value, "phrase")
}

impl KindRegistry {
    pub fn new() -> Self {
        KindRegistry::default()
    }

    /// The registry with the built-in kinds.
    pub fn with_builtin_kinds() -> Self {
        let mut registry = KindRegistry::new();
        registry.register("noun", make_noun);
        registry.register("verb", make_verb);
        registry.register("adjective", make_adjective);
        registry.register("phrase", make_phrase);
        registry
    }

    /// Registers a kind under the given discriminator, replacing any
    /// previous factory with the same name.
    pub fn register(&mut self, name: &str, factory: WordFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Constructs a word of the given kind.
    pub fn create(&self, kind: &str, value: &str) -> Result<Word> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| MemorizeError::UnknownKind(kind.to_string()))?;
        Ok(factory(value))
    }

    /// Registered discriminators in name order.
    pub fn kinds(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
