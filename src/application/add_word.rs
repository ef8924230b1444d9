//! Add word use case

use crate::domain::registry::KindRegistry;
use crate::domain::tags::ObjectId;
use crate::domain::word::Meaning;
use crate::domain::{Tag, TagSet};
use crate::error::Result;
use crate::infrastructure::{FileRepository, VocabularyRepository};
use std::collections::BTreeSet;

/// Options for adding a word.
#[derive(Debug, Clone)]
pub struct AddWordOptions {
    pub value: String,
    pub kind: String,
    /// Whitespace-separated tag blob, e.g. "word.noun.neuter lesson.3"
    pub tags: String,
    pub translations: Vec<String>,
    pub comment: Option<String>,
    /// Deterministic id for reimported data
    pub id: Option<ObjectId>,
}

/// Service for adding words to the database.
pub struct AddWordService {
    repository: FileRepository,
    registry: KindRegistry,
}

impl AddWordService {
    pub fn new(repository: FileRepository) -> Self {
        AddWordService {
            repository,
            registry: KindRegistry::with_builtin_kinds(),
        }
    }

    /// Create the word, assign it an id, tag it, and schedule its meanings.
    pub fn execute(&self, options: &AddWordOptions) -> Result<ObjectId> {
        let config = self.repository.load_config()?;
        let mut database = self.repository.load_database(&config)?;

        let mut word = self.registry.create(&options.kind, &options.value)?;
        if let Some(comment) = &options.comment {
            word = word.with_comment(comment.clone());
        }
        for translation in &options.translations {
            word.add_meaning(Meaning::new(translation.clone()));
        }

        // Configured defaults, the kind's base tag, and the user's tags,
        // deduplicated: a tag may only be recorded once per word.
        let mut tags: BTreeSet<Tag> = BTreeSet::new();
        tags.extend(TagSet::parse(&config.default_tags)?);
        tags.insert(Tag::parse(&word.base_tag_text())?);
        tags.extend(TagSet::parse(&options.tags)?);

        for tag in &tags {
            database.index.create_tag(tag);
        }
        let id = database.index.assign(word, options.id)?;
        for tag in &tags {
            database.index.add_tag(id, tag)?;
        }
        database.index_word_meanings(id)?;

        self.repository.save_database(&config, &database)?;
        Ok(id)
    }
}
