//! List words use case

use crate::domain::tags::ObjectId;
use crate::domain::word::Word;
use crate::domain::{Tag, TagSet, Tagged};
use crate::error::Result;
use crate::infrastructure::{FileRepository, VocabularyRepository};

/// Display line for one stored word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSummary {
    pub id: ObjectId,
    pub value: String,
    pub kind: String,
    pub tags: String,
    pub meanings: usize,
}

fn summarize(id: ObjectId, word: &Word) -> WordSummary {
    let tags: Vec<String> = word.record().tags().map(Tag::to_string).collect();
    WordSummary {
        id,
        value: word.value.clone(),
        kind: word.kind.clone(),
        tags: tags.join(" "),
        meanings: word.meanings.len(),
    }
}

/// Service for listing stored words, optionally narrowed by tags.
pub struct ListWordsService {
    repository: FileRepository,
}

impl ListWordsService {
    pub fn new(repository: FileRepository) -> Self {
        ListWordsService { repository }
    }

    pub fn execute(&self, tags: &TagSet) -> Result<Vec<WordSummary>> {
        let config = self.repository.load_config()?;
        let database = self.repository.load_database(&config)?;

        let summaries = if tags.is_empty() {
            database
                .index
                .iter()
                .map(|(id, word)| summarize(id, word))
                .collect()
        } else {
            database
                .index
                .get_objects(tags, |_| true)?
                .into_iter()
                .map(|(id, word)| summarize(id, word))
                .collect()
        };
        Ok(summaries)
    }
}

/// Service for listing the tag tree.
pub struct ListTagsService {
    repository: FileRepository,
}

impl ListTagsService {
    pub fn new(repository: FileRepository) -> Self {
        ListTagsService { repository }
    }

    /// Every tag path, depth-first in name order.
    pub fn execute(&self) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let database = self.repository.load_database(&config)?;
        Ok(database.index.tag_paths())
    }
}
