//! Lesson generation use case
//!
//! Collects the facts due for review by consulting the date-ordered index,
//! optionally narrowed to words under given tags.

use crate::domain::tags::ObjectId;
use crate::domain::TagSet;
use crate::error::Result;
use crate::infrastructure::{FileRepository, VocabularyRepository};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// One fact due for review.
#[derive(Debug, Clone, PartialEq)]
pub struct DueFact {
    pub word_id: ObjectId,
    pub meaning: usize,
    pub value: String,
    pub translation: String,
    pub due: DateTime<Utc>,
}

/// Service for collecting due facts.
pub struct LessonService {
    repository: FileRepository,
}

impl LessonService {
    pub fn new(repository: FileRepository) -> Self {
        LessonService { repository }
    }

    /// Facts due at `at`, earliest first, under the optional tag filter.
    pub fn execute(&self, at: Option<DateTime<Utc>>, tags: &TagSet) -> Result<Vec<DueFact>> {
        let config = self.repository.load_config()?;
        let database = self.repository.load_database(&config)?;
        let now = at.unwrap_or_else(Utc::now);

        let allowed: Option<BTreeSet<ObjectId>> = if tags.is_empty() {
            None
        } else {
            Some(
                database
                    .index
                    .get_objects(tags, |_| true)?
                    .into_iter()
                    .map(|(id, _)| id)
                    .collect(),
            )
        };

        let mut facts = Vec::new();
        for (_, entry) in database.due(now) {
            if let Some(allowed) = &allowed {
                if !allowed.contains(&entry.word) {
                    continue;
                }
            }
            let word = database.index.get_object(entry.word)?;
            let Some(meaning) = word.meanings.get(entry.meaning) else {
                continue;
            };
            facts.push(DueFact {
                word_id: entry.word,
                meaning: entry.meaning,
                value: word.value.clone(),
                translation: meaning.text.clone(),
                due: meaning.schedule.next_practice_timestamp(),
            });
        }
        Ok(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::add_word::{AddWordOptions, AddWordService};
    use crate::application::init::InitService;
    use chrono::Duration;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileRepository) {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        let repo = FileRepository::new(temp.path().to_path_buf());
        (temp, repo)
    }

    fn add(repo: &FileRepository, value: &str, tags: &str) -> ObjectId {
        AddWordService::new(repo.clone())
            .execute(&AddWordOptions {
                value: value.to_string(),
                kind: "noun".to_string(),
                tags: tags.to_string(),
                translations: vec![format!("{}-translation", value)],
                comment: None,
                id: None,
            })
            .unwrap()
    }

    #[test]
    fn test_fresh_words_come_due_within_the_hour() {
        let (_temp, repo) = setup();
        add(&repo, "Haus", "lesson.1");
        add(&repo, "Baum", "lesson.2");

        let service = LessonService::new(repo);
        let soon = Utc::now() + Duration::seconds(3601);

        assert!(service.execute(Some(Utc::now() - Duration::days(1)), &TagSet::default())
            .unwrap()
            .is_empty());
        let due = service.execute(Some(soon), &TagSet::default()).unwrap();
        assert_eq!(due.len(), 2);
    }

    #[test]
    fn test_tag_filter_narrows_lesson() {
        let (_temp, repo) = setup();
        let haus = add(&repo, "Haus", "lesson.1");
        add(&repo, "Baum", "lesson.2");

        let service = LessonService::new(repo);
        let soon = Utc::now() + Duration::seconds(3601);
        let filter = TagSet::parse("lesson.1").unwrap();

        let due = service.execute(Some(soon), &filter).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].word_id, haus);
        assert_eq!(due[0].translation, "Haus-translation");
    }

    #[test]
    fn test_unknown_filter_tag_fails() {
        let (_temp, repo) = setup();
        add(&repo, "Haus", "lesson.1");

        let service = LessonService::new(repo);
        let filter = TagSet::parse("missing").unwrap();
        assert!(service.execute(None, &filter).is_err());
    }
}
