//! Review use case
//!
//! Applies a rating to one fact: plans the next practice and re-keys the
//! date index (delete the old key, insert the new one).

use crate::domain::tags::ObjectId;
use crate::error::{MemorizeError, Result};
use crate::infrastructure::{FileRepository, VocabularyRepository};
use chrono::{DateTime, Utc};

/// Outcome of rating one fact.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    pub delay_days: f64,
    pub next_practice: DateTime<Utc>,
    pub practiced: u32,
}

/// Service for rating reviewed facts.
pub struct ReviewService {
    repository: FileRepository,
}

impl ReviewService {
    pub fn new(repository: FileRepository) -> Self {
        ReviewService { repository }
    }

    pub fn execute(&self, word_id: ObjectId, meaning: usize, rating: u8) -> Result<ReviewOutcome> {
        let config = self.repository.load_config()?;
        let mut database = self.repository.load_database(&config)?;

        let word = database.index.get_object_mut(word_id)?;
        let fact = word
            .meanings
            .get_mut(meaning)
            .ok_or(MemorizeError::UnknownMeaning {
                word: word_id,
                meaning,
            })?;

        let old_key = fact.schedule.date_sort_key();
        let delay_days = fact.schedule.plan(rating)?;
        let outcome = ReviewOutcome {
            delay_days,
            next_practice: fact.schedule.next_practice_timestamp(),
            practiced: fact.schedule.practiced(),
        };

        database.reindex_meaning(&old_key, word_id, meaning)?;
        self.repository.save_database(&config, &database)?;
        Ok(outcome)
    }
}
