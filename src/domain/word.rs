//! Word facts
//!
//! A word is the tagged entity stored in the index; each of its meanings
//! is a separately reviewable fact with its own schedule.

use crate::domain::schedule::ReviewSchedule;
use crate::domain::tags::{TagRecord, Tagged};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sense of a word, reviewed on its own schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub text: String,
    pub comment: String,
    pub schedule: ReviewSchedule,
}

impl Meaning {
    pub fn new(text: impl Into<String>) -> Self {
        Meaning {
            text: text.into(),
            comment: String::new(),
            schedule: ReviewSchedule::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// A vocabulary word with its meanings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub value: String,
    pub kind: String,
    pub comment: String,
    pub meanings: Vec<Meaning>,
    record: TagRecord,
}

impl Word {
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Word {
            value: value.into(),
            kind: kind.into(),
            comment: String::new(),
            meanings: Vec::new(),
            record: TagRecord::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn add_meaning(&mut self, meaning: Meaning) {
        self.meanings.push(meaning);
    }

    /// Textual form of the tag every word of this kind carries.
    pub fn base_tag_text(&self) -> String {
        format!("word.{}", self.kind)
    }

    /// Indexes of the meanings due at the given moment.
    pub fn due_meanings(&self, now: DateTime<Utc>) -> Vec<usize> {
        self.meanings
            .iter()
            .enumerate()
            .filter(|(_, meaning)| meaning.schedule.is_due(now))
            .map(|(position, _)| position)
            .collect()
    }
}

impl Tagged for Word {
    fn record(&self) -> &TagRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut TagRecord {
        &mut self.record
    }
}
