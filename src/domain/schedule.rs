//! Review scheduling
//!
//! A variant of the SM-2 spaced-repetition algorithm. Each reviewable fact
//! carries one [`ReviewSchedule`]; after every practice the caller rates
//! the answer 0-5 and [`ReviewSchedule::plan`] decides when the fact is due
//! again.
//!
//! The interval recurrence deliberately reuses the same (rating, easiness)
//! pair at every simulated repetition step instead of a per-repetition
//! history. That diverges from textbook SM-2, and existing lesson timing
//! depends on it, so it must not be "corrected".

use crate::error::{MemorizeError, Result};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Starting easiness factor of a fresh fact.
const INITIAL_EASINESS: f64 = 2.5;

/// Easiness never drops below this, no matter how many low ratings.
const MINIMUM_EASINESS: f64 = 1.3;

/// Spread of the random jitter added to every planned time, in seconds.
/// Spreads otherwise-simultaneous due dates so a whole import does not
/// come due at one instant.
const JITTER_SECONDS: i64 = 3600;

fn jittered(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::seconds(rand::thread_rng().gen_range(0..JITTER_SECONDS))
}

/// Updated easiness factor after an answer with the given rating.
fn updated_easiness(easiness: f64, rating: u8) -> f64 {
    let miss = (5 - rating) as f64;
    let updated = easiness + 0.1 - miss * (0.08 + miss * 0.02);
    updated.max(MINIMUM_EASINESS)
}

/// Days until the next practice, from the pre-update practice counter and
/// easiness factor.
///
/// The original recurrence is `delay(n) = delay(n-1) * easiness` with the
/// same easiness at every level; iterating the counter down to 2 and
/// accumulating the product gives identical numbers without recursing over
/// a long practice history.
fn delay_days(practiced: u32, rating: u8, easiness: f64) -> f64 {
    if rating < 3 || practiced == 1 {
        return 1.0;
    }
    if practiced == 2 {
        return 6.0;
    }
    let mut delay = 6.0;
    for _ in 2..practiced {
        delay *= easiness;
    }
    delay
}

/// Per-fact scheduling state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSchedule {
    practiced: u32,
    easiness: f64,
    next_practice: DateTime<Utc>,
    sort_nonce: u32,
}

impl ReviewSchedule {
    /// A fresh schedule: due within the next hour.
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// A fresh schedule relative to the given moment.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        ReviewSchedule {
            practiced: 1,
            easiness: INITIAL_EASINESS,
            next_practice: jittered(now),
            sort_nonce: rand::thread_rng().gen(),
        }
    }

    /// Plans the next practice after an answer rated `rating` (0-5).
    ///
    /// A rating above 3 counts as a successful practice; the counter only
    /// ever grows. Returns the computed delay in days.
    pub fn plan(&mut self, rating: u8) -> Result<f64> {
        self.plan_at(rating, Utc::now())
    }

    /// Like [`ReviewSchedule::plan`] with an explicit current time.
    pub fn plan_at(&mut self, rating: u8, now: DateTime<Utc>) -> Result<f64> {
        if rating > 5 {
            return Err(MemorizeError::InvalidRating(rating));
        }
        let delay = delay_days(self.practiced, rating, self.easiness);
        self.easiness = updated_easiness(self.easiness, rating);
        if rating > 3 {
            self.practiced += 1;
        }
        self.next_practice = jittered(now) + Duration::seconds((delay * 86_400.0) as i64);
        Ok(delay)
    }

    pub fn next_practice_timestamp(&self) -> DateTime<Utc> {
        self.next_practice
    }

    /// True if the fact is due at the given moment.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_practice <= now
    }

    pub fn practiced(&self) -> u32 {
        self.practiced
    }

    pub fn easiness(&self) -> f64 {
        self.easiness
    }

    /// A lexically sortable key for caller-maintained date indexes.
    ///
    /// Combines the due timestamp with a stable per-fact nonce so two
    /// facts sharing an instant never collide. Callers must delete the old
    /// key and insert the new one whenever [`ReviewSchedule::plan`] moves
    /// `next_practice`.
    pub fn date_sort_key(&self) -> String {
        format!(
            "{}#{:010}",
            self.next_practice.format("%Y-%m-%dT%H:%M:%S"),
            self.sort_nonce
        )
    }
}

impl Default for ReviewSchedule {
    fn default() -> Self {
        ReviewSchedule::new()
    }
}
