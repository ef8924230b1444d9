//! Domain layer - Business logic and domain models

pub mod registry;
pub mod schedule;
pub mod tags;
pub mod word;

pub use registry::KindRegistry;
pub use schedule::ReviewSchedule;
pub use tags::{ObjectId, Tag, TagIndex, TagRecord, TagSet, Tagged};
pub use word::{Meaning, Word};
