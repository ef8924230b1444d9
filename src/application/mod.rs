//! Application layer - Use cases and orchestration

pub mod add_word;
pub mod init;
pub mod lesson;
pub mod list_words;
pub mod manage_config;
pub mod review;

pub use add_word::{AddWordOptions, AddWordService};
pub use init::InitService;
pub use lesson::{DueFact, LessonService};
pub use list_words::{ListTagsService, ListWordsService, WordSummary};
pub use manage_config::ConfigService;
pub use review::{ReviewOutcome, ReviewService};
