//! memorize - Personal vocabulary memorization tool
//!
//! Stores lexical facts under hierarchical tags and schedules them for
//! review with a variant of the SM-2 spaced-repetition algorithm.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MemorizeError;
