//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memorize")]
#[command(about = "Personal vocabulary memorization tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new vocabulary database
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a word
    Add {
        /// The word itself, e.g. "Haus"
        value: String,

        /// Word kind (noun, verb, adjective, phrase)
        #[arg(short, long, default_value = "noun")]
        kind: String,

        /// Whitespace-separated tags, e.g. "word.noun.neuter lesson.3"
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Translation (repeatable); each gets its own review schedule
        #[arg(short = 'r', long = "translation")]
        translations: Vec<String>,

        /// Free-form comment
        #[arg(short, long)]
        comment: Option<String>,

        /// Explicit id (for reimported data)
        #[arg(long)]
        id: Option<u64>,
    },

    /// List stored words, optionally narrowed by tags
    List {
        /// Whitespace-separated tags; words must match all of them
        tags: Option<String>,
    },

    /// List facts due for review
    Due {
        /// Whitespace-separated tags; words must match all of them
        tags: Option<String>,

        /// Check against this moment instead of now (RFC 3339)
        #[arg(long)]
        at: Option<String>,
    },

    /// Rate a reviewed fact (0-5) and plan its next practice
    Rate {
        /// Word id
        id: u64,

        /// Answer rating: 0-2 failed, 3 difficult, 4-5 correct
        rating: u8,

        /// Which meaning of the word was reviewed
        #[arg(short, long, default_value_t = 0)]
        meaning: usize,
    },

    /// Print the tag tree
    Tags,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
