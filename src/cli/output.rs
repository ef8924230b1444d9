//! Output formatting utilities

use crate::application::{DueFact, WordSummary};

/// Format a list of word summaries for display
pub fn format_word_list(words: &[WordSummary]) -> String {
    if words.is_empty() {
        return "No words found".to_string();
    }

    let mut output = String::new();
    for word in words {
        output.push_str(&format!(
            "{:>4}  {} [{}]  {}  ({} meanings)\n",
            word.id, word.value, word.kind, word.tags, word.meanings
        ));
    }
    output
}

/// Format a list of due facts for display
pub fn format_due_list(facts: &[DueFact]) -> String {
    if facts.is_empty() {
        return "Nothing due for review".to_string();
    }

    let mut output = String::new();
    for fact in facts {
        output.push_str(&format!(
            "{:>4}.{}  {}  -> {}  (due {})\n",
            fact.word_id,
            fact.meaning,
            fact.value,
            fact.translation,
            fact.due.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    output
}

/// Format the tag tree for display
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }

    output
}
