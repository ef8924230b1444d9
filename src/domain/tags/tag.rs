//! Tag value types
//!
//! A tag is a hierarchical label made of dot-separated segments, e.g.
//! `word.noun.masculine`. A tag set is a whitespace-separated collection of
//! such tags, as they appear in import data and on the command line.

use crate::error::{MemorizeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Separator between tag levels in textual form
pub const TAG_LEVEL_SEPARATOR: char = '.';

/// Regex for a single valid tag segment: anything except dots and whitespace
fn segment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^.\s]+$").unwrap())
}

/// A hierarchical label: an ordered, non-empty sequence of non-empty path
/// segments. Equality and ordering are structural, by segment sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    segments: Vec<String>,
}

impl Tag {
    /// Build a tag from pre-split segments, validating each one.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(MemorizeError::MalformedTag(String::new()));
        }
        for segment in &segments {
            if !segment_regex().is_match(segment) {
                return Err(MemorizeError::MalformedTag(
                    segments.join(&TAG_LEVEL_SEPARATOR.to_string()),
                ));
            }
        }
        Ok(Tag { segments })
    }

    /// Parse a tag from its textual form, splitting on the level separator.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(MemorizeError::MalformedTag(text.to_string()));
        }
        let segments: Vec<&str> = text.split(TAG_LEVEL_SEPARATOR).collect();
        for segment in &segments {
            if !segment_regex().is_match(segment) {
                return Err(MemorizeError::MalformedTag(text.to_string()));
            }
        }
        Ok(Tag {
            segments: segments.into_iter().map(str::to_string).collect(),
        })
    }

    /// The ordered path segments of this tag.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of levels in this tag.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True if this tag's path is a prefix of (or equal to) `other`'s path.
    pub fn is_prefix_of(&self, other: &Tag) -> bool {
        other.segments.len() >= self.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.segments.join(&TAG_LEVEL_SEPARATOR.to_string())
        )
    }
}

impl FromStr for Tag {
    type Err = MemorizeError;

    fn from_str(s: &str) -> Result<Self> {
        Tag::parse(s)
    }
}

impl<'a> IntoIterator for &'a Tag {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// An ordered collection of tags.
///
/// Semantically a set for query purposes; input order is preserved for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// Wrap an existing collection of tags.
    pub fn new<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        TagSet {
            tags: tags.into_iter().collect(),
        }
    }

    /// Parse a whitespace-separated blob of tag expressions.
    ///
    /// Empty results from whitespace runs are silently dropped; only a tag's
    /// own segments must be non-empty.
    pub fn parse(blob: &str) -> Result<Self> {
        let tags = blob
            .split_whitespace()
            .map(Tag::parse)
            .collect::<Result<Vec<Tag>>>()?;
        Ok(TagSet { tags })
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<String> = self.tags.iter().map(Tag::to_string).collect();
        write!(f, "{}", texts.join(" "))
    }
}

impl FromStr for TagSet {
    type Err = MemorizeError;

    fn from_str(s: &str) -> Result<Self> {
        TagSet::parse(s)
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_level() {
        let tag = Tag::parse("word").unwrap();
        assert_eq!(tag.segments(), ["word"]);
        assert_eq!(tag.depth(), 1);
    }

    #[test]
    fn test_parse_multi_level() {
        let tag = Tag::parse("word.noun.masculine").unwrap();
        assert_eq!(tag.segments(), ["word", "noun", "masculine"]);
    }

    #[test]
    fn test_parse_round_trip() {
        for text in ["word", "word.noun", "a.b.c.d", "lesson.2025-01"] {
            assert_eq!(Tag::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Tag::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(Tag::parse("word..noun").is_err());
        assert!(Tag::parse(".word").is_err());
        assert!(Tag::parse("word.").is_err());
        assert!(Tag::parse(".").is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace_in_segment() {
        assert!(Tag::parse("word noun").is_err());
        assert!(Tag::parse("word.no un").is_err());
    }

    #[test]
    fn test_new_from_segments() {
        let tag = Tag::new(["word", "verb"]).unwrap();
        assert_eq!(tag, Tag::parse("word.verb").unwrap());
    }

    #[test]
    fn test_new_rejects_empty_segment() {
        assert!(Tag::new(Vec::<String>::new()).is_err());
        assert!(Tag::new(["word", ""]).is_err());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Tag::parse("a.b").unwrap(), Tag::new(["a", "b"]).unwrap());
        assert_ne!(Tag::parse("a.b").unwrap(), Tag::parse("a.c").unwrap());
    }

    #[test]
    fn test_is_prefix_of() {
        let a = Tag::parse("a").unwrap();
        let ab = Tag::parse("a.b").unwrap();
        let abc = Tag::parse("a.b.c").unwrap();
        let ax = Tag::parse("a.x").unwrap();

        assert!(a.is_prefix_of(&ab));
        assert!(a.is_prefix_of(&abc));
        assert!(ab.is_prefix_of(&abc));
        assert!(ab.is_prefix_of(&ab));
        assert!(!ab.is_prefix_of(&a));
        assert!(!ax.is_prefix_of(&abc));
    }

    #[test]
    fn test_iterate_segments() {
        let tag = Tag::parse("a.b.c").unwrap();
        let levels: Vec<&String> = tag.into_iter().collect();
        assert_eq!(levels, ["a", "b", "c"]);
    }

    #[test]
    fn test_tag_set_parse() {
        let set = TagSet::parse("word.noun lesson.3 word").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.tags()[0], Tag::parse("word.noun").unwrap());
        assert_eq!(set.tags()[2], Tag::parse("word").unwrap());
    }

    #[test]
    fn test_tag_set_drops_whitespace_runs() {
        let set = TagSet::parse("  word.noun \t\n lesson.3  ").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_tag_set_empty_blob() {
        assert!(TagSet::parse("").unwrap().is_empty());
        assert!(TagSet::parse("   \n ").unwrap().is_empty());
    }

    #[test]
    fn test_tag_set_propagates_malformed_tag() {
        assert!(TagSet::parse("word .bad").is_err());
    }

    #[test]
    fn test_tag_set_preserves_order() {
        let set = TagSet::parse("b a c").unwrap();
        let texts: Vec<String> = set.iter().map(Tag::to_string).collect();
        assert_eq!(texts, ["b", "a", "c"]);
        assert_eq!(set.to_string(), "b a c");
    }
}
