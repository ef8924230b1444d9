//! Hierarchical tag index
//!
//! Objects are tagged with dot-separated hierarchical labels and can be
//! found by exact or ancestor label. The tree of [`TagNode`]s holds the
//! memberships, the [`TagIndex`] facade owns the tree plus the global id
//! table, and stored objects carry a [`TagRecord`] for their side of the
//! bookkeeping.

pub mod index;
pub mod node;
pub mod tag;

/// Unique id of an object within a [`TagIndex`].
pub type ObjectId = u64;

// Re-export main types
pub use index::{TagIndex, TagRecord, Tagged};
pub use node::TagNode;
pub use tag::{Tag, TagSet};
