//! Entity identifiers
//!
//! Ids are `<kind>-<suffix>` strings, e.g. `comment-5f0c...`. The suffix comes
//! from an injected [`IdGenerator`] so tests can pin it.

use std::fmt;

use uuid::Uuid;

/// The kind of entity an id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Thread,
    Comment,
    Reply,
}

impl EntityKind {
    /// Id prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Comment => "comment",
            Self::Reply => "reply",
        }
    }

    /// Build a full id from a generated suffix
    pub fn id(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.prefix())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Source of unique id suffixes
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;

    /// Generate a full id for `kind`
    fn next_id(&self, kind: EntityKind) -> String {
        kind.id(&self.generate())
    }
}

/// Random UUID v4 suffixes in simple (hyphenless) form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Always returns the same suffix
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(String);

impl FixedIdGenerator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
