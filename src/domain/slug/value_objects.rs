// src/domain/slug/value_objects.rs
use std::fmt;

/// URL-safe identifier, unique within one entity kind.
///
/// Generated slugs are stored as produced by the slugifier, so a degenerate
/// display string (empty, or punctuation only) yields an empty slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Treat a caller-supplied slug as present only when it is non-empty.
    pub fn preset(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Self)
    }

    pub fn with_suffix(base: &str, suffix: u64) -> Self {
        Self(format!("{base}-{suffix}"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
