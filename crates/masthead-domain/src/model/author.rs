//! Author - A named contributor
//!
//! Author is an Entity (has identity).
//! Two authors with the same name are still two different people.
//!
//! Authors have no registry of their own. An author "exists" for query
//! purposes only through the articles that reference them.

use crate::error::{ImmutableFieldError, ValidationError};

/// Unique identifier for an Author
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorId(String);

impl AuthorId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(format!("author-{}", uuid::Uuid::new_v4()))
    }
}

impl core::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author - the writer side of an Article
///
/// The name is fixed at construction.
#[derive(Debug, Clone)]
pub struct Author {
    /// Unique identifier (Entity identity)
    id: AuthorId,
    /// Display name, never empty
    name: String,
}

impl Author {
    /// Create a new Author with a generated id
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::generate(), name)
    }

    pub(crate) fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self { id, name })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ========== Mutations ==========

    /// Always fails: an author's name cannot change after construction.
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError::new("Author", "name"))
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl core::hash::Hash for Author {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
