//! Error types for the Masthead domain

use thiserror::Error;

use crate::repository::RepositoryError;

/// A supplied value violates a field constraint.
///
/// Always returned before any state changes: a rejected entity is never
/// registered and a rejected setter leaves the old value in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be a non-empty string")]
    EmptyAuthorName,

    #[error("Name must be a string between 2 and 16 characters (got {len})")]
    MagazineNameLength { len: usize },

    #[error("Category must be a non-empty string")]
    EmptyCategory,

    #[error("Title must be a string between 5 and 50 characters (got {len})")]
    TitleLength { len: usize },

    #[error("Magazine '{id}' is not registered")]
    UnregisteredMagazine { id: String },
}

/// Attempt to overwrite a field that is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} {field} is immutable and cannot be changed.")]
pub struct ImmutableFieldError {
    pub entity: &'static str,
    pub field: &'static str,
}

impl ImmutableFieldError {
    pub(crate) fn new(entity: &'static str, field: &'static str) -> Self {
        Self { entity, field }
    }
}

/// General error type for `Newsroom` operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsroomError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ImmutableField(#[from] ImmutableFieldError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Article '{id}' is not registered")]
    UnknownArticle { id: String },
}

pub type Result<T> = std::result::Result<T, NewsroomError>;
