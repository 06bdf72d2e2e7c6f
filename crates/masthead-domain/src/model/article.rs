//! Article - The join entity between Author and Magazine
//!
//! An Article carries its own copy of the Author (authors never change)
//! but only the id of its Magazine, since magazines can be renamed and
//! recategorized. The current magazine is resolved through the registry.

use core::ops::RangeInclusive;

use super::author::Author;
use super::magazine::{Magazine, MagazineId};
use crate::error::{ImmutableFieldError, ValidationError};

/// Allowed article title length, in characters
pub const ARTICLE_TITLE_LEN: RangeInclusive<usize> = 5..=50;

/// Unique identifier for an Article
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(format!("article-{}", uuid::Uuid::new_v4()))
    }
}

impl core::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Article - one piece written by one Author for one Magazine
#[derive(Debug, Clone)]
pub struct Article {
    /// Unique identifier (Entity identity)
    id: ArticleId,
    /// Fixed at construction
    title: String,
    /// Who wrote it
    author: Author,
    /// Where it was published
    magazine: MagazineId,
}

impl Article {
    /// Create a new Article
    ///
    /// Only the title is checked here. Whether the magazine is registered
    /// is checked by `Newsroom::create_article`.
    pub fn new(
        author: Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let len = title.chars().count();
        if !ARTICLE_TITLE_LEN.contains(&len) {
            return Err(ValidationError::TitleLength { len });
        }
        Ok(Self {
            id: ArticleId::generate(),
            title,
            author,
            magazine: magazine.id().clone(),
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn magazine_id(&self) -> &MagazineId {
        &self.magazine
    }

    // ========== Mutations ==========

    /// Always fails: an article's title cannot change after construction.
    pub fn set_title(&mut self, _title: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError::new("Article", "title"))
    }

    /// Registered articles are reassigned through the `Newsroom`
    pub(crate) fn set_author(&mut self, author: Author) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: &Magazine) {
        self.magazine = magazine.id().clone();
    }

    /// Whether this article was written by `author`
    pub fn is_by(&self, author: &Author) -> bool {
        self.author == *author
    }

    /// Whether this article was published in the magazine with `id`
    pub fn is_in(&self, id: &MagazineId) -> bool {
        self.magazine == *id
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}
