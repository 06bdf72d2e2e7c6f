//! Article Repository - The registry of every Article
//!
//! All relationship queries are full scans over this registry.
//! There is no index to keep consistent when an article is reassigned.

use super::RepositoryError;
use crate::model::article::{Article, ArticleId};
use crate::model::author::Author;
use crate::model::magazine::MagazineId;

/// Article Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must return entries in registration order.
pub trait ArticleRepository {
    /// Append an article to the registry
    fn add(&mut self, article: Article) -> Result<(), RepositoryError>;

    /// Overwrite a registered article in place, keeping its position
    fn update(&mut self, article: &Article) -> Result<(), RepositoryError>;

    /// Find an article by ID
    fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, RepositoryError>;

    /// All registered articles, oldest first
    fn list_all(&self) -> Result<Vec<Article>, RepositoryError>;

    /// Articles written by `author`, in registration order
    fn find_by_author(&self, author: &Author) -> Result<Vec<Article>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|a| a.is_by(author))
            .collect())
    }

    /// Articles published in the magazine with `id`, in registration order
    fn find_by_magazine(&self, id: &MagazineId) -> Result<Vec<Article>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|a| a.is_in(id))
            .collect())
    }

    /// Count registered articles
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Drop every entry. Test harnesses only.
    fn clear(&mut self);
}
