//! In-Memory Repository Implementations
//!
//! Insertion-ordered registries backed by a `Vec`.
//! Single-threaded: writes take `&mut self` and there is no lock.

use tracing::trace;

use masthead_domain::model::article::{Article, ArticleId};
use masthead_domain::model::magazine::{Magazine, MagazineId};
use masthead_domain::repository::article_repository::ArticleRepository;
use masthead_domain::repository::magazine_repository::MagazineRepository;
use masthead_domain::repository::RepositoryError;
use masthead_domain::service::newsroom::Newsroom;

/// A `Newsroom` wired to the in-memory registries
pub type InMemoryNewsroom = Newsroom<InMemoryMagazineRepository, InMemoryArticleRepository>;

/// Create an empty in-memory `Newsroom`
pub fn in_memory_newsroom() -> InMemoryNewsroom {
    Newsroom::new(
        InMemoryMagazineRepository::new(),
        InMemoryArticleRepository::new(),
    )
}

/// In-memory Magazine Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryMagazineRepository {
    magazines: Vec<Magazine>,
}

impl InMemoryMagazineRepository {
    pub fn new() -> Self {
        Self {
            magazines: Vec::new(),
        }
    }

    fn position(&self, id: &MagazineId) -> Option<usize> {
        self.magazines.iter().position(|m| m.id() == id)
    }
}

impl MagazineRepository for InMemoryMagazineRepository {
    fn add(&mut self, magazine: Magazine) -> Result<(), RepositoryError> {
        if self.position(magazine.id()).is_some() {
            return Err(RepositoryError::Duplicate {
                entity: "Magazine",
                id: magazine.id().to_string(),
            });
        }
        trace!(magazine_id = %magazine.id(), index = self.magazines.len(), "append magazine");
        self.magazines.push(magazine);
        Ok(())
    }

    fn update(&mut self, magazine: &Magazine) -> Result<(), RepositoryError> {
        let index = self
            .position(magazine.id())
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Magazine",
                id: magazine.id().to_string(),
            })?;
        self.magazines[index] = magazine.clone();
        Ok(())
    }

    fn find_by_id(&self, id: &MagazineId) -> Result<Option<Magazine>, RepositoryError> {
        Ok(self.position(id).map(|i| self.magazines[i].clone()))
    }

    fn list_all(&self) -> Result<Vec<Magazine>, RepositoryError> {
        Ok(self.magazines.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.magazines.len())
    }

    fn contains(&self, id: &MagazineId) -> Result<bool, RepositoryError> {
        Ok(self.position(id).is_some())
    }

    fn clear(&mut self) {
        self.magazines.clear();
    }
}

/// In-memory Article Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
        }
    }

    fn position(&self, id: &ArticleId) -> Option<usize> {
        self.articles.iter().position(|a| a.id() == id)
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn add(&mut self, article: Article) -> Result<(), RepositoryError> {
        if self.position(article.id()).is_some() {
            return Err(RepositoryError::Duplicate {
                entity: "Article",
                id: article.id().to_string(),
            });
        }
        trace!(article_id = %article.id(), index = self.articles.len(), "append article");
        self.articles.push(article);
        Ok(())
    }

    fn update(&mut self, article: &Article) -> Result<(), RepositoryError> {
        let index = self
            .position(article.id())
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Article",
                id: article.id().to_string(),
            })?;
        self.articles[index] = article.clone();
        Ok(())
    }

    fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, RepositoryError> {
        Ok(self.position(id).map(|i| self.articles[i].clone()))
    }

    fn list_all(&self) -> Result<Vec<Article>, RepositoryError> {
        Ok(self.articles.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.articles.len())
    }

    fn clear(&mut self) {
        self.articles.clear();
    }
}
