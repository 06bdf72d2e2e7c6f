//! Vec-backed repositories for unit tests inside this crate

use super::article_repository::ArticleRepository;
use super::magazine_repository::MagazineRepository;
use super::RepositoryError;
use crate::model::article::{Article, ArticleId};
use crate::model::magazine::{Magazine, MagazineId};

#[derive(Debug, Default)]
pub(crate) struct VecMagazineRepo {
    magazines: Vec<Magazine>,
}

impl MagazineRepository for VecMagazineRepo {
    fn add(&mut self, magazine: Magazine) -> Result<(), RepositoryError> {
        if self.magazines.contains(&magazine) {
            return Err(RepositoryError::Duplicate {
                entity: "Magazine",
                id: magazine.id().to_string(),
            });
        }
        self.magazines.push(magazine);
        Ok(())
    }

    fn update(&mut self, magazine: &Magazine) -> Result<(), RepositoryError> {
        let slot = self
            .magazines
            .iter_mut()
            .find(|m| m.id() == magazine.id())
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Magazine",
                id: magazine.id().to_string(),
            })?;
        *slot = magazine.clone();
        Ok(())
    }

    fn find_by_id(&self, id: &MagazineId) -> Result<Option<Magazine>, RepositoryError> {
        Ok(self.magazines.iter().find(|m| m.id() == id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Magazine>, RepositoryError> {
        Ok(self.magazines.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.magazines.len())
    }

    fn clear(&mut self) {
        self.magazines.clear();
    }
}

#[derive(Debug, Default)]
pub(crate) struct VecArticleRepo {
    articles: Vec<Article>,
}

impl ArticleRepository for VecArticleRepo {
    fn add(&mut self, article: Article) -> Result<(), RepositoryError> {
        if self.articles.contains(&article) {
            return Err(RepositoryError::Duplicate {
                entity: "Article",
                id: article.id().to_string(),
            });
        }
        self.articles.push(article);
        Ok(())
    }

    fn update(&mut self, article: &Article) -> Result<(), RepositoryError> {
        let slot = self
            .articles
            .iter_mut()
            .find(|a| a.id() == article.id())
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Article",
                id: article.id().to_string(),
            })?;
        *slot = article.clone();
        Ok(())
    }

    fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, RepositoryError> {
        Ok(self.articles.iter().find(|a| a.id() == id).cloned())
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
