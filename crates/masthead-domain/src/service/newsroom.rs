//! Newsroom - The owner of both registries
//!
//! The Newsroom is the single context object that holds the Magazine and
//! Article registries. Every registration goes through it, and every
//! relationship query is answered by scanning its Article registry:
//!
//! 1. Register: validate first, then append (nothing half-valid is stored)
//! 2. Mutate: load, change, validate, write back in place
//! 3. Query: recompute from the registries on every call
//!
//! Queries that may have nothing to report (`magazine_article_titles`,
//! `magazine_contributing_authors`, `top_publisher`) return `Option`.
//! Plain collection queries return an empty collection instead.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::error::{NewsroomError, Result, ValidationError};
use crate::model::article::{Article, ArticleId};
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repository::article_repository::ArticleRepository;
use crate::repository::magazine_repository::MagazineRepository;
use crate::repository::RepositoryError;

/// Articles an author must exceed in one magazine to count as a
/// contributing author of it
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// The registry-owning domain service
#[derive(Debug, Default)]
pub struct Newsroom<M, A> {
    magazines: M,
    articles: A,
}

impl<M, A> Newsroom<M, A>
where
    M: MagazineRepository,
    A: ArticleRepository,
{
    /// Create a Newsroom on top of the given registries
    pub fn new(magazines: M, articles: A) -> Self {
        Self {
            magazines,
            articles,
        }
    }

    // ========== Magazines ==========

    /// Construct a Magazine and append it to the registry
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Magazine> {
        let magazine = Magazine::new(name, category).map_err(rejected)?;
        self.register_magazine(magazine)
    }

    /// Append an already constructed Magazine to the registry
    pub fn register_magazine(&mut self, magazine: Magazine) -> Result<Magazine> {
        self.magazines.add(magazine.clone())?;
        debug!(magazine_id = %magazine.id(), name = magazine.name(), "magazine registered");
        Ok(magazine)
    }

    /// Rename a registered magazine in place
    pub fn rename_magazine(
        &mut self,
        id: &MagazineId,
        name: impl Into<String>,
    ) -> Result<Magazine> {
        let mut magazine = self.require_magazine(id)?;
        magazine.set_name(name).map_err(rejected)?;
        self.magazines.update(&magazine)?;
        debug!(magazine_id = %id, name = magazine.name(), "magazine renamed");
        Ok(magazine)
    }

    /// Change the category of a registered magazine in place
    pub fn recategorize_magazine(
        &mut self,
        id: &MagazineId,
        category: impl Into<String>,
    ) -> Result<Magazine> {
        let mut magazine = self.require_magazine(id)?;
        magazine.set_category(category).map_err(rejected)?;
        self.magazines.update(&magazine)?;
        debug!(magazine_id = %id, category = magazine.category(), "magazine recategorized");
        Ok(magazine)
    }

    /// All registered magazines, oldest first
    pub fn magazines(&self) -> Result<Vec<Magazine>> {
        Ok(self.magazines.list_all()?)
    }

    pub fn find_magazine(&self, id: &MagazineId) -> Result<Option<Magazine>> {
        Ok(self.magazines.find_by_id(id)?)
    }

    // ========== Articles ==========

    /// Construct an Article and append it to the registry
    ///
    /// Fails with `ValidationError::UnregisteredMagazine` when `magazine`
    /// was never registered with this Newsroom.
    pub fn create_article(
        &mut self,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article> {
        let article = Article::new(author.clone(), magazine, title).map_err(rejected)?;
        self.ensure_registered(magazine.id())?;
        self.articles.add(article.clone())?;
        debug!(
            article_id = %article.id(),
            author_id = %author.id(),
            magazine_id = %magazine.id(),
            "article registered"
        );
        Ok(article)
    }

    /// Author-centric form of `create_article`
    pub fn add_article(
        &mut self,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article> {
        self.create_article(author, magazine, title)
    }

    /// Point a registered article at a different author
    pub fn reassign_author(&mut self, id: &ArticleId, author: &Author) -> Result<Article> {
        let mut article = self.require_article(id)?;
        article.set_author(author.clone());
        self.articles.update(&article)?;
        debug!(article_id = %id, author_id = %author.id(), "article author reassigned");
        Ok(article)
    }

    /// Point a registered article at a different registered magazine
    ///
    /// Checked the same way as at construction.
    pub fn reassign_magazine(&mut self, id: &ArticleId, magazine: &Magazine) -> Result<Article> {
        let mut article = self.require_article(id)?;
        self.ensure_registered(magazine.id())?;
        article.set_magazine(magazine);
        self.articles.update(&article)?;
        debug!(article_id = %id, magazine_id = %magazine.id(), "article magazine reassigned");
        Ok(article)
    }

    /// All registered articles, oldest first
    pub fn articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.list_all()?)
    }

    pub fn find_article(&self, id: &ArticleId) -> Result<Option<Article>> {
        Ok(self.articles.find_by_id(id)?)
    }

    /// Current state of the magazine an article is published in
    pub fn magazine_of(&self, article: &Article) -> Result<Option<Magazine>> {
        Ok(self.magazines.find_by_id(article.magazine_id())?)
    }

    // ========== Author queries ==========

    /// Every article written by `author`, in registry order
    pub fn author_articles(&self, author: &Author) -> Result<Vec<Article>> {
        Ok(self.articles.find_by_author(author)?)
    }

    /// Distinct magazines `author` has written for, first appearance first
    pub fn author_magazines(&self, author: &Author) -> Result<Vec<Magazine>> {
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in self.author_articles(author)? {
            if seen.insert(article.magazine_id().clone()) {
                magazines.push(self.require_magazine(article.magazine_id())?);
            }
        }
        Ok(magazines)
    }

    /// Distinct categories of the magazines `author` has written for
    ///
    /// Empty when the author has no articles.
    pub fn author_topic_areas(&self, author: &Author) -> Result<BTreeSet<String>> {
        Ok(self
            .author_magazines(author)?
            .into_iter()
            .map(|m| m.category().to_string())
            .collect())
    }

    // ========== Magazine queries ==========

    /// Every article published in `magazine`, in registry order
    pub fn magazine_articles(&self, magazine: &Magazine) -> Result<Vec<Article>> {
        Ok(self.articles.find_by_magazine(magazine.id())?)
    }

    /// Distinct authors of `magazine`'s articles, first appearance first
    pub fn magazine_contributors(&self, magazine: &Magazine) -> Result<Vec<Author>> {
        let mut seen = HashSet::new();
        Ok(self
            .magazine_articles(magazine)?
            .into_iter()
            .map(|a| a.author().clone())
            .filter(|author| seen.insert(author.id().clone()))
            .collect())
    }

    /// Titles of `magazine`'s articles, or `None` when it has none
    pub fn magazine_article_titles(&self, magazine: &Magazine) -> Result<Option<Vec<String>>> {
        let titles: Vec<String> = self
            .magazine_articles(magazine)?
            .iter()
            .map(|a| a.title().to_string())
            .collect();
        Ok((!titles.is_empty()).then_some(titles))
    }

    /// Authors with more than two articles in `magazine`, or `None`
    pub fn magazine_contributing_authors(&self, magazine: &Magazine) -> Result<Option<Vec<Author>>> {
        let mut order: Vec<Author> = Vec::new();
        let mut counts: HashMap<Author, usize> = HashMap::new();
        for article in self.magazine_articles(magazine)? {
            let count = counts.entry(article.author().clone()).or_insert(0);
            if *count == 0 {
                order.push(article.author().clone());
            }
            *count += 1;
        }

        let prolific: Vec<Author> = order
            .into_iter()
            .filter(|author| counts[author] > CONTRIBUTING_AUTHOR_THRESHOLD)
            .collect();
        Ok((!prolific.is_empty()).then_some(prolific))
    }

    /// The magazine with the most articles
    ///
    /// Ties go to the earliest registered magazine. `None` only when no
    /// magazine is registered.
    pub fn top_publisher(&self) -> Result<Option<Magazine>> {
        let mut counts: HashMap<MagazineId, usize> = HashMap::new();
        for article in self.articles.list_all()? {
            *counts.entry(article.magazine_id().clone()).or_insert(0) += 1;
        }

        let mut best: Option<(Magazine, usize)> = None;
        for magazine in self.magazines.list_all()? {
            let count = counts.get(magazine.id()).copied().unwrap_or(0);
            // Strictly greater, so the first maximal entry is kept
            if best.as_ref().map_or(true, |(_, top)| count > *top) {
                best = Some((magazine, count));
            }
        }
        Ok(best.map(|(magazine, _)| magazine))
    }

    // ========== Test harness ==========

    /// Empty both registries
    #[cfg(any(test, feature = "test-support"))]
    pub fn reset(&mut self) {
        self.magazines.clear();
        self.articles.clear();
        debug!("registries reset");
    }

    // ========== Helpers ==========

    fn ensure_registered(&self, id: &MagazineId) -> Result<()> {
        if self.magazines.contains(id)? {
            Ok(())
        } else {
            Err(rejected(ValidationError::UnregisteredMagazine {
                id: id.to_string(),
            }))
        }
    }

    fn require_magazine(&self, id: &MagazineId) -> Result<Magazine> {
        self.magazines.find_by_id(id)?.ok_or_else(|| {
            RepositoryError::NotFound {
                entity: "Magazine",
                id: id.to_string(),
            }
            .into()
        })
    }

    fn require_article(&self, id: &ArticleId) -> Result<Article> {
        self.articles
            .find_by_id(id)?
            .ok_or_else(|| NewsroomError::UnknownArticle { id: id.to_string() })
    }
}

fn rejected(err: ValidationError) -> NewsroomError {
    debug!(error = %err, "validation rejected input");
    err.into()
}
