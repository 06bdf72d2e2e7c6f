//! # Masthead Domain Layer
//!
//! Authors write Articles that are published in Magazines.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities (Author, Magazine, Article)          ││
//! │  │  repository/- Registry traits (not implementations)         ││
//! │  │  service/   - Domain services (Newsroom)                    ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage lives in `masthead-adapter`. This crate only knows the traits.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ImmutableFieldError, NewsroomError, Result, ValidationError};

pub use model::{
    article::{Article, ArticleId, ARTICLE_TITLE_LEN},
    author::{Author, AuthorId},
    magazine::{Magazine, MagazineId, MAGAZINE_NAME_LEN},
};

pub use repository::{
    article_repository::ArticleRepository,
    magazine_repository::MagazineRepository,
    RepositoryError,
};

pub use service::newsroom::{Newsroom, CONTRIBUTING_AUTHOR_THRESHOLD};
