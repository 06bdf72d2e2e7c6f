//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits are the registries of the domain. They say WHAT the
//! `Newsroom` needs, not how entries are stored.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────────
//! trait MagazineRepository│  InMemoryMagazineRepository
//!   fn add()              │
//!   fn list_all()         │
//! ```
//!
//! Registries are append-only and keep insertion order. `clear` exists
//! for test harnesses and is never called from production paths.

use thiserror::Error;

pub mod article_repository;
pub mod magazine_repository;

#[cfg(test)]
pub(crate) mod testing;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No entry with this id
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An entry with this id is already registered
    #[error("{entity} already registered: {id}")]
    Duplicate { entity: &'static str, id: String },
}
