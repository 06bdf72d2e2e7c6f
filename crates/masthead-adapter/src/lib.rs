//! # Masthead Adapter Layer
//!
//! Implementations of the registry traits from `masthead-domain`.
//!
//! ## Structure
//!
//! - `repository/` - Registry implementations

pub mod repository;

pub use repository::in_memory::{
    in_memory_newsroom, InMemoryArticleRepository, InMemoryMagazineRepository, InMemoryNewsroom,
};
