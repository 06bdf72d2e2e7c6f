//! Domain Models - The vocabulary of Masthead
//!
//! Authors write Articles that are published in Magazines.
//! Article is the join entity of that many-to-many relationship.

pub mod article;
pub mod author;
pub mod magazine;
