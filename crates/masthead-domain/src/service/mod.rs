//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Relationship queries span Authors, Magazines and Articles, so they live
//! here rather than on any one entity.

pub mod newsroom;
