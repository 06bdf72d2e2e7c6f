//! Registry Adapters - Repository implementations
//!
//! These implement the repository traits from masthead-domain.

pub mod in_memory;
