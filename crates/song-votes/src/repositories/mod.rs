//! Repository pattern implementation for data access
//!
//! This module provides the storage gateway abstraction the scoring service
//! depends on, separating business rules from data access.
//!
//! # Architecture
//!
//! - [`RecommendationRepository`]: the gateway contract
//! - [`InMemoryRecommendationRepository`]: in-process implementation
//! - `database::repositories::RecommendationSeaOrmRepository`: SeaORM
//!   implementation for SQLite, PostgreSQL and MySQL
//!
//! # Usage
//!
//! ```rust
//! use song_votes::repositories::{InMemoryRecommendationRepository, RecommendationRepository};
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn RecommendationRepository> = Arc::new(InMemoryRecommendationRepository::new());
//! ```

pub mod in_memory;
pub mod traits;

// Re-export main traits and types
pub use in_memory::InMemoryRecommendationRepository;
pub use traits::*;
