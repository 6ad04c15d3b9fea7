//! SeaORM repository implementations
//!
//! Repository implementations using SeaORM that work across SQLite,
//! PostgreSQL, and MySQL databases.

pub mod recommendation;

// Re-export for convenience
pub use recommendation::RecommendationSeaOrmRepository;
