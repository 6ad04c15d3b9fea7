//! Centralized error handling for the song-votes service
//!
//! This module unifies error types across the application layers so that
//! storage failures, business rule violations and HTTP boundary problems
//! all surface through one classification.
//!
//! # Error Categories
//!
//! - **Repository Errors**: Storage gateway failures (SeaORM, constraints)
//! - **Business Errors**: Missing recommendations, duplicate names, validation
//! - **Web Errors**: HTTP request parsing issues
//!
//! # Usage
//!
//! ```rust
//! use song_votes::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::validation("name must not be empty"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Web Results
pub type WebResult<T> = Result<T, WebError>;
