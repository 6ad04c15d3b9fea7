//! Service layer trait definitions
//!
//! This module defines the business interface the web layer consumes. Keeping
//! it behind a trait lets handlers run against any implementation, and lets
//! the scoring rules run against any storage gateway.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{Recommendation, RecommendationCreateRequest, RecommendationId, VoteOutcome};

/// Business operations on song recommendations
///
/// # Examples
///
/// ```rust
/// use song_votes::services::RecommendationService;
/// use song_votes::errors::AppResult;
///
/// async fn example<S: RecommendationService>(service: S, id: i32) -> AppResult<()> {
///     let upvoted = service.upvote(id).await?;
///     let top = service.get_top(5).await?;
///     println!("{} now scores {}, top has {}", upvoted.name, upvoted.score, top.len());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Validate and store a new recommendation with a score of zero
    ///
    /// # Returns
    ///
    /// * `Ok(Recommendation)` - Created recommendation
    /// * `Err(AppError::Validation)` - Empty name or invalid link
    /// * `Err(AppError::DuplicateName)` - A recommendation with this name exists
    async fn insert(&self, request: RecommendationCreateRequest) -> AppResult<Recommendation>;

    /// Raise the score by one
    async fn upvote(&self, id: RecommendationId) -> AppResult<Recommendation>;

    /// Lower the score by one, evicting the recommendation when the score
    /// falls below the eviction threshold
    async fn downvote(&self, id: RecommendationId) -> AppResult<VoteOutcome>;

    /// Get a recommendation by ID or fail with `AppError::NotFound`
    async fn get_by_id(&self, id: RecommendationId) -> AppResult<Recommendation>;

    /// All recommendations in insertion order
    async fn get_all(&self) -> AppResult<Vec<Recommendation>>;

    /// The `limit` most recently inserted recommendations, newest first
    async fn get_recent(&self, limit: i64) -> AppResult<Vec<Recommendation>>;

    /// The `limit` highest-scoring recommendations
    async fn get_top(&self, limit: i64) -> AppResult<Vec<Recommendation>>;

    /// One recommendation, picked with a bias toward popular entries
    async fn get_random(&self) -> AppResult<Recommendation>;

    /// Number of live recommendations
    async fn count(&self) -> AppResult<u64>;

    /// Delete every recommendation. Test administration only.
    async fn truncate(&self) -> AppResult<()>;
}
