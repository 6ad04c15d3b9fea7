//! Repository trait definitions
//!
//! This module defines the storage gateway contract the scoring service
//! consumes. Implementations are thin CRUD primitives with no business logic;
//! uniqueness checks, eviction and random selection live in the service layer.

use async_trait::async_trait;

use crate::errors::RepositoryResult;
use crate::models::{Recommendation, RecommendationCreateRequest, RecommendationId, ScoreFilter};

/// Storage gateway for recommendations
///
/// # Examples
///
/// ```rust
/// use song_votes::repositories::RecommendationRepository;
/// use song_votes::models::RecommendationCreateRequest;
///
/// async fn example(repo: &dyn RecommendationRepository) -> song_votes::errors::RepositoryResult<()> {
///     let created = repo
///         .create(RecommendationCreateRequest::new("Song", "https://example.com/v/1"))
///         .await?;
///     let bumped = repo.increment_score(created.id, 1).await?;
///     assert_eq!(bumped.score, 1);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Create a new recommendation with a score of zero
    ///
    /// # Returns
    ///
    /// * `Ok(Recommendation)` - Created entity with its storage-assigned ID
    /// * `Err(RepositoryError::ConstraintViolation)` - The name is already taken
    async fn create(&self, request: RecommendationCreateRequest) -> RepositoryResult<Recommendation>;

    /// Find a recommendation by its ID
    async fn find_by_id(&self, id: RecommendationId) -> RepositoryResult<Option<Recommendation>>;

    /// Find a recommendation by its exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Recommendation>>;

    /// Atomically add `delta` to the stored score
    ///
    /// # Returns
    ///
    /// * `Ok(Recommendation)` - The row after the increment
    /// * `Err(RepositoryError::RecordNotFound)` - No row with that ID
    async fn increment_score(
        &self,
        id: RecommendationId,
        delta: i32,
    ) -> RepositoryResult<Recommendation>;

    /// Delete a recommendation; deleting an absent ID is not an error
    async fn remove(&self, id: RecommendationId) -> RepositoryResult<()>;

    /// All recommendations in insertion order
    async fn list_all(&self) -> RepositoryResult<Vec<Recommendation>>;

    /// Most recently inserted recommendations first, at most `limit`
    async fn list_recent(&self, limit: u64) -> RepositoryResult<Vec<Recommendation>>;

    /// Recommendations whose score passes `filter` against `threshold`, in
    /// insertion order
    async fn list_by_score(
        &self,
        filter: ScoreFilter,
        threshold: i32,
    ) -> RepositoryResult<Vec<Recommendation>>;

    /// Highest scores first, ties broken by insertion order, at most `limit`
    async fn list_top(&self, limit: u64) -> RepositoryResult<Vec<Recommendation>>;

    /// Number of live recommendations
    async fn count(&self) -> RepositoryResult<u64>;

    /// Delete every recommendation. Test environments only.
    async fn clear_all(&self) -> RepositoryResult<()>;

    /// Check if a recommendation exists by ID
    async fn exists(&self, id: RecommendationId) -> RepositoryResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
