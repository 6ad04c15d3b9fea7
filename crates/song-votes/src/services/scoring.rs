//! Scoring service
//!
//! Owns every business rule around recommendations: name uniqueness,
//! vote-driven score changes, eviction of unpopular entries, the weighted
//! random pick and the top list. The service keeps no state of its own; all
//! mutable state lives behind the storage gateway.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::{AppError, AppResult, RepositoryError};
use crate::models::{
    Recommendation, RecommendationCreateRequest, RecommendationId, ScoreFilter, VoteOutcome,
};
use crate::repositories::RecommendationRepository;
use crate::services::traits::RecommendationService;

/// A downvote that leaves the score strictly below this value evicts the
/// recommendation
pub const EVICTION_THRESHOLD: i32 = -5;

/// Scores above this value count as popular for random selection
pub const POPULARITY_THRESHOLD: i32 = 10;

/// Share of random picks drawn from the popular bucket
pub const POPULAR_DRAW_PROBABILITY: f64 = 0.7;

const RESOURCE: &str = "Recommendation";

/// Map a uniform draw in `[0, 1)` to the score bucket to sample from
///
/// Draws below [`POPULAR_DRAW_PROBABILITY`] select recommendations scoring
/// above [`POPULARITY_THRESHOLD`]; the rest select the remainder.
pub fn get_score_filter(draw: f64) -> ScoreFilter {
    if draw < POPULAR_DRAW_PROBABILITY {
        ScoreFilter::GreaterThan
    } else {
        ScoreFilter::LessThanOrEqual
    }
}

/// Default [`RecommendationService`] implementation over any storage gateway
#[derive(Clone)]
pub struct ScoringService {
    repository: Arc<dyn RecommendationRepository>,
}

impl ScoringService {
    pub fn new(repository: Arc<dyn RecommendationRepository>) -> Self {
        Self { repository }
    }

    fn validate(request: &RecommendationCreateRequest) -> AppResult<()> {
        if request.name.trim().is_empty() {
            return Err(AppError::validation("name must not be empty"));
        }
        if request.link.trim().is_empty() {
            return Err(AppError::validation("link must not be empty"));
        }

        let link = Url::parse(&request.link)
            .map_err(|e| AppError::validation(format!("link is not a valid URL: {e}")))?;
        if !matches!(link.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "link must use http or https, got '{}'",
                link.scheme()
            )));
        }
        Ok(())
    }

    fn positive_limit(limit: i64) -> AppResult<u64> {
        u64::try_from(limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| AppError::validation(format!("limit must be a positive integer, got {limit}")))
    }

    async fn find_existing(&self, id: RecommendationId) -> AppResult<Recommendation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Candidate pool for a random pick
    ///
    /// Returns the recommendations matching `filter`, or those matching the
    /// opposite filter when the first bucket is empty. Fails with
    /// `AppError::NotFound` only when the store holds nothing at all.
    pub async fn random_candidates(&self, filter: ScoreFilter) -> AppResult<Vec<Recommendation>> {
        let candidates = self
            .repository
            .list_by_score(filter, POPULARITY_THRESHOLD)
            .await?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        let fallback = filter.other();
        debug!(
            "No recommendations in bucket '{}' {}, falling back to '{}'",
            filter, POPULARITY_THRESHOLD, fallback
        );
        let candidates = self
            .repository
            .list_by_score(fallback, POPULARITY_THRESHOLD)
            .await?;
        if candidates.is_empty() {
            return Err(AppError::not_found(RESOURCE, "random"));
        }
        Ok(candidates)
    }
}

#[async_trait]
impl RecommendationService for ScoringService {
    async fn insert(&self, request: RecommendationCreateRequest) -> AppResult<Recommendation> {
        Self::validate(&request)?;

        if self.repository.find_by_name(&request.name).await?.is_some() {
            warn!("Rejected duplicate recommendation: {}", request.name);
            return Err(AppError::duplicate_name(request.name));
        }

        let name = request.name.clone();
        match self.repository.create(request).await {
            Ok(recommendation) => {
                info!(
                    "Created recommendation: {} ({})",
                    recommendation.name, recommendation.id
                );
                Ok(recommendation)
            }
            // Lost a race with a concurrent insert of the same name
            Err(RepositoryError::ConstraintViolation { constraint, .. }) => {
                warn!("Insert of '{}' hit constraint {}", name, constraint);
                Err(AppError::duplicate_name(name))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn upvote(&self, id: RecommendationId) -> AppResult<Recommendation> {
        self.find_existing(id).await?;

        let updated = self.repository.increment_score(id, 1).await.map_err(|e| {
            if e.is_not_found() {
                // Evicted by a concurrent downvote after our lookup
                AppError::conflict(format!("{RESOURCE} {id} was removed while voting"))
            } else {
                e.into()
            }
        })?;

        debug!("Upvoted recommendation {} to {}", id, updated.score);
        Ok(updated)
    }

    async fn downvote(&self, id: RecommendationId) -> AppResult<VoteOutcome> {
        let existing = self.find_existing(id).await?;

        let updated = match self.repository.increment_score(id, -1).await {
            Ok(updated) => updated,
            Err(e) if e.is_not_found() => {
                // A concurrent downvote evicted the row after our lookup
                info!("Recommendation {} was evicted by a concurrent vote", id);
                return Ok(VoteOutcome::Evicted { id });
            }
            Err(e) => return Err(e.into()),
        };

        if updated.score < EVICTION_THRESHOLD {
            self.repository.remove(id).await?;
            info!(
                "Evicted recommendation {} ({}) at score {}",
                existing.name, id, updated.score
            );
            return Ok(VoteOutcome::Evicted { id });
        }

        debug!("Downvoted recommendation {} to {}", id, updated.score);
        Ok(VoteOutcome::Updated(updated))
    }

    async fn get_by_id(&self, id: RecommendationId) -> AppResult<Recommendation> {
        self.find_existing(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<Recommendation>> {
        Ok(self.repository.list_all().await?)
    }

    async fn get_recent(&self, limit: i64) -> AppResult<Vec<Recommendation>> {
        let limit = Self::positive_limit(limit)?;
        Ok(self.repository.list_recent(limit).await?)
    }

    async fn get_top(&self, limit: i64) -> AppResult<Vec<Recommendation>> {
        let limit = Self::positive_limit(limit)?;
        Ok(self.repository.list_top(limit).await?)
    }

    async fn get_random(&self) -> AppResult<Recommendation> {
        let draw: f64 = rand::random();
        let filter = get_score_filter(draw);

        let mut candidates = self.random_candidates(filter).await?;
        let index = rand::rng().random_range(0..candidates.len());
        Ok(candidates.swap_remove(index))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.repository.count().await?)
    }

    async fn truncate(&self) -> AppResult<()> {
        self.repository.clear_all().await?;
        warn!("All recommendations were truncated");
        Ok(())
    }
}
