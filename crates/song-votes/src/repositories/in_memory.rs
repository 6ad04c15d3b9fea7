//! In-process recommendation store
//!
//! Backs tests and embedders that do not want a database. Every mutation
//! runs inside a single write-lock critical section, so `increment_score`
//! is atomic with respect to concurrent callers.

use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Recommendation, RecommendationCreateRequest, RecommendationId, ScoreFilter};
use crate::repositories::traits::RecommendationRepository;

const TABLE: &str = "recommendations";

#[derive(Debug, Default)]
struct Store {
    /// Rows in insertion order
    rows: Vec<Recommendation>,
    last_id: RecommendationId,
}

impl Store {
    fn position(&self, id: RecommendationId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }
}

/// In-memory implementation of [`RecommendationRepository`]
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecommendationRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRecommendationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row with a preset score, bypassing the vote path.
    /// Used to arrange fixtures.
    pub async fn insert_with_score(
        &self,
        request: RecommendationCreateRequest,
        score: i32,
    ) -> RepositoryResult<Recommendation> {
        let created = self.create(request).await?;
        let mut store = self.store.write().await;
        let index = store
            .position(created.id)
            .ok_or_else(|| RepositoryError::record_not_found(TABLE, "id", created.id))?;
        store.rows[index].score = score;
        Ok(store.rows[index].clone())
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryRecommendationRepository {
    async fn create(&self, request: RecommendationCreateRequest) -> RepositoryResult<Recommendation> {
        let mut store = self.store.write().await;
        if store.rows.iter().any(|row| row.name == request.name) {
            return Err(RepositoryError::unique_violation(
                "recommendations.name",
                format!("name '{}' already exists", request.name),
            ));
        }

        store.last_id += 1;
        let recommendation = Recommendation {
            id: store.last_id,
            name: request.name,
            link: request.link,
            score: 0,
        };
        store.rows.push(recommendation.clone());
        Ok(recommendation)
    }

    async fn find_by_id(&self, id: RecommendationId) -> RepositoryResult<Option<Recommendation>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Recommendation>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|row| row.name == name).cloned())
    }

    async fn increment_score(
        &self,
        id: RecommendationId,
        delta: i32,
    ) -> RepositoryResult<Recommendation> {
        let mut store = self.store.write().await;
        let index = store
            .position(id)
            .ok_or_else(|| RepositoryError::record_not_found(TABLE, "id", id))?;
        let row = &mut store.rows[index];
        row.score = row.score.checked_add(delta).ok_or_else(|| {
            RepositoryError::Database(DbErr::Custom(format!(
                "score of recommendation {} out of range adding {}",
                id, delta
            )))
        })?;
        Ok(row.clone())
    }

    async fn remove(&self, id: RecommendationId) -> RepositoryResult<()> {
        let mut store = self.store.write().await;
        store.rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Recommendation>> {
        Ok(self.store.read().await.rows.clone())
    }

    async fn list_recent(&self, limit: u64) -> RepositoryResult<Vec<Recommendation>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_by_score(
        &self,
        filter: ScoreFilter,
        threshold: i32,
    ) -> RepositoryResult<Vec<Recommendation>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .filter(|row| filter.matches(row.score, threshold))
            .cloned()
            .collect())
    }

    async fn list_top(&self, limit: u64) -> RepositoryResult<Vec<Recommendation>> {
        let mut rows = self.store.read().await.rows.clone();
        // sort_by is stable, so equal scores keep insertion order
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.store.read().await.rows.len() as u64)
    }

    async fn clear_all(&self) -> RepositoryResult<()> {
        self.store.write().await.rows.clear();
        Ok(())
    }
}
