//! SeaORM-based Recommendation repository implementation
//!
//! This provides a database-agnostic storage gateway for recommendations
//! using SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

use crate::entities::{prelude::Recommendations, recommendations};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Recommendation, RecommendationCreateRequest, RecommendationId, ScoreFilter};
use crate::repositories::RecommendationRepository;

const TABLE: &str = "recommendations";
const NAME_CONSTRAINT: &str = "recommendations.name";

/// SeaORM-based repository for Recommendation operations
#[derive(Clone)]
pub struct RecommendationSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl RecommendationSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }
}

fn into_recommendations(models: Vec<recommendations::Model>) -> Vec<Recommendation> {
    models.into_iter().map(Recommendation::from).collect()
}

#[async_trait]
impl RecommendationRepository for RecommendationSeaOrmRepository {
    async fn create(&self, request: RecommendationCreateRequest) -> RepositoryResult<Recommendation> {
        let active_model = recommendations::ActiveModel {
            name: Set(request.name),
            link: Set(request.link),
            score: Set(0),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.connection)
            .await
            .map_err(|e| RepositoryError::from_db(e, NAME_CONSTRAINT))?;

        debug!("Inserted recommendation {} ({})", model.name, model.id);
        Ok(model.into())
    }

    async fn find_by_id(&self, id: RecommendationId) -> RepositoryResult<Option<Recommendation>> {
        let model = Recommendations::find_by_id(id)
            .one(&*self.connection)
            .await?;
        Ok(model.map(Recommendation::from))
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Recommendation>> {
        let model = Recommendations::find()
            .filter(recommendations::Column::Name.eq(name))
            .one(&*self.connection)
            .await?;
        Ok(model.map(Recommendation::from))
    }

    async fn increment_score(
        &self,
        id: RecommendationId,
        delta: i32,
    ) -> RepositoryResult<Recommendation> {
        // Atomic add in SQL; the re-read shares the transaction
        let txn = self.connection.begin().await?;

        let result = Recommendations::update_many()
            .col_expr(
                recommendations::Column::Score,
                Expr::col(recommendations::Column::Score).add(delta),
            )
            .filter(recommendations::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(RepositoryError::record_not_found(TABLE, "id", id));
        }

        let model = Recommendations::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found(TABLE, "id", id))?;

        txn.commit().await?;
        Ok(model.into())
    }

    async fn remove(&self, id: RecommendationId) -> RepositoryResult<()> {
        let result = Recommendations::delete_many()
            .filter(recommendations::Column::Id.eq(id))
            .exec(&*self.connection)
            .await?;

        if result.rows_affected == 0 {
            debug!("Recommendation {} already removed", id);
        }
        Ok(())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Recommendation>> {
        let models = Recommendations::find()
            .order_by_asc(recommendations::Column::Id)
            .all(&*self.connection)
            .await?;
        Ok(into_recommendations(models))
    }

    async fn list_recent(&self, limit: u64) -> RepositoryResult<Vec<Recommendation>> {
        let models = Recommendations::find()
            .order_by_desc(recommendations::Column::Id)
            .limit(limit)
            .all(&*self.connection)
            .await?;
        Ok(into_recommendations(models))
    }

    async fn list_by_score(
        &self,
        filter: ScoreFilter,
        threshold: i32,
    ) -> RepositoryResult<Vec<Recommendation>> {
        let condition = match filter {
            ScoreFilter::GreaterThan => recommendations::Column::Score.gt(threshold),
            ScoreFilter::LessThanOrEqual => recommendations::Column::Score.lte(threshold),
        };

        let models = Recommendations::find()
            .filter(condition)
            .order_by_asc(recommendations::Column::Id)
            .all(&*self.connection)
            .await?;
        Ok(into_recommendations(models))
    }

    async fn list_top(&self, limit: u64) -> RepositoryResult<Vec<Recommendation>> {
        let models = Recommendations::find()
            .order_by_desc(recommendations::Column::Score)
            .order_by_asc(recommendations::Column::Id)
            .limit(limit)
            .all(&*self.connection)
            .await?;
        Ok(into_recommendations(models))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let count = Recommendations::find().count(&*self.connection).await?;
        Ok(count)
    }

    async fn clear_all(&self) -> RepositoryResult<()> {
        let result = Recommendations::delete_many()
            .exec(&*self.connection)
            .await?;
        debug!("Cleared {} recommendations", result.rows_affected);
        Ok(())
    }
}
