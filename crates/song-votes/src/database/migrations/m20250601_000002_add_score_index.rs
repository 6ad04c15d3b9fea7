use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_recommendations::Recommendations;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SCORE_INDEX: &str = "idx_recommendations_score";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Backs both the top list ordering and the random-selection buckets
        manager
            .create_index(
                Index::create()
                    .name(SCORE_INDEX)
                    .table(Recommendations::Table)
                    .col(Recommendations::Score)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(SCORE_INDEX)
                    .table(Recommendations::Table)
                    .to_owned(),
            )
            .await
    }
}
