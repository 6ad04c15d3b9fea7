//! SeaORM migrations for multi-database support
//!
//! Migrations are database-agnostic and run on SQLite, PostgreSQL and MySQL.
//! Names follow the `mYYYYMMDD_HHMMSS_description` convention, which
//! `tests/migration_name_guard.rs` enforces.

use sea_orm_migration::prelude::*;

pub mod m20250601_000001_create_recommendations;
pub mod m20250601_000002_add_score_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_recommendations::Migration),
            Box::new(m20250601_000002_add_score_index::Migration),
        ]
    }
}
