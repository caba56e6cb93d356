use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        let statement = Statement::from_string(sea_orm::DatabaseBackend::Postgres, "SELECT 1");

        self.db.execute(statement).await.map_err(|e| {
            error!("Database health check failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            database: self.ping().await.is_ok(),
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.ping().await?;
        Ok(start.elapsed().as_millis() as u64)
    }
}
