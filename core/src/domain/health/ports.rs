use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus,
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;

    /// Database roundtrip latency in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;

    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
