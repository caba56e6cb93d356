use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, identity::value_objects::Identity,
    stats::value_objects::InventoryOverview,
};

/// Service trait for the analytics view. Pure aggregation over the current
/// inventory, recomputed per request, nothing persisted.
#[cfg_attr(test, mockall::automock)]
pub trait StatsService: Send + Sync {
    fn get_overview(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<InventoryOverview, CoreError>> + Send;
}
