use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, identity::value_objects::Identity};

pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(err) => Err(err),
    }
}

/// Every record in this system is scoped to the user that created it.
pub fn ensure_owner(identity: &Identity, owner_id: Uuid, message: &str) -> Result<(), CoreError> {
    ensure_policy(Ok(identity.id() == owner_id), message)
}
