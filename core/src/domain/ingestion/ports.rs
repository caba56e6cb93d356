use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identity::value_objects::Identity,
    ingestion::value_objects::{ScanPhotoInput, ScanSummary},
};

/// LLM client trait for vision-capable chat completion
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn chat_with_image(
        &self,
        system_prompt: String,
        instruction: String,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for turning photos into inventory records
#[cfg_attr(test, mockall::automock)]
pub trait IngestionService: Send + Sync {
    fn scan_photo(
        &self,
        identity: Identity,
        input: ScanPhotoInput,
    ) -> impl Future<Output = Result<ScanSummary, CoreError>> + Send;
}
