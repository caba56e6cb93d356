pub mod scan_fridge;
pub mod scan_receipt;

use axum::extract::Multipart;

use crate::application::http::server::api_entities::api_error::ApiError;

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Pulls the "image" field out of the multipart upload.
pub(super) async fn read_image_field(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name.as_str() == "image" {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))
}
