use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::{entities::RecipeImage, ports::ImageSearchClient},
};

#[derive(Debug, Clone)]
pub struct PexelsImageSearchClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PhotoSource,
}

#[derive(Debug, Deserialize)]
struct PhotoSource {
    medium: String,
}

impl PexelsImageSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

impl ImageSearchClient for PexelsImageSearchClient {
    async fn search_image(&self, query: String) -> Result<Option<RecipeImage>, CoreError> {
        let url = format!(
            "https://api.pexels.com/v1/search?query={}&per_page=1",
            urlencoding::encode(&query)
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Pexels request failed: {}", e);
                CoreError::ExternalServiceError(format!("Image search error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Pexels API error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Image search returned error: {}",
                status
            )));
        }

        let result: PexelsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Pexels response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse image search response: {}", e))
        })?;

        Ok(result
            .photos
            .into_iter()
            .next()
            .map(|photo| RecipeImage {
                url: photo.src.medium,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing_takes_first_medium_url() {
        let raw = r#"{"photos":[{"src":{"medium":"https://images.pexels.com/1-medium.jpg"}},{"src":{"medium":"https://images.pexels.com/2-medium.jpg"}}]}"#;
        let parsed: PexelsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.photos[0].src.medium,
            "https://images.pexels.com/1-medium.jpg"
        );
    }

    #[test]
    fn test_empty_photo_list_parses() {
        let parsed: PexelsResponse = serde_json::from_str(r#"{"photos":[]}"#).unwrap();
        assert!(parsed.photos.is_empty());
    }
}
