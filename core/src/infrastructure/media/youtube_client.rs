use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::{entities::RecipeVideo, ports::VideoSearchClient},
};

#[derive(Debug, Clone)]
pub struct YoutubeVideoSearchClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoIdentifier,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoIdentifier {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl YoutubeVideoSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

impl VideoSearchClient for YoutubeVideoSearchClient {
    async fn search_video(&self, query: String) -> Result<Option<RecipeVideo>, CoreError> {
        let url = format!(
            "https://www.googleapis.com/youtube/v3/search?part=snippet&type=video&maxResults=1&q={}&key={}",
            urlencoding::encode(&query),
            self.api_key
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("YouTube request failed: {}", e);
            CoreError::ExternalServiceError(format!("Video search error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("YouTube API error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Video search returned error: {}",
                status
            )));
        }

        let result: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse YouTube response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse video search response: {}", e))
        })?;

        let video = result.items.into_iter().next().and_then(|item| {
            let video_id = item.id.video_id?;
            let thumbnail_url = item.snippet.thumbnails.default.map(|t| t.url)?;
            Some(RecipeVideo {
                video_id,
                title: item.snippet.title,
                thumbnail_url,
            })
        });

        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_is_parsed() {
        let raw = r#"{
            "items": [{
                "id": {"videoId": "abc123"},
                "snippet": {
                    "title": "How to make an omelette",
                    "thumbnails": {"default": {"url": "https://i.ytimg.com/vi/abc123/default.jpg"}}
                }
            }]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        let item = &parsed.items[0];
        assert_eq!(item.id.video_id.as_deref(), Some("abc123"));
        assert_eq!(item.snippet.title, "How to make an omelette");
    }

    #[test]
    fn test_item_without_video_id_is_tolerated() {
        let raw = r#"{
            "items": [{
                "id": {},
                "snippet": {"title": "A channel", "thumbnails": {}}
            }]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.items[0].id.video_id.is_none());
    }
}
