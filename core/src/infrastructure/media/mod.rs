pub mod pexels_client;
pub mod youtube_client;

pub use pexels_client::PexelsImageSearchClient;
pub use youtube_client::YoutubeVideoSearchClient;
