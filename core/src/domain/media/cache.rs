use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;

use crate::domain::media::entities::RecipeImage;

/// Bounded, shared cache for resolved recipe images, keyed by the
/// lowercased search query. Process lifetime only; eviction is LRU.
#[derive(Clone)]
pub struct RecipeImageCache {
    cache: Arc<Mutex<LruCache<String, RecipeImage>>>,
}

impl std::fmt::Debug for RecipeImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeImageCache").finish_non_exhaustive()
    }
}

impl RecipeImageCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn get(&self, key: &str) -> Option<RecipeImage> {
        let mut cache = self.cache.lock().expect("image cache lock poisoned");
        cache.get(key).cloned()
    }

    pub fn put(&self, key: String, value: RecipeImage) {
        let mut cache = self.cache.lock().expect("image cache lock poisoned");
        cache.put(key, value);
    }
}
