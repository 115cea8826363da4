//! Application state - shared across all handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use yja_core::PostStore;
use yja_core::ports::KeyValueStore;
use yja_infra::{FileKeyValueStore, InMemoryKeyValueStore, RandomIdGenerator, SystemClock};

use crate::config::{StorageBackend, StorageConfig};

/// Shared application state.
///
/// One store per process. Handlers hold the lock across a mutation and its
/// persistence, so writes for the store key never interleave.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<PostStore>>,
}

impl AppState {
    /// Build the application state with the configured storage provider.
    pub async fn new(config: &StorageConfig) -> Self {
        let storage = build_storage(config).await;

        let store = PostStore::load(
            config.key.clone(),
            storage,
            Arc::new(SystemClock),
            Arc::new(RandomIdGenerator),
        )
        .await;

        tracing::info!(key = %store.key(), posts = store.len(), "Application state initialized");

        Self::from_store(store)
    }

    pub fn from_store(store: PostStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

async fn build_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage - posts are lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
        StorageBackend::File => {
            tracing::info!(path = %config.path.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(&config.path))
        }
        StorageBackend::Redis => redis_storage().await,
    }
}

#[cfg(feature = "redis")]
async fn redis_storage() -> Arc<dyn KeyValueStore> {
    match yja_infra::RedisKeyValueStore::from_env().await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(
                "Failed to connect to Redis: {}. Using in-memory fallback.",
                e
            );
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

#[cfg(not(feature = "redis"))]
async fn redis_storage() -> Arc<dyn KeyValueStore> {
    tracing::warn!("Built without redis feature - using in-memory storage");
    Arc::new(InMemoryKeyValueStore::new())
}
