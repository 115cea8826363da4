//! Post store - the ordered, in-memory post collection and its persistence bridge.

use std::borrow::Cow;
use std::sync::Arc;

use crate::domain::{NewPost, Post, seed_posts};
use crate::error::StoreError;
use crate::ports::{Clock, IdGenerator, KeyValueStore};
use crate::search::filter_posts;

/// Key the collection is persisted under unless configured otherwise.
pub const DEFAULT_KEY: &str = "yja_posts_v1";

/// Attempts at drawing an id not already in the collection.
const MAX_ID_ATTEMPTS: usize = 16;

/// Owned post collection, newest first.
///
/// Every mutation is applied in memory and then the whole collection is
/// written back under [`PostStore::key`]. Callers that share a store must
/// serialize access (e.g. behind a mutex) so writes for the key never interleave.
pub struct PostStore {
    key: String,
    posts: Vec<Post>,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl PostStore {
    /// Load the persisted collection, falling back to the seed posts when
    /// nothing is stored or the stored value cannot be read or parsed.
    ///
    /// Seed posts replace a missing or unparsable value in storage. After a
    /// read failure they are kept in memory only.
    pub async fn load(
        key: impl Into<String>,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let key = key.into();
        let persisted = read_posts(storage.as_ref(), &key).await;

        let mut store = Self {
            key,
            posts: Vec::new(),
            storage,
            clock,
            ids,
        };

        match persisted {
            Persisted::Posts(posts) => {
                tracing::debug!(key = %store.key, count = posts.len(), "Loaded persisted posts");
                store.posts = posts;
            }
            Persisted::Absent | Persisted::Unparsable => {
                store.posts = store.seed();
                if let Err(e) = store.persist().await {
                    tracing::warn!(error = %e, "Could not persist seed posts");
                }
            }
            // The stored value may still be intact; never overwrite it with seed data.
            Persisted::Unreadable => {
                store.posts = store.seed();
            }
        }

        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current collection, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Filter the current collection, see [`filter_posts`].
    pub fn search(&self, query: &str) -> Cow<'_, [Post]> {
        filter_posts(&self.posts, query)
    }

    /// Stamp `fields` with a fresh id and the current time, put the post at
    /// the front and persist.
    ///
    /// If persisting fails the post stays in memory and the error is returned.
    pub async fn create(&mut self, fields: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(self.fresh_id()?, self.clock.now_millis(), fields);
        self.posts.insert(0, post.clone());

        tracing::info!(id = %post.id, source = %post.source, "Post created");

        self.persist().await?;
        Ok(post)
    }

    /// Remove the post with `id`, if any, and persist.
    ///
    /// An unknown id leaves the collection untouched and is not an error.
    pub async fn delete(&mut self, id: &str) -> Result<Option<Post>, StoreError> {
        let removed = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .map(|index| self.posts.remove(index));

        match &removed {
            Some(post) => tracing::info!(id = %post.id, "Post deleted"),
            None => tracing::debug!(id = %id, "Delete of unknown post ignored"),
        }

        self.persist().await?;
        Ok(removed)
    }

    /// Write the full collection under the store key.
    pub async fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.posts)?;

        self.storage
            .set(&self.key, &raw)
            .await
            .map_err(|source| {
                tracing::error!(key = %self.key, error = %source, "Failed to persist posts");
                StoreError::Persist {
                    key: self.key.clone(),
                    source,
                }
            })
    }

    fn seed(&self) -> Vec<Post> {
        seed_posts(self.clock.now_millis(), self.ids.as_ref())
    }

    fn fresh_id(&self) -> Result<String, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if self.get(&id).is_none() {
                return Ok(id);
            }
        }

        tracing::error!(attempts = MAX_ID_ATTEMPTS, "Id generator keeps returning taken ids");
        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

/// Outcome of reading the persisted collection.
enum Persisted {
    Posts(Vec<Post>),
    Absent,
    Unparsable,
    Unreadable,
}

async fn read_posts(storage: &dyn KeyValueStore, key: &str) -> Persisted {
    let raw = match storage.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!(key = %key, "No persisted posts, using seed data");
            return Persisted::Absent;
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Reading persisted posts failed, using seed data without saving it");
            return Persisted::Unreadable;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(posts) => Persisted::Posts(posts),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Persisted posts are unparsable, using seed data");
            Persisted::Unparsable
        }
    }
}
