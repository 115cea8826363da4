//! Key-value storage providers - memory, file and Redis.

mod file;
mod memory;

#[cfg(feature = "redis")]
mod redis_store;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

#[cfg(feature = "redis")]
pub use redis_store::{RedisConfig, RedisKeyValueStore};
