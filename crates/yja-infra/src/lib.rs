//! # YJA Infrastructure
//!
//! Concrete implementations of the ports defined in `yja-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory and file storage only
//! - `redis` - Redis-backed key-value storage

pub mod storage;
pub mod system;

// Re-exports
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use system::{RandomIdGenerator, SystemClock};

#[cfg(feature = "redis")]
pub use storage::{RedisConfig, RedisKeyValueStore};
