//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod id;
mod storage;

pub use clock::Clock;
pub use id::IdGenerator;
pub use storage::{KeyValueStore, StorageError};
