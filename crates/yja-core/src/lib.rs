//! # YJA Core
//!
//! The domain layer of the YJA posts board.
//! Validation, link sanitizing, id generation, search, and the post store.
//! Storage, time and randomness come in through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod search;
pub mod store;

pub use domain::{NewPost, Post, PostInput, ValidationErrors};
pub use error::{DomainError, StoreError};
pub use store::PostStore;
