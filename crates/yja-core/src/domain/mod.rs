//! Domain entities and the pure functions around them.

pub mod id;
pub mod link;
mod post;
mod validation;

pub use id::generate_id;
pub use link::sanitize;
pub use post::{
    DESCRIPTION_MAX_CHARS, NewPost, Post, PostInput, TITLE_MAX_CHARS, seed_posts, source,
};
pub use validation::{ValidationErrors, messages, validate};
