//! Search/filter engine for the feed.

use std::borrow::Cow;

use crate::domain::Post;

/// Keep the posts whose title, description, source or link contains `query`,
/// ignoring case. Relative order is preserved.
///
/// A blank query returns the input slice itself, borrowed.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Cow<'a, [Post]> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Cow::Borrowed(posts);
    }

    Cow::Owned(
        posts
            .iter()
            .filter(|post| is_match(post, &needle))
            .cloned()
            .collect(),
    )
}

fn is_match(post: &Post, needle: &str) -> bool {
    [&post.title, &post.description, &post.source, &post.link]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
