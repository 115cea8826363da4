use serde::{Deserialize, Serialize};

use super::validation::{ValidationErrors, validate};
use crate::ports::IdGenerator;

/// Maximum title length accepted by the admin surface.
pub const TITLE_MAX_CHARS: usize = 120;

/// Maximum description length enforced by the validator.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Category tags offered by the admin surface.
///
/// The store does not enforce these; any string is a legal `source`.
pub mod source {
    pub const COMMUNITY: &str = "community";
    pub const EDUCATION: &str = "education";
    pub const OTHER: &str = "other";

    pub const DEFAULT: &str = COMMUNITY;
    pub const ALL: [&str; 3] = [COMMUNITY, EDUCATION, OTHER];
}

const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// Post entity - one entry of the feed.
///
/// Field names match the persisted JSON layout exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Post {
    /// Stamp a validated post with its identity.
    pub fn new(id: String, created_at: i64, fields: NewPost) -> Self {
        Self {
            id,
            title: fields.title,
            link: fields.link,
            description: fields.description,
            image: fields.image,
            source: fields.source,
            created_at,
        }
    }
}

/// Raw, unvalidated candidate as gathered by the admin surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl PostInput {
    /// Run the validator and, if it passes, normalize into a [`NewPost`].
    pub fn into_new_post(self) -> Result<NewPost, ValidationErrors> {
        let errors = validate(&self);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPost {
            title: self.title.unwrap_or_default().trim().to_string(),
            link: self.link.unwrap_or_default().trim().to_string(),
            description: self.description.unwrap_or_default().trim().to_string(),
            image: self.image.unwrap_or_default(),
            source: self.source.unwrap_or_else(|| source::DEFAULT.to_string()),
        })
    }
}

/// Fields of a post that passed validation, not yet stamped with id and time.
///
/// Only obtainable through [`PostInput::into_new_post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    link: String,
    description: String,
    image: String,
    source: String,
}

impl NewPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// The two example posts shown when nothing has been persisted yet.
pub fn seed_posts(now: i64, ids: &dyn IdGenerator) -> Vec<Post> {
    vec![
        Post {
            id: ids.generate(),
            title: "YJA Pathshala Spotlight".to_string(),
            link: "https://www.yja.org/education".to_string(),
            description: "Learn about recent educational initiatives across regions.".to_string(),
            image: String::new(),
            source: source::EDUCATION.to_string(),
            created_at: now - 3 * DAY_MILLIS,
        },
        Post {
            id: ids.generate(),
            title: "Community Service Recap".to_string(),
            link: "https://www.yja.org/community".to_string(),
            description: "Highlights from the latest community drives and meetups.".to_string(),
            image: String::new(),
            source: source::COMMUNITY.to_string(),
            created_at: now - 7 * DAY_MILLIS,
        },
    ]
}
