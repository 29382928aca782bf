use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

const REQUIRED_FIELDS: &str = "Title, content, and category are required.";
const TAGS_NOT_ARRAY: &str = "Tags must be an array.";

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Stored as submitted; `None` when the request carried no tags.
    pub tags: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Whether `title`, `content` or `category` contains `term`, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        let needle = fold_case(term);
        [&self.title, &self.content, &self.category]
            .iter()
            .any(|field| fold_case(field).contains(&needle))
    }
}

/// Lowercase one character at a time, like SQL `LOWER`, so a substring
/// folds to a substring of the folded text.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// The writable fields of a post, validated.
///
/// Only obtainable through [`PostDraft::for_create`] or [`PostDraft::for_update`],
/// so repositories never persist a post without title, content and category.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    title: String,
    content: String,
    category: String,
    tags: Option<Value>,
}

impl PostDraft {
    /// Validate the fields of a new post.
    ///
    /// Tags may be omitted, but when present they must be a JSON array.
    pub fn for_create(
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
        tags: Option<Value>,
    ) -> Result<Self, DomainError> {
        let draft = Self::required(title, content, category, tags)?;
        if draft.tags.as_ref().is_some_and(|tags| !tags.is_array()) {
            return Err(DomainError::Validation(TAGS_NOT_ARRAY.to_string()));
        }
        Ok(draft)
    }

    /// Validate the replacement fields of an existing post.
    ///
    /// Tags are taken as-is: updates do not check that they form an array.
    pub fn for_update(
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
        tags: Option<Value>,
    ) -> Result<Self, DomainError> {
        Self::required(title, content, category, tags)
    }

    fn required(
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
        tags: Option<Value>,
    ) -> Result<Self, DomainError> {
        match (non_empty(title), non_empty(content), non_empty(category)) {
            (Some(title), Some(content), Some(category)) => Ok(Self {
                title,
                content,
                category,
                tags,
            }),
            _ => Err(DomainError::Validation(REQUIRED_FIELDS.to_string())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> Option<&Value> {
        self.tags.as_ref()
    }

    /// Build the post this draft becomes once stored under `id` at `at`.
    pub fn into_post(self, id: i32, at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            tags: self.tags,
            created_at: at,
            updated_at: at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
