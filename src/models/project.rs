use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published portfolio entry. Video entries are opaque strings (URLs
/// or embedded data), passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProjectPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub tags: Vec<String>,
    pub videos: Vec<String>,
    pub conclusion: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProjectDraft {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub videos: Vec<String>,
    pub conclusion: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPostCreate {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub videos: Vec<String>,
    pub conclusion: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraftCreate {
    pub title: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub videos: Vec<String>,
    pub conclusion: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPostUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub conclusion: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl ProjectPostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.videos.is_none()
            && self.conclusion.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraftUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub conclusion: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl ProjectDraftUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.videos.is_none()
            && self.conclusion.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
    }
}
