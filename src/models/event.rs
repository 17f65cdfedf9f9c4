use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A published event page. Speakers and FAQ entries are stored as
/// structured jsonb, not flattened into columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub event_date: NaiveDate,
    pub start_time: Option<String>,
    pub location: String,
    pub speakers: Json<Vec<Speaker>>,
    pub faq: Json<Vec<FaqEntry>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDraft {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub speakers: Json<Vec<Speaker>>,
    pub faq: Json<Vec<FaqEntry>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPostCreate {
    pub title: String,
    pub content: String,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub location: String,
    pub speakers: Vec<Speaker>,
    pub faq: Vec<FaqEntry>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraftCreate {
    pub title: String,
    pub content: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub speakers: Vec<Speaker>,
    pub faq: Vec<FaqEntry>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPostUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub speakers: Option<Vec<Speaker>>,
    pub faq: Option<Vec<FaqEntry>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl EventPostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.event_date.is_none()
            && self.start_time.is_none()
            && self.location.is_none()
            && self.speakers.is_none()
            && self.faq.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraftUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub speakers: Option<Vec<Speaker>>,
    pub faq: Option<Vec<FaqEntry>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl EventDraftUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.event_date.is_none()
            && self.start_time.is_none()
            && self.location.is_none()
            && self.speakers.is_none()
            && self.faq.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
    }
}
