use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use pressdesk::models::*;
use pressdesk::services::{AuthContext, Identity, ServiceContext};

// Seeded in tests/migrations/0006_seed.sql: user 1 has the 'owner'
// role, user 2 an explicit 'editor' row, user 3 no row at all.

pub fn owner_identity() -> Identity {
    Identity {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "owner@test.com".to_string(),
    }
}

pub fn editor_identity() -> Identity {
    Identity {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        email: "editor@test.com".to_string(),
    }
}

pub fn plain_identity() -> Identity {
    Identity {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000003").unwrap(),
        email: "plain@test.com".to_string(),
    }
}

pub fn signed_in_context(pool: PgPool, identity: Identity) -> Arc<ServiceContext> {
    let auth = AuthContext::new();
    auth.handle_signed_in(identity);
    ServiceContext::new(pool, auth)
}

pub fn anonymous_context(pool: PgPool) -> Arc<ServiceContext> {
    ServiceContext::new(pool, AuthContext::new())
}

pub fn blog_draft(title: &str) -> BlogDraftCreate {
    BlogDraftCreate {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn full_blog_draft(title: &str) -> BlogDraftCreate {
    BlogDraftCreate {
        title: title.to_string(),
        content: Some("<p>Body copy.</p>".to_string()),
        category: Some("Engineering".to_string()),
        tags: vec!["rust".to_string(), "notes".to_string()],
        meta_title: Some(title.to_string()),
        meta_description: Some("A test post".to_string()),
    }
}

pub fn blog_post(title: &str) -> BlogPostCreate {
    BlogPostCreate {
        title: title.to_string(),
        content: "<p>Body copy.</p>".to_string(),
        category: "Engineering".to_string(),
        tags: vec!["rust".to_string()],
        ..Default::default()
    }
}

pub fn project_draft(title: &str) -> ProjectDraftCreate {
    ProjectDraftCreate {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn full_project_draft(title: &str) -> ProjectDraftCreate {
    ProjectDraftCreate {
        title: title.to_string(),
        content: Some("<p>Case study.</p>".to_string()),
        tags: vec!["design".to_string()],
        videos: vec!["https://example.com/demo.mp4".to_string()],
        conclusion: Some("Shipped on time.".to_string()),
        ..Default::default()
    }
}

pub fn project_post(title: &str) -> ProjectPostCreate {
    ProjectPostCreate {
        title: title.to_string(),
        content: "<p>Case study.</p>".to_string(),
        tags: vec!["design".to_string()],
        videos: vec![],
        conclusion: "Shipped on time.".to_string(),
        ..Default::default()
    }
}

pub fn event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 3).unwrap()
}

pub fn event_draft(title: &str) -> EventDraftCreate {
    EventDraftCreate {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn full_event_draft(title: &str) -> EventDraftCreate {
    EventDraftCreate {
        title: title.to_string(),
        content: Some("<p>Agenda.</p>".to_string()),
        event_date: Some(event_date()),
        start_time: Some("18:30".to_string()),
        location: Some("Community Hall".to_string()),
        speakers: vec![Speaker {
            name: "Ada".to_string(),
            bio: Some("Keynote".to_string()),
            photo: None,
        }],
        faq: vec![FaqEntry {
            question: "Is there parking?".to_string(),
            answer: "Yes, behind the hall.".to_string(),
        }],
        ..Default::default()
    }
}

pub fn event_post(title: &str) -> EventPostCreate {
    EventPostCreate {
        title: title.to_string(),
        content: "<p>Agenda.</p>".to_string(),
        event_date: Some(event_date()),
        location: "Community Hall".to_string(),
        ..Default::default()
    }
}
