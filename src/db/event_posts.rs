use sqlx::types::Json;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::{EventPost, EventPostCreate, EventPostUpdate};

pub async fn insert_post(
    db: impl PgExecutor<'_>,
    user_id: Uuid,
    slug: &str,
    data: &EventPostCreate,
) -> Result<EventPost, sqlx::Error> {
    sqlx::query_as::<_, EventPost>(
        r#"
        INSERT INTO event_posts
            (user_id, title, slug, content, event_date, start_time, location,
             speakers, faq, meta_title, meta_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&data.title)
    .bind(slug)
    .bind(&data.content)
    .bind(data.event_date)
    .bind(data.start_time.as_deref())
    .bind(&data.location)
    .bind(Json(&data.speakers))
    .bind(Json(&data.faq))
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .fetch_one(db)
    .await
}

pub async fn get_post(
    db: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<EventPost>, sqlx::Error> {
    sqlx::query_as::<_, EventPost>(
        r#"
        SELECT * FROM event_posts WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn get_post_by_slug(
    db: impl PgExecutor<'_>,
    slug: &str,
) -> Result<Option<EventPost>, sqlx::Error> {
    sqlx::query_as::<_, EventPost>(
        r#"
        SELECT * FROM event_posts WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(db)
    .await
}

pub async fn list_posts(db: impl PgExecutor<'_>) -> Result<Vec<EventPost>, sqlx::Error> {
    sqlx::query_as::<_, EventPost>(
        r#"
        SELECT * FROM event_posts ORDER BY event_date ASC, created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn update_post(
    db: impl PgExecutor<'_>,
    id: Uuid,
    slug: Option<&str>,
    data: &EventPostUpdate,
) -> Result<Option<EventPost>, sqlx::Error> {
    sqlx::query_as::<_, EventPost>(
        r#"
        UPDATE event_posts
        SET
            title = COALESCE($1, title),
            slug = COALESCE($2, slug),
            content = COALESCE($3, content),
            event_date = COALESCE($4, event_date),
            start_time = COALESCE($5, start_time),
            location = COALESCE($6, location),
            speakers = COALESCE($7, speakers),
            faq = COALESCE($8, faq),
            meta_title = COALESCE($9, meta_title),
            meta_description = COALESCE($10, meta_description),
            updated_at = now()
        WHERE id = $11
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(slug)
    .bind(data.content.as_deref())
    .bind(data.event_date)
    .bind(data.start_time.as_deref())
    .bind(data.location.as_deref())
    .bind(data.speakers.as_ref().map(Json))
    .bind(data.faq.as_ref().map(Json))
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn delete_post(db: impl PgExecutor<'_>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM event_posts WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
