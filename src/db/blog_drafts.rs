use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::{BlogDraft, BlogDraftCreate, BlogDraftUpdate};

pub async fn insert_draft(
    db: impl PgExecutor<'_>,
    user_id: Uuid,
    slug: &str,
    data: &BlogDraftCreate,
) -> Result<BlogDraft, sqlx::Error> {
    sqlx::query_as::<_, BlogDraft>(
        r#"
        INSERT INTO blog_drafts
            (user_id, title, slug, content, category, tags, meta_title, meta_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&data.title)
    .bind(slug)
    .bind(data.content.as_deref())
    .bind(data.category.as_deref())
    .bind(&data.tags)
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .fetch_one(db)
    .await
}

pub async fn get_draft(
    db: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<BlogDraft>, sqlx::Error> {
    sqlx::query_as::<_, BlogDraft>(
        r#"
        SELECT * FROM blog_drafts WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn list_drafts_for_user(
    db: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Vec<BlogDraft>, sqlx::Error> {
    sqlx::query_as::<_, BlogDraft>(
        r#"
        SELECT * FROM blog_drafts WHERE user_id = $1 ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn update_draft(
    db: impl PgExecutor<'_>,
    id: Uuid,
    slug: Option<&str>,
    data: &BlogDraftUpdate,
) -> Result<Option<BlogDraft>, sqlx::Error> {
    sqlx::query_as::<_, BlogDraft>(
        r#"
        UPDATE blog_drafts
        SET
            title = COALESCE($1, title),
            slug = COALESCE($2, slug),
            content = COALESCE($3, content),
            category = COALESCE($4, category),
            tags = COALESCE($5, tags),
            meta_title = COALESCE($6, meta_title),
            meta_description = COALESCE($7, meta_description),
            updated_at = now()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(slug)
    .bind(data.content.as_deref())
    .bind(data.category.as_deref())
    .bind(data.tags.as_ref())
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn delete_draft(db: impl PgExecutor<'_>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM blog_drafts WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
