use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::{ProjectPost, ProjectPostCreate, ProjectPostUpdate};

pub async fn insert_post(
    db: impl PgExecutor<'_>,
    user_id: Uuid,
    slug: &str,
    data: &ProjectPostCreate,
) -> Result<ProjectPost, sqlx::Error> {
    sqlx::query_as::<_, ProjectPost>(
        r#"
        INSERT INTO project_posts
            (user_id, title, slug, content, tags, videos, conclusion, meta_title, meta_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&data.title)
    .bind(slug)
    .bind(&data.content)
    .bind(&data.tags)
    .bind(&data.videos)
    .bind(&data.conclusion)
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .fetch_one(db)
    .await
}

pub async fn get_post(
    db: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<ProjectPost>, sqlx::Error> {
    sqlx::query_as::<_, ProjectPost>(
        r#"
        SELECT * FROM project_posts WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn get_post_by_slug(
    db: impl PgExecutor<'_>,
    slug: &str,
) -> Result<Option<ProjectPost>, sqlx::Error> {
    sqlx::query_as::<_, ProjectPost>(
        r#"
        SELECT * FROM project_posts WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(db)
    .await
}

pub async fn list_posts(db: impl PgExecutor<'_>) -> Result<Vec<ProjectPost>, sqlx::Error> {
    sqlx::query_as::<_, ProjectPost>(
        r#"
        SELECT * FROM project_posts ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn update_post(
    db: impl PgExecutor<'_>,
    id: Uuid,
    slug: Option<&str>,
    data: &ProjectPostUpdate,
) -> Result<Option<ProjectPost>, sqlx::Error> {
    sqlx::query_as::<_, ProjectPost>(
        r#"
        UPDATE project_posts
        SET
            title = COALESCE($1, title),
            slug = COALESCE($2, slug),
            content = COALESCE($3, content),
            tags = COALESCE($4, tags),
            videos = COALESCE($5, videos),
            conclusion = COALESCE($6, conclusion),
            meta_title = COALESCE($7, meta_title),
            meta_description = COALESCE($8, meta_description),
            updated_at = now()
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(slug)
    .bind(data.content.as_deref())
    .bind(data.tags.as_ref())
    .bind(data.videos.as_ref())
    .bind(data.conclusion.as_deref())
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn delete_post(db: impl PgExecutor<'_>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM project_posts WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
