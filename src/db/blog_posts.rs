use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::{BlogPost, BlogPostCreate, BlogPostUpdate};

pub async fn insert_post(
    db: impl PgExecutor<'_>,
    user_id: Uuid,
    slug: &str,
    data: &BlogPostCreate,
) -> Result<BlogPost, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts
            (user_id, title, slug, content, category, tags, meta_title, meta_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&data.title)
    .bind(slug)
    .bind(&data.content)
    .bind(&data.category)
    .bind(&data.tags)
    .bind(data.meta_title.as_deref())
    .bind(data.meta_description.as_deref())
    .fetch_one(db)
    .await
}

pub async fn get_post(
    db: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT * FROM blog_posts WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn get_post_by_slug(
    db: impl PgExecutor<'_>,
    slug: &str,
) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT * FROM blog_posts WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(db)
    .await
}

pub async fn list_posts(db: impl PgExecutor<'_>) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT * FROM blog_posts ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn update_post(
    db: impl PgExecutor<'_>,
    id: Uuid,
    slug: Option<&str>,
    data: &BlogPostUpdate,
) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        UPDATE blog_posts
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

pub async fn delete_post(db: impl PgExecutor<'_>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM blog_posts WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
