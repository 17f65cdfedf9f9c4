use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::Role;

/// Looks up the acting user's role. A missing row is the common case
/// and resolves to `Editor`; only a real lookup failure is an error.
pub async fn resolve_role(db: impl PgExecutor<'_>, user_id: Uuid) -> Result<Role, sqlx::Error> {
    let role = sqlx::query_scalar::<_, Role>(
        r#"
        SELECT role FROM user_roles WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(role.unwrap_or_default())
}

/// Administrative upsert; not called by the lifecycle services.
pub async fn assign_role(
    db: impl PgExecutor<'_>,
    user_id: Uuid,
    role: Role,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_roles (user_id, role)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
        SET role = EXCLUDED.role, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(role)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn remove_role(db: impl PgExecutor<'_>, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM user_roles WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}
