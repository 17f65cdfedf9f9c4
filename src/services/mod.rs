pub use blog::BlogService;
pub use changes::{ChangeEvent, ChangeHub, ChangeKind, Collection};
pub use event::EventService;
pub use guard::{InFlight, InFlightGuard};
pub use project::ProjectService;
pub use session::{AuthContext, AuthEvent, Identity};
pub use slug::{allocate_unique_slug, slugify, MAX_SLUG_PROBES};

mod blog;
mod changes;
mod event;
mod guard;
mod project;
mod session;
mod slug;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;
use uuid::Uuid;

use crate::common::ContentError;
use crate::config::DEFAULT_STORE_TIMEOUT;
use crate::db;
use crate::models::Role;

/// Shared wiring for the per-family services: the pool, the change hub,
/// the auth context and the in-flight guard. Built once at startup.
pub struct ServiceContext {
    pub pool: PgPool,
    pub hub: ChangeHub,
    pub auth: AuthContext,
    pub(crate) inflight: InFlight,
    pub(crate) store_timeout: Duration,
}

impl ServiceContext {
    pub fn new(pool: PgPool, auth: AuthContext) -> Arc<Self> {
        Self::with_store_timeout(pool, auth, DEFAULT_STORE_TIMEOUT)
    }

    pub fn with_store_timeout(
        pool: PgPool,
        auth: AuthContext,
        store_timeout: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            pool,
            hub: ChangeHub::new(),
            auth,
            inflight: InFlight::new(),
            store_timeout,
        })
    }

    pub(crate) fn require_user(&self) -> Result<Identity, ContentError> {
        self.auth.current_user().ok_or(ContentError::NotAuthenticated)
    }

    /// Role of the acting user. A failed lookup falls back to `Editor`
    /// (never escalates) after surfacing the error in the log.
    pub(crate) async fn actor_role(&self, user_id: Uuid) -> Role {
        match store_call(
            self.store_timeout,
            db::roles::resolve_role(&self.pool, user_id),
        )
        .await
        {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "role lookup failed, treating actor as editor");
                Role::Editor
            }
        }
    }

    pub(crate) async fn allocate_slug(
        &self,
        scope: Collection,
        text: &str,
        exclude: Option<Uuid>,
    ) -> Result<String, ContentError> {
        match timeout(
            self.store_timeout,
            allocate_unique_slug(&self.pool, scope, text, exclude),
        )
        .await
        {
            Ok(result) => result.map_err(ContentError::from),
            Err(_) => Err(ContentError::StoreTimeout(self.store_timeout)),
        }
    }
}

/// Bounds a store call so a hung connection surfaces as `StoreTimeout`
/// instead of hanging the operation.
pub(crate) async fn store_call<T, F>(limit: Duration, fut: F) -> Result<T, ContentError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ContentError::Store(e)),
        Err(_) => {
            tracing::error!(?limit, "store call timed out");
            Err(ContentError::StoreTimeout(limit))
        }
    }
}

/// Collects the display names of missing required fields before any
/// store call is attempted.
pub(crate) fn require_fields(checks: &[(&str, bool)]) -> Result<(), ContentError> {
    let missing: Vec<String> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ContentError::ValidationFailed(missing))
    }
}

/// Shared re-slug rule for updates: an explicitly supplied slug is
/// normalized and de-duplicated; otherwise the slug changes only when
/// the title does.
pub(crate) async fn slug_for_update(
    ctx: &ServiceContext,
    scope: Collection,
    id: Uuid,
    current_title: &str,
    new_title: Option<&str>,
    supplied_slug: Option<&str>,
) -> Result<Option<String>, ContentError> {
    if let Some(slug) = supplied_slug {
        return Ok(Some(ctx.allocate_slug(scope, slug, Some(id)).await?));
    }

    match new_title {
        Some(title) if title != current_title => {
            Ok(Some(ctx.allocate_slug(scope, title, Some(id)).await?))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_reports_every_missing_name() {
        let err = require_fields(&[
            ("Title", true),
            ("Content", false),
            ("Category", false),
        ])
        .unwrap_err();

        match err {
            ContentError::ValidationFailed(fields) => {
                assert_eq!(fields, vec!["Content".to_string(), "Category".to_string()]);
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn require_fields_passes_when_all_present() {
        assert!(require_fields(&[("Title", true)]).is_ok());
    }
}
