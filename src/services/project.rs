use std::sync::Arc;

use uuid::Uuid;

use crate::common::{is_unique_violation, ContentError};
use crate::db;
use crate::log_err;
use crate::models::{
    ProjectDraft, ProjectDraftCreate, ProjectDraftUpdate, ProjectPost, ProjectPostCreate,
    ProjectPostUpdate, Role,
};
use crate::services::{
    require_fields, slug_for_update, store_call, ChangeKind, Collection, ServiceContext,
};

/// Lifecycle operations for the project portfolio family. Same shape
/// as the blog service, except published deletion also accepts the
/// row's creator (role `owner` OR self-ownership).
pub struct ProjectService {
    ctx: Arc<ServiceContext>,
}

impl ProjectService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    fn validate_published(
        title: &str,
        content: &str,
        conclusion: &str,
    ) -> Result<(), ContentError> {
        require_fields(&[
            ("Title", !title.trim().is_empty()),
            ("Content", !content.trim().is_empty()),
            ("Conclusion", !conclusion.trim().is_empty()),
        ])
    }

    pub async fn list_posts(&self) -> Result<Vec<ProjectPost>, ContentError> {
        store_call(
            self.ctx.store_timeout,
            db::project_posts::list_posts(&self.ctx.pool),
        )
        .await
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Option<ProjectPost>, ContentError> {
        store_call(
            self.ctx.store_timeout,
            db::project_posts::get_post_by_slug(&self.ctx.pool, slug),
        )
        .await
    }

    pub async fn list_my_drafts(&self) -> Result<Vec<ProjectDraft>, ContentError> {
        let actor = self.ctx.require_user()?;
        store_call(
            self.ctx.store_timeout,
            db::project_drafts::list_drafts_for_user(&self.ctx.pool, actor.id),
        )
        .await
    }

    pub async fn save_draft(&self, data: &ProjectDraftCreate) -> Result<ProjectDraft, ContentError> {
        let actor = self.ctx.require_user()?;
        require_fields(&[("Title", !data.title.trim().is_empty())])?;

        let slug = self
            .ctx
            .allocate_slug(Collection::ProjectDrafts, &data.title, None)
            .await?;
        let draft = store_call(
            self.ctx.store_timeout,
            db::project_drafts::insert_draft(&self.ctx.pool, actor.id, &slug, data),
        )
        .await?;

        self.ctx
            .hub
            .emit(Collection::ProjectDrafts, ChangeKind::Inserted, draft.id);
        tracing::info!(draft_id = %draft.id, slug = %draft.slug, "project draft saved");
        Ok(draft)
    }

    pub async fn update_draft(
        &self,
        id: Uuid,
        data: &ProjectDraftUpdate,
    ) -> Result<ProjectDraft, ContentError> {
        let actor = self.ctx.require_user()?;
        if data.is_empty() {
            return Err(ContentError::InvalidRequest("No fields provided".into()));
        }

        let _guard = self.ctx.inflight.acquire(Collection::ProjectDrafts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::project_drafts::get_draft(&self.ctx.pool, id),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;
        if existing.user_id != actor.id {
            return Err(ContentError::NotAuthorized);
        }

        let slug = slug_for_update(
            &self.ctx,
            Collection::ProjectDrafts,
            id,
            &existing.title,
            data.title.as_deref(),
            data.slug.as_deref(),
        )
        .await?;

        let updated = store_call(
            self.ctx.store_timeout,
            db::project_drafts::update_draft(&self.ctx.pool, id, slug.as_deref(), data),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;

        self.ctx
            .hub
            .emit(Collection::ProjectDrafts, ChangeKind::Updated, id);
        Ok(updated)
    }

    pub async fn delete_draft(&self, id: Uuid) -> Result<bool, ContentError> {
        let actor = self.ctx.require_user()?;
        let _guard = self.ctx.inflight.acquire(Collection::ProjectDrafts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::project_drafts::get_draft(&self.ctx.pool, id),
        )
        .await?;
        let Some(existing) = existing else {
            return Ok(false);
        };
        if existing.user_id != actor.id {
            return Err(ContentError::NotAuthorized);
        }

        let removed = store_call(
            self.ctx.store_timeout,
            db::project_drafts::delete_draft(&self.ctx.pool, id),
        )
        .await?
            > 0;

        if removed {
            self.ctx
                .hub
                .emit(Collection::ProjectDrafts, ChangeKind::Deleted, id);
            tracing::info!(draft_id = %id, "project draft deleted");
        }
        Ok(removed)
    }

    pub async fn publish_draft(&self, id: Uuid) -> Result<ProjectPost, ContentError> {
        let actor = self.ctx.require_user()?;
        let _guard = self.ctx.inflight.acquire(Collection::ProjectDrafts, id)?;

        let draft = store_call(
            self.ctx.store_timeout,
            db::project_drafts::get_draft(&self.ctx.pool, id),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;
        if draft.user_id != actor.id {
            return Err(ContentError::NotAuthorized);
        }

        let content = draft.content.clone().unwrap_or_default();
        let conclusion = draft.conclusion.clone().unwrap_or_default();
        Self::validate_published(&draft.title, &content, &conclusion)?;

        let data = ProjectPostCreate {
            title: draft.title.clone(),
            content,
            tags: draft.tags.clone(),
            videos: draft.videos.clone(),
            conclusion,
            meta_title: draft.meta_title.clone(),
            meta_description: draft.meta_description.clone(),
        };
        let slug = self
            .ctx
            .allocate_slug(Collection::ProjectPosts, &draft.title, None)
            .await?;

        let mut tx = store_call(self.ctx.store_timeout, self.ctx.pool.begin()).await?;
        let post = match store_call(
            self.ctx.store_timeout,
            db::project_posts::insert_post(&mut *tx, draft.user_id, &slug, &data),
        )
        .await
        {
            Ok(post) => post,
            Err(e) => {
                if let ContentError::Store(store_err) = &e {
                    if is_unique_violation(store_err) {
                        log_err!(&self.ctx.pool, "project.publish_draft", &draft);
                    }
                }
                return Err(e);
            }
        };
        store_call(
            self.ctx.store_timeout,
            db::project_drafts::delete_draft(&mut *tx, id),
        )
        .await?;
        store_call(self.ctx.store_timeout, tx.commit()).await?;

        self.ctx
            .hub
            .emit(Collection::ProjectDrafts, ChangeKind::Deleted, id);
        self.ctx
            .hub
            .emit(Collection::ProjectPosts, ChangeKind::Inserted, post.id);
        tracing::info!(draft_id = %id, post_id = %post.id, slug = %post.slug, "project draft published");
        Ok(post)
    }

    pub async fn create_post(&self, data: &ProjectPostCreate) -> Result<ProjectPost, ContentError> {
        let actor = self.ctx.require_user()?;
        Self::validate_published(&data.title, &data.content, &data.conclusion)?;

        let slug = self
            .ctx
            .allocate_slug(Collection::ProjectPosts, &data.title, None)
            .await?;
        let post = store_call(
            self.ctx.store_timeout,
            db::project_posts::insert_post(&self.ctx.pool, actor.id, &slug, data),
        )
        .await?;

        self.ctx
            .hub
            .emit(Collection::ProjectPosts, ChangeKind::Inserted, post.id);
        tracing::info!(post_id = %post.id, slug = %post.slug, "project post created");
        Ok(post)
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        data: &ProjectPostUpdate,
    ) -> Result<ProjectPost, ContentError> {
        let actor = self.ctx.require_user()?;
        if data.is_empty() {
            return Err(ContentError::InvalidRequest("No fields provided".into()));
        }
        if self.ctx.actor_role(actor.id).await != Role::Owner {
            return Err(ContentError::NotAuthorized);
        }

        let _guard = self.ctx.inflight.acquire(Collection::ProjectPosts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::project_posts::get_post(&self.ctx.pool, id),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;

        let slug = slug_for_update(
            &self.ctx,
            Collection::ProjectPosts,
            id,
            &existing.title,
            data.title.as_deref(),
            data.slug.as_deref(),
        )
        .await?;

        let updated = store_call(
            self.ctx.store_timeout,
            db::project_posts::update_post(&self.ctx.pool, id, slug.as_deref(), data),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;

        self.ctx
            .hub
            .emit(Collection::ProjectPosts, ChangeKind::Updated, id);
        Ok(updated)
    }

    /// Deletion accepts the `owner` role OR the row's creator.
    pub async fn delete_post(&self, id: Uuid) -> Result<bool, ContentError> {
        let actor = self.ctx.require_user()?;
        let _guard = self.ctx.inflight.acquire(Collection::ProjectPosts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::project_posts::get_post(&self.ctx.pool, id),
        )
        .await?;
        let Some(existing) = existing else {
            return Ok(false);
        };
        if existing.user_id != actor.id && self.ctx.actor_role(actor.id).await != Role::Owner {
            return Err(ContentError::NotAuthorized);
        }

        let removed = store_call(
            self.ctx.store_timeout,
            db::project_posts::delete_post(&self.ctx.pool, id),
        )
        .await?
            > 0;

        if removed {
            self.ctx
                .hub
                .emit(Collection::ProjectPosts, ChangeKind::Deleted, id);
            tracing::info!(post_id = %id, "project post deleted");
        }
        Ok(removed)
    }
}
