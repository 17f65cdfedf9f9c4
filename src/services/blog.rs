use std::sync::Arc;

use uuid::Uuid;

use crate::common::{is_unique_violation, ContentError};
use crate::db;
use crate::log_err;
use crate::models::{
    BlogDraft, BlogDraftCreate, BlogDraftUpdate, BlogPost, BlogPostCreate, BlogPostUpdate, Role,
};
use crate::services::{
    require_fields, slug_for_update, store_call, ChangeKind, Collection, ServiceContext,
};

/// Draft lifecycle and published-content operations for the blog
/// family. Drafts are owner-private; published rows may only be
/// mutated by the `owner` role, and blog deletion is role-gated
/// strictly (self-ownership alone is not enough).
pub struct BlogService {
    ctx: Arc<ServiceContext>,
}

impl BlogService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    fn validate_published(title: &str, content: &str, category: &str) -> Result<(), ContentError> {
        require_fields(&[
            ("Title", !title.trim().is_empty()),
            ("Content", !content.trim().is_empty()),
            ("Category", !category.trim().is_empty()),
        ])
    }

    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        store_call(
            self.ctx.store_timeout,
            db::blog_posts::list_posts(&self.ctx.pool),
        )
        .await
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, ContentError> {
        store_call(
            self.ctx.store_timeout,
            db::blog_posts::get_post_by_slug(&self.ctx.pool, slug),
        )
        .await
    }

    pub async fn list_my_drafts(&self) -> Result<Vec<BlogDraft>, ContentError> {
        let actor = self.ctx.require_user()?;
        store_call(
            self.ctx.store_timeout,
            db::blog_drafts::list_drafts_for_user(&self.ctx.pool, actor.id),
        )
        .await
    }

    pub async fn save_draft(&self, data: &BlogDraftCreate) -> Result<BlogDraft, ContentError> {
        let actor = self.ctx.require_user()?;
        require_fields(&[("Title", !data.title.trim().is_empty())])?;

        let slug = self
            .ctx
            .allocate_slug(Collection::BlogDrafts, &data.title, None)
            .await?;
        let draft = store_call(
            self.ctx.store_timeout,
            db::blog_drafts::insert_draft(&self.ctx.pool, actor.id, &slug, data),
        )
        .await?;

        self.ctx
            .hub
            .emit(Collection::BlogDrafts, ChangeKind::Inserted, draft.id);
        tracing::info!(draft_id = %draft.id, slug = %draft.slug, "blog draft saved");
        Ok(draft)
    }

    pub async fn update_draft(
        &self,
        id: Uuid,
        data: &BlogDraftUpdate,
    ) -> Result<BlogDraft, ContentError> {
        let actor = self.ctx.require_user()?;
        if data.is_empty() {
            return Err(ContentError::InvalidRequest("No fields provided".into()));
        }

        let _guard = self.ctx.inflight.acquire(Collection::BlogDrafts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::blog_drafts::get_draft(&self.ctx.pool, id),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;
        if existing.user_id != actor.id {
            return Err(ContentError::NotAuthorized);
        }

        let slug = slug_for_update(
            &self.ctx,
            Collection::BlogDrafts,
            id,
            &existing.title,
            data.title.as_deref(),
            data.slug.as_deref(),
        )
        .await?;

        let updated = store_call(
            self.ctx.store_timeout,
            db::blog_drafts::update_draft(&self.ctx.pool, id, slug.as_deref(), data),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;

        self.ctx
            .hub
            .emit(Collection::BlogDrafts, ChangeKind::Updated, id);
        Ok(updated)
    }

    pub async fn delete_draft(&self, id: Uuid) -> Result<bool, ContentError> {
        let actor = self.ctx.require_user()?;
        let _guard = self.ctx.inflight.acquire(Collection::BlogDrafts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::blog_drafts::get_draft(&self.ctx.pool, id),
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
            db::blog_drafts::delete_draft(&self.ctx.pool, id),
        )
        .await?
            > 0;

        if removed {
            self.ctx
                .hub
                .emit(Collection::BlogDrafts, ChangeKind::Deleted, id);
            tracing::info!(draft_id = %id, "blog draft deleted");
        }
        Ok(removed)
    }

    /// Validates the draft against the published required set, then
    /// inserts the published row and deletes the draft in one
    /// transaction. The published slug is allocated fresh in its own
    /// scope, independent of the draft's.
    pub async fn publish_draft(&self, id: Uuid) -> Result<BlogPost, ContentError> {
        let actor = self.ctx.require_user()?;
        let _guard = self.ctx.inflight.acquire(Collection::BlogDrafts, id)?;

        let draft = store_call(
            self.ctx.store_timeout,
            db::blog_drafts::get_draft(&self.ctx.pool, id),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;
        if draft.user_id != actor.id {
            return Err(ContentError::NotAuthorized);
        }

        let content = draft.content.clone().unwrap_or_default();
        let category = draft.category.clone().unwrap_or_default();
        Self::validate_published(&draft.title, &content, &category)?;

        let data = BlogPostCreate {
            title: draft.title.clone(),
            content,
            category,
            tags: draft.tags.clone(),
            meta_title: draft.meta_title.clone(),
            meta_description: draft.meta_description.clone(),
        };
        let slug = self
            .ctx
            .allocate_slug(Collection::BlogPosts, &draft.title, None)
            .await?;

        let mut tx = store_call(self.ctx.store_timeout, self.ctx.pool.begin()).await?;
        let post = match store_call(
            self.ctx.store_timeout,
            db::blog_posts::insert_post(&mut *tx, draft.user_id, &slug, &data),
        )
        .await
        {
            Ok(post) => post,
            Err(e) => {
                if let ContentError::Store(store_err) = &e {
                    if is_unique_violation(store_err) {
                        // Lost the probe-then-insert race on the slug.
                        log_err!(&self.ctx.pool, "blog.publish_draft", &draft);
                    }
                }
                return Err(e);
            }
        };
        store_call(
            self.ctx.store_timeout,
            db::blog_drafts::delete_draft(&mut *tx, id),
        )
        .await?;
        store_call(self.ctx.store_timeout, tx.commit()).await?;

        self.ctx
            .hub
            .emit(Collection::BlogDrafts, ChangeKind::Deleted, id);
        self.ctx
            .hub
            .emit(Collection::BlogPosts, ChangeKind::Inserted, post.id);
        tracing::info!(draft_id = %id, post_id = %post.id, slug = %post.slug, "blog draft published");
        Ok(post)
    }

    pub async fn create_post(&self, data: &BlogPostCreate) -> Result<BlogPost, ContentError> {
        let actor = self.ctx.require_user()?;
        Self::validate_published(&data.title, &data.content, &data.category)?;

        let slug = self
            .ctx
            .allocate_slug(Collection::BlogPosts, &data.title, None)
            .await?;
        let post = store_call(
            self.ctx.store_timeout,
            db::blog_posts::insert_post(&self.ctx.pool, actor.id, &slug, data),
        )
        .await?;

        self.ctx
            .hub
            .emit(Collection::BlogPosts, ChangeKind::Inserted, post.id);
        tracing::info!(post_id = %post.id, slug = %post.slug, "blog post created");
        Ok(post)
    }

    /// Published blog posts are a reviewed surface: only the `owner`
    /// role may update them, regardless of who created the row.
    pub async fn update_post(
        &self,
        id: Uuid,
        data: &BlogPostUpdate,
    ) -> Result<BlogPost, ContentError> {
        let actor = self.ctx.require_user()?;
        if data.is_empty() {
            return Err(ContentError::InvalidRequest("No fields provided".into()));
        }
        if self.ctx.actor_role(actor.id).await != Role::Owner {
            return Err(ContentError::NotAuthorized);
        }

        let _guard = self.ctx.inflight.acquire(Collection::BlogPosts, id)?;

        let existing = store_call(
            self.ctx.store_timeout,
            db::blog_posts::get_post(&self.ctx.pool, id),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;

        let slug = slug_for_update(
            &self.ctx,
            Collection::BlogPosts,
            id,
            &existing.title,
            data.title.as_deref(),
            data.slug.as_deref(),
        )
        .await?;

        let updated = store_call(
            self.ctx.store_timeout,
            db::blog_posts::update_post(&self.ctx.pool, id, slug.as_deref(), data),
        )
        .await?
        .ok_or(ContentError::NotFound(id))?;

        self.ctx
            .hub
            .emit(Collection::BlogPosts, ChangeKind::Updated, id);
        Ok(updated)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<bool, ContentError> {
        let actor = self.ctx.require_user()?;
        if self.ctx.actor_role(actor.id).await != Role::Owner {
            return Err(ContentError::NotAuthorized);
        }

        let _guard = self.ctx.inflight.acquire(Collection::BlogPosts, id)?;

        let removed = store_call(
            self.ctx.store_timeout,
            db::blog_posts::delete_post(&self.ctx.pool, id),
        )
        .await?
            > 0;

        if removed {
            self.ctx
                .hub
                .emit(Collection::BlogPosts, ChangeKind::Deleted, id);
            tracing::info!(post_id = %id, "blog post deleted");
        }
        Ok(removed)
    }
}
