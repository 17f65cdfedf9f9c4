mod common;

#[cfg(test)]
pub mod event_tests {
    use sqlx::PgPool;

    use super::common::*;

    use pressdesk::common::ContentError;
    use pressdesk::db;
    use pressdesk::models::*;
    use pressdesk::services::EventService;

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_save_draft_only_needs_title(pool: PgPool) {
        let svc = EventService::new(signed_in_context(pool, editor_identity()));

        let draft = svc.save_draft(&event_draft("Summer Meetup")).await.unwrap();

        assert_eq!(draft.slug, "summer-meetup");
        assert_eq!(draft.event_date, None);
        assert_eq!(draft.location, None);
        assert!(draft.speakers.0.is_empty());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_publish_requires_date_and_location(pool: PgPool) {
        let svc = EventService::new(signed_in_context(pool.clone(), editor_identity()));

        let mut incomplete = full_event_draft("Summer Meetup");
        incomplete.event_date = None;
        incomplete.location = None;
        let draft = svc.save_draft(&incomplete).await.unwrap();

        let err = svc.publish_draft(draft.id).await.unwrap_err();
        match err {
            ContentError::ValidationFailed(fields) => {
                assert_eq!(
                    fields,
                    vec!["Event date".to_string(), "Location".to_string()]
                );
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }

        assert!(db::event_posts::list_posts(&pool).await.unwrap().is_empty());
        assert!(db::event_drafts::get_draft(&pool, draft.id)
            .await
            .unwrap()
            .is_some());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_publish_round_trip_carries_event_fields(pool: PgPool) {
        let svc = EventService::new(signed_in_context(pool.clone(), editor_identity()));
        let draft = svc.save_draft(&full_event_draft("Summer Meetup")).await.unwrap();

        let post = svc.publish_draft(draft.id).await.unwrap();

        assert_eq!(post.title, draft.title);
        assert_eq!(Some(post.event_date), draft.event_date);
        assert_eq!(post.start_time, draft.start_time);
        assert_eq!(Some(post.location.as_str()), draft.location.as_deref());
        assert_eq!(post.speakers.0, draft.speakers.0);
        assert_eq!(post.faq.0, draft.faq.0);

        assert!(db::event_drafts::get_draft(&pool, draft.id)
            .await
            .unwrap()
            .is_none());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_create_post_missing_location(pool: PgPool) {
        let svc = EventService::new(signed_in_context(pool.clone(), editor_identity()));

        let mut data = event_post("Summer Meetup");
        data.location = String::new();

        let err = svc.create_post(&data).await.unwrap_err();
        match err {
            ContentError::ValidationFailed(fields) => {
                assert_eq!(fields, vec!["Location".to_string()]);
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }

        assert!(db::event_posts::list_posts(&pool).await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_update_draft_sets_event_fields(pool: PgPool) {
        let svc = EventService::new(signed_in_context(pool, editor_identity()));
        let draft = svc.save_draft(&event_draft("Summer Meetup")).await.unwrap();

        let update = EventDraftUpdate {
            event_date: Some(event_date()),
            location: Some("Community Hall".to_string()),
            faq: Some(vec![FaqEntry {
                question: "When do doors open?".to_string(),
                answer: "An hour before.".to_string(),
            }]),
            ..Default::default()
        };
        let updated = svc.update_draft(draft.id, &update).await.unwrap();

        assert_eq!(updated.event_date, Some(event_date()));
        assert_eq!(updated.location.as_deref(), Some("Community Hall"));
        assert_eq!(updated.faq.0.len(), 1);
        assert_eq!(updated.slug, draft.slug);
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_update_post_requires_owner_role(pool: PgPool) {
        let editor = EventService::new(signed_in_context(pool.clone(), editor_identity()));
        let owner = EventService::new(signed_in_context(pool, owner_identity()));

        let post = editor.create_post(&event_post("Summer Meetup")).await.unwrap();

        let update = EventPostUpdate {
            location: Some("Bigger Hall".to_string()),
            ..Default::default()
        };
        let err = editor.update_post(post.id, &update).await.unwrap_err();
        assert!(matches!(err, ContentError::NotAuthorized));

        let updated = owner.update_post(post.id, &update).await.unwrap();
        assert_eq!(updated.location, "Bigger Hall");
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_delete_post_allows_self_owned_editor(pool: PgPool) {
        let editor = EventService::new(signed_in_context(pool, editor_identity()));
        let post = editor.create_post(&event_post("Mine")).await.unwrap();

        assert!(editor.delete_post(post.id).await.unwrap());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_delete_post_rejects_foreign_editor(pool: PgPool) {
        let editor = EventService::new(signed_in_context(pool.clone(), editor_identity()));
        let stranger = EventService::new(signed_in_context(pool, plain_identity()));

        let post = editor.create_post(&event_post("Not Yours")).await.unwrap();

        let err = stranger.delete_post(post.id).await.unwrap_err();
        assert!(matches!(err, ContentError::NotAuthorized));
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_draft_lifecycle_terminal_states(pool: PgPool) {
        let svc = EventService::new(signed_in_context(pool.clone(), editor_identity()));

        // Deleted is terminal.
        let doomed = svc.save_draft(&event_draft("Cancelled Event")).await.unwrap();
        assert!(svc.delete_draft(doomed.id).await.unwrap());
        let err = svc
            .update_draft(
                doomed.id,
                &EventDraftUpdate {
                    title: Some("Revived".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));

        // Published is terminal for the draft row.
        let published = svc.save_draft(&full_event_draft("Real Event")).await.unwrap();
        svc.publish_draft(published.id).await.unwrap();
        let err = svc.publish_draft(published.id).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }
}
