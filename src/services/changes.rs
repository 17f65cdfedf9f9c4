use std::collections::HashMap;

use tokio::sync::broadcast;
use uuid::Uuid;

/// A named collection with its own slug-uniqueness domain and its own
/// change-notification channel. Draft and published collections of the
/// same family are independent scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    BlogPosts,
    BlogDrafts,
    ProjectPosts,
    ProjectDrafts,
    EventPosts,
    EventDrafts,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::BlogPosts,
        Collection::BlogDrafts,
        Collection::ProjectPosts,
        Collection::ProjectDrafts,
        Collection::EventPosts,
        Collection::EventDrafts,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Self::BlogPosts => "blog_posts",
            Self::BlogDrafts => "blog_drafts",
            Self::ProjectPosts => "project_posts",
            Self::ProjectDrafts => "project_drafts",
            Self::EventPosts => "event_posts",
            Self::EventDrafts => "event_drafts",
        }
    }

    /// Base slug used when a title normalizes to nothing usable.
    pub fn untitled_base(&self) -> &'static str {
        match self {
            Self::BlogPosts | Self::BlogDrafts => "untitled-post",
            Self::ProjectPosts | Self::ProjectDrafts => "untitled-project",
            Self::EventPosts | Self::EventDrafts => "untitled-event",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Inserted,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub collection: Collection,
    pub kind: ChangeKind,
    pub id: Uuid,
}

/// Fan-out of row-change events, one channel per collection. A
/// subscriber receives only the collection it asked for and decides
/// locally whether to refetch or patch in place. Dropping the receiver
/// unsubscribes, so repeated subscribe/drop cycles cannot accumulate.
pub struct ChangeHub {
    channels: HashMap<Collection, broadcast::Sender<ChangeEvent>>,
}

const CHANNEL_CAPACITY: usize = 64;

impl ChangeHub {
    pub fn new() -> Self {
        let channels = Collection::ALL
            .into_iter()
            .map(|c| (c, broadcast::channel(CHANNEL_CAPACITY).0))
            .collect();

        Self { channels }
    }

    pub fn subscribe(&self, collection: Collection) -> broadcast::Receiver<ChangeEvent> {
        self.channels[&collection].subscribe()
    }

    pub fn subscriber_count(&self, collection: Collection) -> usize {
        self.channels[&collection].receiver_count()
    }

    pub(crate) fn emit(&self, collection: Collection, kind: ChangeKind, id: Uuid) {
        // A send with no subscribers is not an error.
        let _ = self.channels[&collection].send(ChangeEvent {
            collection,
            kind,
            id,
        });
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_sees_only_its_collection() {
        let hub = ChangeHub::new();
        let mut rx = hub.subscribe(Collection::BlogPosts);

        let id = Uuid::new_v4();
        hub.emit(Collection::BlogDrafts, ChangeKind::Inserted, Uuid::new_v4());
        hub.emit(Collection::BlogPosts, ChangeKind::Inserted, id);

        let event = rx.try_recv().expect("expected a blog_posts event");
        assert_eq!(event.collection, Collection::BlogPosts);
        assert_eq!(event.kind, ChangeKind::Inserted);
        assert_eq!(event.id, id);
        assert!(rx.try_recv().is_err(), "draft event must not leak through");
    }

    #[test]
    fn dropping_receiver_unsubscribes() {
        let hub = ChangeHub::new();
        assert_eq!(hub.subscriber_count(Collection::EventPosts), 0);

        let rx = hub.subscribe(Collection::EventPosts);
        assert_eq!(hub.subscriber_count(Collection::EventPosts), 1);

        drop(rx);
        assert_eq!(hub.subscriber_count(Collection::EventPosts), 0);
    }

    #[test]
    fn emit_without_subscribers_is_a_noop() {
        let hub = ChangeHub::new();
        hub.emit(Collection::ProjectPosts, ChangeKind::Deleted, Uuid::new_v4());
    }
}
