use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

use crate::common::ContentError;
use crate::services::Collection;

/// Tracks rows with a mutation in flight so a duplicate submission of
/// the same mutation is rejected instead of racing the first one. The
/// lock is only held to update the set, never across an await.
pub struct InFlight {
    held: Mutex<HashSet<(Collection, Uuid)>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self {
            held: Mutex::new(HashSet::new()),
        }
    }

    pub fn acquire(&self, collection: Collection, id: Uuid) -> Result<InFlightGuard<'_>, ContentError> {
        let mut held = self.held.lock().expect("in-flight lock poisoned");
        if !held.insert((collection, id)) {
            return Err(ContentError::OperationInFlight);
        }

        Ok(InFlightGuard {
            owner: self,
            key: (collection, id),
        })
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InFlightGuard<'a> {
    owner: &'a InFlight,
    key: (Collection, Uuid),
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut held) = self.owner.held.lock() {
            held.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_acquire_is_rejected() {
        let inflight = InFlight::new();
        let id = Uuid::new_v4();

        let guard = inflight.acquire(Collection::BlogDrafts, id);
        assert!(guard.is_ok());

        let dup = inflight.acquire(Collection::BlogDrafts, id);
        assert!(matches!(dup, Err(ContentError::OperationInFlight)));
    }

    #[test]
    fn dropping_the_guard_releases_the_row() {
        let inflight = InFlight::new();
        let id = Uuid::new_v4();

        drop(inflight.acquire(Collection::BlogDrafts, id).unwrap());
        assert!(inflight.acquire(Collection::BlogDrafts, id).is_ok());
    }

    #[test]
    fn same_id_in_another_collection_is_independent() {
        let inflight = InFlight::new();
        let id = Uuid::new_v4();

        let _draft = inflight.acquire(Collection::BlogDrafts, id).unwrap();
        assert!(inflight.acquire(Collection::BlogPosts, id).is_ok());
    }
}
