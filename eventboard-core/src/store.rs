//! The canonical in-memory event list, mirrored to a blob store.

use tracing::warn;

use crate::blob::BlobStore;
use crate::error::{EventBoardError, EventBoardResult};
use crate::event::Event;

/// Well-known blob key the event list lives under.
pub const EVENTS_KEY: &str = "events";

/// Owns the canonical event list and keeps the backing blob store eventually
/// consistent with it. One writer per blob; last write wins.
pub struct EventStore {
    events: Vec<Event>,
    blob: Box<dyn BlobStore>,
}

impl EventStore {
    /// Create an empty store over a blob backend. Call [`load`](Self::load)
    /// to populate it from whatever the backend already holds.
    pub fn new(blob: Box<dyn BlobStore>) -> Self {
        EventStore {
            events: Vec::new(),
            blob,
        }
    }

    /// The current list, insertion-ordered.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// An absent blob is an empty list. A blob that exists but does not parse
    /// is a `StorageFormat` error, propagated untouched; the in-memory list is
    /// left as it was.
    pub fn load(&mut self) -> EventBoardResult<&[Event]> {
        let events = match self.blob.get(EVENTS_KEY)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| EventBoardError::StorageFormat(e.to_string()))?,
        };

        self.events = events;
        Ok(&self.events)
    }

    /// Append an event to the end of the list and persist.
    pub fn create(&mut self, event: Event) -> &[Event] {
        self.events.push(event);
        self.persist();
        &self.events
    }

    /// Remove every event whose date equals `date` and persist.
    ///
    /// A date no event carries leaves the list unchanged (the blob is still
    /// rewritten).
    pub fn delete(&mut self, date: &str) -> &[Event] {
        self.events.retain(|event| event.date != date);
        self.persist();
        &self.events
    }

    // Full-list serialize and overwrite. Failures stay in the log; the
    // in-memory list is authoritative for the rest of the session.
    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.events) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "could not serialize event list");
                return;
            }
        };

        if let Err(e) = self.blob.set(EVENTS_KEY, &raw) {
            let e = EventBoardError::StorageWrite(e.to_string());
            warn!(error = %e, "event list not persisted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlobStore;

    fn make_event(name: &str, date: &str) -> Event {
        Event {
            name: name.to_string(),
            date: date.to_string(),
            location: "Hall".to_string(),
            description: "Desc".to_string(),
            image_ref: "http://x/y.png".to_string(),
        }
    }

    fn make_store() -> (EventStore, MemoryBlobStore) {
        let blob = MemoryBlobStore::default();
        (EventStore::new(Box::new(blob.clone())), blob)
    }

    #[test]
    fn test_load_empty_store() {
        let (mut store, _blob) = make_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_create_then_load_survives_restart() {
        let (mut store, blob) = make_store();
        store.load().unwrap();
        store.create(make_event("Meetup", "2024-01-01"));

        let mut restarted = EventStore::new(Box::new(blob));
        let events = restarted.load().unwrap();
        assert_eq!(events, [make_event("Meetup", "2024-01-01")]);
    }

    #[test]
    fn test_create_and_delete_sequence() {
        let (mut store, _blob) = make_store();
        store.load().unwrap();

        let first = make_event("Meetup", "2024-01-01");
        store.create(first.clone());
        assert_eq!(store.events(), [first.clone()]);

        let second = make_event("Concert", "2024-02-01");
        let events = store.create(second.clone());
        // Insertion order is display order
        assert_eq!(events, [first, second.clone()]);

        let events = store.delete("2024-01-01");
        assert_eq!(events, [second]);
    }

    #[test]
    fn test_delete_removes_all_matching_dates() {
        let (mut store, _blob) = make_store();
        store.load().unwrap();
        store.create(make_event("Meetup", "2024-01-01"));
        store.create(make_event("Afterparty", "2024-01-01"));
        store.create(make_event("Concert", "2024-02-01"));

        let events = store.delete("2024-01-01");
        assert_eq!(events, [make_event("Concert", "2024-02-01")]);
    }

    #[test]
    fn test_delete_missing_date_is_noop() {
        let (mut store, _blob) = make_store();
        store.load().unwrap();
        store.create(make_event("Meetup", "2024-01-01"));

        let events = store.delete("2099-12-31");
        assert_eq!(events, [make_event("Meetup", "2024-01-01")]);
    }

    #[test]
    fn test_corrupt_blob_is_storage_format_error() {
        let mut blob = MemoryBlobStore::default();
        blob.set(EVENTS_KEY, "not json").unwrap();

        let mut store = EventStore::new(Box::new(blob));
        match store.load() {
            Err(EventBoardError::StorageFormat(_)) => {}
            other => panic!("expected StorageFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        struct FailingBlobStore;

        impl BlobStore for FailingBlobStore {
            fn get(&self, _key: &str) -> EventBoardResult<Option<String>> {
                Ok(None)
            }

            fn set(&mut self, _key: &str, _value: &str) -> EventBoardResult<()> {
                Err(EventBoardError::StorageWrite("disk full".to_string()))
            }
        }

        let mut store = EventStore::new(Box::new(FailingBlobStore));
        store.load().unwrap();

        let events = store.create(make_event("Meetup", "2024-01-01"));
        assert_eq!(events, [make_event("Meetup", "2024-01-01")]);
    }

    #[test]
    fn test_serialized_list_round_trips() {
        let lists = [
            vec![],
            vec![make_event("Meetup", "2024-01-01")],
            vec![
                make_event("Meetup", "2024-01-01"),
                make_event("Concert", "2024-02-01"),
                make_event("Workshop", "2024-03-01"),
            ],
        ];

        for list in lists {
            let raw = serde_json::to_string(&list).unwrap();
            let parsed: Vec<Event> = serde_json::from_str(&raw).unwrap();
            assert_eq!(parsed, list);
        }
    }
}
