use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use harbor_demo::{JOB_BAR, JOB_BAZ, JOB_FOO};
use harbor_storage_contracts::MockKeyValueStore;
use pretty_assertions::assert_eq;

use super::*;

/// In-memory store with configurable latencies that records every write.
#[derive(Debug, Clone, Default)]
struct FakeStore {
    initial: Option<String>,
    get_delay: Duration,
    set_delays: Arc<Mutex<VecDeque<Duration>>>,
    writes: Arc<Mutex<Vec<String>>>,
}

impl FakeStore {
    fn with_initial(jobs: &[JobPosting]) -> Self {
        Self {
            initial: Some(serde_json::to_string(jobs).unwrap()),
            ..Default::default()
        }
    }

    fn writes(&self) -> Vec<Vec<JobPosting>> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|json| serde_json::from_str(json).unwrap())
            .collect()
    }

    fn last_write(&self) -> Option<Vec<JobPosting>> {
        self.writes().pop()
    }
}

impl KeyValueStore for FakeStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        assert_eq!(key, keys::BOOKMARKS);
        tokio::time::sleep(self.get_delay).await;
        Ok(self.initial.clone())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        assert_eq!(key, keys::BOOKMARKS);
        let delay = self.set_delays.lock().unwrap().pop_front();
        tokio::time::sleep(delay.unwrap_or_default()).await;
        self.writes.lock().unwrap().push(value.into());
        Ok(())
    }
}

fn ids(jobs: &[JobPosting]) -> Vec<&str> {
    jobs.iter().map(|j| j.id.as_str()).collect()
}

fn json(jobs: &[JobPosting]) -> String {
    serde_json::to_string(jobs).unwrap()
}

#[tokio::test]
async fn startup_empty_storage() {
    // Arrange
    let store = MockKeyValueStore::new().with_get(keys::BOOKMARKS.into(), None);

    // Act
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;

    // Assert
    assert_eq!(
        sut.snapshot(),
        BookmarkSnapshot {
            bookmarks: vec![],
            loading: false
        }
    );
}

#[tokio::test]
async fn startup_read_failure() {
    // Arrange
    let store = MockKeyValueStore::new().with_get_error(keys::BOOKMARKS.into());

    // Act
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;

    // Assert
    let snapshot = sut.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.bookmarks.is_empty());
}

#[tokio::test]
async fn startup_corrupt_storage() {
    // Arrange
    let store =
        MockKeyValueStore::new().with_get(keys::BOOKMARKS.into(), Some("{not json".into()));

    // Act
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;
    sut.flush().await;

    // Assert
    assert!(sut.snapshot().bookmarks.is_empty());
}

#[tokio::test]
async fn startup_loads_persisted() {
    // Arrange
    let store = FakeStore::with_initial(&[JOB_FOO.clone(), JOB_BAR.clone()]);

    // Act
    let sut = BookmarkStoreImpl::start(store.clone());
    sut.wait_ready().await;

    // Assert
    assert_eq!(ids(&sut.snapshot().bookmarks), ["foo", "bar"]);
    assert!(sut.is_bookmarked(&JOB_FOO.id));
    assert!(!sut.is_bookmarked(&JOB_BAZ.id));
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn startup_drops_duplicate_ids() {
    // Arrange
    let store = FakeStore::with_initial(&[JOB_FOO.clone(), JOB_FOO.clone()]);

    // Act
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;

    // Assert
    assert_eq!(ids(&sut.snapshot().bookmarks), ["foo"]);
}

#[tokio::test]
async fn add_is_idempotent() {
    // Arrange
    let store = MockKeyValueStore::new()
        .with_get(keys::BOOKMARKS.into(), None)
        .with_set(keys::BOOKMARKS.into(), json(&[JOB_FOO.clone()]));
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;

    // Act
    sut.add_bookmark(JOB_FOO.clone());
    sut.add_bookmark(JOB_FOO.clone());
    sut.flush().await;

    // Assert
    assert_eq!(sut.snapshot().bookmarks, [JOB_FOO.clone()]);
}

#[tokio::test]
async fn add_then_remove_round_trip() {
    // Arrange
    let store = FakeStore::with_initial(&[JOB_BAR.clone()]);
    let sut = BookmarkStoreImpl::start(store.clone());
    sut.wait_ready().await;

    // Act
    sut.add_bookmark(JOB_FOO.clone());
    let added = sut.is_bookmarked(&JOB_FOO.id);
    sut.remove_bookmark(&JOB_FOO.id);
    sut.flush().await;

    // Assert
    assert!(added);
    assert!(!sut.is_bookmarked(&JOB_FOO.id));
    assert_eq!(store.last_write().unwrap(), [JOB_BAR.clone()]);
}

#[tokio::test]
async fn remove_missing_is_noop() {
    // Arrange
    let store = MockKeyValueStore::new().with_get(keys::BOOKMARKS.into(), None);
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;

    // Act
    sut.remove_bookmark(&JOB_FOO.id);
    sut.flush().await;

    // Assert
    assert!(sut.snapshot().bookmarks.is_empty());
}

#[tokio::test(start_paused = true)]
async fn writes_follow_mutation_order() {
    // Arrange
    let store = FakeStore::default();
    store
        .set_delays
        .lock()
        .unwrap()
        .extend([Duration::from_millis(300), Duration::ZERO]);
    let sut = BookmarkStoreImpl::start(store.clone());
    sut.wait_ready().await;

    // Act
    sut.add_bookmark(JOB_FOO.clone());
    sut.remove_bookmark(&JOB_FOO.id);
    sut.flush().await;

    // Assert
    assert_eq!(store.writes(), [vec![JOB_FOO.clone()], vec![]]);
    assert!(store.last_write().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn mutations_while_loading_are_replayed() {
    // Arrange
    let store = FakeStore {
        get_delay: Duration::from_millis(200),
        ..FakeStore::with_initial(&[JOB_BAR.clone()])
    };
    let sut = BookmarkStoreImpl::start(store.clone());

    // Act
    sut.add_bookmark(JOB_FOO.clone());
    sut.remove_bookmark(&JOB_BAR.id);
    sut.add_bookmark(JOB_BAZ.clone());
    let before_ready = (sut.snapshot().loading, sut.is_bookmarked(&JOB_FOO.id));
    sut.flush().await;

    // Assert
    assert_eq!(before_ready, (true, false));
    assert_eq!(ids(&sut.snapshot().bookmarks), ["foo", "baz"]);
    assert_eq!(store.writes(), [vec![JOB_FOO.clone(), JOB_BAZ.clone()]]);
}

#[tokio::test]
async fn write_failure_keeps_memory() {
    // Arrange
    let store = MockKeyValueStore::new()
        .with_get(keys::BOOKMARKS.into(), None)
        .with_set_error(keys::BOOKMARKS.into(), json(&[JOB_FOO.clone()]));
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;

    // Act
    sut.add_bookmark(JOB_FOO.clone());
    sut.flush().await;

    // Assert
    assert!(sut.is_bookmarked(&JOB_FOO.id));
    assert_eq!(sut.snapshot().bookmarks, [JOB_FOO.clone()]);
}

#[tokio::test]
async fn observers_are_notified() {
    // Arrange
    let store = FakeStore::default();
    let sut = BookmarkStoreImpl::start(store);
    sut.wait_ready().await;
    let mut rx = sut.subscribe();
    rx.mark_unchanged();

    // Act
    sut.add_bookmark(JOB_FOO.clone());

    // Assert
    assert!(rx.has_changed().unwrap());
    assert_eq!(ids(&rx.borrow_and_update().bookmarks), ["foo"]);
}
