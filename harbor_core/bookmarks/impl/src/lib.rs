use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use harbor_core_bookmarks_contracts::BookmarkService;
use harbor_models::{
    bookmark::BookmarkSnapshot,
    job::{JobId, JobPosting},
};
use harbor_storage_contracts::{keys, KeyValueStore};
use harbor_utils::VecExt;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

#[cfg(test)]
mod tests;

/// [`BookmarkService`] backed by a [`KeyValueStore`].
///
/// A background task owns the store. It performs the initial read and then
/// applies queued writes one after another, so the persisted state always
/// follows the order of mutations.
#[derive(Debug, Clone)]
pub struct BookmarkStoreImpl {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    snapshot_tx: watch::Sender<BookmarkSnapshot>,
    write_tx: mpsc::UnboundedSender<WriteCommand>,
}

#[derive(Debug)]
enum State {
    Loading { pending: Vec<Mutation> },
    Ready(BookmarkSet),
}

#[derive(Debug)]
enum Mutation {
    Add(JobPosting),
    Remove(JobId),
}

#[derive(Debug)]
enum WriteCommand {
    Persist(Vec<JobPosting>),
    Flush(oneshot::Sender<()>),
}

/// Ordered bookmarks with an id index.
#[derive(Debug, Default)]
struct BookmarkSet {
    jobs: Vec<JobPosting>,
    ids: HashSet<JobId>,
}

impl BookmarkSet {
    fn from_persisted(jobs: Vec<JobPosting>) -> Self {
        let mut set = Self::default();
        for job in jobs {
            set.apply(Mutation::Add(job));
        }
        set
    }

    /// Returns whether the set has changed.
    fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Add(job) => {
                if !self.ids.insert(job.id.clone()) {
                    return false;
                }
                self.jobs.push(job);
                true
            }
            Mutation::Remove(id) => {
                if !self.ids.remove(&id) {
                    return false;
                }
                self.jobs.remove_first(|job| job.id == id);
                true
            }
        }
    }
}

impl BookmarkStoreImpl {
    /// Creates the store and starts loading the persisted bookmarks.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<Store: KeyValueStore>(store: Store) -> Self {
        let (snapshot_tx, _) = watch::channel(BookmarkSnapshot::loading());
        let (write_tx, write_rx) = mpsc::unbounded_channel();

        let shared = Arc::new(Shared {
            state: Mutex::new(State::Loading {
                pending: Vec::new(),
            }),
            snapshot_tx,
            write_tx,
        });

        tokio::spawn(run(store, Arc::clone(&shared), write_rx));

        Self { shared }
    }

    fn mutate(&self, mutation: Mutation) {
        let mut state = self.shared.lock_state();
        match &mut *state {
            State::Loading { pending } => {
                debug!(?mutation, "bookmarks still loading, queueing mutation");
                pending.push(mutation);
            }
            State::Ready(set) => {
                if set.apply(mutation) {
                    self.shared.publish_and_persist(set);
                }
            }
        }
    }
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Must be called with the state lock held, so that writes are enqueued
    /// in mutation order.
    fn publish_and_persist(&self, set: &BookmarkSet) {
        self.snapshot_tx.send_replace(BookmarkSnapshot {
            bookmarks: set.jobs.clone(),
            loading: false,
        });

        if self
            .write_tx
            .send(WriteCommand::Persist(set.jobs.clone()))
            .is_err()
        {
            error!("Bookmark writer has stopped, change will not be persisted");
        }
    }

    fn finish_loading(&self, mut set: BookmarkSet) {
        let mut state = self.lock_state();

        let pending = match &mut *state {
            State::Loading { pending } => std::mem::take(pending),
            State::Ready(_) => return,
        };

        let mut changed = false;
        for mutation in pending {
            changed |= set.apply(mutation);
        }

        info!(count = set.jobs.len(), "bookmarks loaded");

        if changed {
            self.publish_and_persist(&set);
        } else {
            self.snapshot_tx.send_replace(BookmarkSnapshot {
                bookmarks: set.jobs.clone(),
                loading: false,
            });
        }

        *state = State::Ready(set);
    }
}

async fn run<Store: KeyValueStore>(
    store: Store,
    shared: Arc<Shared>,
    mut write_rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    let set = load(&store).await;
    shared.finish_loading(set);
    // `Shared` owns the write sender; holding it here would keep the channel
    // open forever.
    drop(shared);

    while let Some(command) = write_rx.recv().await {
        match command {
            WriteCommand::Persist(jobs) => persist(&store, &jobs).await,
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }

    debug!("bookmark writer stopped");
}

#[tracing::instrument(skip_all)]
async fn load(store: &impl KeyValueStore) -> BookmarkSet {
    let json = match store.get(keys::BOOKMARKS).await {
        Ok(Some(json)) => json,
        Ok(None) => return BookmarkSet::default(),
        Err(err) => {
            error!("Failed to read bookmarks, starting empty: {err:#}");
            return BookmarkSet::default();
        }
    };

    match serde_json::from_str::<Vec<JobPosting>>(&json) {
        Ok(jobs) => BookmarkSet::from_persisted(jobs),
        Err(err) => {
            warn!("Failed to decode persisted bookmarks, starting empty: {err}");
            BookmarkSet::default()
        }
    }
}

#[tracing::instrument(skip_all, fields(count = jobs.len()))]
async fn persist(store: &impl KeyValueStore, jobs: &[JobPosting]) {
    let json = match serde_json::to_string(jobs) {
        Ok(json) => json,
        Err(err) => {
            error!("Failed to encode bookmarks: {err}");
            return;
        }
    };

    match store.set(keys::BOOKMARKS, &json).await {
        Ok(()) => debug!("bookmarks persisted"),
        Err(err) => error!("Failed to persist bookmarks: {err:#}"),
    }
}

impl BookmarkService for BookmarkStoreImpl {
    fn is_bookmarked(&self, id: &JobId) -> bool {
        match &*self.shared.lock_state() {
            State::Ready(set) => set.ids.contains(id),
            State::Loading { .. } => false,
        }
    }

    #[tracing::instrument(skip_all, fields(id = %job.id))]
    fn add_bookmark(&self, job: JobPosting) {
        self.mutate(Mutation::Add(job));
    }

    #[tracing::instrument(skip(self))]
    fn remove_bookmark(&self, id: &JobId) {
        self.mutate(Mutation::Remove(id.clone()));
    }

    fn snapshot(&self) -> BookmarkSnapshot {
        self.shared.snapshot_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<BookmarkSnapshot> {
        self.shared.snapshot_tx.subscribe()
    }

    async fn wait_ready(&self) {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|snapshot| !snapshot.loading).await;
    }

    async fn flush(&self) {
        self.wait_ready().await;

        let (done_tx, done_rx) = oneshot::channel();
        if self.shared.write_tx.send(WriteCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}
