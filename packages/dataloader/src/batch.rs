//! Request-scoped batching loader
//!
//! A [`BatchLoader`] collects every key requested by sibling futures that are
//! polled in the same executor turn, issues one bulk call for the distinct
//! keys, and hands each caller its own answer. Answers (including errors) are
//! memoized until the loader is dropped, which happens with the request.
//!
//! The batch window is explicit: registering a key is synchronous, and every
//! waiter yields to the executor once before awaiting its batch. The first
//! waiter to resume closes the window and dispatches the bulk call, so all
//! loads issued before that point share it.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::{BoxFuture, FutureExt, Shared};

use crate::error::{Error, Result};

/// Default upper bound on keys per bulk call
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Entries returned by a bulk call: position `i` answers key `i`
pub type BatchResult<K, V> = Result<Vec<(K, Option<V>)>>;

/// Bulk-fetch contract behind a [`BatchLoader`]
///
/// Implementations receive deduplicated keys in the order they were first
/// requested and must return exactly one entry per key, in the same order,
/// each tagged with the key it answers. `None` marks an absent entity.
pub trait BatchFn<K>: Send + Sync + 'static {
    type Value: Clone + Send + Sync + 'static;

    fn load(&self, keys: &[K]) -> impl Future<Output = BatchResult<K, Self::Value>> + Send;
}

/// Loader tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Maximum keys per bulk call; a full batch is sealed and later keys open a new one
    pub max_batch_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl LoaderOptions {
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: max_batch_size.max(1),
        }
    }
}

/// Counters describing the bulk calls a loader has issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderStats {
    /// Number of bulk calls dispatched
    pub batches: u64,
    /// Total keys sent across all bulk calls
    pub keys: u64,
}

type LoadResult<V> = Result<Option<V>>;
type BatchOutcome<K, V> = Arc<HashMap<K, LoadResult<V>>>;
type SharedBatch<K, V> = Shared<BoxFuture<'static, BatchOutcome<K, V>>>;

enum Slot<K, V> {
    Pending(SharedBatch<K, V>),
    Ready(LoadResult<V>),
}

struct OpenBatch<K, V> {
    id: u64,
    keys: Vec<K>,
    future: SharedBatch<K, V>,
}

struct State<K, V> {
    cache: HashMap<K, Slot<K, V>>,
    open: Option<OpenBatch<K, V>>,
    sealed: HashMap<u64, Vec<K>>,
    next_batch: u64,
}

impl<K: Eq + Hash, V> State<K, V> {
    fn take_batch(&mut self, id: u64) -> Vec<K> {
        match self.open.take() {
            Some(open) if open.id == id => open.keys,
            other => {
                self.open = other;
                self.sealed.remove(&id).unwrap_or_default()
            }
        }
    }
}

struct Inner<K, F: BatchFn<K>> {
    name: &'static str,
    batch_fn: F,
    options: LoaderOptions,
    state: Mutex<State<K, F::Value>>,
    batches: AtomicU64,
    keys: AtomicU64,
}

impl<K, F> Inner<K, F>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    F: BatchFn<K>,
{
    fn lock_state(&self) -> MutexGuard<'_, State<K, F::Value>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn dispatch(self: Arc<Self>, id: u64) -> BatchOutcome<K, F::Value> {
        let keys = self.lock_state().take_batch(id);

        self.batches.fetch_add(1, Ordering::Relaxed);
        self.keys.fetch_add(keys.len() as u64, Ordering::Relaxed);
        tracing::debug!(loader = self.name, batch = id, keys = keys.len(), "Dispatching batch");

        let outcomes = match self.batch_fn.load(&keys).await {
            Ok(entries) => distribute(self.name, keys, entries),
            Err(e) => {
                tracing::warn!(loader = self.name, batch = id, error = %e, "Bulk fetch failed");
                keys.into_iter().map(|key| (key, Err(e.clone()))).collect()
            }
        };

        let mut state = self.lock_state();
        for (key, outcome) in &outcomes {
            state.cache.insert(key.clone(), Slot::Ready(outcome.clone()));
        }
        drop(state);

        Arc::new(outcomes)
    }
}

/// Match bulk-call entries to keys by position, flagging any that do not line up
fn distribute<K, V>(
    loader: &'static str,
    keys: Vec<K>,
    entries: Vec<(K, Option<V>)>,
) -> HashMap<K, LoadResult<V>>
where
    K: Eq + Hash + Debug,
{
    let expected = keys.len();
    let returned = entries.len();
    let mut entries = entries.into_iter();
    let mut outcomes = HashMap::with_capacity(expected);

    for (position, key) in keys.into_iter().enumerate() {
        let outcome = match entries.next() {
            Some((answered, value)) if answered == key => Ok(value),
            Some((answered, _)) => Err(Error::batch_contract(
                &key,
                format!("position {position} answered {answered:?}"),
            )),
            None => Err(Error::batch_contract(
                &key,
                format!("no result at position {position} ({returned} results for {expected} keys)"),
            )),
        };
        if let Err(e) = &outcome {
            tracing::warn!(loader, error = %e, "Batch contract violation");
        }
        outcomes.insert(key, outcome);
    }

    if returned > expected {
        tracing::warn!(loader, expected, returned, "Bulk fetch returned surplus results, ignoring");
    }

    outcomes
}

enum Lookup<K, V> {
    Ready(LoadResult<V>),
    Waiting(SharedBatch<K, V>),
}

/// Deduplicating, batching, memoizing loader for one request
///
/// Cloning is cheap and every clone shares the same cache, so a loader can be
/// handed to each resolver of the request it belongs to.
pub struct BatchLoader<K, F: BatchFn<K>> {
    inner: Arc<Inner<K, F>>,
}

impl<K, F: BatchFn<K>> Clone for BatchLoader<K, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, F> BatchLoader<K, F>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    F: BatchFn<K>,
{
    /// Create an empty loader; `name` labels its log events
    pub fn new(name: &'static str, batch_fn: F, options: LoaderOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                batch_fn,
                options,
                state: Mutex::new(State {
                    cache: HashMap::new(),
                    open: None,
                    sealed: HashMap::new(),
                    next_batch: 0,
                }),
                batches: AtomicU64::new(0),
                keys: AtomicU64::new(0),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Load one key, `None` if the bulk call reported it absent
    pub async fn load_one(&self, key: K) -> LoadResult<F::Value> {
        match self.enqueue(&key) {
            Lookup::Ready(result) => result,
            Lookup::Waiting(batch) => {
                tokio::task::yield_now().await;
                resolve(&*batch.await, &key)
            }
        }
    }

    /// Load several keys, answering in the order given
    ///
    /// All keys are registered before any batch is dispatched, so distinct
    /// keys share a bulk call (subject to `max_batch_size`).
    pub async fn load_many(&self, keys: impl IntoIterator<Item = K>) -> Vec<LoadResult<F::Value>> {
        let lookups: Vec<_> = keys
            .into_iter()
            .map(|key| {
                let lookup = self.enqueue(&key);
                (key, lookup)
            })
            .collect();

        if lookups.iter().any(|(_, l)| matches!(l, Lookup::Waiting(_))) {
            tokio::task::yield_now().await;
        }

        let mut results = Vec::with_capacity(lookups.len());
        for (key, lookup) in lookups {
            results.push(match lookup {
                Lookup::Ready(result) => result,
                Lookup::Waiting(batch) => resolve(&*batch.await, &key),
            });
        }
        results
    }

    /// Seed the cache with a value obtained elsewhere
    ///
    /// Has no effect if the key has already been requested or primed.
    pub fn prime(&self, key: K, value: F::Value) {
        let mut state = self.inner.lock_state();
        state
            .cache
            .entry(key)
            .or_insert_with(|| Slot::Ready(Ok(Some(value))));
    }

    pub fn stats(&self) -> LoaderStats {
        LoaderStats {
            batches: self.inner.batches.load(Ordering::Relaxed),
            keys: self.inner.keys.load(Ordering::Relaxed),
        }
    }

    fn enqueue(&self, key: &K) -> Lookup<K, F::Value> {
        let mut state = self.inner.lock_state();

        match state.cache.get(key) {
            Some(Slot::Ready(result)) => return Lookup::Ready(result.clone()),
            Some(Slot::Pending(batch)) => return Lookup::Waiting(batch.clone()),
            None => {}
        }

        let mut open = match state.open.take() {
            Some(open) => open,
            None => {
                let id = state.next_batch;
                state.next_batch += 1;
                OpenBatch {
                    id,
                    keys: Vec::new(),
                    future: Arc::clone(&self.inner).dispatch(id).boxed().shared(),
                }
            }
        };

        open.keys.push(key.clone());
        let future = open.future.clone();

        if open.keys.len() >= self.inner.options.max_batch_size {
            tracing::trace!(loader = self.inner.name, batch = open.id, "Batch full, sealing");
            state.sealed.insert(open.id, open.keys);
        } else {
            state.open = Some(open);
        }

        state.cache.insert(key.clone(), Slot::Pending(future.clone()));
        Lookup::Waiting(future)
    }
}

fn resolve<K, V>(outcomes: &HashMap<K, LoadResult<V>>, key: &K) -> LoadResult<V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    outcomes
        .get(key)
        .cloned()
        .unwrap_or_else(|| Err(Error::batch_contract(key, "key missing from dispatched batch")))
}
