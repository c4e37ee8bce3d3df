//! Recording bulk-fetch function
//!
//! Provides a [`BatchFn`] backed by a fixed map that records the key list of
//! every bulk call. It can be switched into a [`Misbehavior`] mode to exercise
//! how loaders cope with a fetch that breaks its contract.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bookshelf_dataloader::{BatchFn, BatchResult, Error};

/// Ways the recording function can deviate from the bulk-fetch contract
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Misbehavior {
    /// Answer every key, in order
    #[default]
    None,
    /// Omit the entry for the last key
    DropLast,
    /// Answer in reverse order
    Reverse,
    /// Append an entry for a key nobody asked for
    Surplus,
    /// Fail the whole call
    Fail(String),
}

/// Bulk-fetch function over a fixed map, recording each call
#[derive(Debug, Clone)]
pub struct RecordingBatchFn<V> {
    values: Arc<HashMap<String, V>>,
    calls: Arc<RwLock<Vec<Vec<String>>>>,
    misbehavior: Misbehavior,
}

impl<V> RecordingBatchFn<V> {
    /// Create a function answering from `values`; other keys are absent
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        Self {
            values: Arc::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            calls: Arc::new(RwLock::new(Vec::new())),
            misbehavior: Misbehavior::None,
        }
    }

    /// Switch to a contract-breaking mode
    pub fn misbehave(mut self, misbehavior: Misbehavior) -> Self {
        self.misbehavior = misbehavior;
        self
    }

    /// Key lists of every call so far, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of calls so far
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl<V> BatchFn<String> for RecordingBatchFn<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    async fn load(&self, keys: &[String]) -> BatchResult<String, V> {
        self.calls
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(keys.to_vec());

        if let Misbehavior::Fail(message) = &self.misbehavior {
            return Err(Error::Store(message.clone()));
        }

        let mut entries: Vec<_> = keys
            .iter()
            .map(|key| (key.clone(), self.values.get(key).cloned()))
            .collect();

        match self.misbehavior {
            Misbehavior::DropLast => {
                entries.pop();
            }
            Misbehavior::Reverse => entries.reverse(),
            Misbehavior::Surplus => entries.push(("__surplus__".to_string(), None)),
            Misbehavior::None | Misbehavior::Fail(_) => {}
        }

        Ok(entries)
    }
}
