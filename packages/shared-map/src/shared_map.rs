//! The shared map.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Result;
use crate::lock;
use crate::traits::{MapReader, MapWriter};
use crate::Key;

/// A map from integer keys to strings, shared by many threads.
///
/// Lookups take shared access and never block each other. Writes take
/// exclusive access, so they are totally ordered and no reader ever sees a
/// write half-applied. Values are handed out as owned copies; nothing outside
/// the map can reach into its storage.
///
/// Share one instance by reference or through an `Arc`.
///
/// # Example
///
/// ```rust
/// use sharedmap::SharedMap;
///
/// let cache = SharedMap::new();
///
/// assert_eq!(cache.put(1, "a").unwrap(), None);
/// assert_eq!(cache.get(1).unwrap(), Some("a".to_string()));
///
/// // Overwriting reports the value it replaced.
/// assert_eq!(cache.put(1, "b").unwrap(), Some("a".to_string()));
/// assert_eq!(cache.get(2).unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct SharedMap {
    entries: RwLock<HashMap<Key, String>>,
}

impl SharedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Store `value` under `key`, blocking until exclusive access is granted.
    ///
    /// Returns the value that was replaced, or `None` if the key was new.
    pub fn put(&self, key: Key, value: impl Into<String>) -> Result<Option<String>> {
        let value = value.into();
        let previous = lock::write(&self.entries)?.insert(key, value);

        trace_put("put", key, &previous);
        Ok(previous)
    }

    /// Look up `key`, blocking only while a writer holds the lock.
    pub fn get(&self, key: Key) -> Result<Option<String>> {
        let value = lock::read(&self.entries)?.get(&key).cloned();

        trace_get("get", key, &value);
        Ok(value)
    }

    /// Replace the value under `key` with one computed from the current value.
    ///
    /// `f` runs while exclusive access is held, so no other write can land
    /// between reading the old value and storing the new one. If `f` panics the
    /// lock is released by unwinding and left poisoned.
    ///
    /// `f` must not call back into this map: a blocking `get`, `put` or
    /// `update` from inside it deadlocks the calling thread. Use
    /// [`try_get`](Self::try_get) if `f` needs to look, and expect
    /// [`Error::WouldBlock`](crate::Error::WouldBlock).
    ///
    /// ```rust
    /// use sharedmap::SharedMap;
    ///
    /// let hits = SharedMap::new();
    /// for _ in 0..3 {
    ///     hits.update(7, |current| {
    ///         let n: u32 = current.and_then(|s| s.parse().ok()).unwrap_or(0);
    ///         (n + 1).to_string()
    ///     })
    ///     .unwrap();
    /// }
    /// assert_eq!(hits.get(7).unwrap(), Some("3".to_string()));
    /// ```
    pub fn update<F>(&self, key: Key, f: F) -> Result<()>
    where
        F: FnOnce(Option<&str>) -> String,
    {
        let mut entries = lock::write(&self.entries)?;
        let value = f(entries.get(&key).map(String::as_str));
        entries.insert(key, value);
        drop(entries);

        log::trace!("update {}", key);
        Ok(())
    }

    /// Whether anything is stored under `key`.
    pub fn contains_key(&self, key: Key) -> Result<bool> {
        Ok(lock::read(&self.entries)?.contains_key(&key))
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize> {
        Ok(lock::read(&self.entries)?.len())
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(lock::read(&self.entries)?.is_empty())
    }

    /// Like [`get`](Self::get), but fails with
    /// [`Error::WouldBlock`](crate::Error::WouldBlock) instead of waiting for a
    /// writer.
    pub fn try_get(&self, key: Key) -> Result<Option<String>> {
        let value = lock::try_read(&self.entries)?.get(&key).cloned();

        trace_get("try_get", key, &value);
        Ok(value)
    }

    /// Like [`put`](Self::put), but fails with
    /// [`Error::WouldBlock`](crate::Error::WouldBlock) instead of waiting for
    /// readers or another writer.
    pub fn try_put(&self, key: Key, value: impl Into<String>) -> Result<Option<String>> {
        let value = value.into();
        let previous = lock::try_write(&self.entries)?.insert(key, value);

        trace_put("try_put", key, &previous);
        Ok(previous)
    }
}

fn trace_get(op: &str, key: Key, value: &Option<String>) {
    log::trace!("{} {}: {}", op, key, if value.is_some() { "hit" } else { "miss" });
}

fn trace_put(op: &str, key: Key, previous: &Option<String>) {
    log::trace!(
        "{} {}: {}",
        op,
        key,
        if previous.is_some() { "overwrote" } else { "inserted" }
    );
}

impl<V: Into<String>> FromIterator<(Key, V)> for SharedMap {
    /// Seed a map before sharing it. Later duplicates win.
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k, v.into())).collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl MapReader for SharedMap {
    fn get(&self, key: Key) -> Result<Option<String>> {
        SharedMap::get(self, key)
    }
}

impl MapWriter for SharedMap {
    fn put(&self, key: Key, value: String) -> Result<Option<String>> {
        SharedMap::put(self, key, value)
    }
}
