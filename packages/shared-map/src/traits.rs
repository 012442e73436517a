//! Reader and writer traits for shared key/value maps.

use std::sync::Arc;

use crate::error::Result;
use crate::Key;

/// Look up values by key.
///
/// Takes `&self`: implementations are shared between threads and synchronize
/// internally.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn MapReader>`.
pub trait MapReader: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - Nothing is stored under the key (not an error condition).
    /// * `Ok(Some(value))` - An owned copy of the stored value.
    /// * `Err(Error)` - Access could not be granted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sharedmap::{MapReader, Result};
    ///
    /// fn timeout_setting(cache: &dyn MapReader) -> Result<String> {
    ///     Ok(cache.get(17)?.unwrap_or_else(|| "30s".to_string()))
    /// }
    /// ```
    fn get(&self, key: Key) -> Result<Option<String>>;
}

/// Store values by key.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn MapWriter>`.
pub trait MapWriter: Send + Sync {
    /// Insert `value` under `key`, replacing whatever was there.
    ///
    /// Returns the replaced value, or `None` if the key was new.
    fn put(&self, key: Key, value: String) -> Result<Option<String>>;
}

/// Combined read/write access.
///
/// Automatically implemented for any type that implements both `MapReader`
/// and `MapWriter`.
pub trait MapStore: MapReader + MapWriter {}
impl<T: MapReader + MapWriter> MapStore for T {}

// Blanket implementations for references and smart pointers

impl<T: MapReader + ?Sized> MapReader for &T {
    fn get(&self, key: Key) -> Result<Option<String>> {
        (**self).get(key)
    }
}

impl<T: MapWriter + ?Sized> MapWriter for &T {
    fn put(&self, key: Key, value: String) -> Result<Option<String>> {
        (**self).put(key, value)
    }
}

impl<T: MapReader + ?Sized> MapReader for Box<T> {
    fn get(&self, key: Key) -> Result<Option<String>> {
        self.as_ref().get(key)
    }
}

impl<T: MapWriter + ?Sized> MapWriter for Box<T> {
    fn put(&self, key: Key, value: String) -> Result<Option<String>> {
        self.as_ref().put(key, value)
    }
}

impl<T: MapReader + ?Sized> MapReader for Arc<T> {
    fn get(&self, key: Key) -> Result<Option<String>> {
        self.as_ref().get(key)
    }
}

impl<T: MapWriter + ?Sized> MapWriter for Arc<T> {
    fn put(&self, key: Key, value: String) -> Result<Option<String>> {
        self.as_ref().put(key, value)
    }
}
