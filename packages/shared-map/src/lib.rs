//! SharedMap: a process-local key/value map for many readers and few writers
//!
//! A single map from integer keys to string values, guarded by one
//! reader/writer lock. Typical use is a cache of resolved configuration
//! values that a loader fills in and the rest of the process reads.
//!
//! - Any number of threads can read at the same time.
//! - A write waits until nobody else holds the lock and excludes everyone
//!   while it runs, so writes are totally ordered and never observed torn.
//! - Every acquisition is scoped to a guard, so the lock is released on every
//!   exit path, including a panic inside the critical section.
//!
//! A missing key is a normal outcome (`Ok(None)`). The only error a blocking
//! call can return is [`Error::LockPoisoned`], which means an earlier writer
//! panicked while holding the lock. The map's contents are no longer trusted
//! after that and every later call reports the same failure.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//!
//! use sharedmap::SharedMap;
//!
//! let cache = Arc::new(SharedMap::new());
//! cache.put(1, "debug").unwrap();
//!
//! let readers: Vec<_> = (0..4)
//!     .map(|_| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || cache.get(1).unwrap())
//!     })
//!     .collect();
//!
//! for reader in readers {
//!     assert_eq!(reader.join().unwrap(), Some("debug".to_string()));
//! }
//! ```
//!
//! Code that only needs one side of the map can take a [`MapReader`] or
//! [`MapWriter`] instead of the concrete type.

mod error;
mod lock;
mod shared_map;
mod traits;

pub use error::{Access, Error, Result};
pub use shared_map::SharedMap;
pub use traits::{MapReader, MapStore, MapWriter};

/// Key type of the map.
pub type Key = i32;
