//! Error types for the shared map.
//!
//! A missing key is not an error: lookups report it as `Ok(None)`. The only
//! failures are about the lock itself.

/// Which side of the reader/writer lock an operation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Shared (read) access. Any number of holders at once.
    Shared,
    /// Exclusive (write) access. Exactly one holder, no readers.
    Exclusive,
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Access::Shared => write!(f, "shared"),
            Access::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// Errors returned by [`SharedMap`](crate::SharedMap) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A previous holder panicked while holding exclusive access.
    ///
    /// The contents of the map can no longer be trusted, so every later
    /// acquisition fails with this error. There is no recovery path.
    #[error("lock poisoned: {access} access refused after a writer panicked")]
    LockPoisoned { access: Access },

    /// A non-blocking acquisition could not be granted right away.
    ///
    /// Only returned by the `try_*` operations.
    #[error("{access} access would block")]
    WouldBlock { access: Access },
}

impl Error {
    /// Whether this is the unrecoverable lock failure.
    pub fn is_lock_failure(&self) -> bool {
        matches!(self, Error::LockPoisoned { .. })
    }

    /// The access that was requested when the error occurred.
    pub fn access(&self) -> Access {
        match self {
            Error::LockPoisoned { access } | Error::WouldBlock { access } => *access,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_works() {
        let e = Error::LockPoisoned {
            access: Access::Shared,
        };
        assert_eq!(
            e.to_string(),
            "lock poisoned: shared access refused after a writer panicked"
        );

        let e = Error::WouldBlock {
            access: Access::Exclusive,
        };
        assert_eq!(e.to_string(), "exclusive access would block");
    }

    #[test]
    fn lock_failure_is_distinguishable() {
        assert!(Error::LockPoisoned {
            access: Access::Exclusive
        }
        .is_lock_failure());
        assert!(!Error::WouldBlock {
            access: Access::Shared
        }
        .is_lock_failure());
    }

    #[test]
    fn access_is_reported() {
        let e = Error::WouldBlock {
            access: Access::Shared,
        };
        assert_eq!(e.access(), Access::Shared);
    }
}
