//! Scoped acquisition of the reader/writer lock.
//!
//! Every acquisition hands back the lock's own RAII guard, so access is
//! released when the guard drops: on normal return, on early `?` return and
//! while unwinding from a panic. A guard only exists once access has actually
//! been granted.
//!
//! A poisoned lock is reported as [`Error::LockPoisoned`]. The guard carried by
//! the `PoisonError` is dropped on the spot rather than handed out.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

use crate::error::{Access, Error, Result};

/// Block until shared access is granted.
pub(crate) fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| poisoned(Access::Shared))
}

/// Block until exclusive access is granted.
pub(crate) fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| poisoned(Access::Exclusive))
}

/// Take shared access only if no writer holds the lock right now.
pub(crate) fn try_read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    match lock.try_read() {
        Ok(guard) => Ok(guard),
        Err(TryLockError::WouldBlock) => Err(would_block(Access::Shared)),
        Err(TryLockError::Poisoned(_)) => Err(poisoned(Access::Shared)),
    }
}

/// Take exclusive access only if nobody holds the lock right now.
pub(crate) fn try_write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    match lock.try_write() {
        Ok(guard) => Ok(guard),
        Err(TryLockError::WouldBlock) => Err(would_block(Access::Exclusive)),
        Err(TryLockError::Poisoned(_)) => Err(poisoned(Access::Exclusive)),
    }
}

fn poisoned(access: Access) -> Error {
    log::error!("refusing {} access: lock poisoned by a panicking writer", access);
    Error::LockPoisoned { access }
}

fn would_block(access: Access) -> Error {
    log::debug!("{} access not immediately available", access);
    Error::WouldBlock { access }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn poison(lock: &Arc<RwLock<u32>>) {
        let lock = Arc::clone(lock);
        let result = std::thread::spawn(move || {
            let _guard = lock.write().unwrap();
            panic!("writer died");
        })
        .join();
        assert!(result.is_err());
    }

    #[test]
    fn read_and_write_release_on_drop() {
        let lock = RwLock::new(1u32);

        {
            let mut guard = write(&lock).unwrap();
            *guard = 2;
        }
        assert_eq!(*read(&lock).unwrap(), 2);

        // Both guards above are gone, so exclusive access is free again.
        assert!(try_write(&lock).is_ok());
    }

    #[test]
    fn readers_share() {
        let lock = RwLock::new(7u32);
        let first = read(&lock).unwrap();
        let second = try_read(&lock).unwrap();
        assert_eq!(*first + *second, 14);
    }

    #[test]
    fn try_write_blocked_by_reader() {
        let lock = RwLock::new(0u32);
        let _reader = read(&lock).unwrap();
        assert_eq!(
            try_write(&lock).unwrap_err(),
            Error::WouldBlock {
                access: Access::Exclusive
            }
        );
    }

    #[test]
    fn try_read_blocked_by_writer() {
        let lock = RwLock::new(0u32);
        let _writer = write(&lock).unwrap();
        assert_eq!(
            try_read(&lock).unwrap_err(),
            Error::WouldBlock {
                access: Access::Shared
            }
        );
    }

    #[test]
    fn poisoned_lock_is_reported_on_every_path() {
        let lock = Arc::new(RwLock::new(0u32));
        poison(&lock);

        assert_eq!(
            read(&lock).unwrap_err(),
            Error::LockPoisoned {
                access: Access::Shared
            }
        );
        assert_eq!(
            write(&lock).unwrap_err(),
            Error::LockPoisoned {
                access: Access::Exclusive
            }
        );
        assert!(try_read(&lock).unwrap_err().is_lock_failure());
        assert!(try_write(&lock).unwrap_err().is_lock_failure());
    }
}
