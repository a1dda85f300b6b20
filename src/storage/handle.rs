//! Shared store handle
//!
//! The session and the interrupt watcher both need the store: one to run
//! actions, the other to close it when the process is interrupted.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::{Error, Result};
use super::ChestStore;

/// Cloneable handle to a single [`ChestStore`].
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<Option<ChestStore>>>,
}

impl StoreHandle {
    pub fn new(store: ChestStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(store))),
        }
    }

    /// Run an operation against the store. Fails with `StoreClosed` once
    /// the handle has been closed.
    pub fn with<T>(&self, op: impl FnOnce(&ChestStore) -> Result<T>) -> Result<T> {
        let guard = self.lock();
        match guard.as_ref() {
            Some(store) => op(store),
            None => Err(Error::StoreClosed),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Close the store. Closing twice is a no-op.
    pub fn close(&self) -> Result<()> {
        let store = self.lock().take();
        match store {
            Some(store) => store.close(),
            None => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<ChestStore>> {
        // A panic inside `with` leaves the connection itself intact.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
