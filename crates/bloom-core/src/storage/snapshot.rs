//! Whole-collection snapshots over a key-value backend.
//!
//! A collection is read once at startup and rewritten in full after every
//! mutation. An absent key means an empty collection.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, DatabaseError};

/// Durable key-value backend for snapshots.
pub trait SnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, DatabaseError>;
    fn write(&self, key: &str, value: &str) -> Result<(), DatabaseError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        (**self).write(key, value)
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        (**self).write(key, value)
    }
}

/// Loads the collection stored under `key`.
///
/// # Errors
/// A snapshot that exists but does not parse is an error rather than an
/// empty collection, so a corrupt row is never silently overwritten.
pub fn load_snapshot<T, S>(store: &S, key: &str) -> Result<Vec<T>, CoreError>
where
    T: DeserializeOwned,
    S: SnapshotStore + ?Sized,
{
    let Some(raw) = store.read(key)? else {
        tracing::debug!(key, "no snapshot stored, starting empty");
        return Ok(Vec::new());
    };

    let items: Vec<T> = serde_json::from_str(&raw).map_err(|e| {
        tracing::warn!(key, error = %e, "stored snapshot does not parse");
        e
    })?;
    tracing::debug!(key, count = items.len(), "loaded snapshot");
    Ok(items)
}

/// Overwrites the snapshot under `key` with the full collection.
pub fn save_snapshot<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), CoreError>
where
    T: Serialize,
    S: SnapshotStore + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    store.write(key, &raw).map_err(|e| {
        tracing::error!(key, error = %e, "failed to persist snapshot");
        e
    })?;
    tracing::debug!(key, count = items.len(), "saved snapshot");
    Ok(())
}
