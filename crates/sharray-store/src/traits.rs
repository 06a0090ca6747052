use sharray_types::ContentRef;

use crate::error::StoreResult;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. Content-addressing guarantees this:
///   the same bytes always produce the same reference.
/// - `put` is idempotent: writing the same bytes twice returns the same
///   reference and stores one object.
/// - Concurrent reads are always safe (objects are immutable).
/// - The store never interprets object contents.
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read an object's bytes by its content reference.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    /// Returns `Err` on I/O failure or cancellation.
    fn get(&self, r: &ContentRef) -> StoreResult<Option<Vec<u8>>>;

    /// Write an object and return its content reference.
    ///
    /// If the object already exists, this is a no-op (idempotent).
    /// The returned reference is the BLAKE3 hash of `data`.
    fn put(&self, data: &[u8]) -> StoreResult<ContentRef>;

    /// Check whether an object exists in the store.
    fn exists(&self, r: &ContentRef) -> StoreResult<bool>;

    /// Read multiple objects in a batch.
    ///
    /// Default implementation calls `get()` for each reference. Backends may
    /// override for better performance (e.g., fewer I/O round-trips).
    fn get_batch(&self, refs: &[ContentRef]) -> StoreResult<Vec<Option<Vec<u8>>>> {
        refs.iter().map(|r| self.get(r)).collect()
    }

    /// Write multiple objects in a batch and return their references.
    ///
    /// Default implementation calls `put()` for each object. Backends may
    /// override for better performance (e.g., single fsync).
    fn put_batch(&self, objects: &[Vec<u8>]) -> StoreResult<Vec<ContentRef>> {
        objects.iter().map(|data| self.put(data)).collect()
    }
}
