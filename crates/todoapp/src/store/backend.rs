use crate::error::Result;

/// Abstract interface for the durable key-value store.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`crate::persistence::Persistence`] handles the "what"
/// (which keys, their JSON layout, seeding).
pub trait StorageBackend {
    /// Read the string stored under `key`.
    /// Returns Ok(None) if nothing was ever stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// A borrowed backend is a backend; the caller keeps ownership.
impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
