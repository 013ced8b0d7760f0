/// Learning memory store errors.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The store lock was poisoned by a panicking writer.
    #[error("memory store lock poisoned")]
    LockPoisoned,
}
