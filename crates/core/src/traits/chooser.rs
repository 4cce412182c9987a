//! Injected randomness for reply selection

/// Picks an index into a non-empty candidate list
///
/// Implementations:
/// - `RandomChooser` - uniform, thread-local RNG
/// - `SeededChooser` - uniform, reproducible from a seed
/// - `FixedChooser` - always the same index (tests)
pub trait ReplyChooser: Send + Sync + 'static {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn choose(&self, len: usize) -> usize;
}
