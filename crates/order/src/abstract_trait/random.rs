use std::sync::Arc;

pub type DynRandomSource = Arc<dyn RandomSource + Send + Sync>;

/// Source of randomness for fault injection. Need not be cryptographically strong.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn next_index(&self, len: usize) -> usize;
}
