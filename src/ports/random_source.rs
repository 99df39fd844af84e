//! Random Source Port - Uniform samples for the prize draw.

/// Source of uniform samples in `[0, 1)`.
///
/// Production uses the thread RNG; tests inject a seeded source so draws
/// are reproducible.
pub trait RandomSource: Send + Sync {
    fn next_fraction(&self) -> f64;
}
