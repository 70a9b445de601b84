//! Choice among equivalent candidates.
//!
//! Selection is a pure function of the candidate list and an injected [`Selector`],
//! so tests can pin the choice while production draws a fresh random index per call.

use rand::Rng;

/// Source of candidate indices.
pub trait Selector: Send + Sync {
    /// Index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl Selector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Pick one of `candidates`, or `None` if there are none.
///
/// A single candidate is returned without consulting the selector.
pub fn pick_uniform<'a, T>(candidates: &'a [T], selector: &dyn Selector) -> Option<&'a T> {
    match candidates.len() {
        0 => None,
        1 => candidates.first(),
        n => candidates.get(selector.pick(n).min(n - 1)),
    }
}
