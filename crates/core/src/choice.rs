//! Source of every random decision in a run.

use rand::Rng;

/// Uniform choice over a non-empty range of indices.
///
/// All randomness in a simulation flows through one `ChoiceSource`, so a
/// fixed source reproduces placement, every movement decision, every
/// reunion and every closure.
pub trait ChoiceSource {
    /// Pick an index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick one element uniformly.
    ///
    /// Returns `None` for an empty slice without consuming a draw.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index).copied()
    }
}

/// Adapts any [`rand::Rng`] into a [`ChoiceSource`].
///
/// Seed a `ChaCha8Rng` for reproducible runs.
#[derive(Debug, Clone)]
pub struct RngChoices<R> {
    rng: R,
}

impl<R: Rng> RngChoices<R> {
    /// Wrap a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoiceSource for RngChoices<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<C: ChoiceSource + ?Sized> ChoiceSource for &mut C {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
