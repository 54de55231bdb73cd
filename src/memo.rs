//! Memo cells
//!
//! A single-slot cache keyed by input value equality. Each derived value in
//! the selector chain owns one cell per declared input set, so it recomputes
//! only when those inputs actually change.

/// A single-slot memo cell.
///
/// Stores the last `(input, output)` pair. A lookup whose input equals the
/// cached one returns the cached output without running the compute closure.
/// The cell counts how many times it has computed, so callers can assert
/// that unchanged inputs did not trigger recomputation.
#[derive(Debug)]
pub struct Memo<I, O> {
    cached: Option<(I, O)>,
    computations: u64,
}

impl<I, O> Default for Memo<I, O> {
    fn default() -> Self {
        Memo {
            cached: None,
            computations: 0,
        }
    }
}

impl<I, O> Memo<I, O>
where
    I: Clone + PartialEq,
    O: Clone,
{
    /// Create an empty memo cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the output for `input`, recomputing only when `input` differs
    /// from the cached input.
    pub fn get_or_compute(&mut self, input: &I, compute: impl FnOnce(&I) -> O) -> O {
        if let Some((cached_input, output)) = &self.cached {
            if cached_input == input {
                return output.clone();
            }
        }

        let output = compute(input);
        self.computations += 1;
        self.cached = Some((input.clone(), output.clone()));

        output
    }

    /// Number of times the compute closure has run.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_lookup_computes() {
        let mut memo: Memo<u32, u32> = Memo::new();

        let out = memo.get_or_compute(&2, |n| n * 10);

        assert_eq!(out, 20, "compute should run on first lookup");
        assert_eq!(memo.computations(), 1, "exactly one computation expected");
    }

    #[test]
    fn equal_input_returns_cached_output() {
        let mut memo: Memo<u32, u32> = Memo::new();

        let first = memo.get_or_compute(&2, |n| n * 10);
        let second = memo.get_or_compute(&2, |_| 999);

        assert_eq!(first, second, "cached output should be returned");
        assert_eq!(memo.computations(), 1, "second lookup must not recompute");
    }

    #[test]
    fn changed_input_recomputes() {
        let mut memo: Memo<u32, u32> = Memo::new();

        let first = memo.get_or_compute(&2, |n| n * 10);
        let second = memo.get_or_compute(&3, |n| n * 10);

        assert_eq!(first, 20, "first output");
        assert_eq!(second, 30, "second output");
        assert_eq!(memo.computations(), 2, "changed input must recompute");
    }

    #[test]
    fn reverting_input_recomputes_single_slot() {
        let mut memo: Memo<u32, u32> = Memo::new();

        let _ = memo.get_or_compute(&2, |n| n * 10);
        let _ = memo.get_or_compute(&3, |n| n * 10);
        let third = memo.get_or_compute(&2, |n| n * 10);

        assert_eq!(third, 20, "reverted input recomputes correctly");
        assert_eq!(memo.computations(), 3, "only the last input is cached");
    }
}
