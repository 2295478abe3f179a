//! Injectable tie-break source for choosing among equally valued moves

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Chooses one of `candidates` equally desirable options.
///
/// Implementations must return an index in `0..candidates`; `candidates` is
/// never zero. Any `FnMut(usize) -> usize` closure is a tie-breaker, which
/// lets tests script the choice.
pub trait TieBreaker {
    fn pick(&mut self, candidates: usize) -> usize;
}

impl<F> TieBreaker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, candidates: usize) -> usize {
        self(candidates)
    }
}

/// Uniform random choice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomTieBreak<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreak<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTieBreak<StdRng> {
    /// Seeded generator, or one drawn from the thread RNG when `seed` is `None`
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::new(rng)
    }
}

impl<R: Rng> TieBreaker for RandomTieBreak<R> {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }
}

/// Always the first candidate in enumeration order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreaker for FirstCandidate {
    fn pick(&mut self, _candidates: usize) -> usize {
        0
    }
}
