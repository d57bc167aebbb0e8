//! Generator sets: every operation bound to one unit-float source.
//!
//! A [`Generators`] owns its source, so two sets never share state. The free
//! functions at the bottom of this module are the ambient convenience layer;
//! they draw from the thread-local `rand::rng()` and are not reproducible.

use rand::rngs::ThreadRng;

use crate::bounded::{self, IntegerBound};
use crate::error::Result;
use crate::pick;
use crate::sample::{self, SampleStrategy, SamplingConfig};
use crate::source::{FnSource, SeededSource, UnitSource};

/// The generator operations bound to one source.
///
/// Operations take `&mut self`: each draw advances the source, one unit float
/// per bounded draw.
#[derive(Debug, Clone)]
pub struct Generators<S> {
    source: S,
    config: SamplingConfig,
}

impl Generators<ThreadRng> {
    /// Bound to the thread-local ambient generator.
    pub fn ambient() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for Generators<ThreadRng> {
    fn default() -> Self {
        Self::ambient()
    }
}

impl Generators<SeededSource> {
    /// Bound to a deterministic source derived from `seed` (stringified).
    ///
    /// Two sets built from equal seeds produce identical outputs for identical
    /// call sequences.
    pub fn seeded<T: std::fmt::Display + ?Sized>(seed: &T) -> Self {
        Self::new(SeededSource::new(seed))
    }
}

impl<F: FnMut() -> f64> Generators<FnSource<F>> {
    /// Bound to a closure producing unit floats.
    pub fn from_fn(f: F) -> Self {
        Self::new(FnSource::new(f))
    }
}

impl<S: UnitSource> Generators<S> {
    /// Bound to an explicit source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: SamplingConfig::default(),
        }
    }

    /// Replace the sampling strategy threshold.
    pub fn with_config(mut self, config: SamplingConfig) -> Self {
        self.config = config;
        self
    }

    /// The strategy threshold in use.
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Integer in `[min, max)`. See [`bounded::draw`].
    pub fn int<B: IntegerBound>(&mut self, min: B, max: B) -> Result<i64> {
        bounded::draw(&mut self.source, min, max)
    }

    /// Integer in `[0, bound)`.
    pub fn below<B: IntegerBound>(&mut self, bound: B) -> Result<i64> {
        let bound = bound.to_bound()?;
        bounded::draw(&mut self.source, 0, bound)
    }

    /// Unit float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.source.next_unit()
    }

    /// One element, uniformly by position.
    pub fn pick<'a, A>(&mut self, population: &'a [A]) -> Result<&'a A> {
        pick::pick(&mut self.source, population)
    }

    /// `k` elements from distinct positions, in draw order.
    pub fn sample<A: Clone, K: IntegerBound>(
        &mut self,
        population: &[A],
        k: K,
    ) -> Result<Vec<A>> {
        sample::sample_with_config(&mut self.source, population, k, &self.config)
    }

    /// `k` distinct positions from `[0, n)`, in draw order.
    pub fn sample_indices<K: IntegerBound>(&mut self, n: usize, k: K) -> Result<Vec<usize>> {
        sample::sample_indices_with_config(&mut self.source, n, k, &self.config)
    }

    /// [`Self::sample`] with the strategy forced.
    pub fn sample_with_strategy<A: Clone, K: IntegerBound>(
        &mut self,
        population: &[A],
        k: K,
        strategy: SampleStrategy,
    ) -> Result<Vec<A>> {
        sample::sample_with_strategy(&mut self.source, population, k, strategy)
    }

    /// A uniformly random ordering of the whole population.
    ///
    /// Same errors as [`Self::sample`] with `k = population.len()`.
    pub fn shuffle<A: Clone>(&mut self, population: &[A]) -> Result<Vec<A>> {
        self.sample(population, population.len())
    }

    /// Borrow the bound source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unbind the source, keeping its current position in the stream.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Integer in `[min, max)` from the ambient generator.
pub fn random_int<B: IntegerBound>(min: B, max: B) -> Result<i64> {
    Generators::ambient().int(min, max)
}

/// Integer in `[0, bound)` from the ambient generator.
pub fn random_below<B: IntegerBound>(bound: B) -> Result<i64> {
    Generators::ambient().below(bound)
}

/// Unit float from the ambient generator.
pub fn random_float() -> f64 {
    Generators::ambient().unit()
}

/// One element from the ambient generator.
pub fn random_pick<A>(population: &[A]) -> Result<&A> {
    Generators::ambient().pick(population)
}

/// `k` distinct-position elements from the ambient generator.
pub fn random_sample<A: Clone, K: IntegerBound>(population: &[A], k: K) -> Result<Vec<A>> {
    Generators::ambient().sample(population, k)
}

/// Shuffled copy of `population` from the ambient generator.
pub fn random_shuffle<A: Clone>(population: &[A]) -> Result<Vec<A>> {
    Generators::ambient().shuffle(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArgumentError, Error};

    #[test]
    fn seeded_sets_replay() {
        let run = || {
            let mut g = Generators::seeded("abc");
            let a = g.int(0, 10).expect("valid");
            let pop: Vec<i32> = (1..=50).collect();
            let b = g.sample(&pop, 5).expect("valid");
            let c = g.unit();
            (a, b, c)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn seeded_sets_are_independent() {
        let mut a = Generators::seeded("abc");
        let mut b = Generators::seeded("abc");
        // Draining `a` must not advance `b`.
        for _ in 0..10 {
            a.unit();
        }
        let mut fresh = Generators::seeded("abc");
        assert_eq!(b.unit(), fresh.unit());
    }

    #[test]
    fn below_matches_int_from_zero() {
        let mut a = Generators::seeded(&7u8);
        let mut b = Generators::seeded(&7u8);
        for bound in 1..50 {
            assert_eq!(a.below(bound), b.int(0, bound));
        }
    }

    #[test]
    fn below_rejects_negative_bound() {
        let mut g = Generators::from_fn(|| 0.5);
        assert_eq!(
            g.below(-1),
            Err(Error::InvalidArgument(ArgumentError::InvertedBounds {
                min: 0,
                max: -1
            }))
        );
    }

    #[test]
    fn scripted_source_drives_every_operation() {
        let mut g = Generators::from_fn(|| 0.5);
        assert_eq!(g.int(0, 10), Ok(5));
        assert_eq!(g.pick(&["x", "y"]), Ok(&"y"));
        assert_eq!(g.unit(), 0.5);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut g = Generators::seeded("shuffle");
        let pop: Vec<u32> = (0..40).collect();
        let mut out = g.shuffle(&pop).expect("valid");
        assert_eq!(out.len(), pop.len());
        out.sort_unstable();
        assert_eq!(out, pop);
        assert_eq!(g.shuffle::<u32>(&[]), Ok(vec![]));
    }

    #[test]
    fn shuffle_reports_oversized_population() {
        let mut g = Generators::seeded("shuffle");
        let huge = vec![(); usize::MAX];
        assert_eq!(
            g.shuffle(&huge),
            Err(Error::InvalidArgument(ArgumentError::BoundOutOfRange))
        );
    }

    #[test]
    fn forced_strategy_on_a_set() {
        let pop: Vec<u32> = (0..10).collect();
        // 10 <= 21 + 3k, so Pool would be picked; force Rejection instead.
        // Draws 0.5, 0.5 (rejected), 0.15 give positions 5 then 1.
        let mut script = [0.5, 0.5, 0.15].into_iter();
        let mut g = Generators::from_fn(move || script.next().expect("script exhausted"));
        assert_eq!(
            g.sample_with_strategy(&pop, 2, SampleStrategy::Rejection),
            Ok(vec![5, 1])
        );

        let mut a = Generators::seeded("forced");
        let mut b = Generators::seeded("forced");
        assert_eq!(
            a.sample_with_strategy(&pop, 3, SampleStrategy::Pool),
            b.sample(&pop, 3)
        );
    }

    #[test]
    fn config_is_applied() {
        let mut calls = 0;
        let g = Generators::from_fn(|| {
            calls += 1;
            0.0
        });
        let mut g = g.with_config(SamplingConfig {
            dense_offset: 0,
            dense_factor: 0,
        });
        assert_eq!(g.config().dense_offset, 0);
        // Rejection with all-zero draws would loop on k=2; k=1 draws once.
        assert_eq!(g.sample_indices(10, 1), Ok(vec![0]));
        drop(g);
        assert_eq!(calls, 1);
    }

    #[test]
    fn ambient_wrappers_respect_contracts() {
        for _ in 0..1_000 {
            let i = random_int(3, 8).expect("valid");
            assert!((3..8).contains(&i));
            let b = random_below(4).expect("valid");
            assert!((0..4).contains(&b));
            let u = random_float();
            assert!((0.0..1.0).contains(&u));
        }
        let pop = [1, 2, 3, 4, 5, 6];
        assert!(pop.contains(random_pick(&pop).expect("non-empty")));
        assert_eq!(random_sample(&pop, 6).expect("valid").len(), 6);
        assert_eq!(random_shuffle(&pop).map(|v| v.len()), Ok(6));
    }
}
