//! Distinct sampling: draw `k` elements from `n` positions without repetition.
//!
//! Two strategies, chosen by how dense the sample is:
//!
//! - **Pool reduction** (`n <= 21 + 3k`): copy the `n` positions into a working
//!   pool. Step `i` draws `j` from `[0, n - i)`, emits `pool[j]`, then moves the
//!   last active slot `pool[n - i - 1]` into `j`. The active window always holds
//!   exactly the positions not yet emitted, so each step is one draw and one
//!   write. O(n) space, O(n + k) time, no retries.
//! - **Rejection** (`n > 21 + 3k`): draw from `[0, n)` and retry on positions
//!   already chosen. O(k) space, expected O(k) draws while `k` is a small
//!   fraction of `n`.
//!
//! Both emit positions in draw order, and every ordered `k`-tuple of distinct
//! positions is equally likely. Sampling is by position: equal values at
//! different positions may both appear.

use std::collections::HashSet;

use crate::bounded::{check_len, draw_index, IntegerBound};
use crate::error::{ArgumentError, Error, Result};
use crate::source::UnitSource;

/// Which algorithm draws the distinct positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStrategy {
    /// Partial in-place pool reduction.
    Pool,
    /// Rejection sampling against a set of chosen positions.
    Rejection,
}

impl SampleStrategy {
    /// Strategy for drawing `k` of `n` positions under the default threshold.
    pub fn select(n: usize, k: usize) -> Self {
        SamplingConfig::default().strategy_for(n, k)
    }
}

/// Tunables for strategy selection.
///
/// Pool reduction is used while `n <= dense_offset + dense_factor * k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    pub dense_offset: usize,
    pub dense_factor: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            dense_offset: 21,
            dense_factor: 3,
        }
    }
}

impl SamplingConfig {
    /// Strategy for drawing `k` of `n` positions.
    pub fn strategy_for(&self, n: usize, k: usize) -> SampleStrategy {
        let threshold = self
            .dense_offset
            .saturating_add(self.dense_factor.saturating_mul(k));
        if n <= threshold {
            SampleStrategy::Pool
        } else {
            SampleStrategy::Rejection
        }
    }
}

/// Check `k` against a population of `n`; returns `k` as `usize`.
fn validate<K: IntegerBound>(n: usize, k: K) -> Result<usize> {
    let k = k.to_bound()?;
    if k < 0 {
        return Err(ArgumentError::NegativeSampleSize(k).into());
    }
    let k = usize::try_from(k).map_err(|_| ArgumentError::BoundOutOfRange)?;
    if k == 0 {
        return Ok(0);
    }
    if n == 0 {
        return Err(Error::EmptyPopulation);
    }
    check_len(n)?;
    if k > n {
        return Err(ArgumentError::SampleLargerThanPopulation {
            requested: k,
            available: n,
        }
        .into());
    }
    Ok(k)
}

/// Draw `k` distinct positions from `[0, n)` with the default configuration.
///
/// # Errors
///
/// - `NegativeSampleSize` / `NonIntegerBound` for a bad `k`.
/// - `SampleLargerThanPopulation` if `k > n`.
/// - `EmptyPopulation` if `n == 0` and `k > 0`.
///
/// `k == 0` always succeeds with an empty result and consumes nothing.
pub fn sample_indices<S, K>(source: &mut S, n: usize, k: K) -> Result<Vec<usize>>
where
    S: UnitSource + ?Sized,
    K: IntegerBound,
{
    sample_indices_with_config(source, n, k, &SamplingConfig::default())
}

/// [`sample_indices`] with an explicit strategy threshold.
pub fn sample_indices_with_config<S, K>(
    source: &mut S,
    n: usize,
    k: K,
    config: &SamplingConfig,
) -> Result<Vec<usize>>
where
    S: UnitSource + ?Sized,
    K: IntegerBound,
{
    let k = validate(n, k)?;
    Ok(run(source, n, k, config.strategy_for(n, k)))
}

/// [`sample_indices`] forcing a specific strategy, regardless of density.
pub fn sample_indices_with_strategy<S, K>(
    source: &mut S,
    n: usize,
    k: K,
    strategy: SampleStrategy,
) -> Result<Vec<usize>>
where
    S: UnitSource + ?Sized,
    K: IntegerBound,
{
    let k = validate(n, k)?;
    Ok(run(source, n, k, strategy))
}

/// Draw `k` elements from distinct positions of `population`, in draw order.
pub fn sample<S, A, K>(source: &mut S, population: &[A], k: K) -> Result<Vec<A>>
where
    S: UnitSource + ?Sized,
    A: Clone,
    K: IntegerBound,
{
    sample_with_config(source, population, k, &SamplingConfig::default())
}

/// [`sample`] with an explicit strategy threshold.
pub fn sample_with_config<S, A, K>(
    source: &mut S,
    population: &[A],
    k: K,
    config: &SamplingConfig,
) -> Result<Vec<A>>
where
    S: UnitSource + ?Sized,
    A: Clone,
    K: IntegerBound,
{
    let idxs = sample_indices_with_config(source, population.len(), k, config)?;
    Ok(gather(population, &idxs))
}

/// [`sample`] forcing a specific strategy.
pub fn sample_with_strategy<S, A, K>(
    source: &mut S,
    population: &[A],
    k: K,
    strategy: SampleStrategy,
) -> Result<Vec<A>>
where
    S: UnitSource + ?Sized,
    A: Clone,
    K: IntegerBound,
{
    let idxs = sample_indices_with_strategy(source, population.len(), k, strategy)?;
    Ok(gather(population, &idxs))
}

fn gather<A: Clone>(population: &[A], idxs: &[usize]) -> Vec<A> {
    idxs.iter().map(|&i| population[i].clone()).collect()
}

fn run<S: UnitSource + ?Sized>(
    source: &mut S,
    n: usize,
    k: usize,
    strategy: SampleStrategy,
) -> Vec<usize> {
    tracing::trace!(n, k, ?strategy, "distinct sample");
    if k == 0 {
        return Vec::new();
    }
    match strategy {
        SampleStrategy::Pool => pool_reduction(source, n, k),
        SampleStrategy::Rejection => rejection(source, n, k),
    }
}

/// Requires `k <= n`.
fn pool_reduction<S: UnitSource + ?Sized>(source: &mut S, n: usize, k: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..n).collect();
    let mut out = Vec::with_capacity(k);
    for i in 0..k {
        let active = n - i;
        let j = draw_index(source, active);
        out.push(pool[j]);
        // No swap back: the emitted value is already recorded.
        pool[j] = pool[active - 1];
    }
    out
}

/// Requires `k <= n`, otherwise never terminates.
fn rejection<S: UnitSource + ?Sized>(source: &mut S, n: usize, k: usize) -> Vec<usize> {
    let mut chosen = HashSet::with_capacity(k);
    let mut out = Vec::with_capacity(k);
    let mut rejected = 0usize;
    while out.len() < k {
        let j = draw_index(source, n);
        if chosen.insert(j) {
            out.push(j);
        } else {
            rejected += 1;
        }
    }
    tracing::trace!(n, k, rejected, "rejection sample complete");
    out
}
