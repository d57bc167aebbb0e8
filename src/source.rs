//! Unit-float sources.
//!
//! Every generator in this crate consumes randomness through a single
//! capability: produce a float in `[0, 1)`. Three kinds of source are provided:
//!
//! - any [`rand::RngCore`] (including the thread-local `rand::rng()`),
//! - a closure, via [`FnSource`],
//! - a seed-derived deterministic stream, via [`SeededSource`].
//!
//! Sources are sequential mutable state: each call advances them. Sharing one
//! source across threads requires external synchronization.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A producer of unit floats in `[0, 1)`.
pub trait UnitSource {
    /// Next float in `[0, 1)`. Advances the source.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UnitSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Adapts a closure into a [`UnitSource`].
///
/// The closure must return values in `[0, 1)`; the bounded draw clamps its
/// result into range, so a misbehaving closure cannot leak indices, but the
/// distribution is then no longer uniform.
pub struct FnSource<F> {
    f: F,
}

impl<F: FnMut() -> f64> FnSource<F> {
    /// Wrap `f`; each call to [`UnitSource::next_unit`] calls it once.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut() -> f64> UnitSource for FnSource<F> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (self.f)()
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

/// Deterministic source derived from an arbitrary seed value.
///
/// The seed is stringified, hashed with BLAKE3, and the 32-byte digest seeds a
/// ChaCha8 stream. Equal seed strings give equal streams.
#[derive(Debug, Clone)]
pub struct SeededSource {
    inner: ChaCha8Rng,
}

impl SeededSource {
    /// Derive the stream for `seed`.
    pub fn new<T: fmt::Display + ?Sized>(seed: &T) -> Self {
        let seed = seed.to_string();
        tracing::debug!(seed_len = seed.len(), "deriving seeded unit source");
        let digest = blake3::hash(seed.as_bytes());
        Self {
            inner: ChaCha8Rng::from_seed(*digest.as_bytes()),
        }
    }
}

impl RngCore for SeededSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
