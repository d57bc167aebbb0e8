//! `tirage`: uniform random-value generators over a pluggable unit-float source.
//!
//! Everything is built from one capability, "give me a float in `[0, 1)`":
//!
//! - `bounded`: integers in `[min, max)`.
//! - `pick`: one element of a slice.
//! - `sample`: `k` elements from distinct positions (pool reduction for dense
//!   samples, rejection for sparse ones).
//! - `generators`: [`Generators`], the operations bound to one source, plus
//!   ambient free functions over the thread-local generator.
//! - `source`: the [`UnitSource`] trait and its seeded/closure implementations.
//!
//! ```
//! use tirage::Generators;
//!
//! let mut g = Generators::seeded("abc");
//! let roll = g.int(1, 7)?;
//! let hand = g.sample(&(1..=52).collect::<Vec<_>>(), 5)?;
//! assert!((1..7).contains(&roll));
//! assert_eq!(hand.len(), 5);
//! # Ok::<(), tirage::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod bounded;
pub mod error;
pub mod generators;
pub mod pick;
pub mod sample;
pub mod source;

pub use bounded::IntegerBound;
pub use error::{ArgumentError, Error, Result};
pub use generators::{
    random_below, random_float, random_int, random_pick, random_sample, random_shuffle,
    Generators,
};
pub use sample::{SampleStrategy, SamplingConfig};
pub use source::{FnSource, SeededSource, UnitSource};
