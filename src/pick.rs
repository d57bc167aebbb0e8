//! Single-element picks.

use crate::bounded::{check_len, draw_index};
use crate::error::{Error, Result};
use crate::source::UnitSource;

/// Pick one element uniformly by position.
///
/// Consumes one unit float. Fails with [`Error::EmptyPopulation`] on an empty
/// slice, and with `BoundOutOfRange` if the slice is longer than `i64::MAX`
/// (zero-sized elements only), in both cases without consuming anything.
pub fn pick<'a, S, A>(source: &mut S, population: &'a [A]) -> Result<&'a A>
where
    S: UnitSource + ?Sized,
{
    if population.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    check_len(population.len())?;
    Ok(&population[draw_index(source, population.len())])
}
