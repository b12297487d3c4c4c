//! Bounded-concurrency dispatch over a batch of work units.
//!
//! Units are driven through `futures::stream::buffered`, which keeps at most
//! `workers` futures in flight and yields outputs in submission order. The
//! "pool" lives only for the duration of the call: every unit has settled by
//! the time either function returns, on every exit path.

use crate::{Error, Result};
use futures::StreamExt;
use std::future::Future;

/// Run every unit, collecting each unit's own `Result` in submission order.
///
/// No unit failure aborts or cancels the others; callers that need per-item
/// failure isolation (e.g. bulk delete) consume the individual results.
pub async fn run_settled<T, R, F, Fut>(
    units: Vec<T>,
    workers: usize,
    f: F,
) -> Result<Vec<Result<R>>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    if workers == 0 {
        return Err(Error::invalid_argument("worker count must be positive"));
    }

    let results = futures::stream::iter(units.into_iter().map(f))
        .buffered(workers)
        .collect::<Vec<_>>()
        .await;
    Ok(results)
}

/// Run every unit and return their outputs in submission order.
///
/// If any unit fails, the first error in submission order is returned —
/// after all in-flight units have settled, never by cancelling siblings.
pub async fn run<T, R, F, Fut>(units: Vec<T>, workers: usize, f: F) -> Result<Vec<R>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    run_settled(units, workers, f)
        .await?
        .into_iter()
        .collect()
}
