//! Sequential task execution.
//!
//! Relation resolution and schema setup often need several statements run
//! strictly one after another. [`run_sequence`] awaits an ordered list of
//! tasks in turn and short-circuits on the first error or cancellation;
//! nothing after a failed task runs.

use asupersync::Outcome;

/// Await `tasks` in order, collecting their results.
///
/// Returns the results in task order on success. The first `Err`,
/// `Cancelled`, or `Panicked` outcome stops the sequence immediately and
/// is returned as-is; remaining tasks are dropped unexecuted.
pub async fn run_sequence<T, E, Fut>(tasks: impl IntoIterator<Item = Fut>) -> Outcome<Vec<T>, E>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    let mut results = Vec::new();
    for task in tasks {
        match task.await {
            Outcome::Ok(value) => results.push(value),
            Outcome::Err(e) => return Outcome::Err(e),
            Outcome::Cancelled(r) => return Outcome::Cancelled(r),
            Outcome::Panicked(p) => return Outcome::Panicked(p),
        }
    }
    Outcome::Ok(results)
}
