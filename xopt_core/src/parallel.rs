use std::fmt;
use std::future::Future;
use std::num::NonZero;
use std::sync::Arc;
use std::thread;

use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::AnyEmptyResult;
use crate::AnyError;

/// Options controlling a [`for_each_parallel`] call.
#[derive(Clone, Debug)]
pub struct ParallelOptions {
	/// Upper bound on the number of concurrent workers. Normalized to
	/// `[1, available_parallelism]` before any worker is spawned.
	pub max_parallelism: usize,
	/// Cancellation signal supplied by the caller. The engine derives a child
	/// token from it, so cancelling this token stops every worker at its next
	/// cursor pull.
	pub cancellation: CancellationToken,
}

impl ParallelOptions {
	/// Options with the given worker cap and no external cancellation.
	pub fn new(max_parallelism: usize) -> Self {
		Self {
			max_parallelism,
			cancellation: CancellationToken::new(),
		}
	}

	/// Replaces the cancellation token observed by the pull loop.
	#[must_use]
	pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
		self.cancellation = cancellation;
		self
	}
}

impl Default for ParallelOptions {
	/// Sequential processing: a single worker, no external cancellation.
	fn default() -> Self {
		Self::new(1)
	}
}

/// Terminal failure of a [`for_each_parallel`] call.
///
/// Exactly one of these is surfaced per call; partial progress made before
/// the failing item is not rolled back.
#[derive(Debug, Error)]
pub enum ParallelError<T>
where
	T: fmt::Debug + fmt::Display,
{
	/// The caller's cancellation token was triggered before the sequence was
	/// exhausted. Distinguishable from an item failure so callers can choose
	/// not to report it as an error.
	#[error("parallel processing was cancelled")]
	Cancelled,

	/// The action failed for `item`.
	#[error("failed while processing `{item}`")]
	Item {
		/// The item that was being processed when the failure occurred.
		item: T,
		/// The error returned by the action.
		source: AnyError,
	},
}

impl<T> ParallelError<T>
where
	T: fmt::Debug + fmt::Display,
{
	/// The item that caused the failure, if the failure was an item failure.
	pub fn item(&self) -> Option<&T> {
		match self {
			Self::Cancelled => None,
			Self::Item { item, .. } => Some(item),
		}
	}

	/// Returns true for the cancellation outcome.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}
}

fn available_parallelism() -> usize {
	thread::available_parallelism().map_or(1, NonZero::get)
}

/// Normalizes a requested worker count to `[1, available_parallelism]`.
/// An out-of-range request is a policy matter, never an error.
pub fn effective_parallelism(max_parallelism: usize) -> usize {
	max_parallelism.clamp(1, available_parallelism())
}

/// Fans `source` out over a bounded pool of workers.
///
/// A single cursor over the sequence is shared by all workers behind a mutex
/// and advanced one item at a time; the lock is held only for the `next()`
/// call, never while the action runs. Items are pulled in source order and
/// each item is handed to exactly one worker; completion order across
/// workers is unspecified.
///
/// The first action failure cancels a token derived from
/// [`ParallelOptions::cancellation`], so sibling workers stop pulling new
/// items at their next cursor acquisition (in-flight actions run to
/// completion), and is returned wrapped with the item that caused it. The
/// derived token is also what each action invocation receives, so an action
/// performing its own I/O can observe the stop signal.
///
/// An empty sequence resolves immediately with success. A token that is
/// already cancelled on entry resolves with [`ParallelError::Cancelled`]
/// without processing any item.
pub async fn for_each_parallel<I, T, F, Fut>(
	source: I,
	options: ParallelOptions,
	action: F,
) -> Result<(), ParallelError<T>>
where
	I: IntoIterator<Item = T>,
	I::IntoIter: Send + 'static,
	T: Clone + fmt::Debug + fmt::Display + Send + 'static,
	F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = AnyEmptyResult> + Send + 'static,
{
	let workers = effective_parallelism(options.max_parallelism);
	let stop = options.cancellation.child_token();
	let cursor = Arc::new(Mutex::new(source.into_iter()));
	let action = Arc::new(action);
	tracing::debug!(workers, "parallel.for_each.start");

	let mut tasks: JoinSet<Result<(), ParallelError<T>>> = JoinSet::new();
	for _ in 0..workers {
		let cursor = Arc::clone(&cursor);
		let action = Arc::clone(&action);
		let caller = options.cancellation.clone();
		let stop = stop.clone();
		tasks.spawn(async move {
			loop {
				if stop.is_cancelled() {
					// The derived token fires for both a caller cancellation
					// and a sibling failure; only the former is a
					// cancellation outcome, the sibling carries its own.
					return if caller.is_cancelled() {
						Err(ParallelError::Cancelled)
					} else {
						Ok(())
					};
				}

				let item = cursor.lock().await.next();
				let Some(item) = item else {
					return Ok(());
				};

				if let Err(source) = action(item.clone(), stop.clone()).await {
					stop.cancel();
					tracing::trace!(item = %item, "parallel.for_each.item_failed");
					return Err(ParallelError::Item { item, source });
				}
			}
		});
	}

	let mut failure = None;
	let mut cancelled = false;
	while let Some(joined) = tasks.join_next().await {
		match joined {
			Ok(Ok(())) => {}
			Ok(Err(ParallelError::Cancelled)) => cancelled = true,
			Ok(Err(item_failure)) => {
				// Whichever failed worker joins first is reported; later
				// concurrent failures arrive after cancellation has already
				// propagated and are dropped.
				failure.get_or_insert(item_failure);
			}
			Err(join_error) => {
				// A panicking action is a defect, not an item outcome.
				if join_error.is_panic() {
					std::panic::resume_unwind(join_error.into_panic());
				}
			}
		}
	}

	match failure {
		Some(failure) => Err(failure),
		None if cancelled => Err(ParallelError::Cancelled),
		None => Ok(()),
	}
}
