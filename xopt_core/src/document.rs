use std::fmt;
use std::future::Future;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use derive_more::Deref;
use tokio_util::sync::CancellationToken;

use crate::AnyEmptyResult;
use crate::parallel::ParallelError;
use crate::parallel::ParallelOptions;
use crate::parallel::effective_parallelism;
use crate::parallel::for_each_parallel;
use crate::xml::Document;

/// A loaded xaml file: the parsed document together with the path it was
/// loaded from and the line endings it uses, so the build tooling can write
/// it back without churn.
///
/// Cloning is cheap and yields a handle to the *same* document — the clone a
/// fan-out worker processes and the clone carried in a failure report refer
/// to one underlying tree, matching the reference semantics the orchestrator
/// relies on.
#[derive(Clone, Debug)]
pub struct XamlFile {
	document: Arc<Mutex<Document>>,
	path: PathBuf,
	line_endings: String,
}

impl XamlFile {
	/// Wraps a parsed document with its file identity.
	pub fn new(
		document: Document,
		path: impl Into<PathBuf>,
		line_endings: impl Into<String>,
	) -> Self {
		Self {
			document: Arc::new(Mutex::new(document)),
			path: path.into(),
			line_endings: line_endings.into(),
		}
	}

	/// The path the document was loaded from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// The line endings used by the source file.
	pub fn line_endings(&self) -> &str {
		&self.line_endings
	}

	/// Runs `f` with shared access to the document.
	pub fn with_document<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
		let document = self.document.lock().unwrap_or_else(PoisonError::into_inner);
		f(&document)
	}

	/// Runs `f` with exclusive access to the document.
	///
	/// Access is scoped to a synchronous closure, so a lock guard can never
	/// be held across an await point and tree mutation is single-writer per
	/// document even when workers share handles.
	pub fn with_document_mut<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
		let mut document = self.document.lock().unwrap_or_else(PoisonError::into_inner);
		f(&mut document)
	}
}

impl fmt::Display for XamlFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.path.display().fmt(f)
	}
}

/// The fixed, ordered set of xaml files of a project, together with the
/// parallelism cap used by [`XamlFiles::for_each`].
///
/// Dereferences to the underlying `Vec` for indexed access, length and
/// iteration.
#[derive(Clone, Debug, Deref)]
pub struct XamlFiles {
	#[deref]
	files: Vec<XamlFile>,
	max_parallelism: usize,
}

impl XamlFiles {
	/// A collection processed sequentially by [`XamlFiles::for_each`].
	pub fn new(files: Vec<XamlFile>) -> Self {
		Self {
			files,
			max_parallelism: 1,
		}
	}

	/// A collection with an explicit parallelism cap.
	pub fn with_parallelism(files: Vec<XamlFile>, max_parallelism: usize) -> Self {
		Self {
			files,
			max_parallelism,
		}
	}

	/// Processes every file with the configured parallelism cap.
	pub async fn for_each<F, Fut>(&self, action: F) -> Result<(), ParallelError<XamlFile>>
	where
		F: Fn(XamlFile, CancellationToken) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = AnyEmptyResult> + Send + 'static,
	{
		let options = ParallelOptions::new(effective_parallelism(self.max_parallelism));
		self.for_each_with(options, action).await
	}

	/// Processes every file with explicit [`ParallelOptions`].
	pub async fn for_each_with<F, Fut>(
		&self,
		options: ParallelOptions,
		action: F,
	) -> Result<(), ParallelError<XamlFile>>
	where
		F: Fn(XamlFile, CancellationToken) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = AnyEmptyResult> + Send + 'static,
	{
		for_each_parallel(self.files.clone(), options, action).await
	}
}
