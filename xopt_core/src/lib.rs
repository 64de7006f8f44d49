//! `xopt_core` is the core library for the xopt build-time xaml optimizer.
//! It provides the bounded-parallel engine that fans per-file optimizations
//! out over a project's xaml files, the idempotent xmlns attribute allocator
//! optimizations use to introduce namespaces, and the contracts optimizers
//! implement. The concrete markup rewrites themselves are pluggable policies
//! living outside this crate.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Loaded xaml files (XamlFiles)
//!   → for_each (bounded-parallel fan-out: shared cursor, cooperative
//!     cancellation, fail-fast with the offending file)
//!   → XamlOptimizer::optimize (per-file rewrite, one writer per document)
//!   → ensure_xmlns_attribute (non-colliding prefix, anchored insertion)
//!   → OptimizationResult (diagnostics + additional files)
//! ```
//!
//! ## Key Types
//!
//! - [`XamlFiles`] — The project's fixed, ordered file set with a capped
//!   parallel `for_each`.
//! - [`ParallelOptions`] / [`ParallelError`] — Worker cap, cancellation and
//!   the aggregated failure of a fan-out call.
//! - [`XmlnsInsertion`] / [`XmlnsDeclaration`] — Placement policy and result
//!   of [`ensure_xmlns_attribute`].
//! - [`XamlPlatform`] / [`XamlPlatformInfo`] — Per-dialect namespace tables.
//! - [`XamlOptimizer`] / [`OptimizationResult`] — The orchestrator-facing
//!   optimization contract.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xopt_core::Document;
//! use xopt_core::Element;
//! use xopt_core::XamlFile;
//! use xopt_core::XamlFiles;
//! use xopt_core::XamlPlatform;
//! use xopt_core::ensure_xmlns_attribute;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let info = XamlPlatform::Wpf.info();
//! let files = XamlFiles::with_parallelism(
//! 	vec![XamlFile::new(
//! 		Document::new(Element::new("ResourceDictionary")),
//! 		"Themes/Generic.xaml",
//! 		"\n",
//! 	)],
//! 	4,
//! );
//!
//! let insertion = info.default_insertion();
//! files
//! 	.for_each(move |file, _cancellation| {
//! 		let insertion = insertion.clone();
//! 		async move {
//! 			file.with_document_mut(|document| {
//! 				ensure_xmlns_attribute(
//! 					document.root_mut(),
//! 					"http://schemas.microsoft.com/winfx/2006/xaml/presentation/options",
//! 					"po",
//! 					&insertion,
//! 				);
//! 			});
//! 			Ok(())
//! 		}
//! 	})
//! 	.await?;
//! # Ok(())
//! # }
//! ```

pub use document::*;
pub use error::*;
pub use namespace::*;
pub use optimizer::*;
pub use parallel::*;
pub use platform::*;
pub use xml::*;

mod document;
mod error;
mod namespace;
mod optimizer;
mod parallel;
mod platform;
pub mod xml;

#[cfg(test)]
mod __fixtures;
