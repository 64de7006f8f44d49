use miette::Diagnostic;
use thiserror::Error;

use crate::document::XamlFile;
use crate::parallel::ParallelError;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum XoptError {
	#[error(transparent)]
	#[diagnostic(code(xopt::io_error))]
	Io(#[from] std::io::Error),

	#[error("optimization was cancelled")]
	#[diagnostic(code(xopt::cancelled))]
	Cancelled,

	#[error("failed to optimize `{file}`")]
	#[diagnostic(
		code(xopt::file),
		help("the source error identifies the optimizer that rejected this file")
	)]
	File {
		file: String,
		#[source]
		source: AnyError,
	},

	#[error("platform `{0}` is not supported by this optimizer")]
	#[diagnostic(
		code(xopt::unsupported_platform),
		help("check `XamlOptimizer::supported_platforms` before dispatching")
	)]
	UnsupportedPlatform(String),
}

impl From<ParallelError<XamlFile>> for XoptError {
	fn from(error: ParallelError<XamlFile>) -> Self {
		match error {
			ParallelError::Cancelled => Self::Cancelled,
			ParallelError::Item { item, source } => {
				Self::File {
					file: item.to_string(),
					source,
				}
			}
		}
	}
}

pub type XoptResult<T> = Result<T, XoptError>;
pub type AnyError = Box<dyn std::error::Error + Send + Sync>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
