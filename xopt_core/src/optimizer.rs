use std::fmt;
use std::path::PathBuf;

use crate::XoptResult;
use crate::document::XamlFile;
use crate::platform::FileAction;
use crate::platform::XamlPlatform;
use crate::platform::XamlPlatformInfo;

/// A pluggable per-file optimization.
///
/// Implementations rewrite the document of the given [`XamlFile`] in place
/// through [`XamlFile::with_document_mut`]; the orchestrator fans them out
/// over the project's files, one file per worker at a time.
pub trait XamlOptimizer: Send + Sync {
	/// Platforms this optimizer can run on.
	fn supported_platforms(&self) -> &[XamlPlatform];

	/// Applies the optimization to a single file.
	fn optimize(
		&self,
		file: &XamlFile,
		platform_info: &XamlPlatformInfo,
	) -> XoptResult<OptimizationResult>;

	/// Whether this optimizer supports `platform`.
	fn supports(&self, platform: XamlPlatform) -> bool {
		self.supported_platforms().contains(&platform)
	}
}

/// Outcome of running one optimizer over one file.
#[derive(Debug, Default)]
pub struct OptimizationResult {
	applied: bool,
	additional_files: Vec<AdditionalFile>,
	diagnostics: Vec<XamlDiagnostic>,
}

impl OptimizationResult {
	/// The optimizer rewrote the document.
	pub fn applied() -> Self {
		Self {
			applied: true,
			..Self::default()
		}
	}

	/// The optimizer rewrote the document and emitted supporting files or
	/// diagnostics.
	pub fn applied_with(
		additional_files: Vec<AdditionalFile>,
		diagnostics: Vec<XamlDiagnostic>,
	) -> Self {
		Self {
			applied: true,
			additional_files,
			diagnostics,
		}
	}

	/// The optimizer left the document untouched.
	pub fn none() -> Self {
		Self::default()
	}

	/// The optimizer left the document untouched but reported diagnostics.
	pub fn none_with(diagnostics: Vec<XamlDiagnostic>) -> Self {
		Self {
			diagnostics,
			..Self::default()
		}
	}

	/// Whether the document was rewritten.
	pub fn was_applied(&self) -> bool {
		self.applied
	}

	/// Supporting files the optimizer produced.
	pub fn additional_files(&self) -> &[AdditionalFile] {
		&self.additional_files
	}

	/// Diagnostics the optimizer reported.
	pub fn diagnostics(&self) -> &[XamlDiagnostic] {
		&self.diagnostics
	}
}

/// A file emitted alongside an optimized document, e.g. generated code the
/// rewritten markup refers to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdditionalFile {
	/// How the build should classify the file.
	pub file_action: FileAction,
	/// Where the file should be written.
	pub path: PathBuf,
	/// The file content.
	pub content: String,
	/// Optional project link path for IDE grouping.
	pub link: Option<String>,
}

/// Severity of a [`XamlDiagnostic`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticSeverity {
	Error,
	Warning,
	Info,
}

impl fmt::Display for DiagnosticSeverity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let severity = match self {
			Self::Error => "error",
			Self::Warning => "warning",
			Self::Info => "info",
		};
		f.write_str(severity)
	}
}

/// A diagnostic an optimizer reports against a position in a source file.
///
/// Renders in the `severity code: message in file(line,column)` shape build
/// logs expect.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XamlDiagnostic {
	/// Diagnostic code (e.g. `XO0001`).
	pub code: String,
	/// Human-readable message.
	pub message: String,
	/// Severity the build should report this with.
	pub severity: DiagnosticSeverity,
	/// File the diagnostic refers to.
	pub file: PathBuf,
	/// 1-indexed line number.
	pub line: usize,
	/// 1-indexed column number.
	pub column: usize,
}

impl XamlDiagnostic {
	/// An informational diagnostic.
	pub fn info(
		code: impl Into<String>,
		message: impl Into<String>,
		file: impl Into<PathBuf>,
		line: usize,
		column: usize,
	) -> Self {
		Self::new(code, message, DiagnosticSeverity::Info, file, line, column)
	}

	/// A warning diagnostic.
	pub fn warning(
		code: impl Into<String>,
		message: impl Into<String>,
		file: impl Into<PathBuf>,
		line: usize,
		column: usize,
	) -> Self {
		Self::new(code, message, DiagnosticSeverity::Warning, file, line, column)
	}

	/// An error diagnostic.
	pub fn error(
		code: impl Into<String>,
		message: impl Into<String>,
		file: impl Into<PathBuf>,
		line: usize,
		column: usize,
	) -> Self {
		Self::new(code, message, DiagnosticSeverity::Error, file, line, column)
	}

	fn new(
		code: impl Into<String>,
		message: impl Into<String>,
		severity: DiagnosticSeverity,
		file: impl Into<PathBuf>,
		line: usize,
		column: usize,
	) -> Self {
		Self {
			code: code.into(),
			message: message.into(),
			severity,
			file: file.into(),
			line,
			column,
		}
	}
}

impl fmt::Display for XamlDiagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {}: {} in {}({},{})",
			self.severity,
			self.code,
			self.message,
			self.file.display(),
			self.line,
			self.column
		)
	}
}
