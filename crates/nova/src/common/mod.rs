//! Common infrastructure shared by the analysis stages and the CLI

mod error;
mod span;

pub use error::{AnalysisError, AnalysisResult, DiagnosticReporter};
pub use span::Span;
