//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{Files, SimpleFiles};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream};
use thiserror::Error;

use crate::lexer::Token;
use crate::sema::SemanticError;
use crate::syntax::SyntaxResult;

/// Failure of an outer surface (configuration, file access, export).
///
/// Lexical, syntactic and semantic problems found in Nova source are never
/// reported through this type; they are part of the analysis result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Export refused: {message}")]
    Export { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    /// Label covering a whole 1-based source line, if the line exists
    fn line_label(&self, file_id: usize, line: u32) -> Option<Label<usize>> {
        let index = (line as usize).checked_sub(1)?;
        let range = self.files.line_range(file_id, index).ok()?;
        Some(Label::primary(file_id, range))
    }

    pub fn lexical_diagnostic(&self, file_id: usize, token: &Token) -> Diagnostic<usize> {
        Diagnostic::error()
            .with_message("Lexical error")
            .with_labels(vec![
                Label::primary(file_id, token.span)
                    .with_message(format!("unrecognized character '{}'", token.value)),
            ])
    }

    pub fn syntax_diagnostic(&self, file_id: usize, result: &SyntaxResult) -> Diagnostic<usize> {
        let message = result.message.clone().unwrap_or_default();
        let diagnostic = Diagnostic::error().with_message("Syntax error");
        match self.line_label(file_id, result.line) {
            Some(label) => diagnostic.with_labels(vec![label.with_message(message)]),
            None => diagnostic.with_notes(vec![message]),
        }
    }

    pub fn semantic_diagnostic(&self, file_id: usize, error: &SemanticError) -> Diagnostic<usize> {
        let diagnostic = Diagnostic::error()
            .with_message("Semantic error")
            .with_code(error.kind.code());
        match self.line_label(file_id, error.line) {
            Some(label) => diagnostic.with_labels(vec![label.with_message(error.message.clone())]),
            None => diagnostic.with_notes(vec![error.message.clone()]),
        }
    }

    /// Write diagnostics to stderr
    pub fn emit(&self, diagnostics: &[Diagnostic<usize>]) {
        let mut writer = self.writer.lock();
        for diagnostic in diagnostics {
            let _ = term::emit(&mut writer, &self.config, &self.files, diagnostic);
        }
    }

    /// Render diagnostics without color into a string
    pub fn render(&self, diagnostics: &[Diagnostic<usize>]) -> String {
        let mut buffer = NoColor::new(Vec::new());
        for diagnostic in diagnostics {
            let _ = term::emit(&mut buffer, &self.config, &self.files, diagnostic);
        }
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
