//! Analysis driver and pipeline orchestration

use crate::common::{AnalysisError, AnalysisResult};
use crate::lexer::{tokenize, Token};
use crate::lines::{group_by_line, LineGroup};
use crate::sema::{SemanticAnalyzer, SemanticReport, DEFAULT_NAME_PREFIX};
use crate::syntax::{validate_lines, SyntaxResult};

/// Configuration options for a pipeline run
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Character every variable name must start with
    pub name_prefix: char,
    pub dump_tokens: bool,
    pub verbose: bool,
}

impl AnalyzerConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.name_prefix.is_whitespace() {
            return Err(AnalysisError::config("name prefix must not be whitespace"));
        }
        if self.name_prefix.is_ascii_digit() {
            return Err(AnalysisError::config(format!(
                "name prefix '{}' can never start an identifier",
                self.name_prefix
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX,
            dump_tokens: false,
            verbose: false,
        }
    }
}

/// Results of one full run over a source snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub lines: LineGroup,
    pub syntax: Vec<SyntaxResult>,
    pub semantic: SemanticReport,
}

impl Analysis {
    pub fn lexical_errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_error())
    }

    pub fn has_lexical_errors(&self) -> bool {
        self.lexical_errors().next().is_some()
    }

    pub fn invalid_lines(&self) -> impl Iterator<Item = &SyntaxResult> {
        self.syntax.iter().filter(|r| !r.valid)
    }

    /// No lexical, syntactic or semantic error anywhere
    pub fn is_clean(&self) -> bool {
        !self.has_lexical_errors() && self.invalid_lines().next().is_none() && !self.semantic.has_errors()
    }
}

/// Runs lex -> group -> validate -> analyze on a source buffer
pub struct Pipeline {
    config: AnalyzerConfig,
    analyzer: SemanticAnalyzer,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::from_config(AnalyzerConfig::default())
    }

    /// Build a pipeline after checking the configuration
    pub fn with_config(config: AnalyzerConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: SemanticAnalyzer::with_name_prefix(config.name_prefix),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a complete source snapshot
    pub fn run(&self, source: &str) -> Analysis {
        // Phase 1: Lexing
        if self.config.verbose {
            eprintln!("Lexing...");
        }
        let tokens = tokenize(source);

        if self.config.dump_tokens {
            eprintln!("=== Tokens ===");
            for token in &tokens {
                eprintln!("{:?}", token);
            }
            eprintln!("=== End Tokens ===\n");
        }

        // Phase 2: Line grouping and syntax validation
        if self.config.verbose {
            eprintln!("Validating lines...");
        }
        let lines = group_by_line(&tokens);
        let syntax = validate_lines(&lines);

        // Phase 3: Semantic analysis
        if self.config.verbose {
            eprintln!("Analyzing...");
        }
        let semantic = self.analyzer.analyze(&tokens);

        if self.config.verbose {
            eprintln!(
                "{} tokens, {} lines, {} semantic errors",
                tokens.len(),
                lines.len(),
                semantic.errors.len()
            );
        }

        Analysis {
            tokens,
            lines,
            syntax,
            semantic,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
