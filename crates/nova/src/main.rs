//! Nova Analyzer - static checks for Nova source files
//!
//! Usage: nova [OPTIONS] <input>

use anyhow::Context;
use clap::Parser as ClapParser;
use nova_analyzer::common::{AnalysisError, DiagnosticReporter};
use nova_analyzer::driver::{AnalyzerConfig, Pipeline};
use nova_analyzer::report;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "nova")]
#[command(author = "Nova Team")]
#[command(version)]
#[command(about = "Lexer, line validator and semantic analyzer for Nova", long_about = None)]
struct Args {
    /// Input source file (.nova)
    #[arg(required = true)]
    input: PathBuf,

    /// Print the token table
    #[arg(long)]
    tokens: bool,

    /// Print per-line syntax results
    #[arg(long)]
    syntax: bool,

    /// Print the semantic report
    #[arg(long)]
    semantic: bool,

    /// Write the token export to this file (refused when errors are found)
    #[arg(long, value_name = "PATH")]
    export_tokens: Option<PathBuf>,

    /// Character every variable name must start with
    #[arg(long, default_value_t = '_')]
    prefix: char,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns whether the source was free of errors
fn run(args: &Args) -> anyhow::Result<bool> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    let config = AnalyzerConfig {
        name_prefix: args.prefix,
        dump_tokens: args.dump_tokens,
        verbose: args.verbose,
    };
    let pipeline = Pipeline::with_config(config)?;

    if args.verbose {
        eprintln!("Analyzing {}", args.input.display());
    }
    let analysis = pipeline.run(&source);

    // With no section selected, print all of them
    let all = !(args.tokens || args.syntax || args.semantic);
    if all || args.tokens {
        println!("=== Tokens ===");
        print!("{}", report::render_tokens(&analysis.tokens));
    }
    if all || args.syntax {
        println!("=== Syntax ===");
        print!("{}", report::render_syntax(&analysis.syntax));
    }
    if all || args.semantic {
        println!("=== Semantic ===");
        print!("{}", report::render_semantic(&analysis.semantic));
    }

    // Diagnostics
    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(filename, source.as_str());
    let mut diagnostics = Vec::new();
    diagnostics.extend(analysis.lexical_errors().map(|t| reporter.lexical_diagnostic(file_id, t)));
    diagnostics.extend(analysis.invalid_lines().map(|r| reporter.syntax_diagnostic(file_id, r)));
    diagnostics.extend(
        analysis
            .semantic
            .errors
            .iter()
            .map(|e| reporter.semantic_diagnostic(file_id, e)),
    );
    reporter.emit(&diagnostics);

    if let Some(path) = &args.export_tokens {
        if !analysis.is_clean() {
            return Err(AnalysisError::export(format!(
                "{} error(s) found, fix them before exporting tokens",
                diagnostics.len()
            ))
            .into());
        }
        fs::write(path, report::export_tokens(&analysis.lines))
            .with_context(|| format!("cannot write {}", path.display()))?;
        if args.verbose {
            eprintln!("Tokens exported to {}", path.display());
        }
    }

    Ok(analysis.is_clean())
}
