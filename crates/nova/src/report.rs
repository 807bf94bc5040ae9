//! Plain-text rendering of analysis results

use std::fmt::Write;

use crate::lexer::Token;
use crate::lines::LineGroup;
use crate::sema::SemanticReport;
use crate::syntax::SyntaxResult;

/// Token export: one line per source line, `value -> CODE` pairs joined by `, `
pub fn export_tokens(lines: &LineGroup) -> String {
    lines
        .iter()
        .map(|(_, tokens)| {
            tokens
                .iter()
                .map(|t| format!("{} -> {}", t.value, t.kind.code()))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<8} {}", "LINE", "CODE", "VALUE");
    for token in tokens {
        let _ = writeln!(out, "{:<6} {:<8} {}", token.line, token.kind.code(), token.value);
    }
    out
}

pub fn render_syntax(results: &[SyntaxResult]) -> String {
    let mut out = String::new();
    for result in results {
        match &result.message {
            Some(message) if !result.valid => {
                let _ = writeln!(out, "line {:<4} invalid  {}", result.line, message);
            }
            _ => {
                let _ = writeln!(out, "line {:<4} valid", result.line);
            }
        }
    }
    out
}

pub fn render_semantic(report: &SemanticReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Variables:");
    for var in &report.variables {
        let _ = writeln!(
            out,
            "  {:<16} {:<8} line {:<4} declared={} valid_name={} value={}",
            var.name,
            var.ty.name(),
            var.line,
            var.is_declared,
            var.is_valid_name,
            var.value.as_deref().unwrap_or("-")
        );
    }

    let _ = writeln!(out, "Symbol balance:");
    for entry in &report.symbol_balance {
        let _ = writeln!(
            out,
            "  {:<8} opened={} closed={}{}",
            entry.class.to_string(),
            entry.opened,
            entry.closed,
            if entry.is_balanced() { "" } else { "  (unbalanced)" }
        );
    }

    let _ = writeln!(out, "Control structures:");
    for entry in report.control_balance.iter().filter(|e| e.used) {
        let _ = writeln!(
            out,
            "  {:<8} occurrences={} closed={} unclosed={}",
            entry.kind.to_string(),
            entry.occurrences,
            entry.closed(),
            entry.unclosed
        );
    }
    if !report.unused_structures.is_empty() {
        let unused: Vec<String> = report.unused_structures.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "  unused: {}", unused.join(", "));
    }

    let _ = writeln!(out, "Errors:");
    if report.errors.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for error in &report.errors {
        let _ = writeln!(out, "  {}", error);
    }
    out
}
