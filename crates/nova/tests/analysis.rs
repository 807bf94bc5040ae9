//! End-to-end tests over the full lex -> group -> validate -> analyze pipeline.

use nova_analyzer::lexer::TokenKind;
use nova_analyzer::report::export_tokens;
use nova_analyzer::sema::{ControlKind, DataType, ErrorKind, SemanticReport, SymbolClass};
use nova_analyzer::{AnalyzerConfig, Pipeline, analyze, group_by_line, tokenize};
use pretty_assertions::assert_eq;

const PROGRAM: &str = r#"function int _main() {
  int _count = 0;
  float _ratio = 1.5;
  string _name = "nova";
  if (_count > 0) {
    output("positive");
  } else {
    _count = 1;
  }
  while (_count < 10) {
    _count = _count + 1;
  }
  return _count;
}
"#;

fn semantic(source: &str) -> SemanticReport {
    analyze(&tokenize(source))
}

fn error_kinds(report: &SemanticReport) -> Vec<ErrorKind> {
    report.errors.iter().map(|e| e.kind).collect()
}

// -----------------------------------------------------------
// Lexing and grouping
// -----------------------------------------------------------

#[test]
fn lines_never_decrease() {
    for source in [PROGRAM, "", "@@@\n\n#", "int _x;\r\n\t_x = 'a';", "\"unterminated\n_x = 1;"] {
        let tokens = tokenize(source);
        assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line), "{source:?}");
    }
}

#[test]
fn tokenize_is_deterministic() {
    assert_eq!(tokenize(PROGRAM), tokenize(PROGRAM));
}

#[test]
fn grouping_preserves_token_order() {
    let tokens = tokenize(PROGRAM);
    assert_eq!(group_by_line(&tokens).flatten(), tokens);
}

#[test]
fn scanning_continues_after_unterminated_string() {
    let tokens = tokenize("_a = \"abc\n_b = 1;");
    let b = tokens.iter().find(|t| t.value == "_b");
    assert_eq!(b.map(|t| (t.kind, t.line)), Some((TokenKind::Identifier, 2)));

    let errors: Vec<&str> = tokens.iter().filter(|t| t.is_error()).map(|t| t.value.as_str()).collect();
    assert_eq!(errors, vec!["\""]);

    let analysis = Pipeline::new().run("int _a;\n_a = \"abc\n_a = 1;");
    let invalid: Vec<u32> = analysis.invalid_lines().map(|r| r.line).collect();
    assert_eq!(invalid, Vec::<u32>::new());
    assert_eq!(analysis.lines.get(3).map(<[_]>::len), Some(4));
}

#[test]
fn unrecognized_characters_become_error_tokens() {
    let tokens = tokenize("int _x; $ _x = 1;");
    let errors: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::LexicalError)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(errors, vec!["$"]);
}

// -----------------------------------------------------------
// Full pipeline
// -----------------------------------------------------------

#[test]
fn clean_program_has_no_errors() {
    let analysis = Pipeline::new().run(PROGRAM);

    assert!(!analysis.has_lexical_errors());
    assert!(analysis.syntax.iter().all(|r| r.valid), "{:?}", analysis.syntax);
    assert!(analysis.semantic.errors.is_empty(), "{:?}", analysis.semantic.errors);
    assert!(analysis.is_clean());

    let count = analysis.semantic.variable("_count").map(|v| v.ty);
    assert_eq!(count, Some(DataType::Integer));
    assert_eq!(
        analysis.semantic.unused_structures,
        vec![ControlKind::ElseIf, ControlKind::For, ControlKind::Do]
    );
}

#[test]
fn clean_program_exports_one_line_per_source_line() {
    let analysis = Pipeline::new().run(PROGRAM);
    let exported = export_tokens(&analysis.lines);

    let source_lines = PROGRAM.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(exported.lines().count(), source_lines);
    assert_eq!(exported.lines().nth(1), Some("int -> TPINT, _count -> IDEN, = -> ASSGN, 0 -> NUMINT, ; -> CH;"));
}

#[test]
fn configured_prefix_applies_to_every_name() {
    let config = AnalyzerConfig {
        name_prefix: 'n',
        ..AnalyzerConfig::default()
    };
    let pipeline = Pipeline::with_config(config).unwrap();

    assert!(pipeline.run("int nTotal;\nnTotal = 4;").is_clean());
    let analysis = pipeline.run("int _total;");
    assert_eq!(error_kinds(&analysis.semantic), vec![ErrorKind::InvalidName]);
}

// -----------------------------------------------------------
// Semantic properties
// -----------------------------------------------------------

#[test]
fn declaration_then_compatible_assignment() {
    let report = semantic("int _x; _x = 5;");

    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert_eq!(report.variables.len(), 1);
    let var = &report.variables[0];
    assert_eq!(var.name, "_x");
    assert_eq!(var.ty, DataType::Integer);
    assert!(var.is_declared);
    assert!(report.symbol_balance.iter().all(|e| e.opened == 0 && e.closed == 0));
}

#[test]
fn undeclared_invalid_name() {
    let report = semantic("x = 5;");
    let mut kinds = error_kinds(&report);
    kinds.sort_by_key(|k| k.code());
    assert_eq!(kinds, vec![ErrorKind::InvalidName, ErrorKind::UndeclaredUse]);
}

#[test]
fn incompatible_assignment() {
    let report = semantic("int _x; _x = \"hi\";");
    assert_eq!(error_kinds(&report), vec![ErrorKind::IncompatibleAssignment]);
}

#[test]
fn never_declared_reported_once_at_first_use() {
    let report = semantic("int _sum = 0;\n_sum = _total;\n_total = 2;\n_total = 3;");
    assert_eq!(error_kinds(&report), vec![ErrorKind::UndeclaredUse]);
    assert_eq!(report.errors[0].line, 2);
    assert_eq!(report.errors[0].variable.as_deref(), Some("_total"));
}

#[test]
fn declaration_anywhere_satisfies_earlier_use() {
    let report = semantic("_x = 1;\nint _x;");
    assert!(report.errors.is_empty(), "{:?}", report.errors);
}

#[test]
fn integer_plus_float_operands_conflict() {
    let report = semantic("int _i = 1;\nfloat _f = 2.5;\n_f = _i + _f;");
    assert_eq!(error_kinds(&report), vec![ErrorKind::IncompatibleOperands]);
    assert_eq!(report.errors[0].line, 3);
}

#[test]
fn redeclaration_on_second_line() {
    let report = semantic("int _a;\nint _b;\nstring _a;");
    assert_eq!(error_kinds(&report), vec![ErrorKind::Redeclaration]);
    assert_eq!(report.errors[0].line, 3);
}

#[test]
fn invalid_name_once_per_distinct_line() {
    let report = semantic("int bad;\nbad = bad + bad;");
    let lines: Vec<u32> = report.errors_of(ErrorKind::InvalidName).map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 2]);
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn extra_open_brace_unbalances_braces_only() {
    let report = semantic("int _x = 1;\n{\n{\n}");
    assert_eq!(error_kinds(&report), vec![ErrorKind::UnbalancedSymbols]);

    let braces = report
        .symbol_balance
        .iter()
        .find(|e| e.class == SymbolClass::Brace)
        .copied();
    assert_eq!(braces.map(|e| (e.opened, e.closed)), Some((2, 1)));
}

#[test]
fn closed_program_balances_every_class() {
    let report = semantic(PROGRAM);
    assert!(report.symbol_balance.iter().all(|e| e.is_balanced()));
    assert!(report.control_balance.iter().all(|e| e.is_balanced()));
}

#[test]
fn for_header_missing_separator() {
    let report = semantic("int _i;\nfor (_i = 0; _i < 10) {\n}");
    assert_eq!(error_kinds(&report), vec![ErrorKind::IncompleteForStructure]);
    assert_eq!(report.errors[0].line, 2);
}

#[test]
fn else_if_closed_by_one_brace() {
    let source = "int _x = 1;\nif (_x > 0) {\n} else if (_x < 0) {\n}";
    let report = semantic(source);

    assert!(report.errors.is_empty(), "{:?}", report.errors);
    let else_if = report.control_balance.iter().find(|e| e.kind == ControlKind::ElseIf);
    assert_eq!(else_if.map(|e| (e.occurrences, e.unclosed)), Some((1, 0)));
}

#[test]
fn do_while_leaves_nothing_unclosed() {
    let report = semantic("int _x = 0;\ndo {\n_x = 1;\n} while (_x < 3);");
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert_eq!(report.errors_of(ErrorKind::UnclosedControlStructure).count(), 0);
}

#[test]
fn syntax_and_semantic_are_independent() {
    let analysis = Pipeline::new().run("int _x;\n_x + 1;");
    let invalid: Vec<u32> = analysis.invalid_lines().map(|r| r.line).collect();
    assert_eq!(invalid, vec![2]);
    assert!(analysis.semantic.errors.is_empty(), "{:?}", analysis.semantic.errors);
}
