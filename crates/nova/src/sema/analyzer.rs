//! Semantic analyzer - symbol table, type checks and structure balance

use std::collections::HashSet;

use super::balance::{BalanceTracker, ControlBalanceEntry, ControlKind, SymbolBalanceEntry, SymbolClass};
use super::error::{ErrorKind, SemanticError};
use super::symbols::{SymbolTable, Variable};
use super::types::{is_conflict, DataType};
use crate::lexer::{Token, TokenKind};

/// Character every variable name must start with unless configured otherwise
pub const DEFAULT_NAME_PREFIX: char = '_';

/// Everything the analyzer learned about one token stream
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticReport {
    pub variables: Vec<Variable>,
    pub errors: Vec<SemanticError>,
    pub symbol_balance: Vec<SymbolBalanceEntry>,
    pub control_balance: Vec<ControlBalanceEntry>,
    /// Control-structure kinds that never occur
    pub unused_structures: Vec<ControlKind>,
}

impl SemanticReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &SemanticError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// Semantic analyzer over a flat token stream.
///
/// Holds configuration only; every call to [`analyze`](Self::analyze)
/// starts from an empty symbol table.
#[derive(Debug, Clone)]
pub struct SemanticAnalyzer {
    name_prefix: char,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX,
        }
    }

    pub fn with_name_prefix(name_prefix: char) -> Self {
        Self { name_prefix }
    }

    pub fn name_prefix(&self) -> char {
        self.name_prefix
    }

    /// Analyze a token stream
    pub fn analyze(&self, tokens: &[Token]) -> SemanticReport {
        let mut pass = Pass::new(tokens, self.name_prefix);
        // First pass: discover every identifier
        pass.discover();
        // Second pass: declarations, assignments, structure and balance
        pass.check();
        pass.finish()
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Function whose body is being walked
struct FunctionContext {
    name: String,
    return_type: DataType,
    /// Brace depth at the header; the body ends when depth returns here
    depth: u32,
}

/// How a keyword token takes part in control-structure balance
enum Occurrence {
    Opens(ControlKind),
    /// `while` closing a `do` block
    Tail(ControlKind),
}

/// Mutable state of a single `analyze` call
struct Pass<'t> {
    tokens: &'t [Token],
    name_prefix: char,
    symbols: SymbolTable,
    errors: Vec<SemanticError>,
    reported_names: HashSet<(String, u32)>,
    reported_operators: HashSet<(String, u32)>,
    reported_assignments: HashSet<(String, u32)>,
    balance: BalanceTracker,
    function: Option<FunctionContext>,
    depth: u32,
    /// Structure closed by the most recent `}`
    last_closed: Option<ControlKind>,
}

impl<'t> Pass<'t> {
    fn new(tokens: &'t [Token], name_prefix: char) -> Self {
        Self {
            tokens,
            name_prefix,
            symbols: SymbolTable::new(),
            errors: Vec::new(),
            reported_names: HashSet::new(),
            reported_operators: HashSet::new(),
            reported_assignments: HashSet::new(),
            balance: BalanceTracker::new(),
            function: None,
            depth: 0,
            last_closed: None,
        }
    }

    fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    fn error(&mut self, kind: ErrorKind, message: String, line: u32) {
        self.errors.push(SemanticError::new(kind, message, line));
    }

    fn operand_type(&self, token: &Token) -> DataType {
        match token.kind {
            TokenKind::Identifier => self.symbols.type_of(&token.value),
            kind => DataType::of_literal(kind),
        }
    }

    // === Pass 1 ===

    fn discover(&mut self) {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::Identifier {
                self.register(token);
            }
            if let Some(start) = self.condition_start(i) {
                for inner in tokens[start..].iter().take_while(|t| t.kind != TokenKind::RParen) {
                    if inner.kind == TokenKind::Identifier {
                        self.register(inner);
                    }
                }
            }
        }
    }

    /// Record an identifier occurrence and check its name
    fn register(&mut self, token: &Token) {
        let valid = token.value.starts_with(self.name_prefix);
        self.symbols.insert(Variable::new(&token.value, token.line, valid));

        if !valid && self.reported_names.insert((token.value.clone(), token.line)) {
            let message = format!(
                "invalid variable name \"{}\": must start with '{}'",
                token.value, self.name_prefix
            );
            self.errors
                .push(SemanticError::new(ErrorKind::InvalidName, message, token.line).with_variable(&token.value));
        }
    }

    /// Index of the first token inside the parenthesized condition of an
    /// `if`, `while`, `for` or `else if` header. Also covers the `} while (...)`
    /// tail of a `do` block.
    fn condition_start(&self, index: usize) -> Option<usize> {
        let open = match self.tokens[index].kind {
            TokenKind::If | TokenKind::While | TokenKind::For => index + 1,
            TokenKind::Else if self.kind_at(index + 1) == Some(TokenKind::If) => index + 2,
            _ => return None,
        };
        (self.kind_at(open) == Some(TokenKind::LParen)).then_some(open + 1)
    }

    // === Pass 2 ===

    fn check(&mut self) {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                kind if kind.is_type_keyword() => self.check_declaration(i),
                TokenKind::Identifier if self.kind_at(i + 1) == Some(TokenKind::Assign) => {
                    self.check_assignment(i);
                }
                TokenKind::Function => self.enter_function(i),
                TokenKind::Return => self.check_return(i),
                _ => {}
            }

            if token.kind.is_unsupported_operator() {
                self.report_unsupported(token);
            }
            if token.kind.is_arithmetic() {
                self.check_operands(i);
            }
            if matches!(token.kind, TokenKind::If | TokenKind::While | TokenKind::For) {
                self.check_header(i);
            }

            self.track_symbols(token);
            match self.occurrence_at(i) {
                Some(Occurrence::Opens(kind)) => self.balance.open_structure(kind, token.line),
                Some(Occurrence::Tail(kind)) => self.balance.count_structure(kind, token.line),
                None => {}
            }
        }
    }

    fn check_declaration(&mut self, index: usize) {
        let tokens = self.tokens;
        let Some(name) = tokens.get(index + 1).filter(|t| t.kind == TokenKind::Identifier) else {
            return;
        };
        let keyword = &tokens[index];
        let ty = DataType::from_type_keyword(keyword.kind).unwrap_or_default();

        match self.symbols.lookup_mut(&name.value) {
            Some(var) if var.is_declared => {
                let message = format!("variable \"{}\" has already been declared", name.value);
                self.errors.push(
                    SemanticError::new(ErrorKind::Redeclaration, message, keyword.line).with_variable(&name.value),
                );
            }
            Some(var) => {
                var.is_declared = true;
                var.ty = ty;
            }
            // Every identifier was registered during discovery
            None => {}
        }
    }

    fn check_assignment(&mut self, index: usize) {
        let tokens = self.tokens;
        let target = &tokens[index];
        let Some(declared) = self.symbols.lookup(&target.value).filter(|v| v.is_declared).map(|v| v.ty) else {
            return;
        };
        let Some(value) = tokens.get(index + 2) else {
            return;
        };
        let assigned = self.operand_type(value);

        if is_conflict(declared, assigned) {
            if self.reported_assignments.insert((target.value.clone(), target.line)) {
                let message = format!(
                    "incompatible types: variable \"{}\" is {} but is assigned a {} value",
                    target.value, declared, assigned
                );
                self.errors.push(
                    SemanticError::new(ErrorKind::IncompatibleAssignment, message, target.line)
                        .with_variable(&target.value),
                );
            }
        } else if let Some(var) = self.symbols.lookup_mut(&target.value) {
            var.value = Some(value.value.clone());
        }
    }

    fn report_unsupported(&mut self, token: &Token) {
        if self.reported_operators.insert((token.value.clone(), token.line)) {
            self.error(
                ErrorKind::UnsupportedOperator,
                format!("operator \"{}\" is not supported", token.value),
                token.line,
            );
        }
    }

    fn check_operands(&mut self, index: usize) {
        let tokens = self.tokens;
        let (Some(left), Some(right)) = (index.checked_sub(1).and_then(|i| tokens.get(i)), tokens.get(index + 1))
        else {
            return;
        };
        let left_type = self.operand_type(left);
        let right_type = self.operand_type(right);

        if is_conflict(left_type, right_type) {
            let operator = &tokens[index];
            self.error(
                ErrorKind::IncompatibleOperands,
                format!(
                    "incompatible operand types: {} {} {}",
                    left_type, operator.value, right_type
                ),
                operator.line,
            );
        }
    }

    /// `if`/`while`/`for` need `(` right after the keyword and a `)` on the same line
    fn check_header(&mut self, index: usize) {
        let tokens = self.tokens;
        let keyword = &tokens[index];
        let rest_of_line = move || {
            tokens
                .get(index + 2..)
                .unwrap_or_default()
                .iter()
                .take_while(move |t| t.line == keyword.line)
        };

        if self.kind_at(index + 1) != Some(TokenKind::LParen) {
            self.error(
                ErrorKind::IncompleteControlStructure,
                format!(
                    "incomplete {} structure: missing opening parenthesis for the condition",
                    keyword.value
                ),
                keyword.line,
            );
        } else if !rest_of_line().any(|t| t.kind == TokenKind::RParen) {
            self.error(
                ErrorKind::IncompleteControlStructure,
                format!(
                    "incomplete {} structure: missing closing parenthesis for the condition",
                    keyword.value
                ),
                keyword.line,
            );
        }

        if keyword.kind == TokenKind::For {
            let separators = rest_of_line()
                .take_while(|t| t.kind != TokenKind::RParen)
                .filter(|t| t.kind == TokenKind::Semi)
                .count();
            if separators < 2 {
                self.error(
                    ErrorKind::IncompleteForStructure,
                    "incomplete for structure: initialization, condition and increment must be separated by ';'"
                        .to_string(),
                    keyword.line,
                );
            }
        }
    }

    /// `function <type> <name>` starts a function context
    fn enter_function(&mut self, index: usize) {
        let tokens = self.tokens;
        let Some(return_type) = self.kind_at(index + 1).and_then(DataType::from_type_keyword) else {
            return;
        };
        if let Some(name) = tokens.get(index + 2).filter(|t| t.kind == TokenKind::Identifier) {
            self.function = Some(FunctionContext {
                name: name.value.clone(),
                return_type,
                depth: self.depth,
            });
        }
    }

    fn check_return(&mut self, index: usize) {
        let tokens = self.tokens;
        let (Some(function), Some(value)) = (&self.function, tokens.get(index + 1)) else {
            return;
        };
        let returned = self.operand_type(value);

        if is_conflict(function.return_type, returned) {
            let message = format!(
                "incompatible return type: function \"{}\" expects {} but returns {}",
                function.name, function.return_type, returned
            );
            self.error(ErrorKind::IncompatibleReturn, message, tokens[index].line);
        }
    }

    fn track_symbols(&mut self, token: &Token) {
        if let Some(class) = SymbolClass::opened_by(token.kind) {
            self.balance.open_symbol(class);
            if class == SymbolClass::Brace {
                self.depth += 1;
            }
        }

        if let Some(class) = SymbolClass::closed_by(token.kind) {
            self.balance.close_symbol(class);
            if class == SymbolClass::Brace {
                self.depth = self.depth.saturating_sub(1);
                self.last_closed = self.balance.close_block();
                if self.function.as_ref().is_some_and(|f| f.depth == self.depth) {
                    self.function = None;
                }
            }
        }
    }

    fn occurrence_at(&self, index: usize) -> Option<Occurrence> {
        let kind = self.tokens[index].kind;
        let previous = index.checked_sub(1).and_then(|i| self.kind_at(i));

        match kind {
            TokenKind::Else if self.kind_at(index + 1) == Some(TokenKind::If) => {
                Some(Occurrence::Opens(ControlKind::ElseIf))
            }
            // Counted together with its `else`
            TokenKind::If if previous == Some(TokenKind::Else) => None,
            TokenKind::While
                if previous == Some(TokenKind::RBrace) && self.last_closed == Some(ControlKind::Do) =>
            {
                Some(Occurrence::Tail(ControlKind::While))
            }
            _ => ControlKind::from_keyword(kind).map(Occurrence::Opens),
        }
    }

    fn finish(mut self) -> SemanticReport {
        for var in self.symbols.iter() {
            if !var.is_declared {
                self.errors.push(
                    SemanticError::new(
                        ErrorKind::UndeclaredUse,
                        format!("variable \"{}\" used without declaration", var.name),
                        var.line,
                    )
                    .with_variable(&var.name),
                );
            }
        }

        let control_balance = self.balance.control_entries();
        for entry in control_balance.iter().filter(|e| !e.is_balanced()) {
            self.errors.push(SemanticError::new(
                ErrorKind::UnclosedControlStructure,
                format!("unclosed {} structure ({} unclosed)", entry.kind, entry.unclosed),
                self.balance.first_line(entry.kind).unwrap_or(0),
            ));
        }

        let symbol_balance = self.balance.symbol_entries();
        for entry in symbol_balance.iter().filter(|e| !e.is_balanced()) {
            self.errors.push(SemanticError::new(
                ErrorKind::UnbalancedSymbols,
                format!(
                    "unbalanced {}: {} opened, {} closed",
                    entry.class.plural(),
                    entry.opened,
                    entry.closed
                ),
                0,
            ));
        }

        let unused_structures = control_balance.iter().filter(|e| !e.used).map(|e| e.kind).collect();

        SemanticReport {
            variables: self.symbols.into_variables(),
            errors: self.errors,
            symbol_balance,
            control_balance,
            unused_structures,
        }
    }
}

/// Analyze a token stream with the default configuration
pub fn analyze(tokens: &[Token]) -> SemanticReport {
    SemanticAnalyzer::new().analyze(tokens)
}
