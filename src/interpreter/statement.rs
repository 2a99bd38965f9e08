//! Statement recognition.
//!
//! Each source line is classified exactly once by its prefix. Rules are
//! checked in declaration order and the first match wins; only the comment
//! rule looks at the trimmed line, every other rule matches the line as is.

pub const COMMENT_MARKER: &str = "~!";
pub const LET_PREFIX: &str = "let ";
pub const PRINT_PREFIX: &str = "printos(";
pub const SCAN_PREFIX: &str = "inscan()";

/// A construct whose keyword is reserved but not yet executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Function,
    Conditional,
    Loop,
}

impl Construct {
    pub const ALL: [Construct; 3] = [Construct::Function, Construct::Conditional, Construct::Loop];

    pub fn keyword(self) -> &'static str {
        match self {
            Construct::Function => "defn ",
            Construct::Conditional => "if ",
            Construct::Loop => "foros ",
        }
    }

    /// The placeholder line printed instead of executing the construct.
    pub fn message(self) -> &'static str {
        match self {
            Construct::Function => "~! Function definition support coming in v0.3",
            Construct::Conditional => "~! Conditional support coming in v0.3",
            Construct::Loop => "~! Loop support coming in v0.3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Comment,
    /// `let <binding>`; `binding` is everything after the prefix.
    Let { binding: &'a str },
    /// `printos(<args>`; `args` is everything after the prefix, closing
    /// parenthesis included.
    Print { args: &'a str },
    Scan,
    Stub(Construct),
    Unknown,
}

impl Statement<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Comment => "comment",
            Statement::Let { .. } => "let",
            Statement::Print { .. } => "printos",
            Statement::Scan => "inscan",
            Statement::Stub(_) => "stub",
            Statement::Unknown => "unknown",
        }
    }
}

pub fn classify(line: &str) -> Statement<'_> {
    if line.trim().starts_with(COMMENT_MARKER) {
        return Statement::Comment;
    }
    if let Some(binding) = line.strip_prefix(LET_PREFIX) {
        return Statement::Let { binding };
    }
    if let Some(args) = line.strip_prefix(PRINT_PREFIX) {
        return Statement::Print { args };
    }
    if line.starts_with(SCAN_PREFIX) {
        return Statement::Scan;
    }
    Construct::ALL
        .into_iter()
        .find(|construct| line.starts_with(construct.keyword()))
        .map_or(Statement::Unknown, Statement::Stub)
}
