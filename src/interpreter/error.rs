use crate::diagnostic::{Diagnostic, Label, Span};
use thiserror::Error;

/// Failures that halt a run.
///
/// Malformed literals and unknown statements are recovered where they occur
/// and never show up here.
#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("line {line}: `let` statement has no `=`")]
    MissingAssignment { line: usize, span: Span },

    #[error("line {line}: input closed while `inscan()` was waiting for a line")]
    InputClosed { line: usize, span: Span },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterpreterError {
    /// The 1-based script line the error was raised on, if it belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingAssignment { line, .. }
            | Self::InputClosed { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::MissingAssignment { span, .. }
            | Self::InputClosed { span, .. } => Some(*span),
            Self::Io(_) => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingAssignment { .. } => "E0101",
            Self::InputClosed { .. } => "E0201",
            Self::Io(_) => "E0301",
        }
    }

    /// Convert to a diagnostic for pretty printing
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.headline()).with_code(self.code());
        match self {
            Self::MissingAssignment { span, .. } => diagnostic
                .with_label(Label::new(*span, "expected `<name> = <expression>`"))
                .with_help("bind a value with `let name = \"value\"`"),
            Self::InputClosed { span, .. } => diagnostic
                .with_label(Label::new(*span, "no line left to read"))
                .with_note("every `inscan()` consumes one line of standard input"),
            Self::Io(_) => diagnostic,
        }
    }

    fn headline(&self) -> String {
        match self {
            Self::MissingAssignment { .. } => "`let` statement has no `=`".to_string(),
            Self::InputClosed { .. } => "input closed during `inscan()`".to_string(),
            Self::Io(err) => format!("i/o error: {}", err),
        }
    }
}
