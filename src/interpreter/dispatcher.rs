use super::error::InterpreterError;
use super::evaluator::evaluate;
use super::io::{self as console, INPUT_PROMPT};
use super::statement::{classify, Statement, LET_PREFIX};
use super::store::VariableStore;
use crate::diagnostic::{Diagnostic, Span};
use crate::value::Value;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Executes script lines against one variable store.
///
/// Each interpreter owns its store for its whole lifetime; two interpreters
/// never share bindings.
pub struct Interpreter<R, W> {
    store: VariableStore,
    input: R,
    output: W,
    line_number: usize,
}

impl Interpreter<StdinLock<'static>, Stdout> {
    /// An interpreter wired to the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for Interpreter<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            store: VariableStore::new(),
            input,
            output,
            line_number: 0,
        }
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run a whole script.
    ///
    /// The script is trimmed as a whole and then executed line by line, top to
    /// bottom. Unknown lines are reported and skipped; the first fatal error
    /// stops the run. Error spans are byte offsets into `source`.
    pub fn run(&mut self, source: &str) -> Result<(), InterpreterError> {
        let script = source.trim();
        if script.is_empty() {
            tracing::debug!("script is empty, nothing to run");
            return Ok(());
        }

        let mut offset = source.len() - source.trim_start().len();
        self.line_number = source[..offset].matches('\n').count();
        tracing::debug!(bytes = source.len(), lines = script.lines().count(), "running script");

        for raw_line in script.split_inclusive('\n') {
            let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.execute_at(line, offset)?;
            offset += raw_line.len();
        }
        Ok(())
    }

    /// Execute one line. Lines passed here are numbered consecutively and
    /// error spans are relative to the line itself.
    pub fn execute(&mut self, line: &str) -> Result<(), InterpreterError> {
        self.execute_at(line, 0)
    }

    fn execute_at(&mut self, line: &str, offset: usize) -> Result<(), InterpreterError> {
        self.line_number += 1;
        let statement = classify(line);
        tracing::trace!(line = self.line_number, kind = statement.name(), "dispatch");

        match statement {
            Statement::Comment => Ok(()),
            Statement::Let { binding } => self.bind(binding, offset + LET_PREFIX.len()),
            Statement::Print { args } => self.print(args),
            Statement::Scan => self.scan(line, offset),
            Statement::Stub(construct) => {
                tracing::warn!(line = self.line_number, construct = ?construct, "construct is not executable yet");
                console::write_line(&mut self.output, construct.message())?;
                Ok(())
            }
            Statement::Unknown => {
                console::write_line(&mut self.output, &format!("Unknown syntax: {}", line))?;
                Ok(())
            }
        }
    }

    fn bind(&mut self, binding: &str, offset: usize) -> Result<(), InterpreterError> {
        let Some((name, expr)) = binding.split_once('=') else {
            return Err(InterpreterError::MissingAssignment {
                line: self.line_number,
                span: Span::new(offset, offset + binding.len()),
            });
        };

        let name = name.trim();
        let value = evaluate(expr, &self.store);
        tracing::debug!(name, kind = value.kind_name(), "bind");
        self.store.bind(name, value);
        Ok(())
    }

    fn print(&mut self, args: &str) -> Result<(), InterpreterError> {
        // The last character stands in for `)` whatever it actually is.
        let close_at = args.char_indices().last().map_or(0, |(index, _)| index);
        let inner = &args[..close_at];

        let separator = if inner.contains('+') { '+' } else { ',' };
        let values: Vec<Value> = inner.split(separator).map(|piece| evaluate(piece, &self.store)).collect();
        console::print_values(&mut self.output, &values)?;
        Ok(())
    }

    /// Prompt for a line and throw it away; nothing can receive the result.
    fn scan(&mut self, line: &str, offset: usize) -> Result<(), InterpreterError> {
        match console::read_line(&mut self.input, &mut self.output, INPUT_PROMPT)? {
            Some(input) => {
                tracing::debug!(line = self.line_number, input = %input, "inscan() input discarded");
                Ok(())
            }
            None => Err(InterpreterError::InputClosed {
                line: self.line_number,
                span: Span::new(offset, offset + line.len()),
            }),
        }
    }
}

/// Interpret a script against stdin and stdout with a fresh variable store.
pub fn interpret(source: &str) -> Result<(), InterpreterError> {
    Interpreter::new().run(source)
}

/// Like [`interpret`], with a fatal error turned into renderable diagnostics.
pub fn interpret_with_diagnostics(source: &str) -> Result<(), Vec<Diagnostic>> {
    interpret(source).map_err(|err| vec![err.to_diagnostic()])
}
