#![allow(dead_code)]

use lumira::{Interpreter, InterpreterError, VariableStore};
use std::io::Cursor;

pub struct RunOutcome {
    pub result: Result<(), InterpreterError>,
    pub output: String,
    pub store: VariableStore,
}

pub fn run_with_input(source: &str, input: &str) -> RunOutcome {
    let mut interpreter = Interpreter::with_io(Cursor::new(input.to_string()), Vec::new());
    let result = interpreter.run(source);
    let store = interpreter.store().clone();
    let output = String::from_utf8(interpreter.into_output()).expect("output should be UTF-8");
    RunOutcome { result, output, store }
}

pub fn run_script(source: &str) -> RunOutcome {
    run_with_input(source, "")
}

/// Run a script that must finish cleanly and return what it printed.
pub fn output_of(source: &str) -> String {
    let outcome = run_script(source);
    if let Err(e) = &outcome.result {
        panic!("Script should succeed, failed with: {}", e);
    }
    outcome.output
}
