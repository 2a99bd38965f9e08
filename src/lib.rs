pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod interpreter;
pub mod sample;
pub mod value;

pub use interpreter::{interpret, Interpreter, InterpreterError, VariableStore};
pub use value::Value;
