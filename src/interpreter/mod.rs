pub mod dispatcher;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod statement;
pub mod store;

pub use dispatcher::{interpret, interpret_with_diagnostics, Interpreter};
pub use error::InterpreterError;
pub use evaluator::evaluate;
pub use statement::{classify, Construct, Statement};
pub use store::VariableStore;
