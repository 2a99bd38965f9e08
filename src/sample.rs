//! The demo script shipped with the interpreter.

/// Greets the user and prints the language version.
pub const WELCOME: &str = include_str!("../demos/welcome.lum");
