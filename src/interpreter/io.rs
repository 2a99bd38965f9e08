//! Console primitives used by the dispatcher.

use crate::value::Value;
use std::io::{self, BufRead, Write};

pub const INPUT_PROMPT: &str = "> ";

/// Print the values on one line, separated by single spaces.
pub fn print_values<W: Write>(output: &mut W, values: &[Value]) -> io::Result<()> {
    let rendered: Vec<String> = values.iter().map(Value::to_string).collect();
    write_line(output, &rendered.join(" "))
}

pub fn write_line<W: Write>(output: &mut W, line: &str) -> io::Result<()> {
    writeln!(output, "{}", line)?;
    output.flush()
}

/// Show the prompt and read one line of input without its line ending.
/// Returns `None` once the input is exhausted.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
