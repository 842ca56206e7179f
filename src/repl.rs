use std::io::{BufRead, Write};

use crate::{
    interpreter::{environment::Environment, evaluator::core::eval},
    parse,
};

/// The interactive prompt symbol.
const PROMPT: &str = ">> ";

/// Runs the read-evaluate-print loop until the input ends.
///
/// Every line is lexed, parsed and evaluated in a single environment that
/// persists for the whole session, so bindings carry over between lines.
/// Parse errors are listed under a banner and the session continues;
/// runtime errors are printed in their inspect form. Statements that
/// produce no value print nothing.
///
/// # Errors
/// Returns any I/O error raised while reading input or writing output.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let env = Environment::new().into_ref();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let program = match parse(&line) {
            Ok(program) => program,
            Err(errors) => {
                writeln!(output, "parser errors:")?;
                for error in &errors {
                    writeln!(output, "\t{error}")?;
                }
                continue;
            },
        };

        match eval(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
