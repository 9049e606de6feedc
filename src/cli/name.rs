//! Where the lecturer name comes from

use std::io::{self, BufRead, Write};

/// Source of the lecturer name for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// Name given on the command line
    Argument(String),
    /// Ask on stdin
    Console,
}

impl NameSource {
    pub fn from_arg(name: Option<String>) -> Self {
        match name {
            Some(name) => Self::Argument(name),
            None => Self::Console,
        }
    }

    /// Produce the trimmed lecturer name.
    pub fn resolve(self) -> io::Result<String> {
        match self {
            Self::Argument(name) => Ok(name.trim().to_string()),
            Self::Console => {
                let stdin = io::stdin();
                prompt_for_name(&mut stdin.lock(), &mut io::stdout())
            }
        }
    }
}

fn prompt_for_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "Enter the lecturer's name: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
