//! Input helpers for entry text and confirmations

use crate::error::Result;
use std::io::{self, BufRead, Read, Write};

/// Resolve entry text from `--content`, standard input, or a fallback
pub fn read_content(content: Option<String>, from_stdin: bool, fallback: &str) -> Result<String> {
    if let Some(value) = content {
        return Ok(value);
    }
    if from_stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fallback.to_string())
}

/// Ask a yes/no question on `output`; only `y` or `yes` confirms
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
