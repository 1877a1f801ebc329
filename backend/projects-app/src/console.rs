//! Line-oriented console input.
//!
//! Every prompt is written as `"<prompt>: "` and flushed before the read.
//! A blank or whitespace-only answer is absent (`None`), never `""` or `0`.

use crate::{InputError, InputResult};

use projects_core::parse_hours;

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use rust_decimal::Decimal;

/// Prompting surface used by menu operations.
///
/// `read_int` and `read_decimal` are built on `read_text`, so absent input
/// passes through both unchanged.
pub trait Prompt: Send {
    /// Prompt and return the trimmed line, or `None` for a blank line.
    fn read_text(&mut self, prompt: &str) -> InputResult<Option<String>>;

    /// Write one newline-terminated line.
    fn write_line(&mut self, line: &str) -> InputResult<()>;

    /// Prompt for a base-10 integer.
    fn read_int(&mut self, prompt: &str) -> InputResult<Option<i32>> {
        let Some(input) = self.read_text(prompt)? else {
            return Ok(None);
        };

        input
            .parse::<i32>()
            .map(Some)
            .map_err(|_| InputError::validation(format!("{input} is not a valid number.")))
    }

    /// Prompt for a decimal, rescaled to two fractional digits.
    fn read_decimal(&mut self, prompt: &str) -> InputResult<Option<Decimal>> {
        let Some(input) = self.read_text(prompt)? else {
            return Ok(None);
        };

        Ok(Some(parse_hours(&input)?))
    }
}

/// Console over any buffered reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> Prompt for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn read_text(&mut self, prompt: &str) -> InputResult<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }

        let input = line.trim();
        Ok((!input.is_empty()).then(|| input.to_string()))
    }

    fn write_line(&mut self, line: &str) -> InputResult<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}
