//! Rendering combinations to text.
//!
//! The [`Formatter`] writes one record per combination to any [`io::Write`],
//! keeping element order exactly as generated. Rows are produced one at a
//! time, so large products stream without being held in memory.

use crate::ser::quote;
use crate::{Combination, Error, FormatOptions, Result, Style};
use std::io;

/// Writes combinations to a byte sink.
pub struct Formatter<W> {
    writer: W,
    options: FormatOptions,
    rows: usize,
}

impl<W: io::Write> Formatter<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Formatter {
            writer,
            options,
            rows: 0,
        }
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes one combination as one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write_combination(&mut self, combination: &Combination) -> Result<()> {
        match self.options.style {
            Style::Literal => self.write_literal(combination)?,
            Style::JsonLines => {
                serde_json::to_writer(&mut self.writer, combination).map_err(Error::io)?;
                self.writer.write_all(b"\n")?;
            }
        }
        self.rows += 1;
        Ok(())
    }

    fn write_literal(&mut self, combination: &Combination) -> Result<()> {
        let mut line = String::with_capacity(64);
        line.push('{');
        for (i, element) in combination.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.options.separator);
            }
            line.push_str(&element.name);
            line.push_str(": ");
            if self.options.quote_values {
                line.push_str(&quote(&element.value));
            } else {
                line.push_str(&element.value);
            }
        }
        line.push_str("},\n");
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Writes every combination in order, then flushes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on the first failed write.
    pub fn write_all<I>(&mut self, combinations: I) -> Result<()>
    where
        I: IntoIterator<Item = Combination>,
    {
        for combination in combinations {
            self.write_combination(&combination)?;
        }
        self.writer.flush()?;
        log::trace!("wrote {} rows", self.rows);
        Ok(())
    }
}
