//! Set line parsing.
//!
//! A set line looks like a shell argument list behind a name:
//!
//! ```text
//! card: "Heart Red" Tile Clover "Pike Black"
//! ```
//!
//! Everything before the first `:` is the set name. A single space right after
//! the `:` is part of the syntax. The rest is split into values by the
//! [`Parser`], a small state machine over the line:
//!
//! - runs of spaces only separate values
//! - a value starting with `"` runs to the next unescaped `"` and is decoded
//!   with backslash escapes
//! - any other value is taken verbatim up to the next space
//!
//! ## Usage
//!
//! ```rust
//! use combination::parse_sets_str;
//!
//! let sets = parse_sets_str("card: Heart Tile\nfigure: Jack Queen King").unwrap();
//! assert_eq!(sets.len(), 2);
//! assert_eq!(sets[1].values, vec!["Jack", "Queen", "King"]);
//! ```

use crate::{Error, Result, Set};
use std::io::BufRead;

/// Scanner states.
#[derive(Clone, Copy, Debug)]
enum State {
    SkipSpace,
    Bare { start: usize },
    // `start` is the byte offset of the opening quote, `col` its column.
    Quoted { start: usize, col: usize },
    Escape { start: usize, col: usize },
}

/// Tokenizer for the value list of a set line.
///
/// Yields one decoded value per item. After the first error it yields nothing
/// more.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    column: usize,
    failed: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a bare value list (no `name:` prefix).
    pub fn new(input: &'a str) -> Self {
        Self::with_column(input, 1)
    }

    /// Creates a parser whose first character sits at `column` of the line.
    pub fn with_column(input: &'a str, column: usize) -> Self {
        Parser {
            input,
            position: 0,
            column,
            failed: false,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        self.column += 1;
        Some(ch)
    }

    /// Consumes exactly one space, if there is one.
    fn skip_single_space(&mut self) {
        if self.peek_char() == Some(' ') {
            self.next_char();
        }
    }

    fn next_value(&mut self) -> Result<Option<String>> {
        let mut state = State::SkipSpace;
        loop {
            state = match (state, self.peek_char()) {
                (State::SkipSpace, None) => return Ok(None),
                (State::SkipSpace, Some(' ')) => {
                    self.next_char();
                    State::SkipSpace
                }
                (State::SkipSpace, Some('"')) => {
                    let (start, col) = (self.position, self.column);
                    self.next_char();
                    State::Quoted { start, col }
                }
                (State::SkipSpace, Some(_)) => State::Bare {
                    start: self.position,
                },

                (State::Bare { start }, None | Some(' ')) => {
                    return Ok(Some(self.input[start..self.position].to_string()))
                }
                (State::Bare { start }, Some(_)) => {
                    self.next_char();
                    State::Bare { start }
                }

                (State::Quoted { col, .. } | State::Escape { col, .. }, None) => {
                    return Err(Error::NoClosingQuote { line: 1, col })
                }
                (State::Quoted { start, col }, Some('"')) => {
                    self.next_char();
                    let raw = &self.input[start + 1..self.position - 1];
                    return unescape(raw, col + 1).map(Some);
                }
                (State::Quoted { start, col }, Some('\\')) => {
                    self.next_char();
                    State::Escape { start, col }
                }
                (State::Quoted { start, col }, Some(_)) => {
                    self.next_char();
                    State::Quoted { start, col }
                }
                (State::Escape { start, col }, Some(_)) => {
                    self.next_char();
                    State::Quoted { start, col }
                }
            };
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_value() {
            Ok(value) => value.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Decodes the body of a quoted value. `col` is the column of its first
/// character, used for error positions.
fn unescape(raw: &str, col: usize) -> Result<String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut column = col;
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            column += 1;
            continue;
        }

        let at = column;
        let escaped = chars
            .next()
            .ok_or_else(|| Error::invalid_escape(1, at, "trailing backslash"))?;
        column += 2;
        let decoded = match escaped {
            '"' => '"',
            '\\' => '\\',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'a' => '\u{0007}',
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'v' => '\u{000B}',
            'x' | 'u' | 'U' => {
                let digits = match escaped {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let code = read_digits(&mut chars, digits, 16).ok_or_else(|| {
                    Error::invalid_escape(1, at, &format!("expected {digits} hex digits"))
                })?;
                column += digits;
                if escaped == 'x' && code > 0x7F {
                    return Err(Error::invalid_escape(1, at, "\\x escape above 0x7F"));
                }
                char::from_u32(code)
                    .ok_or_else(|| Error::invalid_escape(1, at, "invalid unicode code point"))?
            }
            '0'..='7' => {
                // Exactly three octal digits, the first already read.
                let rest = read_digits(&mut chars, 2, 8)
                    .ok_or_else(|| Error::invalid_escape(1, at, "expected 3 octal digits"))?;
                column += 2;
                let code = (escaped as u32 - '0' as u32) * 64 + rest;
                if code > 0o177 {
                    return Err(Error::invalid_escape(1, at, "octal escape above 0177"));
                }
                char::from(code as u8)
            }
            other => {
                return Err(Error::invalid_escape(
                    1,
                    at,
                    &format!("unknown escape '\\{other}'"),
                ))
            }
        };
        result.push(decoded);
    }
    Ok(result)
}

fn read_digits(chars: &mut std::str::Chars<'_>, digits: usize, radix: u32) -> Option<u32> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * radix + chars.next()?.to_digit(radix)?;
    }
    Some(code)
}

/// Parses one set line.
///
/// Errors are reported at line 1; use [`parse_sets`] to get real line numbers.
///
/// # Examples
///
/// ```rust
/// use combination::{parse_set_line, Error};
///
/// let set = parse_set_line(r#"name: "a b" c"#).unwrap();
/// assert_eq!(set.values, vec!["a b", "c"]);
///
/// let empty = parse_set_line("name:").unwrap();
/// assert!(empty.values.is_empty());
///
/// assert_eq!(parse_set_line(": a b"), Err(Error::InvalidName { line: 1 }));
/// ```
///
/// # Errors
///
/// - [`Error::MissingSeparator`] if the line has no `:`
/// - [`Error::InvalidName`] if the name before `:` is empty
/// - [`Error::NoClosingQuote`] if a quoted value is never closed
/// - [`Error::InvalidEscape`] if a quoted value has an undecodable escape
pub fn parse_set_line(line: &str) -> Result<Set> {
    let (name, rest) = line
        .split_once(':')
        .ok_or(Error::MissingSeparator { line: 1 })?;
    if name.is_empty() {
        return Err(Error::InvalidName { line: 1 });
    }

    let mut parser = Parser::with_column(rest, name.chars().count() + 2);
    parser.skip_single_space();
    let values = parser.collect::<Result<Vec<_>>>()?;

    Ok(Set {
        name: name.to_string(),
        values,
    })
}

/// Parses one set per line from `reader`.
///
/// Empty lines are skipped. The first failing line aborts the whole read.
///
/// # Errors
///
/// Returns the first parse error with its 1-based line number, or
/// [`Error::Io`] if reading fails.
pub fn parse_sets<R: BufRead>(reader: R) -> Result<Vec<Set>> {
    let mut sets = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let set = parse_set_line(&line).map_err(|e| e.at_line(idx + 1))?;
        log::debug!(
            "line {}: parsed set {:?} with {} values",
            idx + 1,
            set.name,
            set.values.len()
        );
        sets.push(set);
    }
    Ok(sets)
}

/// Parses one set per line from a string. See [`parse_sets`].
///
/// # Errors
///
/// Returns the first parse error with its 1-based line number.
pub fn parse_sets_str(input: &str) -> Result<Vec<Set>> {
    parse_sets(input.as_bytes())
}
