//! # combination
//!
//! Generate every combination of named value sets, as rows for table-driven
//! tests.
//!
//! ## What is a set?
//!
//! A set is one line of text: a name, a colon, then a list of values written
//! much like shell arguments. Values are space-separated and values containing
//! spaces (or anything unusual) are double-quoted with backslash escapes:
//!
//! ```text
//! card: "Heart Red" Tile Clover "Pike Black"
//! figure: Jack Queen King
//! ```
//!
//! ## Pipeline
//!
//! - [`parse_sets`] / [`parse_set_line`]: text to [`Set`]s
//! - [`generate`]: sets to [`Combinations`], the ordered Cartesian product
//! - [`to_writer`] / [`to_string`]: combinations to text, one row per line
//!
//! ## Quick Start
//!
//! ```rust
//! use combination::{generate, parse_sets_str, to_string};
//!
//! let sets = parse_sets_str("card: \"Heart Red\" Tile\nfigure: Jack Queen").unwrap();
//! let combos = generate(sets).unwrap();
//!
//! assert_eq!(
//!     to_string(&combos).unwrap(),
//!     "{card: Heart Red, figure: Jack},\n\
//!      {card: Heart Red, figure: Queen},\n\
//!      {card: Tile, figure: Jack},\n\
//!      {card: Tile, figure: Queen},\n"
//! );
//! ```
//!
//! ## Ordering
//!
//! Rows come out in mixed-radix order: the last set changes on every row and
//! the first set changes least often, as if each set were a nested loop with
//! the first set outermost. Elements inside a row always follow input set
//! order.
//!
//! ## Errors
//!
//! Every error is terminal. A bad line aborts parsing, a set without values
//! aborts generation, and nothing partial is returned. See [`Error`].

pub mod de;
pub mod engine;
pub mod error;
pub mod format;
pub mod options;
pub mod ser;
pub mod set;

pub use de::{parse_set_line, parse_sets, parse_sets_str, Parser};
pub use engine::{generate, Combinations, Iter};
pub use error::{Error, Result};
pub use format::Formatter;
pub use options::{FormatOptions, Style};
pub use ser::{quote, sets_to_string, to_line, Serializer};
pub use set::{Combination, Element, Set};

use std::io;

/// Writes every combination to `writer` in the default literal style.
///
/// # Examples
///
/// ```rust
/// use combination::{generate, to_writer, Set};
///
/// let combos = generate(vec![Set::new("F1", ["X", "Y"])]).unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &combos).unwrap();
/// assert_eq!(buffer, b"{F1: X},\n{F1: Y},\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W, I>(writer: W, combinations: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = Combination>,
{
    to_writer_with_options(writer, combinations, &FormatOptions::default())
}

/// Writes every combination to `writer` with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W, I>(
    writer: W,
    combinations: I,
    options: &FormatOptions,
) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = Combination>,
{
    let mut formatter = Formatter::new(writer, options.clone());
    formatter.write_all(combinations)
}

/// Renders every combination to a string in the default literal style.
///
/// # Errors
///
/// Only fails if a row cannot be rendered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<I>(combinations: I) -> Result<String>
where
    I: IntoIterator<Item = Combination>,
{
    to_string_with_options(combinations, &FormatOptions::default())
}

/// Renders every combination to a string with custom options.
///
/// # Errors
///
/// Only fails if a row cannot be rendered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<I>(combinations: I, options: &FormatOptions) -> Result<String>
where
    I: IntoIterator<Item = Combination>,
{
    let mut buffer = Vec::new();
    to_writer_with_options(&mut buffer, combinations, options)?;
    String::from_utf8(buffer).map_err(Error::io)
}

/// Reads sets from `reader`, generates every combination and writes them to
/// `writer`.
///
/// Nothing is written unless every line parses and every set has values.
///
/// # Errors
///
/// Returns the first parse, generation or I/O error.
pub fn run<R, W>(reader: R, writer: W, options: &FormatOptions) -> Result<usize>
where
    R: io::BufRead,
    W: io::Write,
{
    let sets = parse_sets(reader)?;
    let combinations = generate(sets)?;
    to_writer_with_options(writer, &combinations, options)?;
    Ok(combinations.len())
}
