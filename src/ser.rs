//! Set line serialization.
//!
//! The [`Serializer`] writes [`Set`]s back into the line format read by
//! [`parse_set_line`](crate::parse_set_line). Every value is quoted, so any
//! string survives the trip: spaces, quotes, backslashes and control
//! characters included.
//!
//! ```rust
//! use combination::{parse_set_line, Set};
//!
//! let set = Set::new("card", ["Heart Red", "say \"hi\"", ""]);
//! let line = set.to_line().unwrap();
//! assert_eq!(line, r#"card: "Heart Red" "say \"hi\"" """#);
//! assert_eq!(parse_set_line(&line).unwrap(), set);
//! ```

use crate::{Error, Result, Set};

/// Writes sets as lines, one per set.
pub struct Serializer {
    output: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(128),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `set` as one line. Lines after the first are preceded by `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name cannot be read back.
    pub fn write_set(&mut self, set: &Set) -> Result<()> {
        if !is_valid_name(&set.name) {
            return Err(Error::InvalidName { line: 1 });
        }
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(&set.name);
        self.output.push(':');
        for value in &set.values {
            self.output.push(' ');
            write_quoted(&mut self.output, value);
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains([':', '\n', '\r'])
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                // Control characters are all in the BMP.
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Wraps `s` in double quotes, escaping it so the set parser decodes it back
/// to `s`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(combination::quote("a\"b\n"), r#""a\"b\n""#);
/// ```
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_quoted(&mut out, s);
    out
}

/// Serializes one set as a line.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if the name is empty or contains `:` or a
/// line break.
pub fn to_line(set: &Set) -> Result<String> {
    let mut serializer = Serializer::new();
    serializer.write_set(set)?;
    Ok(serializer.into_inner())
}

/// Serializes sets as newline-separated lines, ready for
/// [`parse_sets_str`](crate::parse_sets_str).
///
/// # Errors
///
/// Returns [`Error::InvalidName`] with the 1-based position of the first set
/// whose name cannot be written.
pub fn sets_to_string(sets: &[Set]) -> Result<String> {
    let mut serializer = Serializer::new();
    for (idx, set) in sets.iter().enumerate() {
        serializer.write_set(set).map_err(|e| e.at_line(idx + 1))?;
    }
    Ok(serializer.into_inner())
}
