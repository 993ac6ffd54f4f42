//! Configuration options for rendering combinations.
//!
//! - [`FormatOptions`]: main configuration struct
//! - [`Style`]: Go-style literal table rows or JSON Lines
//!
//! ## Examples
//!
//! ```rust
//! use combination::{generate, to_string_with_options, FormatOptions, Set, Style};
//!
//! let combos = generate(vec![Set::new("card", ["Heart Red"])]).unwrap();
//!
//! let options = FormatOptions::new().with_quoted_values(true);
//! assert_eq!(to_string_with_options(&combos, &options).unwrap(), "{card: \"Heart Red\"},\n");
//!
//! let options = FormatOptions::new().with_style(Style::JsonLines);
//! assert_eq!(to_string_with_options(&combos, &options).unwrap(), "{\"card\":\"Heart Red\"}\n");
//! ```

/// How each combination is rendered.
///
/// - **Literal**: `{name: value, name2: value2},`, ready to paste into a Go
///   table-driven test
/// - **JsonLines**: one JSON object per row, keys in set order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Literal,
    JsonLines,
}

/// Configuration options for the formatter.
///
/// # Examples
///
/// ```rust
/// use combination::{FormatOptions, Style};
///
/// let options = FormatOptions::new()
///     .with_quoted_values(true)
///     .with_separator(",\t");
/// assert_eq!(options.style, Style::Literal);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub style: Style,
    pub quote_values: bool,
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            style: Style::default(),
            quote_values: false,
            separator: ", ".to_string(),
        }
    }
}

impl FormatOptions {
    /// Creates default options (literal rows, raw values, `", "` separator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combination::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert!(!options.quote_values);
    /// assert_eq!(options.separator, ", ");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Quote every value as a double-quoted, escaped string literal.
    ///
    /// Only affects [`Style::Literal`]; JSON output is always quoted.
    #[must_use]
    pub fn with_quoted_values(mut self, quote: bool) -> Self {
        self.quote_values = quote;
        self
    }

    /// Sets the text written between two elements of a literal row.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
