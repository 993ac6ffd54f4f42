//! Data types shared by the parser, the generator and the formatter.
//!
//! - [`Set`]: a named, ordered list of candidate values (one input line)
//! - [`Element`]: one `(set name, chosen value)` pair
//! - [`Combination`]: one output row, one element per input set, in set order
//!
//! All of them are plain value records: built once and never mutated by this
//! crate afterwards.

use crate::{de, ser, Error, Result};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::Index;
use std::str::FromStr;

/// A named grouping of values.
///
/// Values keep their encounter order and duplicates are not collapsed.
///
/// # Examples
///
/// ```rust
/// use combination::Set;
///
/// let set: Set = r#"card: "Heart Red" Tile"#.parse().unwrap();
/// assert_eq!(set, Set::new("card", ["Heart Red", "Tile"]));
/// assert_eq!(set.to_line().unwrap(), r#"card: "Heart Red" "Tile""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Set {
    pub name: String,
    pub values: Vec<String>,
}

impl Set {
    /// Creates a set from a name and any list of values.
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Set {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes the set back as a line that [`parse_set_line`](crate::parse_set_line)
    /// decodes to an equal set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty or contains `:` or a
    /// line break.
    pub fn to_line(&self) -> Result<String> {
        ser::to_line(self)
    }
}

impl FromStr for Set {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        de::parse_set_line(s)
    }
}

/// One `(set name, chosen value)` pair within a [`Combination`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub value: String,
}

impl Element {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single combination: exactly one value from every input set, in input set
/// order.
///
/// Serializes as an ordered map from set name to chosen value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Combination(Vec<Element>);

impl Combination {
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self {
        Combination(elements)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    /// Returns the value chosen for the first set called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Ordered `name -> value` view of the row.
    ///
    /// When several sets share a name the entry keeps the position of the
    /// first one and the value of the last one.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<&str, &str> {
        self.0
            .iter()
            .map(|e| (e.name.as_str(), e.value.as_str()))
            .collect()
    }

    #[must_use]
    pub fn into_elements(self) -> Vec<Element> {
        self.0
    }
}

impl Index<usize> for Combination {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.0[index]
    }
}

impl From<Vec<Element>> for Combination {
    fn from(elements: Vec<Element>) -> Self {
        Combination(elements)
    }
}

impl IntoIterator for Combination {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Entries go out one by one so duplicate names survive.
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for element in &self.0 {
            map.serialize_entry(&element.name, &element.value)?;
        }
        map.end()
    }
}
