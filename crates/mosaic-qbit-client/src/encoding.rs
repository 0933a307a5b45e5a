//! Parameter encoding helpers shared by all operations.

use std::io;

use serde::Serialize;
use serde_json::{Value, ser::Formatter};

use mosaic_qbit_types::QbitError;

/// Delimiter for hash, peer, file id and plugin name lists.
pub const PIPE: &str = "|";
/// Delimiter for tag lists.
pub const COMMA: &str = ",";
/// Delimiter for tracker URLs in `torrents/addTrackers` and category names in
/// `torrents/removeCategories`. Sent literally; the form encoder escapes the `%`.
pub const ESCAPED_NEWLINE: &str = "%0A";
/// Delimiter for the `urls` field of `torrents/add`.
pub const NEWLINE: &str = "\n";

/// Wildcard accepted by every hash list.
pub const ALL: &str = "all";

/// A list argument. A single string converts to a one-element list, so `"abc"` and
/// `["abc"]` encode identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    /// The `all` wildcard for hash lists.
    pub fn all() -> Self {
        Self(vec![ALL.to_owned()])
    }

    /// Joins the items with `delimiter`.
    pub fn join(&self, delimiter: &str) -> String {
        self.0.join(delimiter)
    }

    /// The items.
    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the list has no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ArgList {
    fn from(item: &str) -> Self {
        Self(vec![item.to_owned()])
    }
}

impl From<String> for ArgList {
    fn from(item: String) -> Self {
        Self(vec![item])
    }
}

impl From<&String> for ArgList {
    fn from(item: &String) -> Self {
        Self(vec![item.clone()])
    }
}

impl<T: Into<String>> From<Vec<T>> for ArgList {
    fn from(items: Vec<T>) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: AsRef<str>> From<&[T]> for ArgList {
    fn from(items: &[T]) -> Self {
        Self(items.iter().map(|s| s.as_ref().to_owned()).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for ArgList {
    fn from(items: [T; N]) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>> FromIterator<T> for ArgList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The wire form of a boolean.
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Recursively removes `null` members from objects. Array elements are kept.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

fn to_stripped_value<T: Serialize>(value: &T) -> Result<Value, QbitError> {
    serde_json::to_value(value)
        .map(strip_nulls)
        .map_err(|e| QbitError::Serialization(e.to_string()))
}

/// Serializes `value`, strips null members and returns compact JSON text.
pub fn json_blob<T: Serialize>(value: &T) -> Result<String, QbitError> {
    let value = to_stripped_value(value)?;
    serde_json::to_string(&value).map_err(|e| QbitError::Serialization(e.to_string()))
}

/// Like [`json_blob`], but with `", "` and `": "` separators, e.g. `{"enabled": true}`.
pub fn json_blob_spaced<T: Serialize>(value: &T) -> Result<String, QbitError> {
    let value = to_stripped_value(value)?;
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| QbitError::Serialization(e.to_string()))?;
    String::from_utf8(out).map_err(|e| QbitError::Serialization(e.to_string()))
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}
