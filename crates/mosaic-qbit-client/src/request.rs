//! Request values handed to a [`Transport`](crate::Transport).
//!
//! Operations build a [`Params`] bag, wrap it in a [`Body`], and the dispatcher turns
//! that into an [`ApiRequest`]. Transports only ever see these plain values, which
//! keeps them trivial to mock and assert on.

use std::fmt;

use crate::encoding::ArgList;
use crate::endpoints::Method;

/// Ordered form fields. Repeated keys are allowed and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field that is always sent.
    pub fn with(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a field only when `value` is set. `None` means "omit", which the
    /// server treats differently from an explicit `false` or empty string.
    pub fn with_opt<V: fmt::Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Appends a list field joined with `delimiter`.
    pub fn with_list(mut self, key: &str, list: impl Into<ArgList>, delimiter: &str) -> Self {
        let joined = list.into().join(delimiter);
        self.push(key, joined);
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.0.push((key.to_owned(), value.to_string()));
    }

    /// The first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present at all.
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// All fields in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A file attached to a multipart body.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name. Several parts may share one name.
    pub name: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type of the part.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The body of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Body {
    /// No parameters at all.
    #[default]
    Empty,
    /// Url-encoded fields (query string for GET).
    Form(Params),
    /// `multipart/form-data` with text fields followed by files.
    Multipart {
        /// Text fields.
        fields: Params,
        /// Attached files.
        files: Vec<FilePart>,
    },
}

impl Body {
    /// The text fields of the body, if any.
    pub fn params(&self) -> Option<&Params> {
        match self {
            Self::Empty => None,
            Self::Form(params) => Some(params),
            Self::Multipart { fields, .. } => Some(fields),
        }
    }

    /// The attached files. Empty unless the body is multipart.
    pub fn files(&self) -> &[FilePart] {
        match self {
            Self::Multipart { files, .. } => files,
            _ => &[],
        }
    }
}

impl From<Params> for Body {
    fn from(params: Params) -> Self {
        Self::Form(params)
    }
}

/// A fully resolved call, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the API prefix.
    pub url: String,
    /// Parameters.
    pub body: Body,
}

impl ApiRequest {
    /// The first value of a text field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.body.params().and_then(|params| params.get(key))
    }
}

/// What the transport got back: the status code and the body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    /// Convenience constructor.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PIPE;

    #[test]
    fn optional_fields_are_omitted() {
        let params = Params::new()
            .with("hash", "abc123")
            .with_opt("paused", None::<bool>)
            .with_opt("skip_checking", Some(false));

        assert_eq!(params.len(), 2);
        assert!(!params.contains("paused"));
        assert_eq!(params.get("skip_checking"), Some("false"));
    }

    #[test]
    fn repeated_keys_keep_order() {
        let params: Params = [("urls", "a"), ("urls", "b")].into_iter().collect();
        assert_eq!(params.get("urls"), Some("a"));
        assert_eq!(
            params.pairs(),
            &[
                ("urls".to_string(), "a".to_string()),
                ("urls".to_string(), "b".to_string())
            ]
        );
    }

    #[test]
    fn list_fields_are_joined() {
        let params = Params::new().with_list("hashes", vec!["abc123", "def456"], PIPE);
        assert_eq!(params.get("hashes"), Some("abc123|def456"));
    }

    #[test]
    fn body_accessors() {
        assert_eq!(Body::Empty.params(), None);
        assert!(Body::Empty.files().is_empty());

        let body = Body::Multipart {
            fields: Params::new().with("paused", true),
            files: vec![FilePart {
                name: "torrents".into(),
                file_name: "a.torrent".into(),
                content_type: "application/x-bittorrent".into(),
                bytes: vec![1, 2, 3],
            }],
        };
        assert_eq!(body.params().and_then(|p| p.get("paused")), Some("true"));
        assert_eq!(body.files().len(), 1);
        assert!(format!("{:?}", body.files()[0]).contains("len: 3"));
    }
}
