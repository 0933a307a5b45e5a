//! Error taxonomy for qBittorrent WebUI calls.

use thiserror::Error;

/// The only status code the WebUI API uses for success.
pub const STATUS_OK: u16 = 200;
/// The client IP exceeded the login-failure threshold and is temporarily blocked.
pub const STATUS_IP_BANNED: u16 = 403;
/// A torrent hash referenced by the call is unknown to the server.
pub const STATUS_HASH_NOT_FOUND: u16 = 404;
/// The request was well formed but rejected (e.g. an invalid category name).
pub const STATUS_API_FAILED: u16 = 409;

/// Error type for qBittorrent operations.
///
/// The first four variants are the classified API failures and all carry the raw
/// response body verbatim. [`QbitError::is_api_error`] treats them as one family,
/// which is how callers "catch the base kind".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QbitError {
    /// HTTP 403: the client IP is banned.
    #[error("IP banned: {0}")]
    IpBanned(String),

    /// HTTP 404: the torrent hash was not found.
    #[error("hash not found: {0}")]
    HashNotFound(String),

    /// HTTP 409: the server refused the operation.
    #[error("operation failed: {0}")]
    ApiFailed(String),

    /// Any other non-200 status.
    #[error("server error (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The response body.
        message: String,
    },

    /// Login was answered with `Fails.`.
    #[error("authentication failed")]
    Unauthorized,

    /// Network-related errors (connection failures, timeouts, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// A request parameter could not be encoded, or a payload decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system errors (file not found, permission denied, etc.)
    #[error("file system error: {0}")]
    FileSystem(String),

    /// The configured base URL is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl QbitError {
    /// Classifies an HTTP response. Returns the body untouched on 200, the matching
    /// error otherwise.
    pub fn check_status(status: u16, body: String) -> Result<String, Self> {
        match status {
            STATUS_OK => Ok(body),
            STATUS_IP_BANNED => Err(Self::IpBanned(body)),
            STATUS_HASH_NOT_FOUND => Err(Self::HashNotFound(body)),
            STATUS_API_FAILED => Err(Self::ApiFailed(body)),
            status => Err(Self::Api {
                status,
                message: body,
            }),
        }
    }

    /// True for every error produced from a non-200 HTTP status.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Self::IpBanned(_) | Self::HashNotFound(_) | Self::ApiFailed(_) | Self::Api { .. }
        )
    }

    /// The HTTP status behind a classified API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::IpBanned(_) => Some(STATUS_IP_BANNED),
            Self::HashNotFound(_) => Some(STATUS_HASH_NOT_FOUND),
            Self::ApiFailed(_) => Some(STATUS_API_FAILED),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body behind a classified API error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::IpBanned(msg) | Self::HashNotFound(msg) | Self::ApiFailed(msg) => Some(msg),
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_returns_body() {
        let body = QbitError::check_status(200, "v4.6.2".into()).unwrap();
        assert_eq!(body, "v4.6.2");
    }

    #[test]
    fn forbidden_is_ip_banned_with_verbatim_body() {
        let err = QbitError::check_status(403, "Your IP address has been banned.".into())
            .unwrap_err();
        assert_eq!(
            err,
            QbitError::IpBanned("Your IP address has been banned.".into())
        );
        assert_eq!(err.message(), Some("Your IP address has been banned."));
    }

    #[test]
    fn not_found_and_conflict_are_classified() {
        assert!(matches!(
            QbitError::check_status(404, "Not Found".into()),
            Err(QbitError::HashNotFound(msg)) if msg == "Not Found"
        ));
        assert!(matches!(
            QbitError::check_status(409, "Invalid category name".into()),
            Err(QbitError::ApiFailed(msg)) if msg == "Invalid category name"
        ));
    }

    #[test]
    fn other_statuses_fall_back_to_api_error() {
        for status in [201, 204, 400, 401, 415, 500, 503] {
            let err = QbitError::check_status(status, "nope".into()).unwrap_err();
            assert_eq!(
                err,
                QbitError::Api {
                    status,
                    message: "nope".into()
                }
            );
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn api_family_covers_all_classified_kinds() {
        let classified = [
            QbitError::IpBanned(String::new()),
            QbitError::HashNotFound(String::new()),
            QbitError::ApiFailed(String::new()),
            QbitError::Api {
                status: 500,
                message: String::new(),
            },
        ];
        assert!(classified.iter().all(QbitError::is_api_error));

        let transport = QbitError::Network("connection refused".into());
        assert!(!transport.is_api_error());
        assert_eq!(transport.status(), None);
        assert_eq!(transport.message(), None);
    }

    #[test]
    fn display_includes_body() {
        let err = QbitError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "server error (HTTP 500): boom");
        assert_eq!(
            QbitError::HashNotFound("Not Found".into()).to_string(),
            "hash not found: Not Found"
        );
    }
}
