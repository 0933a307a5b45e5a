//! Connection settings for a qBittorrent instance.

use std::{env, fmt, time::Duration};

/// Default WebUI address.
pub const DEFAULT_URL: &str = "http://127.0.0.1";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default API prefix.
pub const DEFAULT_PREFIX: &str = "/api/v2";

/// Connection settings for [`QbitClient`](crate::QbitClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the WebUI, e.g. `http://127.0.0.1:8080`. May include a path when
    /// the WebUI sits behind a reverse proxy.
    pub url: String,
    /// WebUI user name.
    pub username: Option<String>,
    /// WebUI password.
    pub password: Option<String>,
    /// Timeout applied to each request.
    pub timeout: Duration,
    /// API prefix appended to the base URL.
    pub prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
            prefix: DEFAULT_PREFIX.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Settings for `url` with everything else at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the login credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the API prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Reads the settings from `QBIT_URL`, `QBIT_USERNAME`, `QBIT_PASSWORD`,
    /// `QBIT_TIMEOUT_SECS` and `QBIT_API_PREFIX`. Missing or unparsable values keep
    /// their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: get("QBIT_URL").unwrap_or(defaults.url),
            username: get("QBIT_USERNAME"),
            password: get("QBIT_PASSWORD"),
            timeout: get("QBIT_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            prefix: get("QBIT_API_PREFIX").unwrap_or(defaults.prefix),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the password.
        write!(
            f,
            "ClientConfig(url=\"{}\", username={:?}, password=<{}>, timeout={:?}, prefix=\"{}\")",
            self.url,
            self.username,
            if self.password.is_some() {
                "set"
            } else {
                "unset"
            },
            self.timeout,
            self.prefix,
        )
    }
}
