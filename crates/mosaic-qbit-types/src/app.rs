//! Application, transfer and log models.

use serde::{Deserialize, Serialize};

/// Response of `app/buildInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct BuildInfo {
    pub qt: String,
    pub libtorrent: String,
    pub boost: String,
    pub openssl: String,
    pub bitness: i64,
}

/// Response of `transfer/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferInfo {
    /// Global download rate (bytes/s).
    pub dl_info_speed: i64,
    /// Data downloaded this session (bytes).
    pub dl_info_data: i64,
    /// Global upload rate (bytes/s).
    pub up_info_speed: i64,
    /// Data uploaded this session (bytes).
    pub up_info_data: i64,
    /// Download rate limit (bytes/s).
    pub dl_rate_limit: i64,
    /// Upload rate limit (bytes/s).
    pub up_rate_limit: i64,
    /// DHT nodes connected to.
    pub dht_nodes: i64,
    /// `connected`, `firewalled` or `disconnected`.
    pub connection_status: String,
}

/// Message selection for `log/main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    /// Include normal messages.
    pub normal: bool,
    /// Include info messages.
    pub info: bool,
    /// Include warning messages.
    pub warning: bool,
    /// Include critical messages.
    pub critical: bool,
    /// Exclude messages with an id lower than or equal to this one.
    pub last_known_id: i64,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            normal: true,
            info: true,
            warning: true,
            critical: true,
            last_known_id: -1,
        }
    }
}

/// An entry of `log/main`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Message id.
    pub id: i64,
    /// Message text.
    pub message: String,
    /// Milliseconds since epoch.
    pub timestamp: i64,
    /// Severity bit: 1 normal, 2 info, 4 warning, 8 critical.
    #[serde(rename = "type")]
    pub kind: i64,
}
