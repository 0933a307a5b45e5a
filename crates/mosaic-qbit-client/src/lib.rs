//! # qBittorrent WebUI client.
//!
//! usage:
//!
//! ```rust,ignore
//! use mosaic_qbit_client::{ClientConfig, QbitClient};
//! use mosaic_qbit_types::{AddTorrentOptions, TorrentFile, TorrentInfo, TorrentListQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://127.0.0.1:8080").with_credentials("admin", "adminadmin");
//!     let client = QbitClient::try_new(config)?;
//!     client.login().await?;
//!
//!     let options = AddTorrentOptions {
//!         torrents: vec![TorrentFile::from_path("path/to/file.torrent")?],
//!         paused: Some(true),
//!         ..Default::default()
//!     };
//!     client.torrents_add(&options).await?;
//!
//!     let torrents: Vec<TorrentInfo> = client
//!         .torrents_info(&TorrentListQuery::default())
//!         .await?
//!         .json()?;
//!     client.torrents_resume(torrents.iter().map(|t| t.hash.as_str()).collect::<Vec<_>>()).await?;
//!     client.close();
//!     Ok(())
//! }
//! ```
//!

mod api;
mod client;
mod config;
mod encoding;
mod request;
mod transport;

pub mod endpoints;

#[cfg(test)]
mod testutil;

pub use client::QbitClient;
pub use config::{ClientConfig, DEFAULT_PREFIX, DEFAULT_TIMEOUT, DEFAULT_URL};
pub use encoding::{
    ALL, ArgList, COMMA, ESCAPED_NEWLINE, NEWLINE, PIPE, bool_str, json_blob, json_blob_spaced,
    strip_nulls,
};
pub use endpoints::{Endpoint, Method};
pub use request::{ApiRequest, Body, FilePart, Params, RawResponse};
pub use transport::{ReqwestTransport, Transport};

#[cfg(test)]
use axum as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tracing_subscriber as _;
