//! # Mosaic qBittorrent Types
//!
//! Transport-independent types shared by the qBittorrent WebUI client: the error
//! taxonomy, decoded payloads, and the request and response models.

mod app;
mod error;
mod payload;
mod preferences;
mod rss;
mod torrents;

pub use app::{BuildInfo, LogFilter, LogMessage, TransferInfo};
pub use error::{
    QbitError, STATUS_API_FAILED, STATUS_HASH_NOT_FOUND, STATUS_IP_BANNED, STATUS_OK,
};
pub use payload::Payload;
pub use preferences::Preferences;
pub use rss::RssRule;
pub use torrents::{
    AddTorrentOptions, Category, RootFolder, TORRENT_CONTENT_TYPE, TorrentFile, TorrentFilter,
    TorrentInfo, TorrentListQuery,
};
