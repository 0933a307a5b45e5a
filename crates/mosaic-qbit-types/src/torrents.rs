//! Torrent-related request shapes and response models.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::QbitError;

/// Content type the WebUI expects for uploaded `.torrent` files.
pub const TORRENT_CONTENT_TYPE: &str = "application/x-bittorrent";

/// State filter accepted by `torrents/info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum TorrentFilter {
    All,
    Downloading,
    Seeding,
    Completed,
    Paused,
    Active,
    Inactive,
    Resumed,
    Stalled,
    StalledUploading,
    StalledDownloading,
    Errored,
}

impl TorrentFilter {
    /// The wire name of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Downloading => "downloading",
            Self::Seeding => "seeding",
            Self::Completed => "completed",
            Self::Paused => "paused",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Resumed => "resumed",
            Self::Stalled => "stalled",
            Self::StalledUploading => "stalled_uploading",
            Self::StalledDownloading => "stalled_downloading",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for TorrentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query for `torrents/info`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorrentListQuery {
    /// Filter by torrent state.
    pub filter: Option<TorrentFilter>,
    /// Filter by category. An empty string means "without category".
    pub category: Option<String>,
    /// Filter by tag. An empty string means "without tag".
    pub tag: Option<String>,
    /// Sort by any field of the response objects.
    pub sort: Option<String>,
    /// Reverse the sort order.
    pub reverse: bool,
    /// Maximum number of torrents returned.
    pub limit: Option<i64>,
    /// Offset into the list; negative values count from the end.
    pub offset: Option<i64>,
    /// Restrict to these hashes. Empty means all torrents.
    pub hashes: Vec<String>,
}

/// The three-way `root_folder` flag of `torrents/add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootFolder {
    /// Always create the root folder.
    True,
    /// Never create the root folder.
    False,
    /// Let the server decide.
    #[default]
    Unset,
}

impl RootFolder {
    /// The wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unset => "unset",
        }
    }
}

impl From<bool> for RootFolder {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for RootFolder {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

/// Anything but the exact strings `"true"` and `"false"` means [`RootFolder::Unset`].
impl From<&str> for RootFolder {
    fn from(value: &str) -> Self {
        match value {
            "true" => Self::True,
            "false" => Self::False,
            _ => Self::Unset,
        }
    }
}

/// A `.torrent` file to upload with `torrents/add`.
#[derive(Clone, PartialEq, Eq)]
pub struct TorrentFile {
    /// The file name reported in the multipart part.
    pub file_name: String,
    /// The raw metainfo bytes.
    pub bytes: Vec<u8>,
}

impl TorrentFile {
    /// Creates a torrent file payload from memory.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a torrent file from disk. The file name is the last path component.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QbitError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                QbitError::FileSystem(format!("{} has no file name", path.display()))
            })?;
        let bytes = fs::read(path)
            .map_err(|e| QbitError::FileSystem(format!("{}: {e}", path.display())))?;
        Ok(Self { file_name, bytes })
    }
}

impl fmt::Debug for TorrentFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TorrentFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Options for `torrents/add`.
///
/// At least one of `urls` or `torrents` should be non-empty. Every `Option` left as
/// `None` is omitted from the request, which is not the same as sending `false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTorrentOptions {
    /// Magnet links or HTTP URLs.
    pub urls: Vec<String>,
    /// Raw torrent files.
    pub torrents: Vec<TorrentFile>,
    /// Download folder.
    pub save_path: Option<String>,
    /// Cookie sent to download the `.torrent` file.
    pub cookie: Option<String>,
    /// Category for the torrent.
    pub category: Option<String>,
    /// Tags for the torrent. Empty means none.
    pub tags: Vec<String>,
    /// Skip hash checking.
    pub skip_checking: Option<bool>,
    /// Add torrents in the paused state.
    pub paused: Option<bool>,
    /// Create the root folder. Always sent.
    pub root_folder: RootFolder,
    /// Rename the torrent.
    pub rename: Option<String>,
    /// Upload speed limit in bytes/second.
    pub up_limit: Option<i64>,
    /// Download speed limit in bytes/second.
    pub dl_limit: Option<i64>,
    /// Share ratio limit.
    pub ratio_limit: Option<f64>,
    /// Seeding time limit in minutes.
    pub seeding_time_limit: Option<i64>,
    /// Use automatic torrent management.
    pub auto_tmm: Option<bool>,
    /// Enable sequential download.
    pub sequential_download: Option<bool>,
    /// Prioritize the first and last pieces.
    pub first_last_piece_prio: Option<bool>,
}

/// An entry of `torrents/info`. Only the commonly used fields are modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TorrentInfo {
    pub hash: String,
    pub name: String,
    pub state: String,
    pub progress: f64,
    pub size: i64,
    pub dlspeed: i64,
    pub upspeed: i64,
    pub num_seeds: i64,
    pub num_leechs: i64,
    pub ratio: f64,
    pub eta: i64,
    pub category: String,
    pub tags: String,
    pub save_path: String,
    pub added_on: i64,
    pub completion_on: i64,
    pub priority: i64,
    pub auto_tmm: bool,
    pub force_start: bool,
    pub seq_dl: bool,
    pub f_l_piece_prio: bool,
    pub super_seeding: bool,
}

/// An entry of `torrents/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Default save path for torrents in this category.
    #[serde(rename = "savePath")]
    pub save_path: String,
}
