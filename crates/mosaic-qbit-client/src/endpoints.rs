//! Catalog of the qBittorrent WebUI endpoints.
//!
//! Paths are relative to the API prefix (`/api/v2` by default). Every entry is
//! called with POST, which the WebUI accepts for reads and writes alike.

use std::fmt;

/// HTTP method of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel in the body.
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// One remote operation: a path below the API prefix and the method to call it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Path relative to the API prefix, e.g. `torrents/pause`.
    pub path: &'static str,
    /// HTTP method.
    pub method: Method,
}

impl Endpoint {
    /// A POST endpoint.
    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::Post,
        }
    }

    /// A GET endpoint.
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::Get,
        }
    }
}

/// `auth/*`
#[allow(missing_docs)]
pub mod auth {
    use super::Endpoint;

    pub const LOGIN: Endpoint = Endpoint::post("auth/login");
    pub const LOGOUT: Endpoint = Endpoint::post("auth/logout");
}

/// `app/*`
#[allow(missing_docs)]
pub mod app {
    use super::Endpoint;

    pub const VERSION: Endpoint = Endpoint::post("app/version");
    pub const WEBAPI_VERSION: Endpoint = Endpoint::post("app/webapiVersion");
    pub const BUILD_INFO: Endpoint = Endpoint::post("app/buildInfo");
    pub const SHUTDOWN: Endpoint = Endpoint::post("app/shutdown");
    pub const PREFERENCES: Endpoint = Endpoint::post("app/preferences");
    pub const SET_PREFERENCES: Endpoint = Endpoint::post("app/setPreferences");
    pub const DEFAULT_SAVE_PATH: Endpoint = Endpoint::post("app/defaultSavePath");
}

/// `log/*`
#[allow(missing_docs)]
pub mod log {
    use super::Endpoint;

    pub const MAIN: Endpoint = Endpoint::post("log/main");
    pub const PEERS: Endpoint = Endpoint::post("log/peers");
}

/// `sync/*`
#[allow(missing_docs)]
pub mod sync {
    use super::Endpoint;

    pub const MAINDATA: Endpoint = Endpoint::post("sync/maindata");
    pub const TORRENT_PEERS: Endpoint = Endpoint::post("sync/torrentPeers");
}

/// `transfer/*`
#[allow(missing_docs)]
pub mod transfer {
    use super::Endpoint;

    pub const INFO: Endpoint = Endpoint::post("transfer/info");
    pub const SPEED_LIMITS_MODE: Endpoint = Endpoint::post("transfer/speedLimitsMode");
    pub const TOGGLE_SPEED_LIMITS_MODE: Endpoint =
        Endpoint::post("transfer/toggleSpeedLimitsMode");
    pub const DOWNLOAD_LIMIT: Endpoint = Endpoint::post("transfer/downloadLimit");
    pub const SET_DOWNLOAD_LIMIT: Endpoint = Endpoint::post("transfer/setDownloadLimit");
    pub const UPLOAD_LIMIT: Endpoint = Endpoint::post("transfer/uploadLimit");
    pub const SET_UPLOAD_LIMIT: Endpoint = Endpoint::post("transfer/setUploadLimit");
    pub const BAN_PEERS: Endpoint = Endpoint::post("transfer/banPeers");
}

/// `torrents/*`
#[allow(missing_docs)]
pub mod torrents {
    use super::Endpoint;

    pub const INFO: Endpoint = Endpoint::post("torrents/info");
    pub const PROPERTIES: Endpoint = Endpoint::post("torrents/properties");
    pub const TRACKERS: Endpoint = Endpoint::post("torrents/trackers");
    pub const WEBSEEDS: Endpoint = Endpoint::post("torrents/webseeds");
    pub const FILES: Endpoint = Endpoint::post("torrents/files");
    pub const PIECE_STATES: Endpoint = Endpoint::post("torrents/pieceStates");
    pub const PIECE_HASHES: Endpoint = Endpoint::post("torrents/pieceHashes");
    pub const PAUSE: Endpoint = Endpoint::post("torrents/pause");
    pub const RESUME: Endpoint = Endpoint::post("torrents/resume");
    pub const DELETE: Endpoint = Endpoint::post("torrents/delete");
    pub const RECHECK: Endpoint = Endpoint::post("torrents/recheck");
    pub const REANNOUNCE: Endpoint = Endpoint::post("torrents/reannounce");
    pub const ADD: Endpoint = Endpoint::post("torrents/add");
    pub const ADD_TRACKERS: Endpoint = Endpoint::post("torrents/addTrackers");
    pub const EDIT_TRACKER: Endpoint = Endpoint::post("torrents/editTracker");
    pub const REMOVE_TRACKERS: Endpoint = Endpoint::post("torrents/removeTrackers");
    pub const ADD_PEERS: Endpoint = Endpoint::post("torrents/addPeers");
    pub const INCREASE_PRIO: Endpoint = Endpoint::post("torrents/increasePrio");
    pub const DECREASE_PRIO: Endpoint = Endpoint::post("torrents/decreasePrio");
    pub const TOP_PRIO: Endpoint = Endpoint::post("torrents/topPrio");
    pub const BOTTOM_PRIO: Endpoint = Endpoint::post("torrents/bottomPrio");
    pub const FILE_PRIO: Endpoint = Endpoint::post("torrents/filePrio");
    pub const DOWNLOAD_LIMIT: Endpoint = Endpoint::post("torrents/downloadLimit");
    pub const SET_DOWNLOAD_LIMIT: Endpoint = Endpoint::post("torrents/setDownloadLimit");
    pub const SET_SHARE_LIMITS: Endpoint = Endpoint::post("torrents/setShareLimits");
    pub const UPLOAD_LIMIT: Endpoint = Endpoint::post("torrents/uploadLimit");
    pub const SET_UPLOAD_LIMIT: Endpoint = Endpoint::post("torrents/setUploadLimit");
    pub const SET_LOCATION: Endpoint = Endpoint::post("torrents/setLocation");
    pub const RENAME: Endpoint = Endpoint::post("torrents/rename");
    pub const SET_CATEGORY: Endpoint = Endpoint::post("torrents/setCategory");
    pub const CATEGORIES: Endpoint = Endpoint::post("torrents/categories");
    pub const CREATE_CATEGORY: Endpoint = Endpoint::post("torrents/createCategory");
    pub const EDIT_CATEGORY: Endpoint = Endpoint::post("torrents/editCategory");
    pub const REMOVE_CATEGORIES: Endpoint = Endpoint::post("torrents/removeCategories");
    pub const ADD_TAGS: Endpoint = Endpoint::post("torrents/addTags");
    pub const REMOVE_TAGS: Endpoint = Endpoint::post("torrents/removeTags");
    pub const TAGS: Endpoint = Endpoint::post("torrents/tags");
    pub const CREATE_TAGS: Endpoint = Endpoint::post("torrents/createTags");
    pub const DELETE_TAGS: Endpoint = Endpoint::post("torrents/deleteTags");
    pub const SET_AUTO_MANAGEMENT: Endpoint = Endpoint::post("torrents/setAutoManagement");
    pub const TOGGLE_SEQUENTIAL_DOWNLOAD: Endpoint =
        Endpoint::post("torrents/toggleSequentialDownload");
    pub const TOGGLE_FIRST_LAST_PIECE_PRIO: Endpoint =
        Endpoint::post("torrents/toggleFirstLastPiecePrio");
    pub const SET_FORCE_START: Endpoint = Endpoint::post("torrents/setForceStart");
    pub const SET_SUPER_SEEDING: Endpoint = Endpoint::post("torrents/setSuperSeeding");
    pub const RENAME_FILE: Endpoint = Endpoint::post("torrents/renameFile");
    pub const RENAME_FOLDER: Endpoint = Endpoint::post("torrents/renameFolder");
}

/// `rss/*`
#[allow(missing_docs)]
pub mod rss {
    use super::Endpoint;

    pub const ADD_FOLDER: Endpoint = Endpoint::post("rss/addFolder");
    pub const ADD_FEED: Endpoint = Endpoint::post("rss/addFeed");
    pub const REMOVE_ITEM: Endpoint = Endpoint::post("rss/removeItem");
    pub const MOVE_ITEM: Endpoint = Endpoint::post("rss/moveItem");
    pub const ITEMS: Endpoint = Endpoint::post("rss/items");
    pub const MARK_AS_READ: Endpoint = Endpoint::post("rss/markAsRead");
    pub const REFRESH_ITEM: Endpoint = Endpoint::post("rss/refreshItem");
    pub const SET_RULE: Endpoint = Endpoint::post("rss/setRule");
    pub const RENAME_RULE: Endpoint = Endpoint::post("rss/renameRule");
    pub const REMOVE_RULE: Endpoint = Endpoint::post("rss/removeRule");
    pub const RULES: Endpoint = Endpoint::post("rss/rules");
    pub const MATCHING_ARTICLES: Endpoint = Endpoint::post("rss/matchingArticles");
}

/// `search/*`
#[allow(missing_docs)]
pub mod search {
    use super::Endpoint;

    pub const START: Endpoint = Endpoint::post("search/start");
    pub const STOP: Endpoint = Endpoint::post("search/stop");
    pub const STATUS: Endpoint = Endpoint::post("search/status");
    pub const RESULTS: Endpoint = Endpoint::post("search/results");
    pub const DELETE: Endpoint = Endpoint::post("search/delete");
    pub const PLUGINS: Endpoint = Endpoint::post("search/plugins");
    pub const INSTALL_PLUGIN: Endpoint = Endpoint::post("search/installPlugin");
    pub const UNINSTALL_PLUGIN: Endpoint = Endpoint::post("search/uninstallPlugin");
    pub const ENABLE_PLUGIN: Endpoint = Endpoint::post("search/enablePlugin");
    pub const UPDATE_PLUGINS: Endpoint = Endpoint::post("search/updatePlugins");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_the_prefix() {
        for endpoint in [auth::LOGIN, app::VERSION, torrents::ADD, rss::SET_RULE, search::START] {
            assert!(!endpoint.path.starts_with('/'), "{}", endpoint.path);
            assert_eq!(endpoint.method, Method::Post);
        }
    }

    #[test]
    fn constructors_set_method() {
        assert_eq!(Endpoint::get("app/version").method, Method::Get);
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
