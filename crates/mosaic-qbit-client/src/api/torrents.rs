//! `torrents/*`
//!
//! Hash lists accept anything convertible into an [`ArgList`]: a single hash, a
//! slice, a vector, or [`ArgList::all`].

use tracing::debug;

use mosaic_qbit_types::{
    AddTorrentOptions, Payload, QbitError, TORRENT_CONTENT_TYPE, TorrentListQuery,
};

use crate::QbitClient;
use crate::encoding::{ArgList, COMMA, ESCAPED_NEWLINE, NEWLINE, PIPE, bool_str};
use crate::endpoints::{Endpoint, torrents};
use crate::request::{Body, FilePart, Params};
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Lists torrents. Unset query fields are not sent; `reverse` always is.
    pub async fn torrents_info(&self, query: &TorrentListQuery) -> Result<Payload, QbitError> {
        let mut params = Params::new()
            .with_opt("filter", query.filter.map(|f| f.as_str()))
            .with_opt("category", query.category.as_deref())
            .with_opt("tag", query.tag.as_deref())
            .with_opt("sort", query.sort.as_deref())
            .with("reverse", bool_str(query.reverse))
            .with_opt("limit", query.limit)
            .with_opt("offset", query.offset);
        if !query.hashes.is_empty() {
            params = params.with_list("hashes", query.hashes.as_slice(), PIPE);
        }
        self.send_request(torrents::INFO, params.into()).await
    }

    /// Generic properties of one torrent.
    pub async fn torrents_properties(&self, hash: &str) -> Result<Payload, QbitError> {
        self.hash_call(torrents::PROPERTIES, hash).await
    }

    /// Trackers of one torrent.
    pub async fn torrents_trackers(&self, hash: &str) -> Result<Payload, QbitError> {
        self.hash_call(torrents::TRACKERS, hash).await
    }

    /// Web seeds of one torrent.
    pub async fn torrents_webseeds(&self, hash: &str) -> Result<Payload, QbitError> {
        self.hash_call(torrents::WEBSEEDS, hash).await
    }

    /// Files of one torrent. `indexes` restricts the result to those file indexes and
    /// is only sent when given and non-empty.
    pub async fn torrents_files(
        &self,
        hash: &str,
        indexes: Option<ArgList>,
    ) -> Result<Payload, QbitError> {
        let mut params = Params::new().with("hash", hash);
        if let Some(indexes) = indexes.filter(|i| !i.is_empty()) {
            params = params.with_list("index", indexes, PIPE);
        }
        self.send_request(torrents::FILES, params.into()).await
    }

    /// Piece states of one torrent.
    pub async fn torrents_piece_states(&self, hash: &str) -> Result<Payload, QbitError> {
        self.hash_call(torrents::PIECE_STATES, hash).await
    }

    /// Piece hashes of one torrent.
    pub async fn torrents_piece_hashes(&self, hash: &str) -> Result<Payload, QbitError> {
        self.hash_call(torrents::PIECE_HASHES, hash).await
    }

    /// Pauses torrents.
    pub async fn torrents_pause(&self, hashes: impl Into<ArgList>) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::PAUSE, hashes.into()).await
    }

    /// Resumes torrents.
    pub async fn torrents_resume(&self, hashes: impl Into<ArgList>) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::RESUME, hashes.into()).await
    }

    /// Deletes torrents, and their data when `delete_files` is set.
    pub async fn torrents_delete(
        &self,
        hashes: impl Into<ArgList>,
        delete_files: bool,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("deleteFiles", bool_str(delete_files));
        self.send_request(torrents::DELETE, params.into()).await
    }

    /// Rechecks torrents.
    pub async fn torrents_recheck(&self, hashes: impl Into<ArgList>) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::RECHECK, hashes.into()).await
    }

    /// Reannounces torrents to their trackers.
    pub async fn torrents_reannounce(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::REANNOUNCE, hashes.into()).await
    }

    /// Adds torrents from URLs and/or `.torrent` files as a multipart upload.
    ///
    /// Every file is attached under the `torrents` field with the
    /// `application/x-bittorrent` content type. `root_folder` is always sent; every
    /// other unset option is omitted.
    pub async fn torrents_add(&self, options: &AddTorrentOptions) -> Result<Payload, QbitError> {
        let tri = |value: Option<bool>| value.map(bool_str);

        let mut fields = Params::new();
        if !options.urls.is_empty() {
            fields = fields.with_list("urls", options.urls.as_slice(), NEWLINE);
        }
        fields = fields
            .with_opt("savepath", options.save_path.as_deref())
            .with_opt("cookie", options.cookie.as_deref())
            .with_opt("category", options.category.as_deref());
        if !options.tags.is_empty() {
            fields = fields.with_list("tags", options.tags.as_slice(), COMMA);
        }
        let fields = fields
            .with_opt("skip_checking", tri(options.skip_checking))
            .with_opt("paused", tri(options.paused))
            .with("root_folder", options.root_folder.as_str())
            .with_opt("rename", options.rename.as_deref())
            .with_opt("upLimit", options.up_limit)
            .with_opt("dlLimit", options.dl_limit)
            .with_opt("ratioLimit", options.ratio_limit)
            .with_opt("seedingTimeLimit", options.seeding_time_limit)
            .with_opt("autoTMM", tri(options.auto_tmm))
            .with_opt("sequentialDownload", tri(options.sequential_download))
            .with_opt("firstLastPiecePrio", tri(options.first_last_piece_prio));

        let files = options
            .torrents
            .iter()
            .map(|torrent| FilePart {
                name: "torrents".to_owned(),
                file_name: torrent.file_name.clone(),
                content_type: TORRENT_CONTENT_TYPE.to_owned(),
                bytes: torrent.bytes.clone(),
            })
            .collect::<Vec<_>>();

        debug!(
            urls = options.urls.len(),
            files = files.len(),
            "Adding torrents"
        );
        self.send_request(torrents::ADD, Body::Multipart { fields, files })
            .await
    }

    /// Adds trackers to one torrent.
    pub async fn torrents_add_trackers(
        &self,
        hash: &str,
        urls: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with_list("urls", urls, ESCAPED_NEWLINE);
        self.send_request(torrents::ADD_TRACKERS, params.into()).await
    }

    /// Replaces a tracker URL of one torrent.
    pub async fn torrents_edit_tracker(
        &self,
        hash: &str,
        orig_url: &str,
        new_url: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with("origUrl", orig_url)
            .with("newUrl", new_url);
        self.send_request(torrents::EDIT_TRACKER, params.into()).await
    }

    /// Removes trackers from one torrent.
    pub async fn torrents_remove_trackers(
        &self,
        hash: &str,
        urls: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with_list("urls", urls, PIPE);
        self.send_request(torrents::REMOVE_TRACKERS, params.into())
            .await
    }

    /// Adds peers (`host:port`) to torrents.
    pub async fn torrents_add_peers(
        &self,
        hashes: impl Into<ArgList>,
        peers: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with_list("peers", peers, PIPE);
        self.send_request(torrents::ADD_PEERS, params.into()).await
    }

    /// Moves torrents up the queue.
    pub async fn torrents_increase_prio(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::INCREASE_PRIO, hashes.into()).await
    }

    /// Moves torrents down the queue.
    pub async fn torrents_decrease_prio(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::DECREASE_PRIO, hashes.into()).await
    }

    /// Moves torrents to the top of the queue.
    pub async fn torrents_top_prio(&self, hashes: impl Into<ArgList>) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::TOP_PRIO, hashes.into()).await
    }

    /// Moves torrents to the bottom of the queue.
    pub async fn torrents_bottom_prio(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::BOTTOM_PRIO, hashes.into()).await
    }

    /// Sets the priority of files, by file id, within one torrent.
    pub async fn torrents_file_prio(
        &self,
        hash: &str,
        ids: impl Into<ArgList>,
        priority: i64,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with_list("id", ids, PIPE)
            .with("priority", priority);
        self.send_request(torrents::FILE_PRIO, params.into()).await
    }

    /// Per-torrent download limits.
    pub async fn torrents_download_limit(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::DOWNLOAD_LIMIT, hashes.into()).await
    }

    /// Sets the download limit of torrents in bytes/second.
    pub async fn torrents_set_download_limit(
        &self,
        hashes: impl Into<ArgList>,
        limit: i64,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("limit", limit);
        self.send_request(torrents::SET_DOWNLOAD_LIMIT, params.into())
            .await
    }

    /// Sets share limits. For both limits `-2` means "use the global limit" and `-1`
    /// means "no limit".
    pub async fn torrents_set_share_limits(
        &self,
        hashes: impl Into<ArgList>,
        ratio_limit: f64,
        seeding_time_limit: i64,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("ratioLimit", ratio_limit)
            .with("seedingTimeLimit", seeding_time_limit);
        self.send_request(torrents::SET_SHARE_LIMITS, params.into())
            .await
    }

    /// Per-torrent upload limits.
    pub async fn torrents_upload_limit(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::UPLOAD_LIMIT, hashes.into()).await
    }

    /// Sets the upload limit of torrents in bytes/second.
    pub async fn torrents_set_upload_limit(
        &self,
        hashes: impl Into<ArgList>,
        limit: i64,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("limit", limit);
        self.send_request(torrents::SET_UPLOAD_LIMIT, params.into())
            .await
    }

    /// Moves torrent data to `location`.
    pub async fn torrents_set_location(
        &self,
        hashes: impl Into<ArgList>,
        location: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("location", location);
        self.send_request(torrents::SET_LOCATION, params.into()).await
    }

    /// Renames one torrent.
    pub async fn torrents_rename(&self, hash: &str, name: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("hash", hash).with("name", name);
        self.send_request(torrents::RENAME, params.into()).await
    }

    /// Sets the category of torrents. An empty category removes it.
    pub async fn torrents_set_category(
        &self,
        hashes: impl Into<ArgList>,
        category: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("category", category);
        self.send_request(torrents::SET_CATEGORY, params.into()).await
    }

    /// All categories. Decodes into a map of [`Category`](mosaic_qbit_types::Category).
    pub async fn torrents_categories(&self) -> Result<Payload, QbitError> {
        self.send_request(torrents::CATEGORIES, Body::Empty).await
    }

    /// Creates a category.
    pub async fn torrents_create_category(
        &self,
        category: &str,
        save_path: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("category", category)
            .with("savePath", save_path);
        self.send_request(torrents::CREATE_CATEGORY, params.into())
            .await
    }

    /// Changes the save path of a category.
    pub async fn torrents_edit_category(
        &self,
        category: &str,
        save_path: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("category", category)
            .with("savePath", save_path);
        self.send_request(torrents::EDIT_CATEGORY, params.into()).await
    }

    /// Removes categories.
    pub async fn torrents_remove_categories(
        &self,
        categories: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("categories", categories, ESCAPED_NEWLINE);
        self.send_request(torrents::REMOVE_CATEGORIES, params.into())
            .await
    }

    /// Adds tags to torrents.
    pub async fn torrents_add_tags(
        &self,
        hashes: impl Into<ArgList>,
        tags: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with_list("tags", tags, COMMA);
        self.send_request(torrents::ADD_TAGS, params.into()).await
    }

    /// Removes tags from torrents. No tags removes all of them.
    pub async fn torrents_remove_tags(
        &self,
        hashes: impl Into<ArgList>,
        tags: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with_list("tags", tags, COMMA);
        self.send_request(torrents::REMOVE_TAGS, params.into()).await
    }

    /// All tags.
    pub async fn torrents_tags(&self) -> Result<Payload, QbitError> {
        self.send_request(torrents::TAGS, Body::Empty).await
    }

    /// Creates tags.
    pub async fn torrents_create_tags(&self, tags: impl Into<ArgList>) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("tags", tags, COMMA);
        self.send_request(torrents::CREATE_TAGS, params.into()).await
    }

    /// Deletes tags.
    pub async fn torrents_delete_tags(&self, tags: impl Into<ArgList>) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("tags", tags, COMMA);
        self.send_request(torrents::DELETE_TAGS, params.into()).await
    }

    /// Enables or disables automatic torrent management.
    pub async fn torrents_set_auto_management(
        &self,
        hashes: impl Into<ArgList>,
        enable: bool,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("enable", bool_str(enable));
        self.send_request(torrents::SET_AUTO_MANAGEMENT, params.into())
            .await
    }

    /// Toggles sequential download.
    pub async fn torrents_toggle_sequential_download(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::TOGGLE_SEQUENTIAL_DOWNLOAD, hashes.into())
            .await
    }

    /// Toggles first/last piece priority.
    pub async fn torrents_toggle_first_last_piece_prio(
        &self,
        hashes: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        self.hashes_call(torrents::TOGGLE_FIRST_LAST_PIECE_PRIO, hashes.into())
            .await
    }

    /// Sets force start.
    pub async fn torrents_set_force_start(
        &self,
        hashes: impl Into<ArgList>,
        value: bool,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("value", bool_str(value));
        self.send_request(torrents::SET_FORCE_START, params.into())
            .await
    }

    /// Sets super seeding.
    pub async fn torrents_set_super_seeding(
        &self,
        hashes: impl Into<ArgList>,
        value: bool,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("hashes", hashes, PIPE)
            .with("value", bool_str(value));
        self.send_request(torrents::SET_SUPER_SEEDING, params.into())
            .await
    }

    /// Renames a file inside one torrent.
    pub async fn torrents_rename_file(
        &self,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<Payload, QbitError> {
        self.rename_path(torrents::RENAME_FILE, hash, old_path, new_path)
            .await
    }

    /// Renames a folder inside one torrent.
    pub async fn torrents_rename_folder(
        &self,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<Payload, QbitError> {
        self.rename_path(torrents::RENAME_FOLDER, hash, old_path, new_path)
            .await
    }

    async fn hash_call(&self, endpoint: Endpoint, hash: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("hash", hash);
        self.send_request(endpoint, params.into()).await
    }

    async fn hashes_call(&self, endpoint: Endpoint, hashes: ArgList) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("hashes", hashes, PIPE);
        self.send_request(endpoint, params.into()).await
    }

    async fn rename_path(
        &self,
        endpoint: Endpoint,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with("oldPath", old_path)
            .with("newPath", new_path);
        self.send_request(endpoint, params.into()).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mosaic_qbit_types::{
        AddTorrentOptions, Category, QbitError, RootFolder, TorrentFile, TorrentFilter,
        TorrentInfo, TorrentListQuery,
    };

    use crate::encoding::ArgList;
    use crate::request::Body;
    use crate::testutil::{expect_post, fields, form_is, make_test_client, no_body, pairs, respond_with};

    #[tokio::test]
    async fn test_pause_joins_hashes_with_pipe() {
        let mock = expect_post(
            "torrents/pause",
            |req| form_is(req, &[("hashes", "abc123|def456")]),
            "",
        );
        let client = make_test_client(mock);
        client.torrents_pause(vec!["abc123", "def456"]).await.unwrap();
    }

    #[tokio::test]
    async fn test_single_hash_equals_one_element_list() {
        for hashes in [ArgList::from("abc123"), ArgList::from(vec!["abc123"])] {
            let mock = expect_post(
                "torrents/resume",
                |req| form_is(req, &[("hashes", "abc123")]),
                "",
            );
            make_test_client(mock).torrents_resume(hashes).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_all_wildcard() {
        let mock = expect_post(
            "torrents/recheck",
            |req| form_is(req, &[("hashes", "all")]),
            "",
        );
        make_test_client(mock)
            .torrents_recheck(ArgList::all())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_sends_delete_files_flag() {
        let mock = expect_post(
            "torrents/delete",
            |req| form_is(req, &[("hashes", "abc123"), ("deleteFiles", "false")]),
            "",
        );
        make_test_client(mock)
            .torrents_delete("abc123", false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_info_sends_only_set_fields() {
        let mock = expect_post(
            "torrents/info",
            |req| {
                form_is(
                    req,
                    &[
                        ("filter", "downloading"),
                        ("category", ""),
                        ("reverse", "true"),
                        ("limit", "10"),
                        ("hashes", "abc123|def456"),
                    ],
                )
            },
            r#"[{"hash":"abc123","name":"ubuntu.iso","state":"downloading","progress":0.25}]"#,
        );
        let client = make_test_client(mock);

        let query = TorrentListQuery {
            filter: Some(TorrentFilter::Downloading),
            category: Some(String::new()),
            reverse: true,
            limit: Some(10),
            hashes: vec!["abc123".into(), "def456".into()],
            ..Default::default()
        };
        let torrents: Vec<TorrentInfo> = client.torrents_info(&query).await.unwrap().json().unwrap();
        assert_eq!(torrents.len(), 1);
        assert_eq!(torrents[0].state, "downloading");
    }

    #[tokio::test]
    async fn test_info_default_query() {
        let mock = expect_post(
            "torrents/info",
            |req| form_is(req, &[("reverse", "false")]),
            "[]",
        );
        make_test_client(mock)
            .torrents_info(&TorrentListQuery::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_files_sends_index_only_when_given() {
        let mock = expect_post("torrents/files", |req| form_is(req, &[("hash", "abc123")]), "[]");
        make_test_client(mock)
            .torrents_files("abc123", None)
            .await
            .unwrap();

        let mock = expect_post("torrents/files", |req| form_is(req, &[("hash", "abc123")]), "[]");
        make_test_client(mock)
            .torrents_files("abc123", Some(ArgList::default()))
            .await
            .unwrap();

        let mock = expect_post(
            "torrents/files",
            |req| form_is(req, &[("hash", "abc123"), ("index", "0|2")]),
            "[]",
        );
        make_test_client(mock)
            .torrents_files("abc123", Some(ArgList::from(["0", "2"])))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_properties_of_unknown_hash() {
        let client = make_test_client(respond_with(404, "Not Found"));
        let err = client.torrents_properties("missing").await.unwrap_err();
        assert_eq!(err, QbitError::HashNotFound("Not Found".into()));
    }

    #[tokio::test]
    async fn test_add_uploads_files_as_multipart() {
        let mock = expect_post(
            "torrents/add",
            |req| {
                let Body::Multipart { files, .. } = &req.body else {
                    return false;
                };
                files.len() == 2
                    && files.iter().all(|f| {
                        f.name == "torrents" && f.content_type == "application/x-bittorrent"
                    })
                    && files[0].file_name == "a.torrent"
                    && files[1].file_name == "b.torrent"
                    && fields(req) == pairs(&[("paused", "true"), ("root_folder", "unset")])
            },
            "Ok.",
        );
        let client = make_test_client(mock);

        let options = AddTorrentOptions {
            torrents: vec![
                TorrentFile::new("a.torrent", b"d4:infod4:name1:aee".to_vec()),
                TorrentFile::new("b.torrent", b"d4:infod4:name1:bee".to_vec()),
            ],
            paused: Some(true),
            ..Default::default()
        };
        let payload = client.torrents_add(&options).await.unwrap();
        assert_eq!(payload.as_text(), Some("Ok."));
    }

    #[tokio::test]
    async fn test_add_tri_state_flags() {
        let mock = expect_post(
            "torrents/add",
            |req| {
                fields(req)
                    == pairs(&[
                        ("urls", "magnet:?xt=urn:btih:abc\nhttp://example.org/b.torrent"),
                        ("savepath", "/downloads"),
                        ("tags", "linux,iso"),
                        ("skip_checking", "false"),
                        ("root_folder", "true"),
                        ("upLimit", "1024"),
                        ("ratioLimit", "1.5"),
                        ("autoTMM", "false"),
                    ])
                    && req.body.files().is_empty()
            },
            "Ok.",
        );
        let client = make_test_client(mock);

        let options = AddTorrentOptions {
            urls: vec![
                "magnet:?xt=urn:btih:abc".into(),
                "http://example.org/b.torrent".into(),
            ],
            save_path: Some("/downloads".into()),
            tags: vec!["linux".into(), "iso".into()],
            skip_checking: Some(false),
            root_folder: RootFolder::True,
            up_limit: Some(1024),
            ratio_limit: Some(1.5),
            auto_tmm: Some(false),
            ..Default::default()
        };
        client.torrents_add(&options).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_trackers_uses_escaped_newline() {
        let mock = expect_post(
            "torrents/addTrackers",
            |req| {
                form_is(
                    req,
                    &[
                        ("hash", "abc123"),
                        ("urls", "udp://a.example:1337%0Audp://b.example:1337"),
                    ],
                )
            },
            "",
        );
        make_test_client(mock)
            .torrents_add_trackers("abc123", ["udp://a.example:1337", "udp://b.example:1337"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_trackers_uses_pipe() {
        let mock = expect_post(
            "torrents/removeTrackers",
            |req| form_is(req, &[("hash", "abc123"), ("urls", "udp://a|udp://b")]),
            "",
        );
        make_test_client(mock)
            .torrents_remove_trackers("abc123", ["udp://a", "udp://b"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_bottom_prio_joins_hashes() {
        let mock = expect_post(
            "torrents/bottomPrio",
            |req| form_is(req, &[("hashes", "abc123|def456")]),
            "",
        );
        make_test_client(mock)
            .torrents_bottom_prio(["abc123", "def456"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_file_prio() {
        let mock = expect_post(
            "torrents/filePrio",
            |req| form_is(req, &[("hash", "abc123"), ("id", "0|3"), ("priority", "7")]),
            "",
        );
        make_test_client(mock)
            .torrents_file_prio("abc123", ["0", "3"], 7)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_share_limits() {
        let mock = expect_post(
            "torrents/setShareLimits",
            |req| {
                form_is(
                    req,
                    &[
                        ("hashes", "abc123"),
                        ("ratioLimit", "-2"),
                        ("seedingTimeLimit", "-1"),
                    ],
                )
            },
            "",
        );
        make_test_client(mock)
            .torrents_set_share_limits("abc123", -2.0, -1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tags_use_comma() {
        let mock = expect_post(
            "torrents/addTags",
            |req| form_is(req, &[("hashes", "abc123|def456"), ("tags", "linux,iso")]),
            "",
        );
        make_test_client(mock)
            .torrents_add_tags(["abc123", "def456"], ["linux", "iso"])
            .await
            .unwrap();

        let mock = expect_post(
            "torrents/createTags",
            |req| form_is(req, &[("tags", "linux")]),
            "",
        );
        make_test_client(mock)
            .torrents_create_tags("linux")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_categories_uses_escaped_newline() {
        let mock = expect_post(
            "torrents/removeCategories",
            |req| form_is(req, &[("categories", "linux%0Amovies")]),
            "",
        );
        make_test_client(mock)
            .torrents_remove_categories(vec!["linux".to_string(), "movies".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_category_conflict() {
        let client = make_test_client(respond_with(409, "Invalid category name"));
        let err = client
            .torrents_create_category("", "/data")
            .await
            .unwrap_err();
        assert_eq!(err, QbitError::ApiFailed("Invalid category name".into()));
    }

    #[tokio::test]
    async fn test_categories_decode() {
        let mock = expect_post(
            "torrents/categories",
            no_body,
            r#"{"linux":{"name":"linux","savePath":"/data/linux"}}"#,
        );
        let categories: HashMap<String, Category> = make_test_client(mock)
            .torrents_categories()
            .await
            .unwrap()
            .json()
            .unwrap();
        assert_eq!(categories["linux"].save_path, "/data/linux");
    }

    #[tokio::test]
    async fn test_boolean_setters_default_to_explicit_values() {
        let mock = expect_post(
            "torrents/setForceStart",
            |req| form_is(req, &[("hashes", "abc123"), ("value", "false")]),
            "",
        );
        make_test_client(mock)
            .torrents_set_force_start("abc123", false)
            .await
            .unwrap();

        let mock = expect_post(
            "torrents/setAutoManagement",
            |req| form_is(req, &[("hashes", "abc123"), ("enable", "true")]),
            "",
        );
        make_test_client(mock)
            .torrents_set_auto_management("abc123", true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rename_file() {
        let mock = expect_post(
            "torrents/renameFile",
            |req| {
                form_is(
                    req,
                    &[
                        ("hash", "abc123"),
                        ("oldPath", "a/old.txt"),
                        ("newPath", "a/new.txt"),
                    ],
                )
            },
            "",
        );
        make_test_client(mock)
            .torrents_rename_file("abc123", "a/old.txt", "a/new.txt")
            .await
            .unwrap();
    }
}
