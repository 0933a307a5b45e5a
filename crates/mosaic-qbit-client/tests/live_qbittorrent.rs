//! Integration test against a running qBittorrent: login -> version -> add -> list -> pause -> delete -> logout.
//! Requires a reachable WebUI and environment configuration:
//! - QBIT_URL (default: http://127.0.0.1)
//! - QBIT_USERNAME / QBIT_PASSWORD
//! - QBIT_TIMEOUT_SECS, QBIT_API_PREFIX (optional)
//!
//! Run with `cargo test -p mosaic-qbit-client --test live_qbittorrent -- --ignored`.

#![allow(unused_crate_dependencies)]

use std::{fs, time::Duration};

use mosaic_qbit_client::{ArgList, ClientConfig, QbitClient};
use mosaic_qbit_types::{AddTorrentOptions, TorrentFile, TorrentInfo, TorrentListQuery};

/// A single-file torrent whose info hash is stable, so it can be found again by hash.
const SAMPLE_TORRENT: &[u8] = b"d8:announce35:udp://tracker.invalid:1337/announce4:infod6:lengthi29e4:name17:documentation.txt12:piece lengthi16384e6:pieces20:aaaaaaaaaaaaaaaaaaaaee";

#[tokio::test]
#[test_log::test]
#[ignore = "needs a running qBittorrent WebUI"]
async fn qbittorrent_chained_flow() {
    let client = QbitClient::try_new(ClientConfig::from_env()).expect("invalid QBIT_URL");

    // 1. Login
    client.login().await.expect("login failed");

    // 2. Version
    let version = client.app_version().await.expect("failed to read version");
    assert!(version.into_text().starts_with('v'));

    // 3. Add a paused torrent from disk
    let dir = tempfile::tempdir().unwrap();
    let torrent_path = dir.path().join("sample.torrent");
    fs::write(&torrent_path, SAMPLE_TORRENT).unwrap();

    let before: Vec<TorrentInfo> = client
        .torrents_info(&TorrentListQuery::default())
        .await
        .expect("failed to list torrents")
        .json()
        .unwrap();

    let options = AddTorrentOptions {
        torrents: vec![TorrentFile::from_path(&torrent_path).unwrap()],
        paused: Some(true),
        save_path: Some(dir.path().to_string_lossy().into_owned()),
        ..Default::default()
    };
    client.torrents_add(&options).await.expect("failed to add");

    // 4. List: the new torrent shows up once the session has processed the upload
    let mut added = None;
    for _ in 0..20 {
        let after: Vec<TorrentInfo> = client
            .torrents_info(&TorrentListQuery::default())
            .await
            .expect("failed to list torrents")
            .json()
            .unwrap();
        added = after
            .into_iter()
            .find(|t| t.name == "documentation.txt" && !before.iter().any(|b| b.hash == t.hash));
        if added.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    let added = added.expect("added torrent not found in list");

    // 5. Pause, then delete without files
    client
        .torrents_pause(added.hash.as_str())
        .await
        .expect("failed to pause");
    client
        .torrents_delete(ArgList::from(added.hash.as_str()), false)
        .await
        .expect("failed to delete");

    // 6. Logout
    client.auth_logout().await.expect("failed to logout");
    client.close();
}
