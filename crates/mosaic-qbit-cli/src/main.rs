//! # qbit
//!
//! A small command line front end for the qBittorrent WebUI.
//!
//! ## Usage
//!
//! ```sh,ignore
//! QBIT_URL=http://127.0.0.1:8080 QBIT_USERNAME=admin QBIT_PASSWORD=adminadmin \
//!     cargo run -p mosaic-qbit-cli -- list --filter downloading
//! ```

mod cli;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mosaic_qbit_client::{ArgList, Params, QbitClient};
use mosaic_qbit_types::{AddTorrentOptions, Payload, TorrentFile, TorrentInfo, TorrentListQuery};

use crate::cli::{Cli, Command};

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Pretty-prints JSON payloads, prints text as is.
fn print_payload(payload: Payload) -> Result<(), serde_json::Error> {
    match payload {
        Payload::Json { value, .. } => println!("{}", serde_json::to_string_pretty(&value)?),
        Payload::Text(text) if text.is_empty() => {}
        Payload::Text(text) => println!("{text}"),
    }
    Ok(())
}

/// Both versions as sent by the server, without reformatting.
fn version_line(app: Payload, api: Payload) -> String {
    format!(
        "qBittorrent {} (WebUI API {})",
        app.into_text(),
        api.into_text()
    )
}

fn print_torrents(torrents: &[TorrentInfo]) {
    for t in torrents {
        println!(
            "{}  {:<20} {:>6.1}%  {}",
            t.hash,
            t.state,
            t.progress * 100.0,
            t.name
        );
    }
}

/// An empty selection means every torrent.
fn selection(hashes: Vec<String>) -> ArgList {
    if hashes.is_empty() {
        ArgList::all()
    } else {
        hashes.into()
    }
}

async fn run(client: &QbitClient, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Version => {
            let app = client.app_version().await?;
            let api = client.app_webapi_version().await?;
            println!("{}", version_line(app, api));
        }
        Command::List {
            filter,
            category,
            tag,
            sort,
            reverse,
            json,
        } => {
            let query = TorrentListQuery {
                filter,
                category,
                tag,
                sort,
                reverse,
                ..Default::default()
            };
            let payload = client.torrents_info(&query).await?;
            if json {
                print_payload(payload)?;
            } else {
                let torrents: Vec<TorrentInfo> = payload.json()?;
                info!("{} torrents", torrents.len());
                print_torrents(&torrents);
            }
        }
        Command::Pause { hashes } => {
            client.torrents_pause(selection(hashes)).await?;
        }
        Command::Resume { hashes } => {
            client.torrents_resume(selection(hashes)).await?;
        }
        Command::Delete {
            hashes,
            delete_files,
        } => {
            client.torrents_delete(hashes, delete_files).await?;
        }
        Command::Add {
            files,
            urls,
            save_path,
            category,
            paused,
        } => {
            let torrents = files
                .iter()
                .map(TorrentFile::from_path)
                .collect::<Result<Vec<_>, _>>()?;
            let options = AddTorrentOptions {
                urls,
                torrents,
                save_path,
                category,
                paused: paused.then_some(true),
                ..Default::default()
            };
            print_payload(client.torrents_add(&options).await?)?;
        }
        Command::Transfer => {
            print_payload(client.transfer_info().await?)?;
        }
        Command::Raw {
            path,
            method,
            params,
        } => {
            let params = (!params.is_empty()).then(|| params.into_iter().collect::<Params>());
            print_payload(client.call_raw(&path, method.into(), params).await?)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    info!("Connecting to {}", config.url);

    let has_credentials = config.username.is_some();
    let client = QbitClient::try_new(config)?;
    if has_credentials {
        client.login().await?;
    }

    let result = run(&client, cli.command).await;

    if has_credentials {
        if let Err(e) = client.auth_logout().await {
            warn!("Failed to log out: {e}");
        }
    }
    client.close();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_keeps_server_text() {
        let line = version_line(
            Payload::decode("v4.6.2".into()),
            Payload::decode("2.10".into()),
        );
        assert_eq!(line, "qBittorrent v4.6.2 (WebUI API 2.10)");
    }

    #[test]
    fn empty_selection_means_all() {
        assert_eq!(selection(Vec::new()).join("|"), "all");
        assert_eq!(
            selection(vec!["abc123".into(), "def456".into()]).join("|"),
            "abc123|def456"
        );
    }
}
