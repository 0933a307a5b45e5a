//! Command line arguments.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand, ValueEnum};

use mosaic_qbit_client::{ClientConfig, Method};
use mosaic_qbit_types::TorrentFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// WebUI base URL. Overrides QBIT_URL.
    #[arg(long, global = true)]
    url: Option<String>,

    /// WebUI username. Overrides QBIT_USERNAME.
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// WebUI password. Overrides QBIT_PASSWORD.
    #[arg(short, long, global = true)]
    password: Option<String>,

    /// Request timeout in seconds. Overrides QBIT_TIMEOUT_SECS.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the application and WebUI API versions.
    Version,

    /// List torrents.
    List {
        /// State filter, e.g. `downloading` or `stalled_uploading`
        #[arg(short, long, value_parser = parse_filter)]
        filter: Option<TorrentFilter>,

        /// Only torrents in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only torrents with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Sort by this field
        #[arg(short, long)]
        sort: Option<String>,

        /// Reverse the sort order
        #[arg(short, long, default_value_t = false)]
        reverse: bool,

        /// Print the raw JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Pause torrents. No hashes means all of them.
    Pause { hashes: Vec<String> },

    /// Resume torrents. No hashes means all of them.
    Resume { hashes: Vec<String> },

    /// Delete torrents.
    Delete {
        #[arg(required = true)]
        hashes: Vec<String>,

        /// Also delete the downloaded data
        #[arg(long, default_value_t = false)]
        delete_files: bool,
    },

    /// Add torrents from `.torrent` files and/or URLs.
    Add {
        /// Paths to `.torrent` files
        files: Vec<PathBuf>,

        /// Magnet links or HTTP URLs
        #[arg(long = "url")]
        urls: Vec<String>,

        /// Download folder
        #[arg(long)]
        save_path: Option<String>,

        /// Category for the new torrents
        #[arg(long)]
        category: Option<String>,

        /// Add in the paused state
        #[arg(long, default_value_t = false)]
        paused: bool,
    },

    /// Print global transfer statistics.
    Transfer,

    /// Call any API method by path, e.g. `raw torrents/count -m get`.
    Raw {
        /// Path below the API prefix
        path: String,

        #[arg(short, long, value_enum, default_value_t = HttpMethod::Post)]
        method: HttpMethod,

        /// Parameters as `key=value`
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::Get,
            HttpMethod::Post => Method::Post,
        }
    }
}

impl Cli {
    /// Environment configuration with the command line flags applied on top.
    pub(crate) fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(username) = &self.username {
            config.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            config.password = Some(password.clone());
        }
        if let Some(secs) = self.timeout {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

fn parse_filter(s: &str) -> Result<TorrentFilter, String> {
    serde_json::from_value(serde_json::Value::String(s.to_owned()))
        .map_err(|_| format!("unknown torrent filter `{s}`"))
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}
