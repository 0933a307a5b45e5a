//! `transfer/*`

use mosaic_qbit_types::{Payload, QbitError};

use crate::QbitClient;
use crate::encoding::{ArgList, PIPE};
use crate::endpoints::transfer;
use crate::request::{Body, Params};
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Global transfer info, as shown in the status bar. Decodes into
    /// [`TransferInfo`](mosaic_qbit_types::TransferInfo).
    pub async fn transfer_info(&self) -> Result<Payload, QbitError> {
        self.send_request(transfer::INFO, Body::Empty).await
    }

    /// `1` when alternative speed limits are active, `0` otherwise.
    pub async fn transfer_speed_limits_mode(&self) -> Result<Payload, QbitError> {
        self.send_request(transfer::SPEED_LIMITS_MODE, Body::Empty)
            .await
    }

    /// Toggles alternative speed limits.
    pub async fn transfer_toggle_speed_limits_mode(&self) -> Result<Payload, QbitError> {
        self.send_request(transfer::TOGGLE_SPEED_LIMITS_MODE, Body::Empty)
            .await
    }

    /// Global download limit in bytes/second. `0` means unlimited.
    pub async fn transfer_download_limit(&self) -> Result<Payload, QbitError> {
        self.send_request(transfer::DOWNLOAD_LIMIT, Body::Empty)
            .await
    }

    /// Sets the global download limit in bytes/second.
    pub async fn transfer_set_download_limit(&self, limit: i64) -> Result<Payload, QbitError> {
        let params = Params::new().with("limit", limit);
        self.send_request(transfer::SET_DOWNLOAD_LIMIT, params.into())
            .await
    }

    /// Global upload limit in bytes/second. `0` means unlimited.
    pub async fn transfer_upload_limit(&self) -> Result<Payload, QbitError> {
        self.send_request(transfer::UPLOAD_LIMIT, Body::Empty).await
    }

    /// Sets the global upload limit in bytes/second.
    pub async fn transfer_set_upload_limit(&self, limit: i64) -> Result<Payload, QbitError> {
        let params = Params::new().with("limit", limit);
        self.send_request(transfer::SET_UPLOAD_LIMIT, params.into())
            .await
    }

    /// Bans peers, given as `host:port`.
    pub async fn transfer_ban_peers(
        &self,
        peers: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("peers", peers, PIPE);
        self.send_request(transfer::BAN_PEERS, params.into()).await
    }
}
