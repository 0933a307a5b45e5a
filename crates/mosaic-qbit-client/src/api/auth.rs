//! `auth/*`

use tracing::{debug, info};

use mosaic_qbit_types::{Payload, QbitError};

use crate::QbitClient;
use crate::endpoints::auth;
use crate::request::{Body, Params};
use crate::transport::Transport;

/// Body the WebUI sends back when the credentials are rejected.
const LOGIN_REJECTED: &str = "Fails.";

impl<T: Transport> QbitClient<T> {
    /// Logs in with the configured credentials. The server answers `Ok.` or `Fails.`
    /// with status 200 either way; see [`QbitClient::login`] for a checked variant.
    pub async fn auth_login(&self) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_opt("username", self.config().username.as_deref())
            .with_opt("password", self.config().password.as_deref());
        self.send_request(auth::LOGIN, params.into()).await
    }

    /// Logs in and fails with [`QbitError::Unauthorized`] if the credentials are
    /// rejected.
    pub async fn login(&self) -> Result<(), QbitError> {
        let payload = self.auth_login().await?;
        if payload.as_text() == Some(LOGIN_REJECTED) {
            return Err(QbitError::Unauthorized);
        }
        info!("Logged in to qBittorrent WebUI");
        Ok(())
    }

    /// Ends the session.
    pub async fn auth_logout(&self) -> Result<Payload, QbitError> {
        debug!("Logging out");
        self.send_request(auth::LOGOUT, Body::Empty).await
    }
}
