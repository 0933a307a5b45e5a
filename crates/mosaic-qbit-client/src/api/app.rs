//! `app/*`

use mosaic_qbit_types::{Payload, Preferences, QbitError};

use crate::QbitClient;
use crate::encoding::json_blob;
use crate::endpoints::app;
use crate::request::{Body, Params};
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Application version, e.g. `v4.6.2` (a text payload).
    pub async fn app_version(&self) -> Result<Payload, QbitError> {
        self.send_request(app::VERSION, Body::Empty).await
    }

    /// WebUI API version, e.g. `2.9.3`.
    pub async fn app_webapi_version(&self) -> Result<Payload, QbitError> {
        self.send_request(app::WEBAPI_VERSION, Body::Empty).await
    }

    /// Build information. Decodes into [`BuildInfo`](mosaic_qbit_types::BuildInfo).
    pub async fn app_build_info(&self) -> Result<Payload, QbitError> {
        self.send_request(app::BUILD_INFO, Body::Empty).await
    }

    /// Shuts the application down.
    pub async fn app_shutdown(&self) -> Result<Payload, QbitError> {
        self.send_request(app::SHUTDOWN, Body::Empty).await
    }

    /// Current preferences. Decodes into [`Preferences`].
    pub async fn app_preferences(&self) -> Result<Payload, QbitError> {
        self.send_request(app::PREFERENCES, Body::Empty).await
    }

    /// Changes preferences. Only the fields set in `preferences` are sent, as a JSON
    /// object in the `json` form field.
    ///
    /// The fields are not flattened into the form body: the WebUI only reads
    /// preferences from `json`.
    pub async fn app_set_preferences(&self, preferences: &Preferences) -> Result<Payload, QbitError> {
        let params = Params::new().with("json", json_blob(preferences)?);
        self.send_request(app::SET_PREFERENCES, params.into()).await
    }

    /// Default save path for new torrents.
    pub async fn app_default_save_path(&self) -> Result<Payload, QbitError> {
        self.send_request(app::DEFAULT_SAVE_PATH, Body::Empty).await
    }
}
