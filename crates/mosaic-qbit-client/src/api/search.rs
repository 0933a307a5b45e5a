//! `search/*`

use mosaic_qbit_types::{Payload, QbitError};

use crate::QbitClient;
use crate::encoding::{ArgList, PIPE, bool_str};
use crate::endpoints::{Endpoint, search};
use crate::request::{Body, Params};
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Starts a search job. `plugins` may be plugin names, `all` or `enabled`.
    pub async fn search_start(
        &self,
        pattern: &str,
        plugins: impl Into<ArgList>,
        category: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("pattern", pattern)
            .with_list("plugins", plugins, PIPE)
            .with("category", category);
        self.send_request(search::START, params.into()).await
    }

    /// Stops a search job.
    pub async fn search_stop(&self, id: i64) -> Result<Payload, QbitError> {
        self.search_id_call(search::STOP, id).await
    }

    /// Status of one search job, or of all of them when `id` is `None`.
    pub async fn search_status(&self, id: Option<i64>) -> Result<Payload, QbitError> {
        let body = id.map_or(Body::Empty, |id| Params::new().with("id", id).into());
        self.send_request(search::STATUS, body).await
    }

    /// Results of a search job. `limit` and `offset` default to `0`, i.e. everything.
    pub async fn search_results(
        &self,
        id: i64,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("id", id)
            .with("limit", limit.unwrap_or(0))
            .with("offset", offset.unwrap_or(0));
        self.send_request(search::RESULTS, params.into()).await
    }

    /// Deletes a search job.
    pub async fn search_delete(&self, id: i64) -> Result<Payload, QbitError> {
        self.search_id_call(search::DELETE, id).await
    }

    /// Installed search plugins.
    pub async fn search_plugins(&self) -> Result<Payload, QbitError> {
        self.send_request(search::PLUGINS, Body::Empty).await
    }

    /// Installs plugins from URLs or file paths.
    pub async fn search_install_plugin(
        &self,
        sources: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("sources", sources, PIPE);
        self.send_request(search::INSTALL_PLUGIN, params.into()).await
    }

    /// Uninstalls plugins.
    pub async fn search_uninstall_plugin(
        &self,
        names: impl Into<ArgList>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new().with_list("names", names, PIPE);
        self.send_request(search::UNINSTALL_PLUGIN, params.into())
            .await
    }

    /// Enables or disables plugins.
    pub async fn search_enable_plugin(
        &self,
        names: impl Into<ArgList>,
        enable: bool,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with_list("names", names, PIPE)
            .with("enable", bool_str(enable));
        self.send_request(search::ENABLE_PLUGIN, params.into()).await
    }

    /// Updates all plugins.
    pub async fn search_update_plugins(&self) -> Result<Payload, QbitError> {
        self.send_request(search::UPDATE_PLUGINS, Body::Empty).await
    }

    async fn search_id_call(&self, endpoint: Endpoint, id: i64) -> Result<Payload, QbitError> {
        let params = Params::new().with("id", id);
        self.send_request(endpoint, params.into()).await
    }
}
