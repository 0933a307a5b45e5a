//! qBittorrent WebUI client and request dispatcher.

use std::fmt;

use tracing::{debug, instrument, warn};
use url::Url;

use mosaic_qbit_types::{Payload, QbitError};

use crate::config::ClientConfig;
use crate::endpoints::{Endpoint, Method};
use crate::request::{ApiRequest, Body, Params, RawResponse};
use crate::transport::{ReqwestTransport, Transport};


/// Client for one qBittorrent instance.
///
/// Every WebUI operation is an async method returning the decoded [`Payload`]. The
/// session cookie obtained by [`QbitClient::auth_login`] lives in the transport and
/// is replayed on every later call. Calls may be issued concurrently through a
/// shared reference.
pub struct QbitClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    base: String,
    transport: T,
}

impl QbitClient {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// Fails with [`QbitError::InvalidUrl`] if the configured URL is not an absolute
    /// http(s) URL. No request is sent.
    pub fn try_new(config: ClientConfig) -> Result<Self, QbitError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> QbitClient<T> {
    /// Creates a client on top of a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, QbitError> {
        let base = api_base(&config.url, &config.prefix)?;
        debug!("Using qBittorrent WebUI at {}", base);
        Ok(Self {
            config,
            base,
            transport,
        })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL of `path`, which is relative to the API prefix. A leading `/`
    /// is tolerated.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Performs one call: resolves the URL, runs the transport, and classifies the
    /// response.
    ///
    /// A 200 body is returned as JSON when it parses, as text otherwise. Any other
    /// status becomes the matching [`QbitError`] carrying the body. Nothing is
    /// retried.
    #[instrument(skip(self, body), fields(path = endpoint.path, method = %endpoint.method))]
    pub async fn send_request(&self, endpoint: Endpoint, body: Body) -> Result<Payload, QbitError> {
        let request = ApiRequest {
            method: endpoint.method,
            url: self.endpoint_url(endpoint.path),
            body,
        };
        self.dispatch(request).await
    }

    /// Calls an endpoint that has no dedicated method.
    ///
    /// `path` is relative to the API prefix (`torrents/count`). `None` sends no
    /// parameters. The response goes through the same classification as every
    /// other call.
    #[instrument(skip(self, params))]
    pub async fn call_raw(
        &self,
        path: &str,
        method: Method,
        params: Option<Params>,
    ) -> Result<Payload, QbitError> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Err(QbitError::InvalidUrl("empty endpoint path".into()));
        }
        let request = ApiRequest {
            method,
            url: self.endpoint_url(path),
            body: params.map_or(Body::Empty, Body::Form),
        };
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Payload, QbitError> {
        debug!("{} {}", request.method, request.url);

        let RawResponse { status, body } =
            self.transport.execute(request).await.inspect_err(|e| {
                warn!("request failed: {e}");
            })?;
        debug!(status, "response");

        let body = QbitError::check_status(status, body).inspect_err(|e| {
            warn!(status, "{e}");
        })?;

        Ok(Payload::decode(body))
    }

    /// Closes the client and releases its pooled connections. Dropping the client has
    /// the same effect.
    pub fn close(self) {
        debug!("Closing qBittorrent client for {}", self.base);
    }
}

impl<T: Transport> fmt::Debug for QbitClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QbitClient")
            .field("config", &self.config)
            .field("transport", &"...")
            .finish()
    }
}

fn api_base(url: &str, prefix: &str) -> Result<String, QbitError> {
    let parsed = Url::parse(url).map_err(|e| QbitError::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(QbitError::InvalidUrl(format!(
            "{url}: unsupported scheme {}",
            parsed.scheme()
        )));
    }

    let base = url.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    Ok(if prefix.is_empty() {
        base.to_owned()
    } else {
        format!("{base}/{prefix}")
    })
}
