//! HTTP transport seam.
//!
//! The [`Transport`] trait is the only place the client touches the network, which
//! lets tests swap in a mock and assert on the exact [`ApiRequest`] produced.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use mosaic_qbit_types::QbitError;

use crate::endpoints::Method;
use crate::request::{ApiRequest, Body, Params, RawResponse};

/// Executes one HTTP round trip.
///
/// Implementations must keep the WebUI session cookie between calls. Any status code
/// is a successful round trip; classifying it is the dispatcher's job.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends `request` and returns the status code and body text.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, QbitError>;
}

/// [`Transport`] backed by a cookie-aware [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with a cookie store and the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, QbitError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }

    /// Wraps an existing client. It must have its cookie store enabled, or the
    /// session is lost after login.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, QbitError> {
        let ApiRequest { method, url, body } = request;
        let builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        let builder = match (method, body) {
            (_, Body::Empty) => builder,
            (Method::Get, Body::Form(params)) => builder.query(params.pairs()),
            (Method::Post, Body::Form(params)) => builder.form(params.pairs()),
            (_, Body::Multipart { fields, files }) => {
                let mut form = text_fields(Form::new(), fields);
                for file in files {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.content_type)
                        .map_err(map_reqwest_error)?;
                    form = form.part(file.name, part);
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!(status, len = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}

fn text_fields(form: Form, fields: Params) -> Form {
    fields
        .into_iter()
        .fold(form, |form, (name, value)| form.text(name, value))
}

// Error conversion helper
fn map_reqwest_error(err: reqwest::Error) -> QbitError {
    QbitError::Network(err.to_string())
}
