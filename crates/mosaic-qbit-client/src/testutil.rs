//! Shared test utilities and fixtures.

use crate::config::ClientConfig;
use crate::endpoints::Method;
use crate::request::{ApiRequest, Body, RawResponse};
use crate::transport::MockTransport;
use crate::QbitClient;

pub(crate) const TEST_URL: &str = "http://127.0.0.1:8080";

pub(crate) fn api_url(path: &str) -> String {
    format!("{TEST_URL}/api/v2/{path}")
}

pub(crate) fn make_test_client(mock: MockTransport) -> QbitClient<MockTransport> {
    let config = ClientConfig::new(TEST_URL).with_credentials("admin", "adminadmin");
    QbitClient::with_transport(config, mock).unwrap()
}

/// A mock expecting exactly one POST to `path` that satisfies `check`, answered with
/// a 200 and `body`.
pub(crate) fn expect_post<F>(path: &str, check: F, body: &'static str) -> MockTransport
where
    F: Fn(&ApiRequest) -> bool + Send + 'static,
{
    let mut mock = MockTransport::new();
    let url = api_url(path);
    mock.expect_execute()
        .withf(move |req| req.method == Method::Post && req.url == url && check(req))
        .times(1)
        .returning(move |_| Ok(RawResponse::new(200, body)));
    mock
}

/// A mock answering any request with `status` and `body`.
pub(crate) fn respond_with(status: u16, body: &'static str) -> MockTransport {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .returning(move |_| Ok(RawResponse::new(status, body)));
    mock
}

/// The text fields of a request.
pub(crate) fn fields(req: &ApiRequest) -> Vec<(String, String)> {
    req.body
        .params()
        .map(|params| params.pairs().to_vec())
        .unwrap_or_default()
}

pub(crate) fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// True for a url-encoded body with exactly `expected`, in order.
pub(crate) fn form_is(req: &ApiRequest, expected: &[(&str, &str)]) -> bool {
    matches!(req.body, Body::Form(_)) && fields(req) == pairs(expected)
}

pub(crate) fn no_body(req: &ApiRequest) -> bool {
    req.body == Body::Empty
}
