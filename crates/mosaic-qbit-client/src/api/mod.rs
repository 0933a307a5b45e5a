//! One method per WebUI operation, grouped by API namespace.
//!
//! Each submodule adds an `impl` block to [`QbitClient`](crate::QbitClient). Methods
//! are named `<namespace>_<operation>` and return the decoded
//! [`Payload`](mosaic_qbit_types::Payload).

mod app;
mod auth;
mod log;
mod rss;
mod search;
mod sync;
mod torrents;
mod transfer;
