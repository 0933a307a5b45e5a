//! `log/*`

use mosaic_qbit_types::{LogFilter, Payload, QbitError};

use crate::QbitClient;
use crate::encoding::bool_str;
use crate::endpoints::log;
use crate::request::Params;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Main log. [`LogFilter::default`] selects every kind of message.
    pub async fn log_main(&self, filter: LogFilter) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("normal", bool_str(filter.normal))
            .with("info", bool_str(filter.info))
            .with("warning", bool_str(filter.warning))
            .with("critical", bool_str(filter.critical))
            .with("last_known_id", filter.last_known_id);
        self.send_request(log::MAIN, params.into()).await
    }

    /// Peer log. `None` means `-1`, i.e. from the start.
    pub async fn log_peers(&self, last_known_id: Option<i64>) -> Result<Payload, QbitError> {
        let params = Params::new().with("last_known_id", last_known_id.unwrap_or(-1));
        self.send_request(log::PEERS, params.into()).await
    }
}
