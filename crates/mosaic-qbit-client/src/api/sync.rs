//! `sync/*`

use mosaic_qbit_types::{Payload, QbitError};

use crate::QbitClient;
use crate::endpoints::sync;
use crate::request::Params;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Main data changes since response `rid`. `None` asks for a full update.
    pub async fn sync_maindata(&self, rid: Option<i64>) -> Result<Payload, QbitError> {
        let params = Params::new().with("rid", rid.unwrap_or(0));
        self.send_request(sync::MAINDATA, params.into()).await
    }

    /// Peer changes of one torrent since response `rid`.
    pub async fn sync_torrent_peers(
        &self,
        hash: &str,
        rid: Option<i64>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with("rid", rid.unwrap_or(0));
        self.send_request(sync::TORRENT_PEERS, params.into()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{expect_post, form_is, make_test_client};

    #[tokio::test]
    async fn test_maindata_defaults_rid_to_zero() {
        let mock = expect_post(
            "sync/maindata",
            |req| form_is(req, &[("rid", "0")]),
            r#"{"rid":1,"full_update":true}"#,
        );
        let client = make_test_client(mock);

        let data = client.sync_maindata(None).await.unwrap();
        assert_eq!(data.as_json().unwrap()["rid"], 1);
    }

    #[tokio::test]
    async fn test_torrent_peers() {
        let mock = expect_post(
            "sync/torrentPeers",
            |req| form_is(req, &[("hash", "abc123"), ("rid", "7")]),
            r#"{"rid":8}"#,
        );
        let client = make_test_client(mock);
        client.sync_torrent_peers("abc123", Some(7)).await.unwrap();
    }
}
