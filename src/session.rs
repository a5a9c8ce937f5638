use crate::client::{decode, encode};
use crate::models::{SessionInfo, SessionSetArgs, SessionStats};
use crate::TransmissionClient;

impl TransmissionClient {
    /// Fetch the current session settings.
    /// `session-get`
    pub async fn session(&self) -> crate::Result<SessionInfo> {
        let value = self.rpc("session-get", None).await?;
        decode(value)
    }

    /// Update session settings. Unset fields are left untouched; the daemon
    /// silently ignores keys it does not recognize, so the wire names in
    /// [`SessionSetArgs`] must match exactly.
    /// `session-set`
    pub async fn set_session(&self, args: SessionSetArgs) -> crate::Result<()> {
        self.rpc("session-set", Some(encode(&args)?)).await?;
        Ok(())
    }

    /// Fetch transfer statistics.
    /// `session-stats`
    pub async fn stats(&self) -> crate::Result<SessionStats> {
        let value = self.rpc("session-stats", None).await?;
        decode(value)
    }

    /// Tell the daemon to shut down.
    /// `session-close`
    pub async fn close_session(&self) -> crate::Result<()> {
        self.rpc("session-close", None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::{ClientConfig, SessionSetArgs, TransmissionClient};

    #[tokio::test]
    async fn set_session_sends_hyphenated_wire_names() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/transmission/rpc").json_body(json!({
                    "method": "session-set",
                    "arguments": {
                        "speed-limit-down": 100,
                        "speed-limit-down-enabled": true
                    }
                }));
                then.status(200)
                    .json_body(json!({"result": "success", "arguments": {}}));
            })
            .await;

        let client = TransmissionClient::with_config(ClientConfig::new(
            server.host(),
            server.port(),
        ))
        .unwrap();
        client
            .set_session(SessionSetArgs {
                speed_limit_down: Some(100),
                speed_limit_down_enabled: Some(true),
                ..SessionSetArgs::default()
            })
            .await
            .unwrap();

        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn session_decodes_wire_cased_settings() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/transmission/rpc")
                    .json_body(json!({"method": "session-get"}));
                then.status(200).json_body(json!({
                    "result": "success",
                    "arguments": {
                        "alt-speed-down": 50,
                        "download-dir": "/downloads",
                        "peer-port": 51413,
                        "seedRatioLimit": 2.5,
                        "version": "4.0.5",
                        "rpc-version": 17
                    }
                }));
            })
            .await;

        let client = TransmissionClient::with_config(ClientConfig::new(
            server.host(),
            server.port(),
        ))
        .unwrap();
        let session = client.session().await.unwrap();

        assert_eq!(session.alt_speed_down, 50);
        assert_eq!(session.download_dir, "/downloads");
        assert_eq!(session.peer_port, 51413);
        assert_eq!(session.seed_ratio_limit, 2.5);
        assert_eq!(session.version, "4.0.5");
        assert_eq!(session.rpc_version, 17);
    }

    #[tokio::test]
    async fn stats_decodes_nested_windows() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/transmission/rpc")
                    .json_body(json!({"method": "session-stats"}));
                then.status(200).json_body(json!({
                    "result": "success",
                    "arguments": {
                        "activeTorrentCount": 3,
                        "downloadSpeed": 2048,
                        "cumulative-stats": {
                            "downloadedBytes": 1000,
                            "uploadedBytes": 500,
                            "sessionCount": 12
                        }
                    }
                }));
            })
            .await;

        let client = TransmissionClient::with_config(ClientConfig::new(
            server.host(),
            server.port(),
        ))
        .unwrap();
        let stats = client.stats().await.unwrap();

        assert_eq!(stats.active_torrent_count, 3);
        assert_eq!(stats.download_speed, 2048);
        let cumulative = stats.cumulative_stats.unwrap();
        assert_eq!(cumulative.downloaded_bytes, 1000);
        assert_eq!(cumulative.session_count, 12);
    }
}
