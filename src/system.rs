use serde_json::json;

use crate::client::decode;
use crate::models::{FreeSpace, PortTest};
use crate::TransmissionClient;

impl TransmissionClient {
    /// How much space is free at a path on the daemon's filesystem.
    /// `free-space`
    pub async fn free_space(&self, path: impl Into<String>) -> crate::Result<FreeSpace> {
        let path: String = path.into();
        let value = self.rpc("free-space", Some(json!({"path": path}))).await?;
        decode(value)
    }

    /// Ask the daemon whether its peer port is reachable from outside.
    /// `port-test`
    pub async fn port_test(&self) -> crate::Result<PortTest> {
        let value = self.rpc("port-test", None).await?;
        decode(value)
    }

    /// Trigger a blocklist refresh.
    /// `blocklist-update`
    pub async fn update_blocklist(&self) -> crate::Result<()> {
        self.rpc("blocklist-update", None).await?;
        Ok(())
    }
}
