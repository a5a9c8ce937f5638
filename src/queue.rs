use serde_json::json;

use crate::models::TorrentIds;
use crate::TransmissionClient;

impl TransmissionClient {
    /// `queue-move-up`
    pub async fn move_up(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("queue-move-up", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }

    /// `queue-move-down`
    pub async fn move_down(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("queue-move-down", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }

    /// `queue-move-top`
    pub async fn move_top(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("queue-move-top", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }

    /// `queue-move-bottom`
    pub async fn move_bottom(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("queue-move-bottom", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }
}
