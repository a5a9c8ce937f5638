use serde_json::json;

use crate::client::{decode, encode};
use crate::models::{
    AddTorrentArgs, TorrentAddResponse, TorrentGetArgs, TorrentGetResponse, TorrentIds,
    TorrentSetArgs,
};
use crate::TransmissionClient;

impl TransmissionClient {
    /// Fetch a snapshot of torrents, restricted to the requested fields.
    /// `torrent-get`
    pub async fn torrents(&self, args: TorrentGetArgs) -> crate::Result<TorrentGetResponse> {
        let value = self.rpc("torrent-get", Some(encode(&args)?)).await?;
        decode(value)
    }

    /// Add a torrent from a filename, URL, magnet link, or inline metainfo.
    /// `torrent-add`
    pub async fn add(&self, args: AddTorrentArgs) -> crate::Result<TorrentAddResponse> {
        let value = self.rpc("torrent-add", Some(encode(&args)?)).await?;
        decode(value)
    }

    /// Remove torrents, optionally deleting their downloaded data.
    /// `torrent-remove`
    pub async fn remove(
        &self,
        ids: impl Into<TorrentIds>,
        delete_local_data: bool,
    ) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc(
            "torrent-remove",
            Some(json!({
                "ids": ids,
                "delete-local-data": delete_local_data,
            })),
        )
        .await?;
        Ok(())
    }

    /// Change per-torrent properties.
    /// `torrent-set`
    pub async fn set(
        &self,
        ids: impl Into<TorrentIds>,
        args: TorrentSetArgs,
    ) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        let mut arguments = encode(&args)?;
        arguments["ids"] = encode(&ids)?;
        self.rpc("torrent-set", Some(arguments)).await?;
        Ok(())
    }

    /// Move torrent content to a new location.
    /// `torrent-set-location`
    pub async fn set_location(
        &self,
        ids: impl Into<TorrentIds>,
        location: impl Into<String>,
        move_data: bool,
    ) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        let location: String = location.into();
        self.rpc(
            "torrent-set-location",
            Some(json!({
                "ids": ids,
                "location": location,
                "move": move_data,
            })),
        )
        .await?;
        Ok(())
    }

    /// `torrent-start`
    pub async fn start(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("torrent-start", Some(json!({"ids": ids}))).await?;
        Ok(())
    }

    /// `torrent-stop`
    pub async fn stop(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("torrent-stop", Some(json!({"ids": ids}))).await?;
        Ok(())
    }

    /// Start torrents immediately, bypassing the queue.
    /// `torrent-start-now`
    pub async fn start_now(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("torrent-start-now", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }

    /// Re-check downloaded data against the torrent's piece hashes.
    /// `torrent-verify`
    pub async fn verify(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("torrent-verify", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }

    /// Ask trackers for more peers now.
    /// `torrent-reannounce`
    pub async fn reannounce(&self, ids: impl Into<TorrentIds>) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        self.rpc("torrent-reannounce", Some(json!({"ids": ids})))
            .await?;
        Ok(())
    }

    /// Rename a file or directory within a torrent.
    /// `torrent-rename-path`
    pub async fn rename_path(
        &self,
        ids: impl Into<TorrentIds>,
        path: impl Into<String>,
        name: impl Into<String>,
    ) -> crate::Result<()> {
        let ids: TorrentIds = ids.into();
        let path: String = path.into();
        let name: String = name.into();
        self.rpc(
            "torrent-rename-path",
            Some(json!({
                "ids": ids,
                "path": path,
                "name": name,
            })),
        )
        .await?;
        Ok(())
    }
}
