mod client;
mod config;
mod error;
mod keys;
pub mod models;
mod queue;
mod session;
mod system;
mod torrents;

pub use client::TransmissionClient;
pub use config::ClientConfig;
pub use error::TransmissionError;
pub use models::{
    AddTorrentArgs, SessionInfo, SessionSetArgs, SessionStats, Torrent, TorrentGetArgs,
    TorrentIds, TorrentSetArgs, TorrentStatus,
};

pub type Result<T> = std::result::Result<T, TransmissionError>;
