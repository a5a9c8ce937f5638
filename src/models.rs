use serde::{Deserialize, Serialize, Serializer};

/// Activity state of a torrent, as reported by the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TorrentStatus {
    Stopped,
    QueuedToVerify,
    Verifying,
    QueuedToDownload,
    Downloading,
    QueuedToSeed,
    Seeding,
}

impl TryFrom<i64> for TorrentStatus {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Stopped),
            1 => Ok(Self::QueuedToVerify),
            2 => Ok(Self::Verifying),
            3 => Ok(Self::QueuedToDownload),
            4 => Ok(Self::Downloading),
            5 => Ok(Self::QueuedToSeed),
            6 => Ok(Self::Seeding),
            other => Err(format!("unknown torrent status: {}", other)),
        }
    }
}

impl From<TorrentStatus> for i64 {
    fn from(status: TorrentStatus) -> Self {
        match status {
            TorrentStatus::Stopped => 0,
            TorrentStatus::QueuedToVerify => 1,
            TorrentStatus::Verifying => 2,
            TorrentStatus::QueuedToDownload => 3,
            TorrentStatus::Downloading => 4,
            TorrentStatus::QueuedToSeed => 5,
            TorrentStatus::Seeding => 6,
        }
    }
}

/// One file inside a torrent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentFile {
    pub bytes_completed: i64,
    /// Total size of the file in bytes.
    pub length: i64,
    pub name: String,
    /// First piece carrying data for this file. Absent on older daemons.
    #[serde(default)]
    pub begin_piece: i64,
    #[serde(default)]
    pub end_piece: i64,
}

/// Per-file download state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStat {
    pub bytes_completed: i64,
    pub wanted: bool,
    pub priority: i64,
}

/// A tracker configured for a torrent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub announce: String,
    pub id: i64,
    pub scrape: String,
    #[serde(default)]
    pub sitename: String,
    pub tier: i64,
}

/// Announce/scrape statistics for a tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStat {
    pub id: i64,
    pub announce_state: i64,
    pub download_count: i64,
    pub has_announced: bool,
    pub has_scraped: bool,
    pub is_backup: bool,
    pub last_announce_peer_count: i64,
    pub last_announce_result: String,
    pub last_announce_start_time: i64,
    pub last_announce_succeeded: bool,
    pub last_announce_time: i64,
    pub last_announce_timed_out: bool,
    pub last_scrape_result: String,
    pub last_scrape_start_time: i64,
    pub last_scrape_succeeded: bool,
    pub last_scrape_time: i64,
    pub last_scrape_timed_out: bool,
    pub leecher_count: i64,
    pub next_announce_time: i64,
    pub next_scrape_time: i64,
    pub scrape_state: i64,
    pub seeder_count: i64,
}

/// Counts of peers by discovery source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeersFrom {
    pub from_cache: i64,
    pub from_dht: i64,
    pub from_incoming: i64,
    pub from_lpd: i64,
    pub from_ltep: i64,
    pub from_pex: i64,
    pub from_tracker: i64,
}

/// A peer connected to a torrent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub address: String,
    pub client_name: String,
    pub client_is_choked: bool,
    pub client_is_interested: bool,
    pub flag_str: String,
    pub is_downloading_from: bool,
    pub is_encrypted: bool,
    pub is_incoming: bool,
    pub is_uploading_to: bool,
    /// The daemon spells this `isUTP` rather than `isUtp`.
    #[serde(rename = "isUTP")]
    pub is_utp: bool,
    pub peer_is_choked: bool,
    pub peer_is_interested: bool,
    pub port: u16,
    pub progress: f64,
    pub rate_to_client: i64,
    pub rate_to_peer: i64,
}

/// A snapshot of one torrent.
///
/// `torrent-get` returns only the fields the caller asked for, so every
/// field is optional. Absent means "not requested", not "zero".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Torrent {
    /// Last activity, as a Unix timestamp.
    pub activity_date: Option<i64>,
    pub added_date: Option<i64>,
    pub availability: Option<Vec<i64>>,
    pub bandwidth_priority: Option<i64>,
    pub comment: Option<String>,
    pub corrupt_ever: Option<i64>,
    pub creator: Option<String>,
    pub date_created: Option<i64>,
    pub desired_available: Option<i64>,
    pub done_date: Option<i64>,
    pub download_dir: Option<String>,
    pub downloaded_ever: Option<i64>,
    pub download_limit: Option<i64>,
    pub download_limited: Option<bool>,
    pub edit_date: Option<i64>,
    /// Error code; 0 means no error.
    pub error: Option<i64>,
    pub error_string: Option<String>,
    pub eta: Option<i64>,
    pub eta_idle: Option<i64>,
    pub file_count: Option<i64>,
    pub files: Option<Vec<TorrentFile>>,
    pub file_stats: Option<Vec<FileStat>>,
    pub group: Option<String>,
    pub hash_string: Option<String>,
    pub have_unchecked: Option<i64>,
    pub have_valid: Option<i64>,
    pub honors_session_limits: Option<bool>,
    pub id: Option<i64>,
    pub is_finished: Option<bool>,
    pub is_private: Option<bool>,
    pub is_stalled: Option<bool>,
    pub labels: Option<Vec<String>>,
    pub left_until_done: Option<i64>,
    pub magnet_link: Option<String>,
    pub manual_announce_time: Option<i64>,
    pub max_connected_peers: Option<i64>,
    pub metadata_percent_complete: Option<f64>,
    pub name: Option<String>,
    pub peer_limit: Option<i64>,
    pub peers: Option<Vec<Peer>>,
    pub peers_connected: Option<i64>,
    pub peers_from: Option<PeersFrom>,
    pub peers_getting_from_us: Option<i64>,
    pub peers_sending_to_us: Option<i64>,
    pub percent_complete: Option<f64>,
    pub percent_done: Option<f64>,
    /// Bitfield of downloaded pieces, base64 encoded.
    pub pieces: Option<String>,
    pub piece_count: Option<i64>,
    pub piece_size: Option<i64>,
    pub priorities: Option<Vec<i64>>,
    pub primary_mime_type: Option<String>,
    pub queue_position: Option<i64>,
    pub rate_download: Option<i64>,
    pub rate_upload: Option<i64>,
    pub recheck_progress: Option<f64>,
    pub seconds_downloading: Option<i64>,
    pub seconds_seeding: Option<i64>,
    pub seed_idle_limit: Option<i64>,
    pub seed_idle_mode: Option<i64>,
    pub seed_ratio_limit: Option<f64>,
    pub seed_ratio_mode: Option<i64>,
    pub sequential_download: Option<bool>,
    pub size_when_done: Option<i64>,
    pub start_date: Option<i64>,
    pub status: Option<TorrentStatus>,
    pub trackers: Option<Vec<Tracker>>,
    /// Announce URLs, one per line, blank line between tiers.
    pub tracker_list: Option<String>,
    pub tracker_stats: Option<Vec<TrackerStat>>,
    pub total_size: Option<i64>,
    pub torrent_file: Option<String>,
    pub uploaded_ever: Option<i64>,
    pub upload_limit: Option<i64>,
    pub upload_limited: Option<bool>,
    pub upload_ratio: Option<f64>,
    pub wanted: Option<Vec<bool>>,
    pub webseeds: Option<Vec<String>>,
    pub webseeds_sending_to_us: Option<i64>,
}

/// A torrent dropped since the last `recently-active` poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedTorrent {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date_deleted: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentGetResponse {
    pub torrents: Vec<Torrent>,
    /// Only present when polling with `recently-active` ids.
    #[serde(default)]
    pub removed: Vec<RemovedTorrent>,
}

/// Identity of a newly added (or already known) torrent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentAdded {
    pub id: i64,
    pub name: String,
    pub hash_string: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentAddResponse {
    #[serde(default)]
    pub torrent_added: Option<TorrentAdded>,
    /// Set instead of `torrent_added` when the torrent was already present.
    #[serde(default)]
    pub torrent_duplicate: Option<TorrentAdded>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSpace {
    pub path: String,
    pub size_bytes: i64,
    #[serde(default)]
    pub total_size: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortTest {
    pub port_is_open: bool,
}

/// Counters for one accounting window of `session-stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsDetail {
    pub uploaded_bytes: i64,
    pub downloaded_bytes: i64,
    pub files_added: i64,
    pub session_count: i64,
    pub seconds_active: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionStats {
    pub active_torrent_count: i64,
    pub download_speed: i64,
    pub paused_torrent_count: i64,
    pub upload_speed: i64,
    pub torrent_count: i64,
    pub downloaded_bytes: i64,
    pub uploaded_bytes: i64,
    pub seconds_downloading: i64,
    pub seconds_seeding: i64,
    pub session_count: i64,
    pub upload_ratio: f64,
    pub cumulative_stats: Option<StatsDetail>,
    pub current_stats: Option<StatsDetail>,
}

/// Session settings returned by `session-get`.
///
/// Missing fields fall back to defaults rather than failing the decode, so
/// the struct survives daemon-version drift in either direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionInfo {
    pub alt_speed_down: i64,
    pub alt_speed_up: i64,
    pub alt_speed_enabled: bool,
    pub alt_speed_time_begin: i64,
    pub alt_speed_time_day: i64,
    pub alt_speed_time_enabled: bool,
    pub alt_speed_time_end: i64,
    pub blocklist_enabled: bool,
    pub blocklist_size: i64,
    pub dht_enabled: bool,
    pub download_dir: String,
    pub download_dir_free_space: i64,
    pub download_queue_enabled: bool,
    pub download_queue_size: i64,
    /// One of `required`, `preferred`, or `tolerated`.
    pub encryption: String,
    pub idle_seeding_limit: i64,
    pub idle_seeding_limit_enabled: bool,
    pub incomplete_dir: String,
    pub incomplete_dir_enabled: bool,
    pub lpd_enabled: bool,
    pub peer_port: u16,
    pub peer_port_random_on_start: bool,
    pub pex_enabled: bool,
    pub port_forwarding_enabled: bool,
    pub queue_enabled: bool,
    pub queue_size: i64,
    pub queue_stalled_enabled: bool,
    pub queue_stalled_size: i64,
    pub rename_incomplete_files: bool,
    pub rpc_version: i64,
    pub rpc_version_minimum: i64,
    pub script_torrent_done_enabled: bool,
    pub script_torrent_done_filename: String,
    pub seed_idle_limit: i64,
    pub seed_idle_limited: bool,
    pub seed_queue_enabled: bool,
    pub seed_queue_size: i64,
    pub seed_ratio_limit: f64,
    pub seed_ratio_limited: bool,
    pub speed_limit_down: i64,
    pub speed_limit_down_enabled: bool,
    pub speed_limit_up: i64,
    pub speed_limit_up_enabled: bool,
    pub start_added_torrents: bool,
    pub trash_original_torrent_files: bool,
    pub update_time: i64,
    pub auto_update_enabled: bool,
    pub utp_enabled: bool,
    pub version: String,
    pub watch_dir: String,
    pub watch_dir_enabled: bool,
}

/// Arguments for `session-set`.
///
/// The daemon's setting names do not follow one mechanical transform: most
/// are hyphenated, but `seedRatioLimit` and `seedRatioLimited` stay
/// camelCase on the wire. The renames below enumerate the full table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSetArgs {
    #[serde(rename = "alt-speed-down", skip_serializing_if = "Option::is_none")]
    pub alt_speed_down: Option<i64>,
    #[serde(rename = "alt-speed-enabled", skip_serializing_if = "Option::is_none")]
    pub alt_speed_enabled: Option<bool>,
    #[serde(rename = "alt-speed-time-begin", skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_begin: Option<i64>,
    #[serde(rename = "alt-speed-time-day", skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_day: Option<i64>,
    #[serde(rename = "alt-speed-time-enabled", skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_enabled: Option<bool>,
    #[serde(rename = "alt-speed-time-end", skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_end: Option<i64>,
    #[serde(rename = "alt-speed-up", skip_serializing_if = "Option::is_none")]
    pub alt_speed_up: Option<i64>,
    #[serde(rename = "blocklist-enabled", skip_serializing_if = "Option::is_none")]
    pub blocklist_enabled: Option<bool>,
    #[serde(rename = "dht-enabled", skip_serializing_if = "Option::is_none")]
    pub dht_enabled: Option<bool>,
    #[serde(rename = "download-dir", skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,
    #[serde(rename = "download-queue-enabled", skip_serializing_if = "Option::is_none")]
    pub download_queue_enabled: Option<bool>,
    #[serde(rename = "download-queue-size", skip_serializing_if = "Option::is_none")]
    pub download_queue_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    #[serde(rename = "idle-seeding-limit", skip_serializing_if = "Option::is_none")]
    pub idle_seeding_limit: Option<i64>,
    #[serde(
        rename = "idle-seeding-limit-enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub idle_seeding_limit_enabled: Option<bool>,
    #[serde(rename = "incomplete-dir", skip_serializing_if = "Option::is_none")]
    pub incomplete_dir: Option<String>,
    #[serde(rename = "incomplete-dir-enabled", skip_serializing_if = "Option::is_none")]
    pub incomplete_dir_enabled: Option<bool>,
    #[serde(rename = "lpd-enabled", skip_serializing_if = "Option::is_none")]
    pub lpd_enabled: Option<bool>,
    #[serde(rename = "peer-port", skip_serializing_if = "Option::is_none")]
    pub peer_port: Option<u16>,
    #[serde(
        rename = "peer-port-random-on-start",
        skip_serializing_if = "Option::is_none"
    )]
    pub peer_port_random_on_start: Option<bool>,
    #[serde(rename = "pex-enabled", skip_serializing_if = "Option::is_none")]
    pub pex_enabled: Option<bool>,
    #[serde(
        rename = "port-forwarding-enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub port_forwarding_enabled: Option<bool>,
    #[serde(rename = "queue-stalled-enabled", skip_serializing_if = "Option::is_none")]
    pub queue_stalled_enabled: Option<bool>,
    #[serde(
        rename = "script-torrent-done-enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub script_torrent_done_enabled: Option<bool>,
    #[serde(
        rename = "script-torrent-done-filename",
        skip_serializing_if = "Option::is_none"
    )]
    pub script_torrent_done_filename: Option<String>,
    #[serde(rename = "seed-queue-enabled", skip_serializing_if = "Option::is_none")]
    pub seed_queue_enabled: Option<bool>,
    #[serde(rename = "seed-queue-size", skip_serializing_if = "Option::is_none")]
    pub seed_queue_size: Option<i64>,
    #[serde(rename = "seedRatioLimit", skip_serializing_if = "Option::is_none")]
    pub seed_ratio_limit: Option<f64>,
    #[serde(rename = "seedRatioLimited", skip_serializing_if = "Option::is_none")]
    pub seed_ratio_limited: Option<bool>,
    #[serde(rename = "speed-limit-down", skip_serializing_if = "Option::is_none")]
    pub speed_limit_down: Option<i64>,
    #[serde(
        rename = "speed-limit-down-enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_limit_down_enabled: Option<bool>,
    #[serde(rename = "speed-limit-up", skip_serializing_if = "Option::is_none")]
    pub speed_limit_up: Option<i64>,
    #[serde(rename = "speed-limit-up-enabled", skip_serializing_if = "Option::is_none")]
    pub speed_limit_up_enabled: Option<bool>,
    #[serde(rename = "start-added-torrents", skip_serializing_if = "Option::is_none")]
    pub start_added_torrents: Option<bool>,
    #[serde(
        rename = "trash-original-torrent-files",
        skip_serializing_if = "Option::is_none"
    )]
    pub trash_original_torrent_files: Option<bool>,
    #[serde(rename = "utp-enabled", skip_serializing_if = "Option::is_none")]
    pub utp_enabled: Option<bool>,
}

/// Replacement entry for the deprecated `trackerReplace` argument.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerReplace {
    pub index: i64,
    pub url: String,
}

/// Arguments for `torrent-set`.
///
/// Ids are passed separately to [`TransmissionClient::set`]. Wire names
/// reproduce the daemon's table: hyphenated for most settings, bare words
/// for `group`/`labels`/`location`, camelCase for the deprecated tracker
/// trio.
///
/// [`TransmissionClient::set`]: crate::TransmissionClient::set
#[derive(Debug, Clone, Default, Serialize)]
pub struct TorrentSetArgs {
    #[serde(rename = "bandwidth-priority", skip_serializing_if = "Option::is_none")]
    pub bandwidth_priority: Option<i64>,
    #[serde(rename = "download-limit", skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,
    #[serde(rename = "download-limited", skip_serializing_if = "Option::is_none")]
    pub download_limited: Option<bool>,
    #[serde(rename = "files-unwanted", skip_serializing_if = "Option::is_none")]
    pub files_unwanted: Option<Vec<i64>>,
    #[serde(rename = "files-wanted", skip_serializing_if = "Option::is_none")]
    pub files_wanted: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(
        rename = "honors-session-limits",
        skip_serializing_if = "Option::is_none"
    )]
    pub honors_session_limits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "peer-limit", skip_serializing_if = "Option::is_none")]
    pub peer_limit: Option<i64>,
    #[serde(rename = "priority-high", skip_serializing_if = "Option::is_none")]
    pub priority_high: Option<Vec<i64>>,
    #[serde(rename = "priority-low", skip_serializing_if = "Option::is_none")]
    pub priority_low: Option<Vec<i64>>,
    #[serde(rename = "priority-normal", skip_serializing_if = "Option::is_none")]
    pub priority_normal: Option<Vec<i64>>,
    #[serde(rename = "queue-position", skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<i64>,
    #[serde(rename = "seed-idle-limit", skip_serializing_if = "Option::is_none")]
    pub seed_idle_limit: Option<i64>,
    #[serde(rename = "seed-idle-mode", skip_serializing_if = "Option::is_none")]
    pub seed_idle_mode: Option<i64>,
    #[serde(rename = "seed-ratio-limit", skip_serializing_if = "Option::is_none")]
    pub seed_ratio_limit: Option<f64>,
    #[serde(rename = "seed-ratio-mode", skip_serializing_if = "Option::is_none")]
    pub seed_ratio_mode: Option<i64>,
    #[serde(rename = "sequential-download", skip_serializing_if = "Option::is_none")]
    pub sequential_download: Option<bool>,
    /// Announce URLs, one per line, blank line between tiers. Supersedes the
    /// tracker add/remove/replace trio.
    #[serde(rename = "tracker-list", skip_serializing_if = "Option::is_none")]
    pub tracker_list: Option<String>,
    /// Deprecated: use `tracker_list`.
    #[serde(rename = "trackerAdd", skip_serializing_if = "Option::is_none")]
    pub tracker_add: Option<Vec<String>>,
    /// Deprecated: use `tracker_list`.
    #[serde(rename = "trackerRemove", skip_serializing_if = "Option::is_none")]
    pub tracker_remove: Option<Vec<i64>>,
    /// Deprecated: use `tracker_list`.
    #[serde(rename = "trackerReplace", skip_serializing_if = "Option::is_none")]
    pub tracker_replace: Option<Vec<TrackerReplace>>,
    #[serde(rename = "upload-limit", skip_serializing_if = "Option::is_none")]
    pub upload_limit: Option<i64>,
    #[serde(rename = "upload-limited", skip_serializing_if = "Option::is_none")]
    pub upload_limited: Option<bool>,
}

/// Arguments for `torrent-add`. Exactly one of `filename` or `metainfo`
/// should be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddTorrentArgs {
    /// `name=value` cookie pairs forwarded when fetching the torrent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,
    #[serde(rename = "download-dir", skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,
    /// Filename, URL, or magnet link of the torrent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Base64-encoded .torrent content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metainfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(rename = "peer-limit", skip_serializing_if = "Option::is_none")]
    pub peer_limit: Option<i64>,
    #[serde(rename = "bandwidthPriority", skip_serializing_if = "Option::is_none")]
    pub bandwidth_priority: Option<i64>,
    #[serde(rename = "files-wanted", skip_serializing_if = "Option::is_none")]
    pub files_wanted: Option<Vec<i64>>,
    #[serde(rename = "files-unwanted", skip_serializing_if = "Option::is_none")]
    pub files_unwanted: Option<Vec<i64>>,
    #[serde(rename = "priority-high", skip_serializing_if = "Option::is_none")]
    pub priority_high: Option<Vec<i64>>,
    #[serde(rename = "priority-low", skip_serializing_if = "Option::is_none")]
    pub priority_low: Option<Vec<i64>>,
    #[serde(rename = "priority-normal", skip_serializing_if = "Option::is_none")]
    pub priority_normal: Option<Vec<i64>>,
}

impl AddTorrentArgs {
    /// Add from a filename, URL, or magnet link.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }

    /// Add from base64-encoded .torrent content.
    pub fn with_metainfo(metainfo: impl Into<String>) -> Self {
        Self {
            metainfo: Some(metainfo.into()),
            ..Self::default()
        }
    }

    pub fn download_dir(mut self, dir: impl Into<String>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// A single torrent selector: numeric id or content hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TorrentId {
    Id(i64),
    Hash(String),
}

/// Torrent selection for mutating and query calls: one id, an explicit list
/// of ids/hashes, or the daemon's `recently-active` window.
#[derive(Debug, Clone, PartialEq)]
pub enum TorrentIds {
    Id(i64),
    List(Vec<TorrentId>),
    RecentlyActive,
}

impl Serialize for TorrentIds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => serializer.serialize_i64(*id),
            Self::List(ids) => ids.serialize(serializer),
            Self::RecentlyActive => serializer.serialize_str("recently-active"),
        }
    }
}

impl From<i64> for TorrentIds {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<Vec<i64>> for TorrentIds {
    fn from(ids: Vec<i64>) -> Self {
        Self::List(ids.into_iter().map(TorrentId::Id).collect())
    }
}

impl From<&[i64]> for TorrentIds {
    fn from(ids: &[i64]) -> Self {
        Self::List(ids.iter().copied().map(TorrentId::Id).collect())
    }
}

impl From<String> for TorrentIds {
    fn from(hash: String) -> Self {
        Self::List(vec![TorrentId::Hash(hash)])
    }
}

impl From<&str> for TorrentIds {
    fn from(hash: &str) -> Self {
        Self::List(vec![TorrentId::Hash(hash.to_string())])
    }
}

impl From<Vec<TorrentId>> for TorrentIds {
    fn from(ids: Vec<TorrentId>) -> Self {
        Self::List(ids)
    }
}

/// Arguments for `torrent-get`: which torrents, and which fields of each.
///
/// Field names are passed to the daemon verbatim; restricting the set keeps
/// high-frequency polling cheap.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TorrentGetArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<TorrentIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl TorrentGetArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(mut self, ids: impl Into<TorrentIds>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, to_value};

    use super::*;

    #[test]
    fn session_set_args_use_wire_names() {
        let args = SessionSetArgs {
            speed_limit_down: Some(100),
            speed_limit_down_enabled: Some(true),
            seed_ratio_limit: Some(2.0),
            seed_ratio_limited: Some(true),
            encryption: Some("preferred".to_string()),
            ..SessionSetArgs::default()
        };
        assert_eq!(
            to_value(&args).unwrap(),
            json!({
                "speed-limit-down": 100,
                "speed-limit-down-enabled": true,
                "seedRatioLimit": 2.0,
                "seedRatioLimited": true,
                "encryption": "preferred"
            })
        );
    }

    #[test]
    fn session_set_args_skip_unset_fields() {
        let value = to_value(SessionSetArgs::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn torrent_set_args_use_wire_names() {
        let args = TorrentSetArgs {
            download_limit: Some(512),
            download_limited: Some(true),
            location: Some("/data".to_string()),
            tracker_add: Some(vec!["https://tracker.example/announce".to_string()]),
            ..TorrentSetArgs::default()
        };
        assert_eq!(
            to_value(&args).unwrap(),
            json!({
                "download-limit": 512,
                "download-limited": true,
                "location": "/data",
                "trackerAdd": ["https://tracker.example/announce"]
            })
        );
    }

    #[test]
    fn add_torrent_args_use_wire_names() {
        let args = AddTorrentArgs::with_filename("magnet:?xt=urn:btih:deadbeef")
            .download_dir("/downloads")
            .paused(true);
        assert_eq!(
            to_value(&args).unwrap(),
            json!({
                "filename": "magnet:?xt=urn:btih:deadbeef",
                "download-dir": "/downloads",
                "paused": true
            })
        );
    }

    #[test]
    fn torrent_ids_serialize_all_forms() {
        assert_eq!(to_value(TorrentIds::from(7)).unwrap(), json!(7));
        assert_eq!(
            to_value(TorrentIds::from(vec![1, 2, 3])).unwrap(),
            json!([1, 2, 3])
        );
        assert_eq!(
            to_value(TorrentIds::from("deadbeef")).unwrap(),
            json!(["deadbeef"])
        );
        assert_eq!(
            to_value(TorrentIds::RecentlyActive).unwrap(),
            json!("recently-active")
        );
    }

    #[test]
    fn torrent_status_decodes_from_integers() {
        let torrent: Torrent = serde_json::from_value(json!({
            "id": 1,
            "status": 4
        }))
        .unwrap();
        assert_eq!(torrent.status, Some(TorrentStatus::Downloading));
    }

    #[test]
    fn torrent_status_rejects_out_of_range() {
        let result: Result<TorrentStatus, _> = serde_json::from_value(json!(9));
        assert!(result.is_err());
    }

    #[test]
    fn peer_uses_daemon_utp_spelling() {
        let peer: Peer = serde_json::from_value(json!({
            "address": "10.0.0.2",
            "clientName": "client",
            "clientIsChoked": false,
            "clientIsInterested": true,
            "flagStr": "DE",
            "isDownloadingFrom": true,
            "isEncrypted": true,
            "isIncoming": false,
            "isUploadingTo": false,
            "isUTP": true,
            "peerIsChoked": false,
            "peerIsInterested": true,
            "port": 51413,
            "progress": 0.5,
            "rateToClient": 1024,
            "rateToPeer": 2048
        }))
        .unwrap();
        assert!(peer.is_utp);
    }
}
