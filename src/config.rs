use std::time::Duration;

use url::Url;

/// Path the daemon serves RPC on, regardless of how the endpoint was given.
pub(crate) const RPC_PATH: &str = "/transmission/rpc";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Connection settings for a Transmission daemon.
///
/// Construction never performs I/O. The effective endpoint is always
/// `<scheme>://<host>:<port>/transmission/rpc`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) ssl: bool,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ssl: false,
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use HTTPS instead of HTTP.
    pub fn ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Per-request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn rpc_url(&self) -> crate::Result<Url> {
        let scheme = if self.ssl { "https" } else { "http" };
        let url = format!("{}://{}:{}{}", scheme, self.host, self.port, RPC_PATH).parse()?;
        Ok(url)
    }

    /// Basic-auth credentials, present when a username or password was given.
    pub(crate) fn credentials(&self) -> Option<(String, String)> {
        let username = self.username.clone().unwrap_or_default();
        let password = self.password.clone().unwrap_or_default();
        if username.is_empty() && password.is_empty() {
            return None;
        }
        Some((username, password))
    }
}
