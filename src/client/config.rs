use std::time::Duration;

use url::Url;

/// Default for both the connect and the per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the RTSP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Stream URL. Credentials for Basic/Digest challenges go in the
    /// userinfo component; they never appear on the wire in request lines.
    pub url: Url,

    /// Receive media interleaved on the control connection instead of on
    /// dedicated UDP socket pairs (default: false)
    pub use_tcp: bool,

    /// `User-Agent` header value; the header is omitted when unset
    pub user_agent: Option<String>,

    /// TCP connect timeout (default: 5 seconds)
    pub connect_timeout: Duration,

    /// Timeout for each request/response exchange (default: 5 seconds)
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with defaults for the given URL
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            use_tcp: false,
            user_agent: None,
            connect_timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a config builder
    #[must_use]
    pub fn builder(url: Url) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(url),
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Use TCP interleaved media transport
    #[must_use]
    pub fn use_tcp(mut self, enable: bool) -> Self {
        self.config.use_tcp = enable;
        self
    }

    /// Set the `User-Agent` header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Set the TCP connect timeout
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
