use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overrides the default API host when set.
    pub base_url: Option<String>,
    pub api_key: String,
    /// Optional outbound proxy (for upstream egress).
    pub proxy: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: None,
            api_key: api_key.into(),
            proxy: None,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(60),
        }
    }
}
