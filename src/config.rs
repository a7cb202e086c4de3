use std::time::Duration;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.1-sonar-small-128k-online";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Settings for the remote scholarship assistant.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub endpoint: String,
    pub model: String,
    pub request_timeout: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ChatSettings {
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs.max(1));
        self
    }
}
