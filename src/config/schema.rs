use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Delay before the canned acknowledgment is delivered.
    #[serde(default = "default_response_delay_ms", rename = "responseDelayMs")]
    pub response_delay_ms: u64,
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter", rename = "logFilter")]
    pub log_filter: String,
}

fn default_response_delay_ms() -> u64 {
    1000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}
