//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Root of the shop API, e.g. `https://shop.example.com/api`.
    pub api_base_url: String,
    /// Sent as a bearer token on every shop API call when present.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub templates_dir: String,
    pub secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_settings_fall_back_to_defaults() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "address": "127.0.0.1",
            "port": 8080,
            "api_base_url": "http://localhost:3000/api",
            "templates_dir": "templates/**/*",
            "secret": "x",
        }))
        .unwrap();

        assert_eq!(config.api_token, None);
        assert_eq!(config.request_timeout_secs, 10);
    }
}
