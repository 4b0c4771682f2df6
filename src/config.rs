use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Forward proxy used for every outbound call, e.g. `http://127.0.0.1:1087`.
    pub proxy_url: Option<String>,
    pub tmp_dir: PathBuf,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_key_file: Option<PathBuf>,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(47118),
            proxy_url: lookup("PROXY_URL").filter(|v| !v.trim().is_empty()),
            tmp_dir: lookup("TMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            api_base_url: lookup("OPENAI_API_BASE")
                .unwrap_or_else(|| "https://api.openai.com".into()),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            max_tokens: lookup("MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            temperature: lookup("TEMPERATURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.5),
            api_key_file: lookup("API_KEY_FILE")
                .map(PathBuf::from)
                .or_else(|| dirs::home_dir().map(|home| home.join(".openai_key"))),
            debug: lookup("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
