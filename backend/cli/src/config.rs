use serde::Deserialize;

/// mindtrace runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// OpenRouter API key; demo mode when absent
    pub openrouter_api_key: Option<String>,
    /// Default model identifier
    pub model: String,
    /// SQLite journal database path
    pub db_path: String,
    /// Directory for rolling log files
    pub log_dir: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            model: "openai/gpt-4o-mini".to_string(),
            db_path: "mindtrace.db".to_string(),
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY").ok(),
            model: std::env::var("MINDTRACE_MODEL")
                .unwrap_or_else(|_| "openai/gpt-4o-mini".to_string()),
            db_path: std::env::var("MINDTRACE_DB")
                .unwrap_or_else(|_| "mindtrace.db".to_string()),
            log_dir: std::env::var("MINDTRACE_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_in_demo_mode() {
        let config = Config::default();
        assert!(config.openrouter_api_key.is_none());
        assert_eq!(config.db_path, "mindtrace.db");
        assert_eq!(config.log_level, "info");
    }
}
