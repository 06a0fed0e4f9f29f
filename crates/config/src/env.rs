use jirabt_common::error::{JiraBtError, JiraBtResult};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Root of the host application's REST API, always ending with `/`.
    pub rest_path: String,
    pub default_locale: String,
    pub poll_interval_ms: u64,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> JiraBtResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: parse_var_or("PORT", "8080")?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            rest_path: normalize_rest_path(&get_var("REST_PATH")?),
            default_locale: get_var_or("DEFAULT_LOCALE", "en"),
            poll_interval_ms: parse_var_or("POLL_INTERVAL_MS", "1000")?,
            http_timeout_secs: parse_var_or("HTTP_TIMEOUT_SECS", "30")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Links are built by plain concatenation, so the root must end with a slash.
fn normalize_rest_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    }
}

fn get_var(key: &str) -> JiraBtResult<String> {
    env::var(key).map_err(|_| JiraBtError::Config(format!("{key} is required but not set")))
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var_or<T>(key: &str, default: &str) -> JiraBtResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_var_or(key, default)
        .parse()
        .map_err(|e| JiraBtError::Config(format!("invalid {key}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_optional_vars() {
        for key in [
            "HOST",
            "PORT",
            "LOG_LEVEL",
            "DEFAULT_LOCALE",
            "POLL_INTERVAL_MS",
            "HTTP_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn config_from_env_succeeds_with_required_vars() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_optional_vars();
        env::set_var("REST_PATH", "https://ligoj.local/rest/");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.rest_path, "https://ligoj.local/rest/");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.default_locale, "en");
        assert_eq!(cfg.poll_interval(), Duration::from_secs(1));
        assert_eq!(cfg.http_timeout(), Duration::from_secs(30));

        env::remove_var("REST_PATH");
    }

    #[test]
    fn config_from_env_fails_without_rest_path() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("REST_PATH");
        let result = AppConfig::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn config_rejects_invalid_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_optional_vars();
        env::set_var("REST_PATH", "http://host/rest/");
        env::set_var("PORT", "not-a-port");

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("invalid PORT"), "got: {err}");

        env::remove_var("PORT");
        env::remove_var("REST_PATH");
    }

    #[test]
    fn config_reads_poll_interval() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_optional_vars();
        env::set_var("REST_PATH", "http://host/rest");
        env::set_var("POLL_INTERVAL_MS", "250");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.poll_interval(), Duration::from_millis(250));
        assert_eq!(cfg.rest_path, "http://host/rest/");

        env::remove_var("POLL_INTERVAL_MS");
        env::remove_var("REST_PATH");
    }

    #[test]
    fn config_reads_log_level() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_optional_vars();
        env::set_var("REST_PATH", "http://host/rest/");
        env::set_var("LOG_LEVEL", "debug,hyper=warn");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.log_level, "debug,hyper=warn");

        env::remove_var("LOG_LEVEL");
        env::remove_var("REST_PATH");
    }

    #[test]
    fn rest_path_gets_trailing_slash() {
        assert_eq!(normalize_rest_path("http://h/rest"), "http://h/rest/");
        assert_eq!(normalize_rest_path(" http://h/rest/ "), "http://h/rest/");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
            rest_path: "/rest/".to_owned(),
            default_locale: "fr".to_owned(),
            poll_interval_ms: 1000,
            http_timeout_secs: 30,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
