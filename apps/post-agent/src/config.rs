use std::env;

use thiserror::Error;
use url::Url;

/// Model used when OPENROUTER_MODEL is not set.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org";
const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingCredentials(&'static str),

    #[error("invalid URL in {var}: {source}")]
    InvalidBaseUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Process-wide read-only configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub openrouter_api_key: String,
    pub model: String,
    pub news_base_url: Url,
    pub openrouter_base_url: Url,
}

impl Config {
    /// Read configuration from the environment. Both credentials are
    /// required; a missing one aborts before any network call is made.
    pub fn from_env() -> Result<Self, ConfigError> {
        let news_api_key = env::var("NEWS_API_KEY")
            .map_err(|_| ConfigError::MissingCredentials("NEWS_API_KEY"))?;
        let openrouter_api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingCredentials("OPENROUTER_API_KEY"))?;

        let model = env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        // Base URLs are overridable so tests and staging can point elsewhere.
        let news_base_url = base_url_from_env("NEWS_API_BASE_URL", DEFAULT_NEWS_BASE_URL)?;
        let openrouter_base_url =
            base_url_from_env("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL)?;

        Ok(Config {
            news_api_key,
            openrouter_api_key,
            model,
            news_base_url,
            openrouter_base_url,
        })
    }
}

fn base_url_from_env(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl { var, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_optional_vars() {
        env::remove_var("OPENROUTER_MODEL");
        env::remove_var("NEWS_API_BASE_URL");
        env::remove_var("OPENROUTER_BASE_URL");
    }

    #[test]
    #[serial]
    fn test_missing_news_key_is_reported() {
        env::remove_var("NEWS_API_KEY");
        env::set_var("OPENROUTER_API_KEY", "or-key");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredentials("NEWS_API_KEY")));
    }

    #[test]
    #[serial]
    fn test_missing_openrouter_key_is_reported() {
        env::set_var("NEWS_API_KEY", "news-key");
        env::remove_var("OPENROUTER_API_KEY");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredentials("OPENROUTER_API_KEY")
        ));
    }

    #[test]
    #[serial]
    fn test_defaults_apply_when_optional_vars_absent() {
        env::set_var("NEWS_API_KEY", "news-key");
        env::set_var("OPENROUTER_API_KEY", "or-key");
        clear_optional_vars();

        let config = Config::from_env().unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.news_base_url.as_str(), "https://newsapi.org/");
        assert_eq!(
            config.openrouter_base_url.as_str(),
            "https://openrouter.ai/api/v1"
        );
    }

    #[test]
    #[serial]
    fn test_overrides_win_over_defaults() {
        env::set_var("NEWS_API_KEY", "news-key");
        env::set_var("OPENROUTER_API_KEY", "or-key");
        env::set_var("OPENROUTER_MODEL", "anthropic/claude-3-haiku");
        env::set_var("NEWS_API_BASE_URL", "http://127.0.0.1:9000");
        env::set_var("OPENROUTER_BASE_URL", "http://127.0.0.1:9001");

        let config = Config::from_env().unwrap();
        assert_eq!(config.model, "anthropic/claude-3-haiku");
        assert_eq!(config.news_base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.openrouter_base_url.as_str(), "http://127.0.0.1:9001/");

        clear_optional_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_base_url_is_rejected() {
        env::set_var("NEWS_API_KEY", "news-key");
        env::set_var("OPENROUTER_API_KEY", "or-key");
        env::set_var("NEWS_API_BASE_URL", "not a url");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBaseUrl { var: "NEWS_API_BASE_URL", .. }
        ));

        clear_optional_vars();
    }
}
