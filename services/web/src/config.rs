//! Web service configuration loaded from environment variables

use std::env;

use client::tmdb::DEFAULT_LANGUAGE;

/// Web service configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Base URL of the FrameHub backend
    pub backend_url: String,
    /// Base URL of the metadata catalog
    pub tmdb_base_url: String,
    /// API key for the metadata catalog
    pub tmdb_api_key: String,
    /// Language sent with every catalog request
    pub tmdb_language: String,
    /// Whether cookies should carry the Secure attribute
    pub production: bool,
}

impl WebConfig {
    /// Create a new WebConfig from environment variables
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("FRAMEHUB_WEB_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let backend_url =
            env::var("FRAMEHUB_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

        let tmdb_base_url = env::var("FRAMEHUB_TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());

        let tmdb_api_key = env::var("FRAMEHUB_TMDB_API_KEY").unwrap_or_default();

        let tmdb_language =
            env::var("FRAMEHUB_TMDB_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        let production = env::var("APP_ENV")
            .map(|value| value == "production")
            .unwrap_or(false);

        Self {
            bind_addr,
            backend_url,
            tmdb_base_url,
            tmdb_api_key,
            tmdb_language,
            production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_when_environment_is_empty() {
        unsafe {
            env::remove_var("FRAMEHUB_WEB_ADDR");
            env::remove_var("FRAMEHUB_API_URL");
            env::remove_var("FRAMEHUB_TMDB_BASE_URL");
            env::remove_var("FRAMEHUB_TMDB_API_KEY");
            env::remove_var("FRAMEHUB_TMDB_LANGUAGE");
            env::remove_var("APP_ENV");
        }

        let config = WebConfig::from_env();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.backend_url, "http://localhost:3333");
        assert_eq!(config.tmdb_language, "pt-BR");
        assert!(!config.production);
    }

    #[test]
    #[serial]
    fn production_flag_follows_app_env() {
        unsafe {
            env::set_var("APP_ENV", "production");
        }
        assert!(WebConfig::from_env().production);
        unsafe {
            env::remove_var("APP_ENV");
        }
    }
}
