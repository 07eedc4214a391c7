use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub listen: String,
    /// Directory with the compiled WASM bundle and index.html.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the backend API, no trailing slash.
    pub url: String,
    /// Endpoint the gateway calls to renew an expired session before
    /// retrying a 401'd request.
    pub refresh_path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
listen = "0.0.0.0:8080"
static_dir = "static"

[upstream]
url = "http://127.0.0.1:3000"
refresh_path = "/api/auth/refresh"
"#;

/// Load configuration from gateway.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("gateway.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("gateway.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:8080");
        assert_eq!(config.upstream.url, "http://127.0.0.1:3000");
        assert_eq!(config.upstream.refresh_path, "/api/auth/refresh");
    }

    #[test]
    fn custom_config_overrides_everything() {
        let config: Config = toml::from_str(
            r#"
            [server]
            listen = "127.0.0.1:9000"
            static_dir = "/var/www/console"

            [upstream]
            url = "https://api.fleet.example.com"
            refresh_path = "/api/v2/session/refresh"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:9000");
        assert_eq!(config.server.static_dir, "/var/www/console");
        assert_eq!(config.upstream.url, "https://api.fleet.example.com");
    }
}
