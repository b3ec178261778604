use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend bundle (trunk `dist`), also holds `sports.csv`
    pub static_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Static directory; relative paths resolve against the working directory
    pub fn static_path(&self) -> PathBuf {
        let path = Path::new(&self.static_dir);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:3000".parse().unwrap()
        );
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081
            static_dir = "/srv/vendor-dashboard"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.server.static_path(),
            PathBuf::from("/srv/vendor-dashboard")
        );
        assert!(config.server.static_path().is_absolute());
    }

    #[test]
    fn test_relative_static_dir_resolves_to_absolute() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let path = config.server.static_path();
        assert!(path.ends_with("dist"));
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("port = 3000").is_err());
    }
}
