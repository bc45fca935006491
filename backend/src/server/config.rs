//! HTTP server configuration loaded via OrthoConfig.

use std::io;
use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Settings read from `PROFILES_*` environment variables, CLI flags, or a
/// configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILES")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Comma-separated list of allowed CORS origins.
    pub cors_origins: Option<String>,
    /// Tracing filter directive, e.g. `info` or `profiles_backend=debug`.
    pub log_level: Option<String>,
    /// Deployment environment reported by `/health`.
    pub environment: Option<String>,
    /// Store the demonstration profile at startup.
    #[ortho_config(default = false)]
    pub seed_example_user: bool,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Allowed CORS origins with blanks dropped.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or(DEFAULT_CORS_ORIGIN)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Configured tracing filter, falling back to `info`.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Configured environment name, falling back to `development`.
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Resolve loaded settings into a bindable configuration.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] when the host is not an IP
    /// address.
    pub fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let host = settings.host();
        let ip: IpAddr = host.parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid PROFILES_HOST {host:?}: {err}"),
            )
        })?;
        Ok(Self {
            bind_addr: SocketAddr::new(ip, settings.port()),
            cors_origins: settings.cors_origins(),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "PROFILES_HOST",
        "PROFILES_PORT",
        "PROFILES_CORS_ORIGINS",
        "PROFILES_LOG_LEVEL",
        "PROFILES_ENVIRONMENT",
        "PROFILES_SEED_EXAMPLE_USER",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 3000);
        assert_eq!(settings.cors_origins(), ["http://localhost:3000"]);
        assert_eq!(settings.log_level(), "info");
        assert_eq!(settings.environment(), "development");
        assert!(!settings.seed_example_user);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PROFILES_HOST", Some("127.0.0.1".to_owned())),
            ("PROFILES_PORT", Some("8081".to_owned())),
            (
                "PROFILES_CORS_ORIGINS",
                Some("https://a.example, https://b.example,".to_owned()),
            ),
            ("PROFILES_LOG_LEVEL", Some("debug".to_owned())),
            ("PROFILES_ENVIRONMENT", Some("production".to_owned())),
            ("PROFILES_SEED_EXAMPLE_USER", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.cors_origins(),
            ["https://a.example", "https://b.example"]
        );
        assert_eq!(settings.log_level(), "debug");
        assert_eq!(settings.environment(), "production");
        assert!(settings.seed_example_user);
        let config = ServerConfig::from_settings(&settings).expect("valid config");
        assert_eq!(config.bind_addr(), "127.0.0.1:8081".parse().expect("addr"));
    }

    #[rstest]
    fn non_ip_host_is_rejected() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));
        let mut settings = load_from_empty_args();
        settings.host = Some("not an address".to_owned());

        let err = ServerConfig::from_settings(&settings).expect_err("invalid host");

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
