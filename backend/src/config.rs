//! Host configuration, read once from the environment at startup.
//!
//! | Variable                   | Default                      |
//! |----------------------------|------------------------------|
//! | `DASHBOARD_HOST`           | `127.0.0.1`                  |
//! | `DASHBOARD_PORT`           | `8080`                       |
//! | `DASHBOARD_GA_CREDENTIALS` | `google_analytics_cred.json` |
//! | `DASHBOARD_DATA_TEMPLATE`  | `data_template.csv`          |
//! | `DASHBOARD_OPEN_BROWSER`   | `true`                       |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where the uploaded Google Analytics service account file is kept.
    pub credentials_path: PathBuf,
    /// Headerless `name,label,code` CSV used to suggest field types.
    pub data_template_path: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            credentials_path: PathBuf::from("google_analytics_cred.json"),
            data_template_path: PathBuf::from("data_template.csv"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Values that fail to
    /// parse keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("DASHBOARD_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("DASHBOARD_PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid DASHBOARD_PORT {:?}", port),
            }
        }
        if let Some(path) = lookup("DASHBOARD_GA_CREDENTIALS") {
            config.credentials_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("DASHBOARD_DATA_TEMPLATE") {
            config.data_template_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("DASHBOARD_OPEN_BROWSER") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = true,
                "0" | "false" | "no" => config.open_browser = false,
                _ => warn!("Ignoring invalid DASHBOARD_OPEN_BROWSER {:?}", flag),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("DASHBOARD_HOST", "0.0.0.0"),
            ("DASHBOARD_PORT", "9000"),
            ("DASHBOARD_GA_CREDENTIALS", "/var/lib/dash/ga.json"),
            ("DASHBOARD_DATA_TEMPLATE", "/var/lib/dash/template.csv"),
            ("DASHBOARD_OPEN_BROWSER", "no"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.credentials_path, PathBuf::from("/var/lib/dash/ga.json"));
        assert_eq!(config.data_template_path, PathBuf::from("/var/lib/dash/template.csv"));
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("DASHBOARD_PORT", "eighty"),
            ("DASHBOARD_OPEN_BROWSER", "maybe"),
            ("DASHBOARD_HOST", "  "),
        ]);
        assert_eq!(config, ServerConfig::default());
    }
}
