use std::path::PathBuf;

mod env;

pub const APP_NAME: &str = "WizardWebb";
pub const DEFAULT_LINKS_FILE: &str = "data/links.yml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

pub const LINKS_FILE_ENV: &str = "LINKS_FILE";
pub const HOST_ENV: &str = "WIZARDWEBB_HOST";
pub const PORT_ENV: &str = "PORT";
pub const APP_NAME_ENV: &str = "WIZARDWEBB_APP_NAME";

/// Process-level settings. Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub links_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            links_file: PathBuf::from(DEFAULT_LINKS_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env::read_non_empty_env)
    }

    /// Resolve settings through `lookup`, which returns trimmed non-empty values.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = lookup(PORT_ENV);
        if let Some(raw) = port.as_deref() {
            if env::parse_u16(Some(raw)).is_none() {
                tracing::warn!(value = raw, "ignoring invalid {PORT_ENV}");
            }
        }
        Self {
            app_name: lookup(APP_NAME_ENV).unwrap_or(defaults.app_name),
            links_file: lookup(LINKS_FILE_ENV).map_or(defaults.links_file, PathBuf::from),
            host: lookup(HOST_ENV).unwrap_or(defaults.host),
            port: env::parse_u16(port.as_deref()).unwrap_or(defaults.port),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.links_file, PathBuf::from("data/links.yml"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LINKS_FILE", "/srv/links.yml"),
            ("PORT", "9090"),
            ("WIZARDWEBB_HOST", "0.0.0.0"),
            ("WIZARDWEBB_APP_NAME", "Noir"),
        ]));
        assert_eq!(config.links_file, PathBuf::from("/srv/links.yml"));
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.app_name, "Noir");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "http")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
