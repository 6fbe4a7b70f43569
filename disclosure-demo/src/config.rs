//! Demo configuration.

use std::path::PathBuf;
use std::str::FromStr;

use simplelog::LevelFilter;

/// Runtime options for the demo binary.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Where the log is written.
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Indent the printed markup.
    pub pretty: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("disclosure-demo.log"),
            log_level: LevelFilter::Debug,
            pretty: true,
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by `DISCLOSURE_DEMO_LOG`, `DISCLOSURE_DEMO_LOG_LEVEL`
    /// and `DISCLOSURE_DEMO_PRETTY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup("DISCLOSURE_DEMO_LOG") {
            config.log_file = PathBuf::from(path);
        }
        if let Some(level) = lookup("DISCLOSURE_DEMO_LOG_LEVEL") {
            match LevelFilter::from_str(&level) {
                Ok(level) => config.log_level = level,
                Err(_) => eprintln!("ignoring unknown log level {level:?}"),
            }
        }
        if let Some(pretty) = lookup("DISCLOSURE_DEMO_PRETTY") {
            config.pretty = !matches!(pretty.as_str(), "0" | "false" | "no");
        }
        config
    }

    pub fn render_config(&self) -> markup::RenderConfig {
        if self.pretty {
            markup::RenderConfig::pretty()
        } else {
            markup::RenderConfig::compact()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup(&[]));
        assert_eq!(config.log_file, PathBuf::from("disclosure-demo.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.pretty);
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("DISCLOSURE_DEMO_LOG", "/tmp/d.log"),
            ("DISCLOSURE_DEMO_LOG_LEVEL", "warn"),
            ("DISCLOSURE_DEMO_PRETTY", "false"),
        ]));
        assert_eq!(config.log_file, PathBuf::from("/tmp/d.log"));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(!config.pretty);
    }

    #[test]
    fn test_bad_level_keeps_default() {
        let config = DemoConfig::from_lookup(lookup(&[("DISCLOSURE_DEMO_LOG_LEVEL", "loud")]));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
