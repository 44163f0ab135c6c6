use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::Deserialize;

use crate::ranking::{DEFAULT_LIMIT, RankOptions, SortKey};
use crate::system::collector::CollectorConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub processes: ProcessesConfig,
    pub collector: CollectorSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// auto, always, never
    pub color: String,
    pub log_level: String,
    /// text or json
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            color: "auto".to_string(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProcessesConfig {
    pub default_sort: String,
    pub limit: usize,
    pub descending: bool,
}

impl Default for ProcessesConfig {
    fn default() -> Self {
        ProcessesConfig {
            default_sort: "memory".to_string(),
            limit: DEFAULT_LIMIT,
            descending: true,
        }
    }
}

impl ProcessesConfig {
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            sort: SortKey::from_str_config(&self.default_sort),
            descending: self.descending,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CollectorSection {
    pub cpu_sample_ms: u64,
    pub disk_mount_point: PathBuf,
}

impl Default for CollectorSection {
    fn default() -> Self {
        CollectorSection {
            cpu_sample_ms: 1000,
            disk_mount_point: PathBuf::from("/"),
        }
    }
}

impl CollectorSection {
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            cpu_sample_interval: Duration::from_millis(self.cpu_sample_ms),
            disk_mount_point: self.disk_mount_point.clone(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mico").join("config.toml"))
}

/// A missing config file is not an error; defaults apply.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("config not readable: {}", path.display()))?;
    let config = toml::from_str(&contents)
        .wrap_err_with(|| format!("invalid config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.color, "auto");
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.processes.default_sort, "memory");
        assert_eq!(config.processes.limit, 10);
        assert!(config.processes.descending);
        assert_eq!(config.collector.cpu_sample_ms, 1000);
        assert_eq!(config.collector.disk_mount_point, PathBuf::from("/"));
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[processes]
limit = 25
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.processes.limit, 25);
        // Other fields should be defaults
        assert_eq!(config.processes.default_sort, "memory");
        assert_eq!(config.general.log_format, "text");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
color = "never"
log_level = "debug"
log_format = "json"

[processes]
default_sort = "name"
limit = 5
descending = false

[collector]
cpu_sample_ms = 250
disk_mount_point = "/data"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.color, "never");
        assert_eq!(config.general.log_format, "json");

        let opts = config.processes.rank_options();
        assert_eq!(opts.sort, SortKey::Name);
        assert!(!opts.descending);
        assert_eq!(opts.limit, 5);

        let collector = config.collector.collector_config();
        assert_eq!(collector.cpu_sample_interval, Duration::from_millis(250));
        assert_eq!(collector.disk_mount_point, PathBuf::from("/data"));
    }

    #[test]
    fn unknown_sort_falls_back_to_memory() {
        let config: Config = toml::from_str("[processes]\ndefault_sort = \"cpu\"\n").unwrap();
        assert_eq!(config.processes.rank_options().sort, SortKey::Memory);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config_from_path(Path::new("/nonexistent/path/config.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("config not readable"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = std::env::temp_dir().join(format!("mico_test_invalid_{}.toml", std::process::id()));
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let result = load_config_from_path(&temp);
        let _ = std::fs::remove_file(&temp);
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }

    #[test]
    fn valid_file_loads() {
        let temp = std::env::temp_dir().join(format!("mico_test_valid_{}.toml", std::process::id()));
        std::fs::write(&temp, "[processes]\nlimit = 4\n").unwrap();
        let result = load_config_from_path(&temp);
        let _ = std::fs::remove_file(&temp);
        assert_eq!(result.unwrap().processes.limit, 4);
    }
}
