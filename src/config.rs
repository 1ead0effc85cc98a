use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Table;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub behavior: BehaviorConfig,
    /// Raw `action -> trigger` table; absent section means no bindings were
    /// configured. Interpreted by `BindingRegistry::load`.
    pub bindings_internal: Option<Table>,
    pub bindings_external: Option<Table>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BehaviorConfig {
    pub history_file: Option<PathBuf>,
    pub download_handler: Option<String>,
    pub fifodir: Option<PathBuf>,
    pub always_insert_mode: bool,
    pub modkey: Option<String>,
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::config(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::config(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })
    }

    /// Directory the control channel node is created in. `/tmp` unless the
    /// behavior section overrides it.
    pub fn fifo_dir(&self) -> PathBuf {
        self.behavior
            .fifodir
            .clone()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("EBB_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("ebb").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("ebb")
                .join("config.toml"),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("ebb_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
        assert_eq!(config.fifo_dir(), PathBuf::from("/tmp"));
    }

    #[test]
    fn load_from_path_reads_behavior_and_binding_sections() {
        let path = unique_temp_path("full.toml");
        fs::write(
            &path,
            r#"
            [behavior]
            history_file = "/var/log/ebb_history"
            fifodir = "/run/user/1000"
            always_insert_mode = true
            modkey = "Mod1"

            [bindings_internal]
            quit = "Q"

            [bindings_external]
            go_home = "gh"
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(
            config.behavior.history_file,
            Some(PathBuf::from("/var/log/ebb_history"))
        );
        assert!(config.behavior.download_handler.is_none());
        assert_eq!(config.fifo_dir(), PathBuf::from("/run/user/1000"));
        assert!(config.behavior.always_insert_mode);
        assert_eq!(config.behavior.modkey.as_deref(), Some("Mod1"));

        let internal = config.bindings_internal.expect("section should be present");
        assert_eq!(internal.get("quit").and_then(|v| v.as_str()), Some("Q"));
        let external = config.bindings_external.expect("section should be present");
        assert_eq!(external.get("go_home").and_then(|v| v.as_str()), Some("gh"));

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_rejects_malformed_toml() {
        let path = unique_temp_path("broken.toml");
        fs::write(&path, "[behavior\nhistory_file = 3").expect("config file should be written");

        let err = Config::load_from_path(&path).expect_err("malformed config should fail");
        assert!(err.to_string().starts_with("configuration error"));

        fs::remove_file(&path).expect("config file should be removed");
    }
}
