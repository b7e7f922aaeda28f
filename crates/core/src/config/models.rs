//! The validated server configuration.

use crate::config::error::{ConfigError, ConfigResult};
use std::path::{Component, Path, PathBuf};

/// Knowledge directory under the project root.
pub const DEFAULT_KNOWLEDGE_DIR: &str = ".ai";

/// Tracing filter used when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one server process.
///
/// # Example
///
/// ```rust
/// use bmad_core::config::ServerConfig;
/// use std::path::PathBuf;
///
/// let config = ServerConfig::new(
///     Some(PathBuf::from("bmad-agent/ide-bmad-orchestrator.cfg.md")),
///     Some(PathBuf::from(".")),
/// )
/// .unwrap();
/// assert_eq!(config.knowledge_dir, ".ai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Agent-definition document. A file that cannot be read is not fatal;
    /// the server then starts with an empty catalog.
    pub config_path: PathBuf,

    /// Root directory holding the knowledge directory.
    pub project_root: PathBuf,

    /// Knowledge directory name, relative to `project_root`.
    pub knowledge_dir: String,

    /// Tracing filter directive, e.g. `info` or `bmad_core=debug`.
    pub log_level: String,
}

impl ServerConfig {
    /// Build a configuration from the two required inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] when either path is absent or
    /// empty.
    pub fn new(config_path: Option<PathBuf>, project_root: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = required(
            config_path,
            ConfigError::MissingSetting {
                name: "config path",
                flag: "config",
                env: "BMAD_CONFIG_PATH",
            },
        )?;
        let project_root = required(
            project_root,
            ConfigError::MissingSetting {
                name: "project root",
                flag: "project-root",
                env: "BMAD_PROJECT_ROOT",
            },
        )?;

        Ok(Self {
            config_path,
            project_root,
            knowledge_dir: DEFAULT_KNOWLEDGE_DIR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        })
    }

    /// Use a different knowledge directory.
    ///
    /// The directory must be a plain relative path inside the project root.
    pub fn with_knowledge_dir(mut self, knowledge_dir: impl Into<String>) -> ConfigResult<Self> {
        let knowledge_dir = knowledge_dir.into();
        let path = Path::new(&knowledge_dir);
        let stays_inside = path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if knowledge_dir.is_empty() || !stays_inside {
            return Err(ConfigError::InvalidSetting {
                name: "knowledge directory",
                reason: format!("'{knowledge_dir}' must be a relative path inside the project root"),
            });
        }
        self.knowledge_dir = knowledge_dir;
        Ok(self)
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Directory searched for knowledge documents.
    pub fn knowledge_path(&self) -> PathBuf {
        self.project_root.join(&self.knowledge_dir)
    }
}

fn required(value: Option<PathBuf>, missing: ConfigError) -> ConfigResult<PathBuf> {
    match value {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(missing),
    }
}
