use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::Cli;
use crate::resolver::{DEFAULT_MARKER, DEFAULT_SUBDIR};

/// Runtime configuration resolved from file, env and CLI.
#[derive(Clone, Debug)]
pub struct Config {
    /// Marker file name identifying the project root.
    pub marker: String,
    /// Subdirectory reported alongside the resolved root.
    pub subdir: String,
    /// Engine command started on initialize, if configured.
    pub engine_command: Option<String>,
    /// Arguments passed to the engine command.
    pub engine_args: Vec<String>,
    /// Whether verbose logging is enabled.
    pub logging_enabled: bool,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    resolver: FileResolver,
    #[serde(default)]
    engine: FileEngine,
    #[serde(default)]
    logging: FileLogging,
}

#[derive(Deserialize)]
struct FileResolver {
    #[serde(default = "default_marker")]
    marker: String,
    #[serde(default = "default_subdir")]
    subdir: String,
}

#[derive(Deserialize, Default)]
struct FileEngine {
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
}

#[derive(Deserialize)]
struct FileLogging {
    #[serde(default = "default_logging")]
    enabled: bool,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_subdir() -> String {
    DEFAULT_SUBDIR.to_string()
}

fn default_logging() -> bool {
    true
}

impl Default for FileResolver {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            subdir: default_subdir(),
        }
    }
}

impl Default for FileLogging {
    fn default() -> Self {
        Self {
            enabled: default_logging(),
        }
    }
}

impl Config {
    /// Resolve configuration from CLI, environment variables, config file
    /// and defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        // built-in defaults
        let mut marker = default_marker();
        let mut subdir = default_subdir();
        let mut engine_command: Option<String> = None;
        let mut engine_args: Vec<String> = Vec::new();
        let mut logging = default_logging();

        // config file path precedence: CLI -> ENV -> platform default
        let config_path = cli
            .config
            .clone()
            .or_else(|| std::env::var("BOOTCORE_CONFIG").ok().map(PathBuf::from))
            .or_else(default_config_path);

        if let Some(path) = config_path {
            if let Ok(bytes) = fs::read(&path) {
                let contents = String::from_utf8_lossy(&bytes);
                let file_cfg: FileConfig =
                    toml::from_str(&contents).context("invalid config file")?;
                marker = file_cfg.resolver.marker;
                subdir = file_cfg.resolver.subdir;
                engine_command = file_cfg.engine.command;
                engine_args = file_cfg.engine.args;
                logging = file_cfg.logging.enabled;
            }
        }

        // environment overrides
        if let Ok(m) = std::env::var("BOOTCORE_MARKER") {
            marker = m;
        }
        if let Ok(s) = std::env::var("BOOTCORE_SUBDIR") {
            subdir = s;
        }
        if let Ok(e) = std::env::var("BOOTCORE_ENGINE") {
            engine_command = Some(e);
        }
        if let Ok(l) = std::env::var("BOOTCORE_LOGGING") {
            if let Ok(l) = l.parse::<bool>() {
                logging = l;
            }
        }

        // CLI overrides
        if let Some(m) = &cli.marker {
            marker = m.clone();
        }
        if let Some(s) = &cli.subdir {
            subdir = s.clone();
        }
        if let Some(e) = &cli.engine {
            engine_command = Some(e.clone());
        }
        if !cli.engine_args.is_empty() {
            engine_args = cli.engine_args.clone();
        }
        if let Some(l) = cli.logging {
            logging = l;
        }

        // marker and subdir are bare file names, never paths
        if !is_bare_name(&marker) {
            anyhow::bail!("invalid_marker");
        }
        if !is_bare_name(&subdir) {
            anyhow::bail!("invalid_subdir");
        }

        Ok(Self {
            marker,
            subdir,
            engine_command,
            engine_args,
            logging_enabled: logging,
        })
    }
}

fn is_bare_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\'])
}

/// Default config file location under the platform config directory.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "bootcore", "bootcore")
        .map(|dirs| dirs.config_dir().join("bootcore.toml"))
}
