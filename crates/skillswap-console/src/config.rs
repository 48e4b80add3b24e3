use anyhow::Context;
use serde::Deserialize;
use skillswap_wizard::{UnknownTargetPolicy, WizardLayout};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[wizard]
layout = ""  # Path to a layout file; empty uses the built-in profile form
unknown_target = "clear"  # or "keep_current"

[output]
json = false  # Print wizard state as JSON

[logging]
level = "info"  # trace, debug, info, warn, error
json = false
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct WizardConfig {
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub unknown_target: UnknownTargetPolicy,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub wizard: WizardConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillswap/skillswap.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".skillswap").join("skillswap.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillswap/skillswap.toml (auto-created if missing)
    /// 2. Local override: ./skillswap.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let global_config_path = Self::ensure_global_config()?;

        let mut config_builder = config::Config::builder()
            .add_source(config::File::from(global_config_path))
            .add_source(config::File::with_name("skillswap").required(false))
            .add_source(config::Environment::with_prefix("SKILLSWAP").separator("__"));

        if let Ok(layout) = env::var("SKILLSWAP_LAYOUT") {
            config_builder = config_builder.set_override("wizard.layout", layout)?;
        }

        if let Ok(level) = env::var("SKILLSWAP_LOG_LEVEL") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Resolve the configured wizard layout
    pub fn layout(&self) -> anyhow::Result<WizardLayout> {
        let path = self.wizard.layout.trim();
        if path.is_empty() {
            return Ok(WizardLayout::profile());
        }

        let path = expand_home(path);
        WizardLayout::from_path(&path)
            .with_context(|| format!("Failed to load layout {}", path.display()))
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}
