use pathcards_extractor::MinerKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_DIR: &str = "pathcards";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "logging": {
    "level": "info"
  },
  "compare": {
    "parallel": false,
    "pretty": true
  },
  "mining": {
    "report_path": "DeltaFeatures.txt",
    "blacklist_path": null,
    "miners": [
      "controls_state_change",
      "controls_state_change_but_is_participant",
      "controls_state_change_through_controller_small_molecule"
    ]
  }
}
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub mining: MiningConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Classify inference cards on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Pretty-print the annotated cards.
    #[serde(default = "CompareConfig::default_pretty")]
    pub pretty: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            pretty: Self::default_pretty(),
        }
    }
}

impl CompareConfig {
    const fn default_pretty() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MiningConfig {
    #[serde(default = "MiningConfig::default_report_path")]
    pub report_path: PathBuf,
    #[serde(default)]
    pub blacklist_path: Option<PathBuf>,
    #[serde(default = "MiningConfig::default_miners")]
    pub miners: Vec<MinerKind>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            report_path: Self::default_report_path(),
            blacklist_path: None,
            miners: Self::default_miners(),
        }
    }
}

impl MiningConfig {
    fn default_report_path() -> PathBuf {
        PathBuf::from("DeltaFeatures.txt")
    }

    fn default_miners() -> Vec<MinerKind> {
        MinerKind::ALL.to_vec()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'pathcards init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Like [`Config::load`], but falls back to the defaults.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default configuration: {e}");
            Self::default()
        })
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::write_template(&config_path)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Configuration options:");
        println!("   - logging.level: default log filter, overridden by RUST_LOG");
        println!("   - compare.parallel: classify inference cards in parallel");
        println!("   - mining.blacklist_path: ubiquitous molecules to ignore");
        println!("   - mining.miners: state-change patterns to mine");
        println!();
        Ok(())
    }

    /// Write the template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        std::fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}
