//! Application configuration

use artifact_core::config::{load_toml, parse_toml, ConfigError};
use artifact_core::{LeaderAttribute, NumberFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings compiled into the binary, used when no config file is given
const DEFAULT_CONFIG: &str = include_str!("../config/app.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub swarfarm: SwarfarmConfig,
    #[serde(default)]
    pub display: NumberFormat,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub leader_values: LeaderValues,
}

impl AppConfig {
    /// Load from `path`, or the bundled defaults when no path is given.
    ///
    /// Relative data paths resolve against the directory holding the
    /// config file; for the bundled defaults, against the package root.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (mut config, base_dir): (AppConfig, PathBuf) = match path {
            Some(path) => (
                load_toml(path)?,
                path.parent().map(Path::to_path_buf).unwrap_or_default(),
            ),
            None => (parse_toml(DEFAULT_CONFIG)?, PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
        };
        config.data.resolve_against(&base_dir);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.swarfarm.api_root.trim().is_empty() {
            return Err(ConfigError::ValidationError("swarfarm.api_root is empty".to_string()));
        }
        if self.swarfarm.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "swarfarm.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.display.thousands_separator == self.display.decimal_separator {
            return Err(ConfigError::ValidationError(
                "display separators must differ".to_string(),
            ));
        }
        for attribute in LeaderAttribute::all() {
            if self.leader_values.values(*attribute).iter().any(|v| *v <= 0.0 || !v.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "leader_values for {} must be positive",
                    attribute.label()
                )));
            }
        }
        Ok(())
    }
}

/// Swarfarm API access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarfarmConfig {
    #[serde(default = "default_api_root")]
    pub api_root: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SwarfarmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SwarfarmConfig {
    fn default() -> Self {
        SwarfarmConfig {
            api_root: default_api_root(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_root() -> String {
    "https://swarfarm.com/api/v2".to_string()
}
fn default_user_agent() -> String {
    "artifact-comparator".to_string()
}
fn default_timeout_secs() -> u64 {
    20
}

/// Local data files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Catalog used in offline mode
    #[serde(default = "default_monsters_file")]
    pub monsters_file: PathBuf,
}

impl DataConfig {
    /// Make relative paths relative to `base_dir`
    pub fn resolve_against(&mut self, base_dir: &Path) {
        if self.monsters_file.is_relative() {
            self.monsters_file = base_dir.join(&self.monsters_file);
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            monsters_file: default_monsters_file(),
        }
    }
}

fn default_monsters_file() -> PathBuf {
    PathBuf::from("data/monsters.json")
}

/// Percentages the leader value selector cycles through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderValues {
    #[serde(default = "default_hp_values")]
    pub hp: Vec<f64>,
    #[serde(default = "default_attack_values")]
    pub attack: Vec<f64>,
    #[serde(default = "default_defense_values")]
    pub defense: Vec<f64>,
    #[serde(default = "default_speed_values")]
    pub speed: Vec<f64>,
}

impl LeaderValues {
    /// Allowed values for an attribute; empty for no leader
    pub fn values(&self, attribute: LeaderAttribute) -> &[f64] {
        match attribute {
            LeaderAttribute::None => &[],
            LeaderAttribute::Hp => &self.hp,
            LeaderAttribute::Attack => &self.attack,
            LeaderAttribute::Defense => &self.defense,
            LeaderAttribute::Speed => &self.speed,
        }
    }
}

impl Default for LeaderValues {
    fn default() -> Self {
        LeaderValues {
            hp: default_hp_values(),
            attack: default_attack_values(),
            defense: default_defense_values(),
            speed: default_speed_values(),
        }
    }
}

fn default_hp_values() -> Vec<f64> {
    vec![15.0, 17.0, 18.0, 21.0, 22.0, 24.0, 25.0, 28.0, 30.0, 33.0, 38.0, 40.0, 44.0, 45.0, 50.0]
}
fn default_attack_values() -> Vec<f64> {
    vec![
        15.0, 18.0, 20.0, 21.0, 22.0, 23.0, 25.0, 28.0, 30.0, 31.0, 33.0, 35.0, 38.0, 40.0, 44.0,
        45.0,
    ]
}
fn default_defense_values() -> Vec<f64> {
    vec![20.0, 21.0, 22.0, 25.0, 27.0, 28.0, 30.0, 33.0, 38.0, 40.0, 44.0, 50.0]
}
fn default_speed_values() -> Vec<f64> {
    vec![10.0, 13.0, 15.0, 16.0, 17.0, 19.0, 20.0, 21.0, 23.0, 24.0, 28.0, 30.0, 33.0]
}
