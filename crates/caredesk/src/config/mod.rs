use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::desk::Role;
use crate::error::{CaredeskError, Result};
use crate::store::{
    DEFAULT_INTAKE_CAPACITY, DEFAULT_INVENTORY_CAPACITY, DEFAULT_ROTATION_CAPACITY,
    DEFAULT_TRIAGE_CAPACITY,
};

/// Main configuration structure for caredesk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the role stores live on disk
    #[serde(default)]
    pub storage: StorageConfig,
    /// Maximum records per role
    #[serde(default)]
    pub capacity: CapacityConfig,
}

impl Config {
    /// Load from `path`, or from the first default location that exists.
    ///
    /// Falls back to [`Config::default`] when no file is found. The result is
    /// validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            None => match default_config_paths().into_iter().find(|p| p.exists()) {
                Some(found) => {
                    tracing::info!("Loading config from: {}", found.display());
                    Self::from_file(&found)?
                }
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CaredeskError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content)
            .map_err(|e| CaredeskError::Config(format!("Failed to parse config: {e}")))
    }

    /// Reject settings no store can work with
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            if self.capacity.for_role(role) == 0 {
                return Err(CaredeskError::Config(format!(
                    "capacity.{} must be at least 1",
                    role.as_str()
                )));
            }
        }
        Ok(())
    }
}

fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::home_dir().map(|h| h.join(".caredesk").join("config.toml")),
        dirs::config_dir().map(|c| c.join("caredesk").join("config.toml")),
        Some(PathBuf::from("config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Store file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for all store files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Intake queue file, relative to `data_dir` unless absolute
    #[serde(default = "default_intake_file")]
    pub intake_file: PathBuf,
    #[serde(default = "default_inventory_file")]
    pub inventory_file: PathBuf,
    #[serde(default = "default_triage_file")]
    pub triage_file: PathBuf,
    #[serde(default = "default_rotation_file")]
    pub rotation_file: PathBuf,
}

impl StorageConfig {
    /// Resolved path of a role's store file
    pub fn path_for(&self, role: Role) -> PathBuf {
        let file = match role {
            Role::Intake => &self.intake_file,
            Role::Inventory => &self.inventory_file,
            Role::Triage => &self.triage_file,
            Role::Rotation => &self.rotation_file,
        };
        self.data_dir.join(file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            intake_file: default_intake_file(),
            inventory_file: default_inventory_file(),
            triage_file: default_triage_file(),
            rotation_file: default_rotation_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".caredesk"))
        .unwrap_or_else(|| PathBuf::from(".caredesk"))
}

fn default_intake_file() -> PathBuf {
    PathBuf::from("patients.txt")
}

fn default_inventory_file() -> PathBuf {
    PathBuf::from("supplies.txt")
}

fn default_triage_file() -> PathBuf {
    PathBuf::from("emergencies.txt")
}

fn default_rotation_file() -> PathBuf {
    PathBuf::from("ambulances.txt")
}

/// Per-role capacity limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityConfig {
    #[serde(default = "default_intake_capacity")]
    pub intake: usize,
    #[serde(default = "default_inventory_capacity")]
    pub inventory: usize,
    #[serde(default = "default_triage_capacity")]
    pub triage: usize,
    #[serde(default = "default_rotation_capacity")]
    pub rotation: usize,
}

impl CapacityConfig {
    pub fn for_role(&self, role: Role) -> usize {
        match role {
            Role::Intake => self.intake,
            Role::Inventory => self.inventory,
            Role::Triage => self.triage,
            Role::Rotation => self.rotation,
        }
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            intake: default_intake_capacity(),
            inventory: default_inventory_capacity(),
            triage: default_triage_capacity(),
            rotation: default_rotation_capacity(),
        }
    }
}

fn default_intake_capacity() -> usize {
    DEFAULT_INTAKE_CAPACITY
}

fn default_inventory_capacity() -> usize {
    DEFAULT_INVENTORY_CAPACITY
}

fn default_triage_capacity() -> usize {
    DEFAULT_TRIAGE_CAPACITY
}

fn default_rotation_capacity() -> usize {
    DEFAULT_ROTATION_CAPACITY
}
