//! Workspace configuration
//!
//! Configuration lives in `config.yaml` inside the workspace directory and
//! currently consists of the role directory: which email addresses act as
//! agents and which as customers. Keeping the mapping in configuration
//! means authorization logic never hard-codes an email address.

use crate::core::{Identity, Role, RoleDirectory};
use crate::error::{HelpdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.yaml";

/// Top-level workspace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub roles: RoleConfig,
}

/// Identity-to-role assignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    #[serde(default)]
    pub agents: Vec<Identity>,
    #[serde(default)]
    pub customers: Vec<Identity>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roles: RoleConfig {
                agents: vec![Identity::from("agent@support.com")],
                customers: vec![Identity::from("customer@support.com")],
            },
        }
    }
}

impl Config {
    fn path(workspace_dir: &Path) -> PathBuf {
        workspace_dir.join(CONFIG_FILE)
    }

    /// Load the configuration from the workspace, falling back to the
    /// default role directory when no config file exists
    pub fn load_or_default(workspace_dir: &Path) -> Result<Self> {
        let path = Self::path(workspace_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| HelpdeskError::serialization("parse the config file", e))
    }

    /// Write the configuration into the workspace
    pub fn save(&self, workspace_dir: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| HelpdeskError::serialization("serialize the config", e))?;
        fs::write(Self::path(workspace_dir), content)?;
        Ok(())
    }

    /// Build the role lookup table from the configured assignments
    ///
    /// If an email appears in both lists, the customer entry wins; it is
    /// inserted last.
    #[must_use]
    pub fn role_directory(&self) -> RoleDirectory {
        let mut directory = RoleDirectory::default();
        for agent in &self.roles.agents {
            directory.insert(agent.clone(), Role::Agent);
        }
        for customer in &self.roles.customers {
            directory.insert(customer.clone(), Role::Customer);
        }
        directory
    }
}
