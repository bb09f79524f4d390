//! YAML file storage for a helpdesk workspace
//!
//! A workspace directory (`.helpdesk`) holds the persisted ticket pool
//! (`tickets.yaml`, one ordered list) and the current session identity
//! (`session`, a single email line). Both are collaborator state: all
//! authorization happens in the engine before anything is written here.

use crate::core::{Identity, Ticket};
use crate::error::{HelpdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const TICKETS_FILE: &str = "tickets.yaml";
const SESSION_FILE: &str = "session";

/// File-backed storage rooted at a workspace directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the given workspace directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The workspace directory this storage reads and writes
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tickets_path(&self) -> PathBuf {
        self.root.join(TICKETS_FILE)
    }

    fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    /// Load the persisted ticket pool, in saved order
    ///
    /// A missing file is an empty pool, not an error.
    pub fn load_tickets(&self) -> Result<Vec<Ticket>> {
        let path = self.tickets_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| HelpdeskError::serialization("parse the tickets file", e))
    }

    /// Replace the persisted ticket pool
    pub fn save_tickets(&self, tickets: &[Ticket]) -> Result<()> {
        let content = serde_yaml::to_string(tickets)
            .map_err(|e| HelpdeskError::serialization("serialize tickets", e))?;
        fs::write(self.tickets_path(), content)?;
        Ok(())
    }

    /// The identity of the current session, if someone is logged in
    pub fn read_session(&self) -> Result<Option<Identity>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let email = content.trim();
        if email.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Identity::from(email)))
        }
    }

    /// Record the given identity as the current session
    pub fn write_session(&self, identity: &Identity) -> Result<()> {
        fs::write(self.session_path(), identity.as_str())?;
        Ok(())
    }

    /// End the current session, if any
    pub fn clear_session(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
