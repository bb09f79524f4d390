//! Identities, roles, and the role directory
//!
//! An [`Identity`] is the authenticated principal's email address, the unit
//! of ownership and attribution. A [`Role`] is derived from an identity on
//! every access through the [`RoleDirectory`] lookup table; it is never
//! stored on a ticket or persisted on its own.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An email address identifying a principal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// The email address as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identity {
    fn from(email: String) -> Self {
        Self(email)
    }
}

impl From<&str> for Identity {
    fn from(email: &str) -> Self {
        Self(email.to_string())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission class of a principal
///
/// `None` covers both unauthenticated callers and identities the directory
/// does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Customer,
    None,
}

impl Role {
    #[must_use]
    pub const fn is_agent(self) -> bool {
        matches!(self, Self::Agent)
    }

    #[must_use]
    pub const fn is_customer(self) -> bool {
        matches!(self, Self::Customer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Agent => "agent",
            Self::Customer => "customer",
            Self::None => "none",
        };
        write!(f, "{s}")
    }
}

/// Lookup table mapping identities to roles
///
/// Resolution is a total function: identities without an entry resolve to
/// [`Role::None`]. The table is built from workspace configuration, so
/// authorization logic never hard-codes email addresses.
#[derive(Debug, Clone, Default)]
pub struct RoleDirectory {
    entries: HashMap<Identity, Role>,
}

impl RoleDirectory {
    /// Build a directory from (identity, role) pairs
    pub fn from_entries(entries: impl IntoIterator<Item = (Identity, Role)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Register an identity with a role
    pub fn insert(&mut self, identity: Identity, role: Role) {
        self.entries.insert(identity, role);
    }

    /// Resolve an identity to its role. Never fails; unknown identities
    /// resolve to [`Role::None`].
    #[must_use]
    pub fn resolve(&self, identity: &Identity) -> Role {
        self.entries.get(identity).copied().unwrap_or(Role::None)
    }
}

/// A resolved caller: an optional identity plus its derived role
///
/// Construction goes through [`Principal::resolve`] or
/// [`Principal::anonymous`], which keeps the invariant that an absent
/// identity always carries [`Role::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    identity: Option<Identity>,
    role: Role,
}

impl Principal {
    /// The unauthenticated caller
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            identity: None,
            role: Role::None,
        }
    }

    /// Resolve an optional identity against the directory
    #[must_use]
    pub fn resolve(directory: &RoleDirectory, identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => {
                let role = directory.resolve(&identity);
                Self {
                    identity: Some(identity),
                    role,
                }
            },
            None => Self::anonymous(),
        }
    }

    /// The caller's identity, if authenticated
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The caller's derived role
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Whether an identity is present
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
