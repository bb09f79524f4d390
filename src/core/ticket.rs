//! The ticket entity and its value types
//!
//! A [`Ticket`] is the unit of work tracked by the system. Its identifier,
//! creator, and creation time are fixed at creation; everything else changes
//! only through the authorized paths in [`crate::store::TicketStore`].

use crate::core::identity::Identity;
use crate::error::HelpdeskError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ticket ID from an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The first eight characters of the ID, for compact display
    #[must_use]
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|_| {
            HelpdeskError::InvalidInput(format!("'{s}' is not a valid ticket ID"))
        })
    }
}

/// Lifecycle state of a ticket
///
/// Every ticket starts as `Open`. Only agents move tickets between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Open,
    InProgress,
    Closed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "'{s}' is not a valid status. Use: open, in-progress, closed"
            ))),
        }
    }
}

/// Urgency of a ticket, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "'{s}' is not a valid priority. Use: low, medium, high"
            ))),
        }
    }
}

/// A support ticket
///
/// `id`, `created_by`, and `created_at` never change after creation.
/// `updated_at` is bumped on every successful mutation, so
/// `updated_at >= created_at` holds for the ticket's entire lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, generated at creation
    pub id: TicketId,
    /// Short summary of the issue
    pub title: String,
    /// Full description of the issue
    pub description: String,
    /// Urgency
    pub priority: Priority,
    /// Lifecycle state
    pub status: Status,
    /// Identity of the creator; the unit of ownership
    pub created_by: Identity,
    /// Agent the ticket is assigned to, if any
    pub assigned_to: Option<Identity>,
    /// When the ticket was created
    pub created_at: DateTime<Utc>,
    /// When the ticket was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Whether the given identity created this ticket
    #[must_use]
    pub fn is_created_by(&self, identity: &Identity) -> bool {
        self.created_by == *identity
    }
}

/// Payload for creating a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl TicketDraft {
    /// Create a draft with the given title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
        }
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Partial update to a ticket
///
/// Absent fields are left untouched. `assigned_to` is doubly optional:
/// `Some(None)` clears the assignment, `None` leaves it as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub assigned_to: Option<Option<Identity>>,
}

impl TicketPatch {
    /// Whether the patch carries no fields at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
    }

    /// Restrict the patch to the fields a customer may change:
    /// title, description, and priority. Status and assignment are
    /// dropped silently, not rejected.
    #[must_use]
    pub fn narrowed(self) -> Self {
        Self {
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: None,
            assigned_to: None,
        }
    }

    /// Merge the present fields into the ticket. Timestamps are the
    /// caller's responsibility.
    pub fn apply_to(self, ticket: &mut Ticket) {
        if let Some(title) = self.title {
            ticket.title = title;
        }
        if let Some(description) = self.description {
            ticket.description = description;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(assigned_to) = self.assigned_to {
            ticket.assigned_to = assigned_to;
        }
    }
}
