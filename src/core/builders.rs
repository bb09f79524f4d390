use super::{Identity, Priority, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// The creator is required up front because every ticket must be owned by
/// an identity. Everything else falls back to the values a freshly created
/// ticket would have. Intended for tests and storage tooling; the engine
/// mints tickets itself.
pub struct TicketBuilder {
    created_by: Identity,
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    assigned_to: Option<Identity>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder owned by the given identity
    #[must_use]
    pub fn new(created_by: impl Into<Identity>) -> Self {
        Self {
            created_by: created_by.into(),
            id: None,
            title: None,
            description: None,
            priority: None,
            status: None,
            assigned_to: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn assigned_to(mut self, assignee: impl Into<Identity>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `updated_at` timestamp
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or(Status::Open),
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}
