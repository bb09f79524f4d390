//! Core domain model: tickets, identities, and roles

pub mod builders;
pub mod identity;
pub mod ticket;

pub use builders::TicketBuilder;
pub use identity::{Identity, Principal, Role, RoleDirectory};
pub use ticket::{Priority, Status, Ticket, TicketDraft, TicketId, TicketPatch};
