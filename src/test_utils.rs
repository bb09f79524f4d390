//! Test utilities for helpdesk
//!
//! Common fixtures shared by unit tests across the crate: a canonical role
//! directory, pre-resolved principals for each role, and quick ticket
//! construction helpers.

#![cfg(test)]

use crate::core::{
    Identity, Principal, Priority, Role, RoleDirectory, Status, Ticket, TicketBuilder,
    TicketDraft,
};
use crate::store::TicketStore;

pub const AGENT_EMAIL: &str = "agent@support.com";
pub const CUSTOMER_EMAIL: &str = "customer@support.com";
pub const OTHER_CUSTOMER_EMAIL: &str = "carol@support.com";
pub const UNLISTED_EMAIL: &str = "stranger@example.com";

/// The role directory used throughout the test suite: one agent and two
/// customers
pub fn directory() -> RoleDirectory {
    RoleDirectory::from_entries([
        (Identity::from(AGENT_EMAIL), Role::Agent),
        (Identity::from(CUSTOMER_EMAIL), Role::Customer),
        (Identity::from(OTHER_CUSTOMER_EMAIL), Role::Customer),
    ])
}

/// Principal resolved for the test agent
pub fn agent() -> Principal {
    Principal::resolve(&directory(), Some(Identity::from(AGENT_EMAIL)))
}

/// Principal resolved for the primary test customer
pub fn customer() -> Principal {
    Principal::resolve(&directory(), Some(Identity::from(CUSTOMER_EMAIL)))
}

/// Principal resolved for a second, unrelated customer
pub fn other_customer() -> Principal {
    Principal::resolve(&directory(), Some(Identity::from(OTHER_CUSTOMER_EMAIL)))
}

/// An authenticated identity the directory does not know
pub fn unlisted_user() -> Principal {
    Principal::resolve(&directory(), Some(Identity::from(UNLISTED_EMAIL)))
}

/// The unauthenticated caller
pub fn anonymous() -> Principal {
    Principal::anonymous()
}

/// A valid draft with the given title
pub fn draft(title: &str) -> TicketDraft {
    TicketDraft::new(title, format!("Description for {title}"))
}

/// Build a ticket directly, bypassing the engine
pub fn create_test_ticket(title: &str, priority: Priority, status: Status) -> Ticket {
    TicketBuilder::new(CUSTOMER_EMAIL)
        .title(title)
        .description(format!("Description for {title}"))
        .priority(priority)
        .status(status)
        .build()
}

/// A store seeded through the engine with one ticket per sample title
pub fn store_with_tickets(titles: &[&str]) -> TicketStore {
    let store = TicketStore::new();
    for title in titles {
        store
            .create(&customer(), draft(title))
            .expect("failed to seed test store");
    }
    store
}
