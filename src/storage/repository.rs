use crate::core::Ticket;
use crate::error::Result;

/// Repository trait for persisting the ticket pool
///
/// The engine never touches this boundary itself: callers hydrate a
/// [`crate::store::TicketStore`] from a repository, run authorized
/// operations in memory, and write the result back on success. Whatever
/// order `save_all` receives is the order `load_all` must reproduce,
/// because insertion order is observable through the visibility filter.
pub trait TicketRepository: Send + Sync {
    /// Load every persisted ticket, in the order it was saved
    fn load_all(&self) -> Result<Vec<Ticket>>;

    /// Replace the persisted pool with the given tickets
    fn save_all(&self, tickets: &[Ticket]) -> Result<()>;
}

impl TicketRepository for super::FileStorage {
    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.load_tickets()
    }

    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        self.save_tickets(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;
    use crate::test_utils::{create_test_ticket, CUSTOMER_EMAIL};
    use crate::core::{Identity, Priority, Status};
    use tempfile::TempDir;

    #[test]
    fn test_repository_roundtrip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let tickets = vec![
            create_test_ticket("First", Priority::High, Status::Open),
            create_test_ticket("Second", Priority::Low, Status::Closed),
            create_test_ticket("Third", Priority::Medium, Status::InProgress),
        ];
        storage.save_all(&tickets).expect("save failed");

        let loaded = storage.load_all().expect("load failed");
        assert_eq!(loaded, tickets);
        assert_eq!(loaded[0].created_by, Identity::from(CUSTOMER_EMAIL));
    }

    #[test]
    fn test_repository_empty_when_nothing_saved() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        assert!(storage.load_all().unwrap().is_empty());
    }
}
