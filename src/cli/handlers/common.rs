use crate::cli::utils::{self, find_workspace_root};
use crate::config::Config;
use crate::core::{Principal, TicketId};
use crate::error::{HelpdeskError, Result};
use crate::storage::FileStorage;
use crate::store::TicketStore;
use std::path::PathBuf;
use uuid::Uuid;

/// Common context for all handler operations
///
/// Resolves the workspace, loads its configuration, and gives handlers the
/// pieces they all need: storage, the resolved caller, and a hydrated
/// ticket store.
pub struct HandlerContext {
    pub workspace_dir: PathBuf,
    pub config: Config,
    pub storage: FileStorage,
}

impl HandlerContext {
    /// Create a new handler context rooted at the nearest workspace
    pub fn new(workspace: Option<&str>) -> Result<Self> {
        let root = find_workspace_root(workspace)?;
        let workspace_dir = utils::workspace_dir(&root);
        let config = Config::load_or_default(&workspace_dir)?;
        let storage = FileStorage::new(&workspace_dir);

        Ok(Self {
            workspace_dir,
            config,
            storage,
        })
    }

    /// Resolve the current session into a principal
    ///
    /// No session means the anonymous principal; the engine decides what
    /// that caller may do.
    pub fn principal(&self) -> Result<Principal> {
        let identity = self.storage.read_session()?;
        Ok(Principal::resolve(&self.config.role_directory(), identity))
    }

    /// Hydrate a ticket store from persisted state
    pub fn load_store(&self) -> Result<TicketStore> {
        Ok(TicketStore::from_tickets(self.storage.load_tickets()?))
    }

    /// Write the store's current state back to disk
    pub fn persist(&self, store: &TicketStore) -> Result<()> {
        self.storage.save_tickets(&store.snapshot())
    }
}

/// Resolve a user-supplied ticket reference to an ID
///
/// Accepts a full UUID or a unique prefix of one, matched against the
/// tickets the caller can see. Resolving against the visible set keeps
/// reference lookup from revealing tickets the caller has no view of.
pub fn resolve_ticket_ref(
    store: &TicketStore,
    principal: &Principal,
    ticket_ref: &str,
) -> Result<TicketId> {
    let visible = store.visible(principal);

    if let Ok(uuid) = Uuid::parse_str(ticket_ref) {
        let id = TicketId::from_uuid(uuid);
        if visible.iter().any(|t| t.id == id) {
            return Ok(id);
        }
        return Err(HelpdeskError::TicketNotFound {
            id: ticket_ref.to_string(),
        });
    }

    let needle = ticket_ref.to_lowercase();
    let matches: Vec<&TicketId> = visible
        .iter()
        .filter(|t| t.id.to_string().starts_with(&needle))
        .map(|t| &t.id)
        .collect();

    match matches.as_slice() {
        [] => Err(HelpdeskError::TicketNotFound {
            id: ticket_ref.to_string(),
        }),
        [id] => Ok((*id).clone()),
        _ => Err(HelpdeskError::custom(format!(
            "Ticket reference '{ticket_ref}' is ambiguous ({} matches); use more characters",
            matches.len()
        ))),
    }
}
