//! Command handlers
//!
//! Each handler resolves the workspace and session, invokes the engine,
//! persists on success, and renders the result. Authorization decisions
//! stay in the engine.

pub mod assign;
pub mod common;
pub mod create;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod session;
pub mod stats;

pub use assign::handle_assign_command;
pub use common::HandlerContext;
pub use create::{NewParams, handle_new_command};
pub use delete::handle_delete_command;
pub use edit::{EditParams, handle_edit_command};
pub use init::handle_init;
pub use list::handle_list_command;
pub use session::{handle_login, handle_logout, handle_whoami};
pub use stats::handle_stats_command;
