//! Durable storage for the ticket pool and session
//!
//! Persistence is a collaborator of the engine, not part of it: the CLI
//! loads tickets from here into an in-memory [`crate::store::TicketStore`],
//! and only successfully authorized mutations are written back.

mod file;
mod repository;

pub use file::FileStorage;
pub use repository::TicketRepository;
