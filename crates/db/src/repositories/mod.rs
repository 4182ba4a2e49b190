//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod entry_repo;
pub mod reaction_repo;
pub mod session_repo;

pub use entry_repo::EntryRepo;
pub use reaction_repo::ReactionRepo;
pub use session_repo::SessionRepo;
