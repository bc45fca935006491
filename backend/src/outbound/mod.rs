//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and storage representations and
//! carry no business logic. Profiles currently live in process memory only:
//!
//! - **memory**: lock-guarded map implementing `UserProfileRepository`

pub mod memory;
