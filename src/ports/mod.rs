//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the game core and the outside
//! world. Following hexagonal architecture, these traits are owned by the
//! domain and implemented by adapters.

pub mod oracle;
pub mod repository;

pub use oracle::Oracle;
pub use repository::TreeRepository;
