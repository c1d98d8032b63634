//! Domain layer: team tree, its JSON format, builder and ordering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod format;
pub mod order;

pub use builder::{NameSource, ScriptedNames, TeamBuilder};
pub use entities::*;
pub use error::DomainError;
pub use order::{flatten, order, RngShuffler, Shuffler};
