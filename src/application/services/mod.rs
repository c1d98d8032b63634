//! Application services

pub mod standup;

pub use standup::{StandupOutput, StandupService};
