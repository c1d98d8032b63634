//! standup: order a team tree for a standup meeting.
//!
//! A team is either a group of people or a group of subteams. Teams are stored
//! as JSON, built interactively, and flattened into a speaking order that is
//! optionally shuffled per team (`grouped`) or as a whole (`ungrouped`).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
