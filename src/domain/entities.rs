//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use termtree::Tree;

use crate::domain::error::DomainError;

/// An organizational unit: either a group of people or a group of subteams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Display label, not required to be unique
    pub name: String,
    pub body: TeamBody,
}

/// Contents of a team. A team never holds members and subteams at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamBody {
    /// Member names in stored order
    Members(Vec<String>),
    /// Subteams in stored order
    Subteams(Vec<Team>),
}

impl Team {
    /// Create a team holding direct members.
    pub fn members<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            body: TeamBody::Members(members.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a team holding subteams.
    pub fn subteams(name: impl Into<String>, subteams: impl IntoIterator<Item = Team>) -> Self {
        Self {
            name: name.into(),
            body: TeamBody::Subteams(subteams.into_iter().collect()),
        }
    }

    /// Total number of members across the whole tree.
    pub fn member_count(&self) -> usize {
        match &self.body {
            TeamBody::Members(members) => members.len(),
            TeamBody::Subteams(subteams) => subteams.iter().map(Team::member_count).sum(),
        }
    }

    /// Teams holding members, depth-first and left-to-right.
    pub fn leaf_teams(&self) -> Vec<&Team> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Team>) {
        match &self.body {
            TeamBody::Members(_) => leaves.push(self),
            TeamBody::Subteams(subteams) => {
                for team in subteams {
                    team.collect_leaves(leaves);
                }
            }
        }
    }

    /// Render the hierarchy for terminal display; members become leaves.
    pub fn to_tree_display(&self) -> Tree<String> {
        let leaves: Vec<Tree<String>> = match &self.body {
            TeamBody::Members(members) => members.iter().map(|m| Tree::new(m.clone())).collect(),
            TeamBody::Subteams(subteams) => subteams.iter().map(Team::to_tree_display).collect(),
        };
        Tree::new(self.name.clone()).with_leaves(leaves)
    }
}

/// How member names are permuted for a standup.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Stored order, depth-first
    #[default]
    None,
    /// Shuffle within each team, keep team order
    Grouped,
    /// Shuffle everyone together
    Ungrouped,
}

impl ShuffleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShuffleMode::None => "none",
            ShuffleMode::Grouped => "grouped",
            ShuffleMode::Ungrouped => "ungrouped",
        }
    }
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShuffleMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ShuffleMode::None),
            "grouped" => Ok(ShuffleMode::Grouped),
            "ungrouped" => Ok(ShuffleMode::Ungrouped),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~` for the home directory.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
