//! JSON persistence format for team trees.
//!
//! ```json
//! { "name": "Bajor", "members": ["Kira Nerys", "Odo"] }
//! { "name": "Deep Space 9", "subteams": [ { "name": "Bajor", "members": [] } ] }
//! ```
//!
//! Exactly one of `members`/`subteams` is present on every node. Unknown keys
//! are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Team, TeamBody};
use crate::domain::error::DomainError;

/// Wire shape of a team node before the members-XOR-subteams check.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    members: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subteams: Option<Vec<RawTeam>>,
}

impl TryFrom<RawTeam> for Team {
    type Error = DomainError;

    fn try_from(raw: RawTeam) -> Result<Self, Self::Error> {
        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(DomainError::format("team name is empty")),
            None => return Err(DomainError::format("team is missing \"name\"")),
        };

        let body = match (raw.members, raw.subteams) {
            (Some(members), None) => TeamBody::Members(members),
            (None, Some(subteams)) => TeamBody::Subteams(
                subteams
                    .into_iter()
                    .map(Team::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            (Some(_), Some(_)) => {
                return Err(DomainError::format(format!(
                    "team {name:?} has both \"members\" and \"subteams\""
                )))
            }
            (None, None) => {
                return Err(DomainError::format(format!(
                    "team {name:?} has neither \"members\" nor \"subteams\""
                )))
            }
        };

        Ok(Team { name, body })
    }
}

impl From<&Team> for RawTeam {
    fn from(team: &Team) -> Self {
        let mut raw = RawTeam {
            name: Some(team.name.clone()),
            ..Default::default()
        };
        match &team.body {
            TeamBody::Members(members) => raw.members = Some(members.clone()),
            TeamBody::Subteams(subteams) => {
                raw.subteams = Some(subteams.iter().map(RawTeam::from).collect())
            }
        }
        raw
    }
}

/// Parse a team tree from JSON text.
pub fn parse(text: &str) -> Result<Team, DomainError> {
    let raw: RawTeam =
        serde_json::from_str(text).map_err(|e| DomainError::format(e.to_string()))?;
    Team::try_from(raw)
}

/// Serialize a team tree to pretty-printed JSON with a trailing newline.
pub fn serialize(team: &Team) -> String {
    let mut text = serde_json::to_string_pretty(&RawTeam::from(team))
        .expect("string-only team tree always serializes");
    text.push('\n');
    text
}
