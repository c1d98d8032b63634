//! Interactive construction of team trees from a sequence of prompts.

use tracing::debug;

use crate::domain::entities::{Team, TeamBody};
use crate::domain::error::DomainError;

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, DomainError>;

/// Source of single lines of free-text input.
///
/// Implementations return [`DomainError::InputExhausted`] once no more lines
/// can be read.
pub trait NameSource {
    /// Show `prompt` and return the answer without its line terminator.
    fn request_line(&mut self, prompt: &str) -> BuildResult<String>;

    /// Report a rejected answer before the question is asked again.
    fn notice(&mut self, _message: &str) {}
}

/// Answer to "does this team have direct members or subteams?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Composition {
    Members,
    Subteams,
}

/// Builds a [`Team`] by asking a [`NameSource`] for every name.
///
/// Empty teams are never produced: a team that ends up with no members or no
/// subteams has its list asked for again.
pub struct TeamBuilder<'a, S: NameSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: NameSource + ?Sized> TeamBuilder<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    /// Ask for the root team's name, then build it.
    pub fn build(&mut self) -> BuildResult<Team> {
        let name = loop {
            let name = self.ask("Team name:")?;
            if !name.is_empty() {
                break name;
            }
            self.source.notice("A team needs a name.");
        };
        self.build_named(name)
    }

    /// Build a team whose name is already known.
    pub fn build_named(&mut self, name: String) -> BuildResult<Team> {
        debug!("build_named: {}", name);
        let body = match self.ask_composition(&name)? {
            Composition::Members => TeamBody::Members(self.ask_members(&name)?),
            Composition::Subteams => TeamBody::Subteams(self.ask_subteams(&name)?),
        };
        Ok(Team { name, body })
    }

    fn ask(&mut self, prompt: &str) -> BuildResult<String> {
        Ok(self.source.request_line(prompt)?.trim().to_string())
    }

    fn ask_composition(&mut self, team: &str) -> BuildResult<Composition> {
        let prompt = format!("Does {team} have (m)embers or (s)ubteams? [m]");
        loop {
            match self.ask(&prompt)?.to_ascii_lowercase().as_str() {
                "" | "m" | "members" => return Ok(Composition::Members),
                "s" | "subteams" => return Ok(Composition::Subteams),
                other => self
                    .source
                    .notice(&format!("Please answer 'm' or 's', not {other:?}.")),
            }
        }
    }

    fn ask_members(&mut self, team: &str) -> BuildResult<Vec<String>> {
        loop {
            let mut members = Vec::new();
            loop {
                let name = self.ask(&format!("Member of {team} (empty line to finish):"))?;
                if name.is_empty() {
                    break;
                }
                members.push(name);
            }
            if !members.is_empty() {
                return Ok(members);
            }
            self.source
                .notice(&format!("{team} needs at least one member."));
        }
    }

    fn ask_subteams(&mut self, team: &str) -> BuildResult<Vec<Team>> {
        loop {
            let mut subteams = Vec::new();
            loop {
                let name = self.ask(&format!("Subteam of {team} (empty line to finish):"))?;
                if name.is_empty() {
                    break;
                }
                subteams.push(self.build_named(name)?);
            }
            if !subteams.is_empty() {
                return Ok(subteams);
            }
            self.source
                .notice(&format!("{team} needs at least one subteam."));
        }
    }
}

/// Scripted answers, for tests and non-interactive input.
#[derive(Debug, Default)]
pub struct ScriptedNames {
    answers: std::collections::VecDeque<String>,
    /// Prompts seen so far, in order
    pub prompts: Vec<String>,
    /// Notices emitted so far, in order
    pub notices: Vec<String>,
}

impl ScriptedNames {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl NameSource for ScriptedNames {
    fn request_line(&mut self, prompt: &str) -> BuildResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| DomainError::InputExhausted {
                prompt: prompt.to_string(),
            })
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
