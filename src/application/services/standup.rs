//! Standup service
//!
//! Loads and saves team files, runs the interactive builder and orders teams.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, PathContext};
use crate::domain::format::{parse, serialize};
use crate::domain::{order, NameSource, ShuffleMode, Shuffler, Team, TeamBuilder};
use crate::infrastructure::traits::FileSystem;

/// Output from ordering a team.
#[derive(Debug, Clone)]
pub struct StandupOutput {
    /// The team the order was derived from
    pub team: Team,
    /// Member names in speaking order
    pub order: Vec<String>,
}

/// Service for persisting teams and producing standup orders.
pub struct StandupService {
    fs: Arc<dyn FileSystem>,
}

impl StandupService {
    /// Create a new standup service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse a team file.
    #[instrument(skip(self))]
    pub fn load_team(&self, path: &Path) -> ApplicationResult<Team> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::TeamFileNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .path_context("read team file", path)?;
        let team = parse(&content)?;
        debug!(
            "load_team: {} with {} members",
            team.name,
            team.member_count()
        );
        Ok(team)
    }

    /// Serialize a team and write it to `path`, creating parent directories.
    #[instrument(skip(self, team))]
    pub fn save_team(&self, path: &Path, team: &Team) -> ApplicationResult<()> {
        let write = |path: &Path| -> std::io::Result<()> {
            self.fs.ensure_parent(path)?;
            self.fs.write(path, &serialize(team))
        };
        write(path).map_err(|source| ApplicationError::CannotWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved team {} to {}", team.name, path.display());
        Ok(())
    }

    /// Build a team interactively from `source`.
    pub fn create_team(&self, source: &mut dyn NameSource) -> ApplicationResult<Team> {
        let team = TeamBuilder::new(source).build()?;
        info!(
            "built team {} with {} members",
            team.name,
            team.member_count()
        );
        Ok(team)
    }

    /// Order an in-memory team.
    pub fn order_team(
        &self,
        team: Team,
        mode: ShuffleMode,
        shuffler: &mut dyn Shuffler,
    ) -> StandupOutput {
        debug!("order_team: {} mode={}", team.name, mode);
        let order = order(&team, mode, shuffler);
        StandupOutput { team, order }
    }

    /// Load a team file and order it.
    pub fn standup(
        &self,
        path: &Path,
        mode: ShuffleMode,
        shuffler: &mut dyn Shuffler,
    ) -> ApplicationResult<StandupOutput> {
        let team = self.load_team(path)?;
        Ok(self.order_team(team, mode, shuffler))
    }
}
