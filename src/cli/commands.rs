//! Command dispatch: turns parsed arguments into service calls.

use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::format::serialize;
use crate::domain::{NameSource, RngShuffler, ShuffleMode};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Options resolved from flags and settings; flags win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub mode: ShuffleMode,
    pub numbered: bool,
    pub team_file: Option<PathBuf>,
}

impl Resolved {
    pub fn new(cli: &Cli, container: &ServiceContainer) -> Self {
        let settings = &container.settings;
        Self {
            mode: cli.shuffle.unwrap_or(settings.shuffle),
            numbered: cli.numbered || settings.numbered,
            team_file: cli.filename.clone().or_else(|| settings.team_file.clone()),
        }
    }
}

/// Run the command described by `cli`.
///
/// `names` answers the prompts of `--create`; data is written to `out`.
pub fn execute_command(
    cli: &Cli,
    container: &ServiceContainer,
    names: &mut dyn NameSource,
    out: &mut dyn Write,
) -> CliResult<()> {
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, out);
        return Ok(());
    }

    if cli.create {
        _create(cli, container, names, out)
    } else {
        _show(cli, container, out)
    }
}

#[instrument(skip_all)]
fn _create(
    cli: &Cli,
    container: &ServiceContainer,
    names: &mut dyn NameSource,
    out: &mut dyn Write,
) -> CliResult<()> {
    // Checked before prompting so no answers are thrown away.
    if cli.tree && cli.filename.is_none() {
        return Err(CliError::Usage(
            "--create --tree needs --filename: without it the new team is printed as JSON"
                .to_string(),
        ));
    }
    let team = container.standup.create_team(names)?;

    // Only an explicit --filename is written to; without it the JSON is the output.
    let Some(path) = &cli.filename else {
        return emit(out, serialize(&team).trim_end());
    };
    container.standup.save_team(path, &team)?;
    output::action("Saved", &path.display());

    if cli.tree {
        return emit(out, &team.to_tree_display());
    }
    let resolved = Resolved::new(cli, container);
    let mut shuffler = shuffler_for(cli.seed);
    let standup = container
        .standup
        .order_team(team, resolved.mode, &mut shuffler);
    emit(out, &output::format_order(&standup.order, resolved.numbered))
}

#[instrument(skip_all)]
fn _show(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    let resolved = Resolved::new(cli, container);
    debug!("resolved: {:?}", resolved);
    let path = resolved.team_file.as_deref().ok_or_else(|| {
        CliError::Usage(
            "no team file: pass --filename, set team_file in the config, or use --create"
                .to_string(),
        )
    })?;

    if cli.tree {
        let team = container.standup.load_team(path)?;
        return emit(out, &team.to_tree_display());
    }

    let mut shuffler = shuffler_for(cli.seed);
    let standup = container
        .standup
        .standup(path, resolved.mode, &mut shuffler)?;
    emit(out, &output::format_order(&standup.order, resolved.numbered))
}

fn shuffler_for(seed: Option<u64>) -> RngShuffler<rand::rngs::StdRng> {
    match seed {
        Some(seed) => RngShuffler::from_seed(seed),
        None => RngShuffler::from_entropy(),
    }
}

fn emit(out: &mut dyn Write, text: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
    let text = text.to_string();
    if text.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", text.trim_end_matches('\n'))
        .map_err(|e| InfraError::io("write output", e).into())
}
