//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::domain::ShuffleMode;

/// Order your team for standup: hierarchical teams, grouped or ungrouped shuffling
#[derive(Parser, Debug)]
#[command(name = "standup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build a team interactively instead of reading a file
    #[arg(short, long)]
    pub create: bool,

    /// Team file to read, or to write with --create (default: team_file setting)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub filename: Option<PathBuf>,

    /// How to shuffle the order (default: shuffle setting, else none)
    #[arg(short, long, value_enum)]
    pub shuffle: Option<ShuffleMode>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prefix each name with its position
    #[arg(short, long)]
    pub numbered: bool,

    /// Show the team hierarchy instead of an order
    #[arg(long, conflicts_with_all = ["shuffle", "seed", "numbered"])]
    pub tree: bool,

    /// Verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, exclusive = true)]
    pub completion: Option<clap_complete::Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_shuffle_modes() {
        let cli = Cli::try_parse_from(["standup", "-f", "team.json", "-s", "grouped"]).unwrap();
        assert_eq!(cli.shuffle, Some(ShuffleMode::Grouped));
        assert_eq!(cli.filename, Some(PathBuf::from("team.json")));
        assert!(!cli.create);
    }

    #[test]
    fn rejects_unknown_shuffle_mode() {
        assert!(Cli::try_parse_from(["standup", "-s", "random"]).is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["standup", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
