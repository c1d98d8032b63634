//! Standup ordering of a team tree.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::entities::{ShuffleMode, Team, TeamBody};

/// Source of unbiased random permutations.
pub trait Shuffler {
    /// Permute `names` in place; every ordering must be equally likely.
    fn shuffle(&mut self, names: &mut [String]);
}

/// Fisher-Yates shuffling backed by any [`Rng`].
#[derive(Debug)]
pub struct RngShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<StdRng> {
    /// Reproducible shuffling: the same seed yields the same orderings.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle(&mut self, names: &mut [String]) {
        names.shuffle(&mut self.rng);
    }
}

/// Produce the standup order for `team`. The tree is only read.
///
/// - `None`: depth-first, left-to-right member names as stored
/// - `Grouped`: each member team shuffled on its own, team order kept
/// - `Ungrouped`: the flattened list shuffled as a whole
pub fn order(team: &Team, mode: ShuffleMode, shuffler: &mut dyn Shuffler) -> Vec<String> {
    match mode {
        ShuffleMode::None => flatten(team),
        ShuffleMode::Grouped => {
            let mut names = Vec::with_capacity(team.member_count());
            for leaf in team.leaf_teams() {
                if let TeamBody::Members(members) = &leaf.body {
                    let mut block = members.clone();
                    shuffler.shuffle(&mut block);
                    names.extend(block);
                }
            }
            names
        }
        ShuffleMode::Ungrouped => {
            let mut names = flatten(team);
            shuffler.shuffle(&mut names);
            names
        }
    }
}

/// All member names, depth-first and left-to-right.
pub fn flatten(team: &Team) -> Vec<String> {
    let mut names = Vec::with_capacity(team.member_count());
    collect(team, &mut names);
    names
}

fn collect(team: &Team, names: &mut Vec<String>) {
    match &team.body {
        TeamBody::Members(members) => names.extend(members.iter().cloned()),
        TeamBody::Subteams(subteams) => {
            for subteam in subteams {
                collect(subteam, names);
            }
        }
    }
}
