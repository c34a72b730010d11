use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::person::Person;

/// How to pick one person when several match an author name.
///
/// Every policy selects exactly one candidate from a non-empty set;
/// ambiguity is never surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TieBreakPolicy {
    /// Pick uniformly at random.
    ///
    /// A placeholder heuristic, not a correctness guarantee: repeated runs
    /// may attribute the same name to different people unless the resolver
    /// is seeded.
    #[default]
    UniformRandom,

    /// Pick the candidate with the smallest directory id.
    LowestId,
}

impl TieBreakPolicy {
    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UniformRandom => "uniform_random",
            Self::LowestId => "lowest_id",
        }
    }
}

/// Apply a tie-break policy to a candidate set.
///
/// Returns `None` only when `candidates` is empty.
pub fn apply_tie_break<'a, R: Rng + ?Sized>(
    policy: TieBreakPolicy,
    candidates: &'a [Person],
    rng: &mut R,
) -> Option<&'a Person> {
    match policy {
        TieBreakPolicy::UniformRandom => candidates.choose(rng),
        TieBreakPolicy::LowestId => candidates.iter().min_by_key(|p| p.id),
    }
}
