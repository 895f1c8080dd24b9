//! Card comparison.
//!
//! Model cards are indexed by grounding identifier, each inference card is
//! paired with structurally matching model cards, and the two modification
//! lists are classified into a [`MatchType`].

mod comparator;
mod index;
mod matcher;
mod modifications;
mod summary;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use comparator::{CardComparator, ModelIndices};
pub use index::IdentifierIndex;
pub use matcher::{MatchFinder, SameParticipantB, StrictMatch};
pub use modifications::{
    ModificationComparison, POSITION_TOLERANCE, compare_modifications, is_equal_position,
    is_strong_equal, is_weak_different, is_weak_equal,
};
pub use summary::ComparisonSummary;

/// Relationship between an inference modification set and a model one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchType {
    /// Same size and every inference modification strongly matches.
    Exact,
    /// Every inference modification is weakly compatible with the model.
    Subset,
    /// Every model modification is weakly compatible with the inference.
    Superset,
    /// Some overlap, neither side contained in the other.
    Intersect,
    /// No weak overlap at all.
    Distinct,
}

impl MatchType {
    /// All variants in classification priority order.
    pub const ALL: [Self; 5] = [
        Self::Exact,
        Self::Subset,
        Self::Superset,
        Self::Intersect,
        Self::Distinct,
    ];

    /// Returns the label used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::Subset => "SUBSET",
            Self::Superset => "SUPERSET",
            Self::Intersect => "INTERSECT",
            Self::Distinct => "DISTINCT",
        }
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown match type: {s}"))
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
