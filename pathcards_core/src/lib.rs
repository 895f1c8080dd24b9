#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Interaction cards and the comparison of curated cards with inferred ones.

pub mod card;
pub mod compare;
mod error;
pub mod vocabulary;

pub use card::{
    Card, CardMatch, EntityType, ExtractedInformation, Feature, Modification, Participant,
    ParticipantSide, ProteinFamily, SimpleEntity,
};
pub use compare::{CardComparator, ComparisonSummary, MatchFinder, MatchType};
pub use error::{CardError, Result};
pub use vocabulary::map_modification_term;
