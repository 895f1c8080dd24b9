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

//! Extraction of controlled state changes from a pathway model.
//!
//! Pattern matches over the model are mined for modifications and cellular
//! locations a controller changes on its target; the aggregated changes are
//! written as a tab-separated report, and entities can be converted into
//! card participants.

pub mod blacklist;
pub mod convert;
pub mod delta;
mod error;
pub mod fields;
pub mod miner;
pub mod model;
pub mod pattern;
pub mod report;

pub use blacklist::Blacklist;
pub use convert::{read_features, to_participant};
pub use delta::{Delta, DeltaRecord, DeltaTable};
pub use error::{ExtractError, Result};
pub use miner::{MinerKind, MiningStats, ModificationCardMiner, RoleLabels};
pub use model::{Element, EntityReference, Interaction, PhysicalEntity};
pub use pattern::{Match, Pattern, PatternSearcher, PrecomputedSearcher, SearchResult};
pub use report::write_report;
