//! Mining of state-change events from pattern matches.
//!
//! Three pattern variants share one implementation. They differ only in the
//! labels the pattern binds, which labels count as mediators, and which
//! controls contribute to the sign of the change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::{debug, info};

use crate::blacklist::Blacklist;
use crate::delta::{Delta, DeltaTable};
use crate::error::Result;
use crate::fields::{INACTIVE_LABEL, grounding_id, modification_names, modification_string};
use crate::model::{Element, Interaction, PhysicalEntity};
use crate::pattern::{Match, Pattern, PatternSearcher, SearchResult};

/// Graph-role labels a miner reads from each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleLabels {
    pub source_er: &'static str,
    pub source_simple_pe: &'static str,
    pub source_complex_pe: &'static str,
    pub target_er: &'static str,
    pub input_simple_pe: &'static str,
    pub input_complex_pe: &'static str,
    pub output_simple_pe: &'static str,
    pub output_complex_pe: &'static str,
    pub mediators: &'static [&'static str],
    pub controls: &'static [&'static str],
}

const CONTROLS_STATE_CHANGE: RoleLabels = RoleLabels {
    source_er: "controller ER",
    source_simple_pe: "controller simple PE",
    source_complex_pe: "controller PE",
    target_er: "changed ER",
    input_simple_pe: "input simple PE",
    input_complex_pe: "input PE",
    output_simple_pe: "output simple PE",
    output_complex_pe: "output PE",
    mediators: &["Control", "Conversion"],
    controls: &["Control"],
};

const BUT_IS_PARTICIPANT: RoleLabels = RoleLabels {
    mediators: &["Conversion"],
    controls: &[],
    ..CONTROLS_STATE_CHANGE
};

const THROUGH_CONTROLLER_SMALL_MOLECULE: RoleLabels = RoleLabels {
    source_er: "upper controller ER",
    source_simple_pe: "upper controller simple PE",
    source_complex_pe: "upper controller PE",
    mediators: &["upper Control", "upper Conversion", "Control", "Conversion"],
    controls: &["upper Control", "Control"],
    ..CONTROLS_STATE_CHANGE
};

/// The state-change pattern a miner searches for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MinerKind {
    /// A controller directly controls the conversion changing the target.
    ControlsStateChange,
    /// The controller is itself a participant of the conversion.
    ControlsStateChangeButIsParticipant,
    /// The controller acts through a small molecule it produces.
    ControlsStateChangeThroughControllerSmallMolecule,
}

impl MinerKind {
    pub const ALL: [Self; 3] = [
        Self::ControlsStateChange,
        Self::ControlsStateChangeButIsParticipant,
        Self::ControlsStateChangeThroughControllerSmallMolecule,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ControlsStateChange => "controls_state_change",
            Self::ControlsStateChangeButIsParticipant => "controls_state_change_but_is_participant",
            Self::ControlsStateChangeThroughControllerSmallMolecule => {
                "controls_state_change_through_controller_small_molecule"
            }
        }
    }

    #[must_use]
    pub const fn labels(&self) -> &'static RoleLabels {
        match self {
            Self::ControlsStateChange => &CONTROLS_STATE_CHANGE,
            Self::ControlsStateChangeButIsParticipant => &BUT_IS_PARTICIPANT,
            Self::ControlsStateChangeThroughControllerSmallMolecule => {
                &THROUGH_CONTROLLER_SMALL_MOLECULE
            }
        }
    }

    /// Only the small-molecule pattern filters ubiquitous molecules.
    #[must_use]
    pub const fn uses_blacklist(&self) -> bool {
        matches!(self, Self::ControlsStateChangeThroughControllerSmallMolecule)
    }
}

impl FromStr for MinerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| format!("unknown miner: {s}"))
    }
}

impl std::fmt::Display for MinerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counters for one mining run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MiningStats {
    /// Matches inspected.
    pub matches: usize,
    /// Matches dropped for lack of source or target identifiers.
    pub skipped: usize,
    /// Matches that changed the target.
    pub changes: usize,
}

impl std::ops::AddAssign for MiningStats {
    fn add_assign(&mut self, other: Self) {
        self.matches += other.matches;
        self.skipped += other.skipped;
        self.changes += other.changes;
    }
}

/// Runs the configured miners and aggregates their findings.
#[derive(Debug, Clone)]
pub struct ModificationCardMiner {
    miners: Vec<MinerKind>,
    blacklist: Option<Blacklist>,
    table: DeltaTable,
}

impl Default for ModificationCardMiner {
    fn default() -> Self {
        Self::new(MinerKind::ALL.to_vec())
    }
}

impl ModificationCardMiner {
    #[must_use]
    pub fn new(miners: Vec<MinerKind>) -> Self {
        Self {
            miners,
            blacklist: None,
            table: DeltaTable::new(),
        }
    }

    #[must_use]
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    #[must_use]
    pub fn miners(&self) -> &[MinerKind] {
        &self.miners
    }

    /// Search with every miner and fold the matches into the table.
    ///
    /// # Errors
    /// Propagates the first search failure.
    pub fn mine_and_collect<S: PatternSearcher + ?Sized>(
        &mut self,
        searcher: &S,
    ) -> Result<MiningStats> {
        let mut total = MiningStats::default();

        for kind in self.miners.clone() {
            let pattern = Pattern {
                kind,
                blacklist: self.blacklist.as_ref().filter(|_| kind.uses_blacklist()),
            };
            let result = searcher.search(&pattern)?;
            let stats = self.collect(kind, &result);
            info!(
                "Miner {kind}: {} matches, {} skipped, {} with changes",
                stats.matches, stats.skipped, stats.changes
            );
            total += stats;
        }

        info!(
            "Mining finished: {} source-target pairs recorded",
            self.table.len()
        );
        Ok(total)
    }

    /// Fold one search result into the table.
    pub fn collect(&mut self, kind: MinerKind, result: &SearchResult) -> MiningStats {
        let labels = kind.labels();
        let mut stats = MiningStats::default();

        for m in result.values().flatten() {
            stats.matches += 1;
            match self.collect_match(labels, m) {
                None => stats.skipped += 1,
                Some(true) => stats.changes += 1,
                Some(false) => {}
            }
        }
        stats
    }

    /// `None` when the match lacks identifiers, else whether it changed
    /// the target.
    fn collect_match(&mut self, labels: &RoleLabels, m: &Match) -> Option<bool> {
        let sources = identifiers(m, labels.source_er);
        let targets = identifiers(m, labels.target_er);
        if sources.is_empty() || targets.is_empty() {
            debug!("Skipping match without source or target identifiers");
            return None;
        }

        let mut modifications = Delta::between(
            &modifications(m, labels.input_simple_pe, labels.input_complex_pe),
            &modifications(m, labels.output_simple_pe, labels.output_complex_pe),
        );
        let mut locations = Delta::between(
            &cellular_locations(m, labels.input_simple_pe, labels.input_complex_pe),
            &cellular_locations(m, labels.output_simple_pe, labels.output_complex_pe),
        );

        if modifications.is_empty() && locations.is_empty() {
            return Some(false);
        }

        let mut sign: i32 = m.interactions(labels.controls).map(Interaction::sign).product();
        if labeled_inactive(m, labels.source_simple_pe, labels.source_complex_pe) {
            sign = -sign;
        }
        if sign < 0 {
            modifications = modifications.inverted();
            locations = locations.inverted();
        }

        let mediators: BTreeSet<String> = m
            .elements(labels.mediators)
            .map(|e| e.id().to_string())
            .collect();
        let source_modifications =
            self::modifications(m, labels.source_simple_pe, labels.source_complex_pe);
        let source_locations =
            cellular_locations(m, labels.source_simple_pe, labels.source_complex_pe);

        for source in &sources {
            for target in &targets {
                let record = self.table.record_mut(source, target);
                record
                    .gained_modifications
                    .extend(modifications.gained.iter().cloned());
                record
                    .lost_modifications
                    .extend(modifications.lost.iter().cloned());
                record
                    .gained_locations
                    .extend(locations.gained.iter().cloned());
                record.lost_locations.extend(locations.lost.iter().cloned());
                record.mediators.extend(mediators.iter().cloned());
                record
                    .source_modifications
                    .extend(source_modifications.iter().cloned());
                record
                    .source_locations
                    .extend(source_locations.iter().cloned());
            }
        }

        Some(true)
    }

    #[must_use]
    pub const fn table(&self) -> &DeltaTable {
        &self.table
    }

    #[must_use]
    pub fn into_table(self) -> DeltaTable {
        self.table
    }
}

/// Grounding identifiers of the element bound to `label`.
fn identifiers(m: &Match, label: &str) -> BTreeSet<String> {
    let id = match m.get(label) {
        Some(Element::Reference(er)) => grounding_id(er),
        Some(Element::Entity(pe)) => grounding_id(pe),
        Some(Element::Interaction(_)) | None => None,
    };
    id.into_iter().collect()
}

/// The distinct entities bound to the simple and complex labels.
fn entities<'a>(m: &'a Match, simple: &str, complex: &str) -> Vec<&'a PhysicalEntity> {
    let mut found: Vec<&PhysicalEntity> = Vec::with_capacity(2);
    for pe in [m.entity(simple), m.entity(complex)].into_iter().flatten() {
        if !found.iter().any(|f| f.id == pe.id) {
            found.push(pe);
        }
    }
    found
}

fn modifications(m: &Match, simple: &str, complex: &str) -> BTreeSet<String> {
    entities(m, simple, complex)
        .into_iter()
        .flat_map(PhysicalEntity::modification_features)
        .filter_map(modification_string)
        .collect()
}

fn cellular_locations(m: &Match, simple: &str, complex: &str) -> BTreeSet<String> {
    entities(m, simple, complex)
        .into_iter()
        .filter_map(|pe| pe.cellular_location.clone())
        .collect()
}

fn labeled_inactive(m: &Match, simple: &str, complex: &str) -> bool {
    entities(m, simple, complex)
        .into_iter()
        .any(|pe| modification_names(pe).contains(INACTIVE_LABEL))
}
