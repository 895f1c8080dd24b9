//! Interface to the graph pattern search.
//!
//! The search itself happens elsewhere; this crate only consumes its result:
//! for each seed element, the matches found, each binding pattern labels to
//! graph elements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tracing::debug;

use crate::blacklist::Blacklist;
use crate::error::Result;
use crate::miner::MinerKind;
use crate::model::{Element, Interaction, PhysicalEntity};

/// One pattern match: label -> bound element.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Match {
    bindings: BTreeMap<String, Element>,
}

impl Match {
    #[must_use]
    pub fn bind(mut self, label: impl Into<String>, element: Element) -> Self {
        self.bindings.insert(label.into(), element);
        self
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Element> {
        self.bindings.get(label)
    }

    #[must_use]
    pub fn entity(&self, label: &str) -> Option<&PhysicalEntity> {
        self.get(label).and_then(Element::as_entity)
    }

    /// Elements bound to any of `labels`, in label order; unbound labels
    /// are skipped.
    pub fn elements<'a>(&'a self, labels: &'a [&str]) -> impl Iterator<Item = &'a Element> {
        labels.iter().filter_map(|label| self.get(label))
    }

    pub fn interactions<'a>(&'a self, labels: &'a [&str]) -> impl Iterator<Item = &'a Interaction> {
        self.elements(labels).filter_map(Element::as_interaction)
    }

    /// Whether any bound element, or the reference of a bound entity, has
    /// an id in `blacklist`.
    #[must_use]
    pub fn touches(&self, blacklist: &Blacklist) -> bool {
        self.bindings.values().any(|element| {
            blacklist.contains(element.id())
                || element
                    .as_entity()
                    .and_then(|pe| pe.entity_reference.as_ref())
                    .is_some_and(|er| blacklist.contains(&er.id))
        })
    }
}

/// Matches per seed element.
pub type SearchResult = BTreeMap<String, Vec<Match>>;

/// What to search for.
#[derive(Debug, Clone, Copy)]
pub struct Pattern<'a> {
    pub kind: MinerKind,
    pub blacklist: Option<&'a Blacklist>,
}

/// The external graph pattern search.
pub trait PatternSearcher {
    /// Run `pattern` over the model.
    ///
    /// # Errors
    /// Implementations report search failures as
    /// [`crate::ExtractError::Search`].
    fn search(&self, pattern: &Pattern<'_>) -> Result<SearchResult>;
}

/// Search results computed ahead of time and stored as JSON, keyed by
/// miner kind (`controls_state_change`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrecomputedSearcher {
    results: BTreeMap<String, SearchResult>,
}

impl PrecomputedSearcher {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of patterns with stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn with_result(mut self, kind: MinerKind, result: SearchResult) -> Self {
        self.results.insert(kind.as_str().to_string(), result);
        self
    }
}

impl PatternSearcher for PrecomputedSearcher {
    fn search(&self, pattern: &Pattern<'_>) -> Result<SearchResult> {
        let Some(result) = self.results.get(pattern.kind.as_str()) else {
            debug!("No precomputed matches for {}", pattern.kind);
            return Ok(SearchResult::new());
        };

        let Some(blacklist) = pattern.blacklist else {
            return Ok(result.clone());
        };

        Ok(result
            .iter()
            .filter_map(|(seed, matches)| {
                let kept: Vec<Match> = matches
                    .iter()
                    .filter(|m| !m.touches(blacklist))
                    .cloned()
                    .collect();
                (!kept.is_empty()).then(|| (seed.clone(), kept))
            })
            .collect())
    }
}
