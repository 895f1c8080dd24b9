//! Interaction cards.
//!
//! A card describes one molecular interaction: two participants, an
//! interaction type and the modifications the interaction adds or removes.
//! Fields this model does not interpret are kept in `extra` and written
//! back unchanged.

mod modification;
mod participant;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::compare::MatchType;
use crate::error::{CardError, Result};

pub use modification::Modification;
pub use participant::{EntityType, Feature, PROTEIN_FAMILY, Participant, ProteinFamily, SimpleEntity};

/// Which participant of a card to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantSide {
    A,
    B,
}

/// The structured body of a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExtractedInformation {
    #[serde(default)]
    pub participant_a: Option<Participant>,

    #[serde(default)]
    pub participant_b: Option<Participant>,

    /// Interaction tag, e.g. `adds_modification` or `increases_activity`.
    #[serde(default)]
    pub interaction_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<Vec<Modification>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A verdict attached to an inference card: how it relates to one model card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardMatch {
    #[serde(rename = "type")]
    pub match_type: MatchType,

    /// The model card the verdict refers to.
    pub card: Card,
}

/// One interaction card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Card {
    pub extracted_information: ExtractedInformation,

    /// Comparison verdicts; only present on annotated inference cards.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<CardMatch>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Create a card with the given interaction type and participants.
    #[must_use]
    pub fn new(
        interaction_type: impl Into<String>,
        participant_a: Option<Participant>,
        participant_b: Option<Participant>,
    ) -> Self {
        Self {
            extracted_information: ExtractedInformation {
                participant_a,
                participant_b,
                interaction_type: interaction_type.into(),
                ..ExtractedInformation::default()
            },
            ..Self::default()
        }
    }

    /// Replace the modification list.
    #[must_use]
    pub fn with_modifications(mut self, modifications: Vec<Modification>) -> Self {
        self.extracted_information.modifications = Some(modifications);
        self
    }

    /// A copy of this card carrying the given verdicts.
    #[must_use]
    pub fn annotated(&self, matches: Vec<CardMatch>) -> Self {
        Self {
            matches: Some(matches),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn interaction_type(&self) -> &str {
        &self.extracted_information.interaction_type
    }

    #[must_use]
    pub const fn participant(&self, side: ParticipantSide) -> Option<&Participant> {
        match side {
            ParticipantSide::A => self.extracted_information.participant_a.as_ref(),
            ParticipantSide::B => self.extracted_information.participant_b.as_ref(),
        }
    }

    /// The modification list, empty when absent.
    #[must_use]
    pub fn modifications(&self) -> &[Modification] {
        self.extracted_information
            .modifications
            .as_deref()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_modifications(&self) -> bool {
        !self.modifications().is_empty()
    }

    /// Check the invariants the comparator relies on.
    ///
    /// # Errors
    /// Returns [`CardError::Malformed`] when a modification has no type.
    pub fn validate(&self, index: usize) -> Result<()> {
        if let Some(position) = self
            .modifications()
            .iter()
            .position(|m| m.modification_type.trim().is_empty())
        {
            return Err(CardError::malformed(
                index,
                format!("modification {position} has an empty modification_type"),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON array of cards.
    ///
    /// # Errors
    /// Fails on invalid JSON, a non-array document, or any card that does not
    /// have the expected shape. The error names the offending card.
    pub fn parse_collection(json: &str) -> Result<Vec<Self>> {
        let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
            return Err(CardError::NotAnArray);
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let card: Self = serde_json::from_value(item)
                    .map_err(|e| CardError::malformed(index, e.to_string()))?;
                card.validate(index)?;
                Ok(card)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "pmc_id": "PMC123",
            "extracted_information": {
                "participant_a": {"entity_type": "protein", "entity_text": "MEK1", "identifier": "Uniprot:MP2K1_HUMAN"},
                "participant_b": {"entity_type": "protein", "entity_text": "ERK2", "identifier": "Uniprot:MK01_HUMAN"},
                "interaction_type": "adds_modification",
                "negative_information": false,
                "modifications": [{"modification_type": "phosphorylation", "position": "185"}]
            }
        })
    }

    #[test]
    fn unknown_fields_round_trip() {
        #[expect(clippy::expect_used, reason = "test: fixture is valid JSON")]
        let card: Card = serde_json::from_value(fixture()).expect("fixture is valid JSON");

        assert_eq!(card.interaction_type(), "adds_modification");
        assert_eq!(card.extra.get("pmc_id"), Some(&json!("PMC123")));
        assert!(card.matches.is_none());

        #[expect(clippy::expect_used, reason = "test: serialization cannot fail")]
        let back = serde_json::to_value(&card).expect("serialization cannot fail");
        assert_eq!(back, fixture());
    }

    #[test]
    fn missing_modifications_reads_as_empty() {
        let card = Card::new("increases_activity", None, None);
        assert!(!card.has_modifications());
        assert!(card.modifications().is_empty());
    }

    #[test]
    fn annotated_copy_leaves_original_untouched() {
        #[expect(clippy::expect_used, reason = "test: fixture is valid JSON")]
        let card: Card = serde_json::from_value(fixture()).expect("fixture is valid JSON");
        let annotated = card.annotated(vec![CardMatch {
            match_type: MatchType::Exact,
            card: card.clone(),
        }]);

        assert!(card.matches.is_none());
        assert_eq!(annotated.matches.as_ref().map(Vec::len), Some(1));

        #[expect(clippy::expect_used, reason = "test: serialization cannot fail")]
        let value = serde_json::to_value(&annotated).expect("serialization cannot fail");
        assert_eq!(value["match"][0]["type"], json!("EXACT"));
    }

    #[test]
    fn collection_reports_malformed_index() {
        let json = r#"[
            {"extracted_information": {"interaction_type": "binds"}},
            {"no_body": true}
        ]"#;

        let err = Card::parse_collection(json).err();
        assert!(matches!(err, Some(CardError::Malformed { index: 1, .. })));
    }

    #[test]
    fn collection_rejects_untyped_modification() {
        let json = r#"[{"extracted_information": {
            "interaction_type": "adds_modification",
            "modifications": [{"modification_type": "  "}]
        }}]"#;

        let err = Card::parse_collection(json).err();
        assert!(matches!(err, Some(CardError::Malformed { index: 0, .. })));
    }

    #[test]
    fn collection_must_be_array() {
        let err = Card::parse_collection(r#"{"cards": []}"#).err();
        assert!(matches!(err, Some(CardError::NotAnArray)));
    }
}
