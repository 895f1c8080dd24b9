//! Participants of a card: simple entities, complexes and protein families.
//!
//! On the wire a complex is a bare JSON array, a protein family is an object
//! whose `entity_type` is `protein_family`, and every other object is a
//! simple entity. In memory the three shapes are an explicit sum type.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;
use std::str::FromStr;

use super::modification::Modification;

/// `entity_type` value that marks a protein family object.
pub const PROTEIN_FAMILY: &str = "protein_family";

/// Molecular class of a simple entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum EntityType {
    #[serde(rename = "protein")]
    Protein,
    #[serde(rename = "chemical")]
    Chemical,
    #[serde(rename = "RNA", alias = "rna")]
    Rna,
    #[serde(rename = "DNA", alias = "dna")]
    Dna,
    #[default]
    #[serde(rename = "Unclassified", alias = "unclassified", other)]
    Unclassified,
}

impl EntityType {
    /// Returns the wire representation of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Chemical => "chemical",
            Self::Rna => "RNA",
            Self::Dna => "DNA",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl FromStr for EntityType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "protein" => Self::Protein,
            "chemical" => Self::Chemical,
            "rna" => Self::Rna,
            "dna" => Self::Dna,
            _ => Self::Unclassified,
        })
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A feature carried by a simple entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "feature_type", rename_all = "snake_case")]
pub enum Feature {
    /// A modification site.
    Modification(Modification),
    /// A binding to another entity, named by its grounding id or name.
    Binding { bound_to: String },
    /// A feature type this model does not interpret.
    #[serde(other)]
    Other,
}

/// A single molecule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimpleEntity {
    #[serde(default)]
    pub entity_type: EntityType,

    /// Display name.
    #[serde(default)]
    pub entity_text: String,

    /// Grounding identifier (UniProt name, HGNC symbol or PubChem id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_features: Vec<Feature>,
}

impl SimpleEntity {
    #[must_use]
    pub fn new(entity_type: EntityType, entity_text: impl Into<String>) -> Self {
        Self {
            entity_type,
            entity_text: entity_text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// A named group of alternative participants.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct ProteinFamily {
    #[serde(default)]
    pub entity_text: String,

    #[serde(default)]
    pub family_members: Vec<Participant>,
}

impl Serialize for ProteinFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.family_members.is_empty() { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("entity_type", PROTEIN_FAMILY)?;
        map.serialize_entry("entity_text", &self.entity_text)?;
        if !self.family_members.is_empty() {
            map.serialize_entry("family_members", &self.family_members)?;
        }
        map.end()
    }
}

/// A molecular entity referenced by a card.
///
/// Participant trees are assumed acyclic; identifier extraction recurses
/// through complexes and families without cycle detection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Participant {
    Simple(SimpleEntity),
    Complex(Vec<Participant>),
    Family(ProteinFamily),
}

impl Participant {
    /// Every grounding identifier reachable from this participant.
    ///
    /// Complexes and families contribute the union of their members'
    /// identifiers; a simple entity contributes its own identifier if any.
    #[must_use]
    pub fn identifiers(&self) -> BTreeSet<&str> {
        let mut ids = BTreeSet::new();
        self.collect_identifiers(&mut ids);
        ids
    }

    fn collect_identifiers<'a>(&'a self, ids: &mut BTreeSet<&'a str>) {
        match self {
            Self::Simple(entity) => {
                if let Some(id) = entity.identifier.as_deref() {
                    ids.insert(id);
                }
            }
            Self::Complex(members) => {
                for member in members {
                    member.collect_identifiers(ids);
                }
            }
            Self::Family(family) => {
                for member in &family.family_members {
                    member.collect_identifiers(ids);
                }
            }
        }
    }

    /// The participant's own identifier, without descending into members.
    ///
    /// Only simple entities carry one.
    #[must_use]
    pub fn direct_identifier(&self) -> Option<&str> {
        match self {
            Self::Simple(entity) => entity.identifier.as_deref(),
            Self::Complex(_) | Self::Family(_) => None,
        }
    }

    #[must_use]
    pub const fn as_simple(&self) -> Option<&SimpleEntity> {
        match self {
            Self::Simple(entity) => Some(entity),
            Self::Complex(_) | Self::Family(_) => None,
        }
    }
}

impl Default for Participant {
    fn default() -> Self {
        Self::Simple(SimpleEntity::default())
    }
}

impl From<SimpleEntity> for Participant {
    fn from(entity: SimpleEntity) -> Self {
        Self::Simple(entity)
    }
}

impl From<ProteinFamily> for Participant {
    fn from(family: ProteinFamily) -> Self {
        Self::Family(family)
    }
}

impl TryFrom<Value> for Participant {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let is_family = value.get("entity_type").and_then(Value::as_str) == Some(PROTEIN_FAMILY);

        match value {
            Value::Array(members) => members
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Complex),
            other if is_family => serde_json::from_value(other).map(Self::Family),
            other => serde_json::from_value(other).map(Self::Simple),
        }
    }
}

impl<'de> Deserialize<'de> for Participant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
