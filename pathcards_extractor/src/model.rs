//! Pathway graph elements as handed out by the pattern search.
//!
//! These mirror the pathway model closely enough for the field readers:
//! physical entities with their references, features and locations, and
//! the control/conversion interactions that mediate a state change.

use serde::{Deserialize, Serialize};

/// Molecular class of a physical entity or entity reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Protein,
    SmallMolecule,
    Rna,
    Dna,
    Complex,
    #[default]
    #[serde(other)]
    Other,
}

/// Cross-reference into an external database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Xref {
    #[serde(default)]
    pub db: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl Xref {
    #[must_use]
    pub fn new(db: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            db: Some(db.into()),
            id: Some(id.into()),
        }
    }
}

/// Names shared by every named element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Names {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
}

/// Common read access for entities and references.
pub trait Annotated {
    fn kind(&self) -> EntityKind;
    fn naming(&self) -> &Names;
    fn xrefs(&self) -> &[Xref];

    /// Where to look for xrefs the element does not carry itself.
    fn reference(&self) -> Option<&EntityReference> {
        None
    }
}

/// The sequence-level identity shared by all states of a molecule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EntityReference {
    pub id: String,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(flatten)]
    pub naming: Names,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<Xref>,
    /// Generic references this one is a member of.
    #[serde(default)]
    pub member_of_count: usize,
}

impl Annotated for EntityReference {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn naming(&self) -> &Names {
        &self.naming
    }

    fn xrefs(&self) -> &[Xref] {
        &self.xrefs
    }
}

/// Location of a feature on the sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequenceLocation {
    Site {
        position: i32,
    },
    Interval {
        #[serde(default)]
        begin: Option<i32>,
        #[serde(default)]
        end: Option<i32>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ModificationFeature {
    /// Raw ontology terms of the modification type, first one preferred.
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub location: Option<SequenceLocation>,
}

impl ModificationFeature {
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.terms.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BindingFeature {
    /// Reference owning the partner feature of the binding.
    #[serde(default)]
    pub binds_to: Option<EntityReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "feature_type", rename_all = "snake_case")]
pub enum EntityFeature {
    Modification(ModificationFeature),
    Binding(BindingFeature),
    #[serde(other)]
    Other,
}

/// A molecule in a specific state and place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PhysicalEntity {
    pub id: String,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(flatten)]
    pub naming: Names,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<Xref>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_reference: Option<EntityReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<EntityFeature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_features: Vec<EntityFeature>,
    /// Cellular location term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular_location: Option<String>,
    /// Complex components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<PhysicalEntity>,
    /// Members of a generic entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<PhysicalEntity>,
    /// Generic entities this one is a member of.
    #[serde(default)]
    pub member_of_count: usize,
}

impl PhysicalEntity {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.naming.display_name = Some(name.into());
        self
    }

    pub fn modification_features(&self) -> impl Iterator<Item = &ModificationFeature> {
        self.features.iter().filter_map(|f| match f {
            EntityFeature::Modification(mf) => Some(mf),
            EntityFeature::Binding(_) | EntityFeature::Other => None,
        })
    }
}

impl Annotated for PhysicalEntity {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn naming(&self) -> &Names {
        &self.naming
    }

    fn xrefs(&self) -> &[Xref] {
        &self.xrefs
    }

    fn reference(&self) -> Option<&EntityReference> {
        self.entity_reference.as_ref()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Control,
    Conversion,
}

/// A control or conversion mediating a state change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interaction {
    pub id: String,
    pub kind: InteractionKind,
    /// `ACTIVATION`, `INHIBITION`, `INHIBITION-COMPETITIVE`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
}

impl Interaction {
    /// -1 for inhibiting controls, 1 otherwise.
    #[must_use]
    pub fn sign(&self) -> i32 {
        match &self.control_type {
            Some(t) if t.to_uppercase().starts_with("INHIBITION") => -1,
            _ => 1,
        }
    }
}

/// A graph element bound to a pattern label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Entity(PhysicalEntity),
    Reference(EntityReference),
    Interaction(Interaction),
}

impl Element {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Entity(pe) => &pe.id,
            Self::Reference(er) => &er.id,
            Self::Interaction(i) => &i.id,
        }
    }

    #[must_use]
    pub const fn as_entity(&self) -> Option<&PhysicalEntity> {
        match self {
            Self::Entity(pe) => Some(pe),
            Self::Reference(_) | Self::Interaction(_) => None,
        }
    }

    #[must_use]
    pub const fn as_interaction(&self) -> Option<&Interaction> {
        match self {
            Self::Interaction(i) => Some(i),
            Self::Entity(_) | Self::Reference(_) => None,
        }
    }
}
