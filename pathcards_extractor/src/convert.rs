//! Conversion of physical entities into card participants.

use pathcards_core::{
    EntityType, Feature, Modification, Participant, ProteinFamily, SimpleEntity,
    map_modification_term,
};

use crate::fields::{grounding_id_or_name, hgnc_symbol, location_token, pick_a_name, uniprot_name};
use crate::model::{EntityFeature, EntityKind, PhysicalEntity};

/// Build the card participant describing `pe`.
///
/// Generic entities become protein families of their converted members,
/// complexes become lists of their converted components (or a memberless
/// family when they list none), and everything else becomes a simple
/// entity with its features.
#[must_use]
pub fn to_participant(pe: &PhysicalEntity) -> Participant {
    if !pe.members.is_empty() {
        return Participant::Family(ProteinFamily {
            entity_text: entity_text(pe),
            family_members: pe.members.iter().map(to_participant).collect(),
        });
    }

    if pe.kind == EntityKind::Complex {
        if pe.components.is_empty() {
            return Participant::Family(ProteinFamily {
                entity_text: entity_text(pe),
                family_members: Vec::new(),
            });
        }
        return Participant::Complex(pe.components.iter().map(to_participant).collect());
    }

    Participant::Simple(SimpleEntity {
        entity_type: entity_type(pe.kind),
        entity_text: entity_text(pe),
        identifier: uniprot_name(pe).or_else(|| hgnc_symbol(pe).map(str::to_string)),
        features: read_features(&pe.features),
        not_features: read_features(&pe.not_features),
    })
}

/// Card features for the given entity features.
///
/// Modifications without a type term and bindings without a resolvable
/// partner are dropped.
#[must_use]
pub fn read_features(features: &[EntityFeature]) -> Vec<Feature> {
    features
        .iter()
        .filter_map(|feature| match feature {
            EntityFeature::Modification(mf) => mf.term().map(|term| {
                Feature::Modification(Modification {
                    modification_type: map_modification_term(term),
                    position: location_token(mf.location.as_ref()),
                })
            }),
            EntityFeature::Binding(bf) => bf
                .binds_to
                .as_ref()
                .and_then(grounding_id_or_name)
                .map(|bound_to| Feature::Binding { bound_to }),
            EntityFeature::Other => None,
        })
        .collect()
}

const fn entity_type(kind: EntityKind) -> EntityType {
    match kind {
        EntityKind::Protein => EntityType::Protein,
        EntityKind::SmallMolecule => EntityType::Chemical,
        EntityKind::Rna => EntityType::Rna,
        EntityKind::Dna => EntityType::Dna,
        EntityKind::Complex | EntityKind::Other => EntityType::Unclassified,
    }
}

fn entity_text(pe: &PhysicalEntity) -> String {
    pick_a_name(pe).unwrap_or(&pe.id).to_string()
}
