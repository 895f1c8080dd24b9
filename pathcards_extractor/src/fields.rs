//! Readers for identifiers, names and features of graph elements.

use std::collections::BTreeSet;

use crate::model::{Annotated, EntityKind, ModificationFeature, PhysicalEntity, SequenceLocation};

/// Feature term NCI PID uses to label an active state.
pub const ACTIVE_LABEL: &str = "residue modification, active";
/// Feature term NCI PID uses to label an inactive state.
pub const INACTIVE_LABEL: &str = "residue modification, inactive";

/// First id among the xrefs whose database (lower-cased) equals `db`,
/// falling back to the element's entity reference.
#[must_use]
pub fn xref_id<'a, A: Annotated + ?Sized>(element: &'a A, db: &str) -> Option<&'a str> {
    element
        .xrefs()
        .iter()
        .filter(|x| x.db.as_deref().is_some_and(|d| d.to_lowercase() == db))
        .find_map(|x| x.id.as_deref())
        .or_else(|| element.reference().and_then(|er| xref_id(er, db)))
}

#[must_use]
pub fn hgnc_symbol<A: Annotated + ?Sized>(element: &A) -> Option<&str> {
    xref_id(element, "hgnc symbol")
}

#[must_use]
pub fn pubchem_id<A: Annotated + ?Sized>(element: &A) -> Option<&str> {
    xref_id(element, "pubchem")
}

/// `Uniprot:<name>` for the first human UniProt entry name.
#[must_use]
pub fn uniprot_name<A: Annotated + ?Sized>(element: &A) -> Option<String> {
    element
        .naming()
        .names
        .iter()
        .find(|name| name.ends_with("_HUMAN"))
        .map(|name| format!("Uniprot:{name}"))
}

/// Preferred grounding identifier for cross-source matching.
///
/// Proteins are grounded by UniProt name and small molecules by PubChem id;
/// anything else, or either without one, falls back to the HGNC symbol.
#[must_use]
pub fn grounding_id<A: Annotated + ?Sized>(element: &A) -> Option<String> {
    let preferred = match element.kind() {
        EntityKind::Protein => uniprot_name(element),
        EntityKind::SmallMolecule => pubchem_id(element).map(str::to_string),
        EntityKind::Rna | EntityKind::Dna | EntityKind::Complex | EntityKind::Other => None,
    };
    preferred.or_else(|| hgnc_symbol(element).map(str::to_string))
}

#[must_use]
pub fn grounding_id_or_name<A: Annotated + ?Sized>(element: &A) -> Option<String> {
    grounding_id(element).or_else(|| pick_a_name(element).map(str::to_string))
}

/// Display name, else standard name, else the first listed name.
#[must_use]
pub fn pick_a_name<A: Annotated + ?Sized>(element: &A) -> Option<&str> {
    let naming = element.naming();
    naming
        .display_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| naming.standard_name.as_deref().filter(|s| !s.is_empty()))
        .or_else(|| naming.names.first().map(String::as_str))
}

/// Whether the entity stands for a group rather than one molecule.
#[must_use]
pub fn is_generic(pe: &PhysicalEntity) -> bool {
    if pe.member_of_count > 0 {
        return true;
    }
    if hgnc_symbol(pe).is_some() {
        return false;
    }
    pe.entity_reference
        .as_ref()
        .is_some_and(|er| er.member_of_count > 0)
}

/// `@181` for a site, `@12-20` for an interval, empty when unknown.
#[must_use]
pub fn location_string(location: Option<&SequenceLocation>) -> String {
    location_token(location).map_or_else(String::new, |token| format!("@{token}"))
}

/// The location without its `@` marker, if it is known.
#[must_use]
pub fn location_token(location: Option<&SequenceLocation>) -> Option<String> {
    match *location? {
        SequenceLocation::Site { position } if position > 0 => Some(position.to_string()),
        SequenceLocation::Interval {
            begin: Some(b),
            end: Some(e),
        } if b > 0 && e > 0 => Some(format!("{b}-{e}")),
        SequenceLocation::Site { .. } | SequenceLocation::Interval { .. } => None,
    }
}

/// `term@position` as written to the delta report, or `None` without a term.
#[must_use]
pub fn modification_string(mf: &ModificationFeature) -> Option<String> {
    mf.term()
        .map(|term| format!("{term}{}", location_string(mf.location.as_ref())))
}

/// Every modification term on the entity.
#[must_use]
pub fn modification_names(pe: &PhysicalEntity) -> BTreeSet<&str> {
    pe.modification_features()
        .flat_map(|mf| mf.terms.iter().map(String::as_str))
        .collect()
}

/// +1 when `pe2` is the more active state of `pe1`, -1 when less, else 0.
#[must_use]
pub fn read_differential_activity(pe1: &PhysicalEntity, pe2: &PhysicalEntity) -> i32 {
    let feat1 = modification_names(pe1);
    let feat2 = modification_names(pe2);
    let active1 = feat1.contains(ACTIVE_LABEL);
    let active2 = feat2.contains(ACTIVE_LABEL);
    let inactive1 = feat1.contains(INACTIVE_LABEL);
    let inactive2 = feat2.contains(INACTIVE_LABEL);

    if active2 && !active1 {
        1
    } else if inactive2 && !inactive1 {
        -1
    } else if inactive1 && !inactive2 {
        1
    } else if active1 && !active2 {
        -1
    } else {
        0
    }
}
