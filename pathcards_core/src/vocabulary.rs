//! Mapping from raw ontology modification terms to canonical names.

/// Substring -> canonical modification name, checked in order.
const MODIFICATION_TERMS: [(&str, &str); 9] = [
    ("phospho", "Phosphorylation"),
    ("acetyl", "Acetylation"),
    ("farnesyl", "Farnesylation"),
    ("glyco", "Glycosylation"),
    ("hydroxy", "Hydroxylation"),
    ("methyl", "Methylation"),
    ("ribosyl", "Ribosylation"),
    ("sumoyl", "Sumoylation"),
    ("ubiq", "Ubiquitination"),
];

/// Prefix of the value returned for terms with no canonical name.
pub const UNRECOGNIZED_PREFIX: &str = "Unrecognized: ";

/// Canonical name for a raw term such as `O-phospho-L-serine`.
///
/// Matching is case-insensitive and the first listed substring wins.
/// Unknown terms come back as `Unrecognized: <lower-cased term>`.
#[must_use]
pub fn map_modification_term(raw: &str) -> String {
    let term = raw.to_lowercase();
    MODIFICATION_TERMS
        .iter()
        .find(|(needle, _)| term.contains(needle))
        .map_or_else(
            || format!("{UNRECOGNIZED_PREFIX}{term}"),
            |(_, canonical)| (*canonical).to_string(),
        )
}
