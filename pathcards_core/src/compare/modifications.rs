//! Fuzzy comparison of modification sets.
//!
//! Two modifications are compared at two tolerance levels. Strong equality
//! needs the same type and the same position (within one residue). Weak
//! equality needs the same type and lets a position-less modification stand
//! in for any position. Set operations are plain nested loops; the lists
//! are a handful of entries long.

use crate::card::Modification;

use super::MatchType;

/// Residue numbers this far apart still count as the same position.
pub const POSITION_TOLERANCE: u64 = 1;

/// Positions are equal when both parse as residues within tolerance, or,
/// failing that, when the raw tokens are identical (`None == None`).
#[must_use]
pub fn is_equal_position(a: &Modification, b: &Modification) -> bool {
    match (a.residue(), b.residue()) {
        (Some(x), Some(y)) => x.abs_diff(y) <= POSITION_TOLERANCE,
        _ => a.position == b.position,
    }
}

#[must_use]
pub fn is_strong_equal(a: &Modification, b: &Modification) -> bool {
    a.same_type(b) && is_equal_position(a, b)
}

/// Same type, and either side lacks a position or the positions agree.
#[must_use]
pub fn is_weak_equal(a: &Modification, b: &Modification) -> bool {
    a.same_type(b) && (a.position.is_none() || b.position.is_none() || is_equal_position(a, b))
}

/// Directional: `a` is not covered by `b`.
///
/// A positioned `a` is not covered by a position-less `b`, while a
/// position-less `a` is covered by any `b` of the same type.
#[must_use]
pub fn is_weak_different(a: &Modification, b: &Modification) -> bool {
    if !a.same_type(b) {
        return true;
    }
    match (&a.position, &b.position) {
        (Some(_), None) => true,
        (Some(_), Some(_)) => !is_equal_position(a, b),
        (None, _) => false,
    }
}

/// Elements of `left` equal to at least one element of `right`.
fn intersect<'a>(
    left: &'a [Modification],
    right: &[Modification],
    equal: fn(&Modification, &Modification) -> bool,
) -> Vec<&'a Modification> {
    left.iter()
        .filter(|a| right.iter().any(|b| equal(a, b)))
        .collect()
}

/// Elements of `left` that differ from every element of `right`.
fn difference<'a>(
    left: &'a [Modification],
    right: &[Modification],
    different: fn(&Modification, &Modification) -> bool,
) -> Vec<&'a Modification> {
    left.iter()
        .filter(|a| right.iter().all(|b| different(a, b)))
        .collect()
}

/// The intermediate sets behind one classification.
#[derive(Debug, Clone)]
pub struct ModificationComparison<'a> {
    pub inference_len: usize,
    pub model_len: usize,
    pub strong_intersection: Vec<&'a Modification>,
    pub weak_intersection: Vec<&'a Modification>,
    pub inference_diff_model: Vec<&'a Modification>,
    pub model_diff_inference: Vec<&'a Modification>,
}

impl<'a> ModificationComparison<'a> {
    #[must_use]
    pub fn new(inference: &'a [Modification], model: &'a [Modification]) -> Self {
        Self {
            inference_len: inference.len(),
            model_len: model.len(),
            strong_intersection: intersect(inference, model, is_strong_equal),
            weak_intersection: intersect(inference, model, is_weak_equal),
            inference_diff_model: difference(inference, model, is_weak_different),
            model_diff_inference: difference(model, inference, is_weak_different),
        }
    }

    /// First matching rule wins: no weak overlap, then same-size checks,
    /// then containment by size, then partial overlap.
    #[must_use]
    pub fn classify(&self) -> MatchType {
        use std::cmp::Ordering;

        if self.weak_intersection.is_empty() {
            return MatchType::Distinct;
        }

        match self.inference_len.cmp(&self.model_len) {
            Ordering::Equal if self.strong_intersection.len() == self.inference_len => {
                MatchType::Exact
            }
            Ordering::Equal | Ordering::Less if self.inference_diff_model.is_empty() => {
                MatchType::Subset
            }
            Ordering::Equal | Ordering::Greater if self.model_diff_inference.is_empty() => {
                MatchType::Superset
            }
            _ => MatchType::Intersect,
        }
    }
}

/// Classify an inference modification list against a model one.
///
/// Callers are expected to skip the comparison when either list is empty.
#[must_use]
pub fn compare_modifications(inference: &[Modification], model: &[Modification]) -> MatchType {
    ModificationComparison::new(inference, model).classify()
}
