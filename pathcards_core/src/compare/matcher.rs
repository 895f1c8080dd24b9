use crate::card::{Card, Participant, ParticipantSide};

use super::IdentifierIndex;

/// Extra test a candidate must pass besides sharing the interaction type.
pub trait StrictMatch {
    fn is_strict_match(&self, query: &Card, candidate: &Card) -> bool;
}

/// Participant B of both cards carries the same identifier (exact,
/// case-sensitive). A query without its own B identifier matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameParticipantB;

impl StrictMatch for SameParticipantB {
    fn is_strict_match(&self, query: &Card, candidate: &Card) -> bool {
        direct_b(query).is_some_and(|id| direct_b(candidate) == Some(id))
    }
}

fn direct_b(card: &Card) -> Option<&str> {
    card.participant(ParticipantSide::B)
        .and_then(Participant::direct_identifier)
}

impl<F> StrictMatch for F
where
    F: Fn(&Card, &Card) -> bool,
{
    fn is_strict_match(&self, query: &Card, candidate: &Card) -> bool {
        self(query, candidate)
    }
}

/// Finds model cards that describe the same interaction as a query card.
#[derive(Debug, Clone, Default)]
pub struct MatchFinder<P = SameParticipantB> {
    strict: P,
}

impl MatchFinder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict: SameParticipantB,
        }
    }
}

impl<P: StrictMatch> MatchFinder<P> {
    #[must_use]
    pub const fn with_predicate(strict: P) -> Self {
        Self { strict }
    }

    /// Candidates for `query` in an index over participant B.
    ///
    /// Only the query's own participant B identifier is looked up; its
    /// participant A and the members of complexes or families on the query
    /// side are not considered.
    pub fn find<'a>(&self, query: &Card, index: &IdentifierIndex<'a>) -> Vec<&'a Card> {
        direct_b(query)
            .into_iter()
            .flat_map(|id| index.get(id))
            .filter(|candidate| candidate.interaction_type() == query.interaction_type())
            .filter(|candidate| self.strict.is_strict_match(query, candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{EntityType, SimpleEntity};

    fn protein(id: &str) -> Participant {
        SimpleEntity::new(EntityType::Protein, id)
            .with_identifier(id)
            .into()
    }

    fn card(kind: &str, b: Participant) -> Card {
        Card::new(kind, Some(protein("SRC")), Some(b))
    }

    #[test]
    fn requires_same_interaction_type() {
        let model = vec![
            card("adds_modification", protein("MAPK1")),
            card("increases_activity", protein("MAPK1")),
        ];
        let index = IdentifierIndex::build(&model, ParticipantSide::B);

        let found = MatchFinder::new().find(&card("adds_modification", protein("MAPK1")), &index);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].interaction_type(), "adds_modification");
    }

    #[test]
    fn identifier_comparison_is_case_sensitive() {
        let model = vec![card("adds_modification", protein("MAPK1"))];
        let index = IdentifierIndex::build(&model, ParticipantSide::B);

        let found = MatchFinder::new().find(&card("adds_modification", protein("mapk1")), &index);
        assert!(found.is_empty());
    }

    #[test]
    fn family_query_finds_nothing() {
        let model = vec![card("adds_modification", protein("MAPK1"))];
        let index = IdentifierIndex::build(&model, ParticipantSide::B);

        let query = card(
            "adds_modification",
            Participant::Complex(vec![protein("MAPK1")]),
        );
        assert!(MatchFinder::new().find(&query, &index).is_empty());
    }

    #[test]
    fn default_predicate_rejects_indexed_family_member() {
        let family_target = Participant::Complex(vec![protein("MAPK1"), protein("MAPK3")]);
        let model = vec![card("adds_modification", family_target)];
        let index = IdentifierIndex::build(&model, ParticipantSide::B);

        let query = card("adds_modification", protein("MAPK1"));
        assert!(MatchFinder::new().find(&query, &index).is_empty());

        let lenient = MatchFinder::with_predicate(|_: &Card, _: &Card| true);
        assert_eq!(lenient.find(&query, &index).len(), 1);
    }
}
