use rayon::prelude::*;
use tracing::{debug, info};

use crate::card::{Card, CardMatch, ParticipantSide};

use super::{IdentifierIndex, MatchFinder, SameParticipantB, StrictMatch, compare_modifications};

/// Indices over one model card collection.
#[derive(Debug, Clone)]
pub struct ModelIndices<'a> {
    /// Keyed by participant A. Built for filtering on the controller side;
    /// matching currently goes through `by_b` only.
    pub by_a: IdentifierIndex<'a>,
    /// Keyed by participant B, the modified entity.
    pub by_b: IdentifierIndex<'a>,
}

impl<'a> ModelIndices<'a> {
    #[must_use]
    pub fn build(model_cards: &'a [Card]) -> Self {
        Self {
            by_a: IdentifierIndex::build(model_cards, ParticipantSide::A),
            by_b: IdentifierIndex::build(model_cards, ParticipantSide::B),
        }
    }
}

/// Compares inference cards against model cards.
///
/// Inputs are never modified: every inference card comes back as a copy,
/// annotated with one verdict per model candidate that carries modifications.
#[derive(Debug, Clone, Default)]
pub struct CardComparator<P = SameParticipantB> {
    finder: MatchFinder<P>,
}

impl CardComparator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            finder: MatchFinder::new(),
        }
    }
}

impl<P: StrictMatch> CardComparator<P> {
    #[must_use]
    pub const fn with_finder(finder: MatchFinder<P>) -> Self {
        Self { finder }
    }

    /// Annotate each inference card with its verdicts, preserving order.
    #[must_use]
    pub fn compare_cards(&self, model_cards: &[Card], inference_cards: &[Card]) -> Vec<Card> {
        let indices = ModelIndices::build(model_cards);
        info!(
            "Comparing {} inference cards against {} model cards ({} identifiers indexed)",
            inference_cards.len(),
            model_cards.len(),
            indices.by_b.len()
        );

        inference_cards
            .iter()
            .map(|card| self.annotate(card, &indices))
            .collect()
    }

    /// Same result as [`Self::compare_cards`], one inference card per task.
    #[must_use]
    pub fn compare_cards_parallel(
        &self,
        model_cards: &[Card],
        inference_cards: &[Card],
    ) -> Vec<Card>
    where
        P: Sync,
    {
        let indices = ModelIndices::build(model_cards);
        info!(
            "Comparing {} inference cards against {} model cards in parallel",
            inference_cards.len(),
            model_cards.len()
        );

        inference_cards
            .par_iter()
            .map(|card| self.annotate(card, &indices))
            .collect()
    }

    /// Verdicts for a single inference card.
    ///
    /// Returns `None` when the card has no modifications or no candidate
    /// with modifications was found; such cards are left unannotated.
    #[must_use]
    pub fn verdicts(&self, card: &Card, indices: &ModelIndices<'_>) -> Option<Vec<CardMatch>> {
        if !card.has_modifications() {
            return None;
        }

        let candidates = self.finder.find(card, &indices.by_b);
        let verdicts: Vec<CardMatch> = candidates
            .into_iter()
            .filter(|candidate| candidate.has_modifications())
            .map(|candidate| CardMatch {
                match_type: compare_modifications(card.modifications(), candidate.modifications()),
                card: candidate.clone(),
            })
            .collect();

        debug!(
            "Card {:?} -> {} verdicts",
            card.interaction_type(),
            verdicts.len()
        );

        (!verdicts.is_empty()).then_some(verdicts)
    }

    fn annotate(&self, card: &Card, indices: &ModelIndices<'_>) -> Card {
        match self.verdicts(card, indices) {
            Some(verdicts) => card.annotated(verdicts),
            None => card.clone(),
        }
    }
}
