use std::collections::{BTreeSet, HashMap};

use crate::card::{Card, ParticipantSide};

/// Grounding identifier -> cards whose selected participant carries it.
///
/// Identifiers are collected recursively through complexes and families, so
/// one card is usually filed under several keys. Cards without any
/// identifier on the selected side are not indexed at all.
#[derive(Debug, Clone)]
pub struct IdentifierIndex<'a> {
    cards: &'a [Card],
    side: ParticipantSide,
    entries: HashMap<&'a str, BTreeSet<usize>>,
}

impl<'a> IdentifierIndex<'a> {
    #[must_use]
    pub fn build(cards: &'a [Card], side: ParticipantSide) -> Self {
        let mut entries: HashMap<&'a str, BTreeSet<usize>> = HashMap::new();

        for (position, card) in cards.iter().enumerate() {
            let Some(participant) = card.participant(side) else {
                continue;
            };
            for id in participant.identifiers() {
                entries.entry(id).or_default().insert(position);
            }
        }

        Self {
            cards,
            side,
            entries,
        }
    }

    #[must_use]
    pub const fn side(&self) -> ParticipantSide {
        self.side
    }

    /// Cards filed under `id`, in input order.
    pub fn get(&self, id: &str) -> impl Iterator<Item = &'a Card> + '_ {
        let cards = self.cards;
        self.entries
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&position| &cards[position])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
