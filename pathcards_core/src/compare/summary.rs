use serde::Serialize;
use std::collections::BTreeMap;

use crate::card::Card;

use super::MatchType;

/// Verdict counts over a compared collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    /// Cards in the collection.
    pub cards: usize,
    /// Cards carrying at least one verdict.
    pub annotated: usize,
    /// Verdicts per match type.
    pub verdicts: BTreeMap<MatchType, usize>,
}

impl ComparisonSummary {
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut summary = Self {
            cards: cards.len(),
            ..Self::default()
        };

        for matches in cards.iter().filter_map(|c| c.matches.as_ref()) {
            summary.annotated += 1;
            for m in matches {
                *summary.verdicts.entry(m.match_type).or_default() += 1;
            }
        }
        summary
    }

    /// Total verdicts across all types.
    #[must_use]
    pub fn total_verdicts(&self) -> usize {
        self.verdicts.values().sum()
    }

    #[must_use]
    pub fn count(&self, match_type: MatchType) -> usize {
        self.verdicts.get(&match_type).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cards, {} annotated, {} verdicts",
            self.cards,
            self.annotated,
            self.total_verdicts()
        )?;
        for match_type in MatchType::ALL {
            write!(f, ", {match_type}={}", self.count(match_type))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardMatch;

    #[test]
    fn counts_verdicts_by_type() {
        let model = Card::new("adds_modification", None, None);
        let verdict = |match_type| CardMatch {
            match_type,
            card: model.clone(),
        };
        let cards = vec![
            model.annotated(vec![verdict(MatchType::Exact), verdict(MatchType::Subset)]),
            model.annotated(vec![verdict(MatchType::Exact)]),
            model.clone(),
        ];

        let summary = ComparisonSummary::from_cards(&cards);
        assert_eq!(summary.cards, 3);
        assert_eq!(summary.annotated, 2);
        assert_eq!(summary.count(MatchType::Exact), 2);
        assert_eq!(summary.count(MatchType::Distinct), 0);
        assert_eq!(summary.total_verdicts(), 3);
        assert_eq!(
            summary.to_string(),
            "3 cards, 2 annotated, 3 verdicts, EXACT=2, SUBSET=1, SUPERSET=0, INTERSECT=0, DISTINCT=0"
        );
    }
}
