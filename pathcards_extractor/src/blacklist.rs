//! Ubiquitous molecules (ATP, water, ...) excluded from small-molecule
//! mediated patterns.

use std::collections::HashSet;

use crate::error::{ExtractError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    ids: HashSet<String>,
}

impl Blacklist {
    /// Parse a blacklist: one entry per line, id in the first tab-separated
    /// column. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    /// Returns [`ExtractError::Blacklist`] for a line with an empty id.
    pub fn parse(text: &str) -> Result<Self> {
        let mut ids = HashSet::new();

        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let id = line.split('\t').next().unwrap_or_default().trim();
            if id.is_empty() {
                return Err(ExtractError::Blacklist {
                    line: number + 1,
                    reason: "missing id in first column".to_string(),
                });
            }
            ids.insert(id.to_string());
        }

        Ok(Self { ids })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_column_is_the_id() {
        #[expect(clippy::expect_used, reason = "test: fixture is valid")]
        let blacklist = Blacklist::parse(
            "# ubiquitous molecules\nSmallMoleculeReference_ATP\tATP\t120\n\nSmallMoleculeReference_H2O\twater\n",
        )
        .expect("fixture is valid");

        assert_eq!(blacklist.len(), 2);
        assert!(blacklist.contains("SmallMoleculeReference_ATP"));
        assert!(!blacklist.contains("ATP"));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = Blacklist::parse("ok\n\tATP\n").err();
        assert!(matches!(err, Some(ExtractError::Blacklist { line: 2, .. })));
    }
}
