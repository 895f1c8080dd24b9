//! Post-translational modification records.

use serde::{Deserialize, Deserializer, Serialize};

/// A typed, optionally positioned modification of a participant.
///
/// `position` is kept as the raw token it was recorded with. It usually
/// parses as a residue number, but interval markers and other free-form
/// tokens are legal and are compared verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Modification {
    /// Canonical modification name, compared case-insensitively.
    pub modification_type: String,

    /// Residue position or free-form location token.
    #[serde(
        default,
        deserialize_with = "deserialize_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<String>,
}

impl Modification {
    /// Create a modification without a position.
    #[must_use]
    pub fn new(modification_type: impl Into<String>) -> Self {
        Self {
            modification_type: modification_type.into(),
            position: None,
        }
    }

    /// Set the position.
    #[must_use]
    pub fn at(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// The position as a residue number, if it parses as one.
    #[must_use]
    pub fn residue(&self) -> Option<i64> {
        self.position.as_deref()?.trim().parse().ok()
    }

    /// Case-insensitive comparison of modification types.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        self.modification_type
            .to_lowercase()
            .eq(&other.modification_type.to_lowercase())
    }
}

/// Accept both `"181"` and `181` for a position.
fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPosition {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<RawPosition>::deserialize(deserializer)?.map(|raw| match raw {
            RawPosition::Text(text) => text,
            RawPosition::Number(number) => number.to_string(),
        }),
    )
}
