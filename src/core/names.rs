//! Name types: participants, factions and games.
//!
//! All three are thin wrappers over `String`. Only `Participant` carries an
//! invariant: its name is trimmed and never empty.

use serde::{Deserialize, Serialize};

/// A named person taking part in a draft.
///
/// Built from editor text with [`Participant::parse`], which trims the text
/// and rejects blank input. Uniqueness is not enforced.
///
/// ```
/// use faction_draft::core::Participant;
///
/// assert_eq!(Participant::parse("  Alice ").unwrap().name(), "Alice");
/// assert!(Participant::parse("   ").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Participant(String);

/// Rejected participant name: nothing left after trimming.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("participant name is blank")]
pub struct BlankName;

impl Participant {
    /// Trim `text` and wrap it, or `None` if nothing is left.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// The trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Participant {
    type Error = BlankName;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text).ok_or(BlankName)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a faction from a game's catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(pub String);

impl Faction {
    /// Create a faction from its display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game identifier used as the catalog key.
///
/// Opaque: the catalog only compares ids for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    /// Create a game id.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
