//! Game catalog configuration.
//!
//! A `Catalog` maps game identifiers to their ordered faction lists. The
//! session and CLI take one as input instead of reading a fixed table, so new
//! games are added by configuration:
//! - `Catalog::builtin()`: the games shipped with the crate
//! - `Catalog::with_game`: builder-style additions
//! - `Catalog::from_json`: a catalog file
//!
//! Catalog file layout:
//!
//! ```json
//! { "games": [ { "name": "Twilight Imperium", "factions": ["The Arborec", "..."] } ] }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::names::{Faction, GameId};

/// Name of the built-in game.
pub const TWILIGHT_IMPERIUM: &str = "Twilight Imperium";

const TWILIGHT_IMPERIUM_FACTIONS: [&str; 24] = [
    "The Arborec",
    "The Barony of Letnev",
    "The Clan of Saar",
    "The Embers of Muaat",
    "The Emirates of Hacan",
    "The Federation of Sol",
    "The Ghosts of Creuss",
    "The L1Z1X Mindnet",
    "The Mentak Coalition",
    "The Naalu Collective",
    "The Nekro Virus",
    "Sardakk N'orr",
    "The Universities of Jol-Nar",
    "The Winnu",
    "The Xxcha Kingdom",
    "The Yssaril Tribes",
    "The Yin Brotherhood",
    "The Argent Flight",
    "The Empyrean",
    "The Mahact Gene-Sorcerers",
    "The Naaz-Rokha Alliance",
    "The Nomad",
    "The Titans of Ul",
    "The Vuil'raith Cabal",
];

/// Errors from catalog lookups and catalog files.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown game {0:?}")]
    UnknownGame(String),
    #[error("game {0:?} is defined more than once")]
    DuplicateGame(String),
    #[error("invalid catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One game and its factions, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub name: GameId,
    pub factions: Vec<Faction>,
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    games: Vec<GameEntry>,
}

/// Ordered game -> faction list table.
///
/// ## Example
///
/// ```
/// use faction_draft::core::{Catalog, GameId};
///
/// let catalog = Catalog::new()
///     .with_game("Tiny", ["Red", "Blue"])
///     .unwrap();
///
/// let factions = catalog.factions(&GameId::new("Tiny")).unwrap();
/// assert_eq!(factions.len(), 2);
/// assert!(catalog.factions(&GameId::new("Chess")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    games: Vec<GameEntry>,
    index: FxHashMap<GameId, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate: Twilight Imperium, 24 factions.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.push(GameEntry {
            name: GameId::new(TWILIGHT_IMPERIUM),
            factions: TWILIGHT_IMPERIUM_FACTIONS.iter().map(|&f| Faction::new(f)).collect(),
        });
        catalog
    }

    /// Add a game.
    pub fn with_game<I, S>(mut self, name: impl Into<String>, factions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(GameEntry {
            name: GameId::new(name),
            factions: factions.into_iter().map(Faction::new).collect(),
        })?;
        Ok(self)
    }

    /// Add a game entry, rejecting a second entry with the same name.
    pub fn insert(&mut self, entry: GameEntry) -> Result<(), CatalogError> {
        if self.index.contains_key(&entry.name) {
            return Err(CatalogError::DuplicateGame(entry.name.0));
        }
        self.push(entry);
        Ok(())
    }

    fn push(&mut self, entry: GameEntry) {
        self.index.insert(entry.name.clone(), self.games.len());
        self.games.push(entry);
    }

    /// Parse a catalog file.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let mut catalog = Self::new();
        for entry in file.games {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// Serialize to the catalog file layout.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            games: self.games.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Game ids in insertion order.
    pub fn games(&self) -> impl Iterator<Item = &GameId> {
        self.games.iter().map(|g| &g.name)
    }

    /// Factions of a game, in catalog order.
    pub fn factions(&self, game: &GameId) -> Result<&[Faction], CatalogError> {
        self.index
            .get(game)
            .map(|&i| self.games[i].factions.as_slice())
            .ok_or_else(|| CatalogError::UnknownGame(game.0.clone()))
    }

    #[must_use]
    pub fn contains(&self, game: &GameId) -> bool {
        self.index.contains_key(game)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 1);

        let game = GameId::new(TWILIGHT_IMPERIUM);
        let factions = catalog.factions(&game).unwrap();
        assert_eq!(factions.len(), 24);
        assert_eq!(factions[0].name(), "The Arborec");
        assert_eq!(factions[23].name(), "The Vuil'raith Cabal");
    }

    #[test]
    fn test_games_keep_insertion_order() {
        let catalog = Catalog::builtin()
            .with_game("Dune", ["Atreides", "Harkonnen"])
            .unwrap()
            .with_game("Root", ["Marquise", "Eyrie", "Woodland Alliance"])
            .unwrap();

        let names: Vec<_> = catalog.games().map(GameId::as_str).collect();
        assert_eq!(names, vec![TWILIGHT_IMPERIUM, "Dune", "Root"]);
        assert_eq!(catalog.factions(&GameId::new("Root")).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_game() {
        let catalog = Catalog::builtin();
        let err = catalog.factions(&GameId::new("Chess")).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownGame(ref g) if g == "Chess"));
        assert_eq!(err.to_string(), "unknown game \"Chess\"");
    }

    #[test]
    fn test_duplicate_game() {
        let result = Catalog::new()
            .with_game("Dune", ["Atreides"])
            .unwrap()
            .with_game("Dune", ["Fremen"]);
        assert!(matches!(result, Err(CatalogError::DuplicateGame(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let loaded = Catalog::from_json(&json).unwrap();

        let game = GameId::new(TWILIGHT_IMPERIUM);
        assert_eq!(loaded.factions(&game).unwrap(), catalog.factions(&game).unwrap());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));

        let dup = r#"{"games":[{"name":"A","factions":[]},{"name":"A","factions":["x"]}]}"#;
        assert!(matches!(Catalog::from_json(dup), Err(CatalogError::DuplicateGame(_))));
    }
}
