//! Themes: named content sets for Memorize games.
//!
//! A theme is plain configuration. Hosts can use the built-in catalog or
//! load their own themes from JSON (or any serde format):
//!
//! ```
//! use memory_match::games::memorize::{Theme, ThemeCatalog};
//!
//! let theme: Theme = serde_json::from_str(
//!     r#"{"name": "Fruit", "contents": ["🍎", "🍐", "🍊", "🍋"], "pair_count": 3}"#,
//! ).unwrap();
//! let catalog = ThemeCatalog::new(vec![theme]).unwrap();
//! assert_eq!(catalog.get("Fruit").unwrap().pair_count, Some(3));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::DeckRng;
use crate::error::{MatchError, Result};

fn default_color() -> String {
    "orange".to_string()
}

/// A named set of card contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name, unique within a catalog.
    pub name: String,

    /// Distinct card contents (usually emoji).
    pub contents: Vec<String>,

    /// Pairs per game. `None` picks a random count for every game.
    #[serde(default)]
    pub pair_count: Option<usize>,

    /// Card back color, passed through to the host.
    #[serde(default = "default_color")]
    pub color: String,
}

impl Theme {
    /// Create a theme with a random pair count.
    pub fn new(name: impl Into<String>, contents: &[&str], color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.iter().map(|c| (*c).to_string()).collect(),
            pair_count: None,
            color: color.into(),
        }
    }

    /// Fix the number of pairs per game.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = Some(pair_count);
        self
    }

    /// Check that the theme can deal a game.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidTheme`] for an empty name, no contents,
    /// duplicate contents or a pair count outside `1..=contents.len()`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::invalid_theme(&self.name, "empty name"));
        }
        if self.contents.is_empty() {
            return Err(MatchError::invalid_theme(&self.name, "no contents"));
        }
        for (i, content) in self.contents.iter().enumerate() {
            if self.contents[..i].contains(content) {
                return Err(MatchError::invalid_theme(
                    &self.name,
                    format!("duplicate content {content:?}"),
                ));
            }
        }
        if let Some(pairs) = self.pair_count {
            if pairs == 0 || pairs > self.contents.len() {
                return Err(MatchError::invalid_theme(
                    &self.name,
                    format!("pair count {pairs} outside 1..={}", self.contents.len()),
                ));
            }
        }
        Ok(())
    }

    /// Pairs for the next game: the fixed count, or a random one.
    ///
    /// Random counts are at least 2 when the theme has enough contents.
    pub fn pick_pair_count(&self, rng: &mut DeckRng) -> usize {
        let max = self.contents.len();
        self.pair_count
            .unwrap_or_else(|| rng.gen_range_inclusive(max.min(2)..=max))
    }
}

/// A validated set of themes.
///
/// Deserializing goes through [`ThemeCatalog::new`], so a loaded catalog
/// is validated like a constructed one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

/// Wire shape of a catalog before validation.
#[derive(Deserialize)]
struct RawCatalog {
    themes: Vec<Theme>,
}

impl TryFrom<RawCatalog> for ThemeCatalog {
    type Error = MatchError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        Self::new(raw.themes)
    }
}

impl ThemeCatalog {
    /// Build a catalog, validating every theme.
    ///
    /// # Errors
    ///
    /// [`MatchError::EmptyCatalog`] when `themes` is empty, or the first
    /// theme validation error. Duplicate names are rejected too.
    pub fn new(themes: Vec<Theme>) -> Result<Self> {
        if themes.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }
        for (i, theme) in themes.iter().enumerate() {
            theme.validate()?;
            if themes[..i].iter().any(|t| t.name == theme.name) {
                return Err(MatchError::invalid_theme(&theme.name, "duplicate name"));
            }
        }
        Ok(Self { themes })
    }

    /// The built-in emoji themes.
    #[must_use]
    pub fn builtin() -> Self {
        let themes = vec![
            Theme::new(
                "Vehicles",
                &["🚗", "🚕", "🚙", "🚌", "🚎", "🏎", "🚓", "🚑", "🚒", "🚐", "🛻", "🚚", "🚛", "🚜", "🛵", "🚲"],
                "red",
            ),
            Theme::new(
                "Halloween",
                &["👻", "🎃", "🕷", "🕸", "💀", "🧙", "🦇", "🍬", "🧛", "🔮"],
                "orange",
            )
            .with_pair_count(8),
            Theme::new(
                "Animals",
                &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮"],
                "green",
            ),
            Theme::new(
                "Food",
                &["🍏", "🍌", "🍉", "🍇", "🍓", "🍒", "🥝", "🍍", "🥑", "🌽"],
                "yellow",
            )
            .with_pair_count(6),
            Theme::new(
                "Sports",
                &["⚽️", "🏀", "🏈", "⚾️", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸"],
                "blue",
            ),
            Theme::new(
                "Faces",
                &["😀", "😂", "😍", "🤔", "😎", "😭", "😡", "🥶", "🤯", "😴"],
                "purple",
            )
            .with_pair_count(4),
        ];
        Self { themes }
    }

    /// Look up a theme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Pick a theme at random.
    #[must_use]
    pub fn pick(&self, rng: &mut DeckRng) -> Option<&Theme> {
        rng.choose(&self.themes)
    }

    /// Iterate over all themes.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Number of themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Never true for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
