//! Items found in locations and carried in inventories.

use serde::{Deserialize, Serialize};

/// Classification of an item, controlling whether it can be picked up.
///
/// The six named kinds are pickable. Anything else a template declares
/// (furniture, scenery, and so on) round-trips through [`ItemKind::Other`]
/// and stays rooted in its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    /// Unique plot items.
    Special,
    /// Wearable or mountable gear.
    Equipment,
    /// Weapons.
    Weapon,
    /// Tools.
    Tool,
    /// Single-use items.
    Consumable,
    /// Papers, maps, and journals.
    Document,
    /// Any other template kind; never pickable.
    Other(String),
}

impl ItemKind {
    /// Parse a kind from its template string.
    pub fn parse(s: &str) -> Self {
        match s {
            "special" => Self::Special,
            "equipment" => Self::Equipment,
            "weapon" => Self::Weapon,
            "tool" => Self::Tool,
            "consumable" => Self::Consumable,
            "document" => Self::Document,
            other => Self::Other(other.to_string()),
        }
    }

    /// The template string for this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Special => "special",
            Self::Equipment => "equipment",
            Self::Weapon => "weapon",
            Self::Tool => "tool",
            Self::Consumable => "consumable",
            Self::Document => "document",
            Self::Other(s) => s,
        }
    }

    /// Whether items of this kind can be transferred into an inventory.
    pub fn is_pickable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ItemKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.name().to_string()
    }
}

/// An object sitting in a location or held by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the inventory key.
    pub name: String,
    /// Item classification.
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl Item {
    /// Create an item.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Whether this item can be picked up.
    pub fn is_pickable(&self) -> bool {
        self.kind.is_pickable()
    }
}
