//! Entity kinds that can be placed on top of the tile grid

use serde::{Deserialize, Serialize};

/// A kind of placed entity (props, characters, interactables)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    TreeOak,
    TreePine,
    Bush,
    Rock,
    Chest,
    Campfire,
    Signpost,
}

impl EntityKind {
    /// Every entity kind, in catalog order
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Player,
        EntityKind::TreeOak,
        EntityKind::TreePine,
        EntityKind::Bush,
        EntityKind::Rock,
        EntityKind::Chest,
        EntityKind::Campfire,
        EntityKind::Signpost,
    ];

    /// Catalog name (matches the serialized form)
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::TreeOak => "tree_oak",
            EntityKind::TreePine => "tree_pine",
            EntityKind::Bush => "bush",
            EntityKind::Rock => "rock",
            EntityKind::Chest => "chest",
            EntityKind::Campfire => "campfire",
            EntityKind::Signpost => "signpost",
        }
    }

    /// Look up an entity kind by catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Stable numeric id (position in [`EntityKind::ALL`])
    pub fn id(&self) -> u32 {
        *self as u32
    }

    /// Whether the entity blocks movement through its cell
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            EntityKind::TreeOak | EntityKind::TreePine | EntityKind::Rock | EntityKind::Chest
        )
    }
}
