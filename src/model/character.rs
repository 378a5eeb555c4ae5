use serde::{Deserialize, Serialize};

use super::health::CharacterHealth;
use super::stats::Stats;

/// What kind of creature a character is. Players and NPCs share the human
/// infection rules; animals get the zoonotic-biased ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    Player,
    Npc,
    Animal,
}

/// A character as the health engine sees it: identity, attributes, and the
/// mutable health aggregate the engine owns. The host owns everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub kind: CharacterKind,
    pub stats: Stats,
    #[serde(default)]
    pub health: CharacterHealth,
}

impl Character {
    pub fn new(id: u64, name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            stats: Stats::default(),
            health: CharacterHealth::default(),
        }
    }

    pub fn is_animal(&self) -> bool {
        self.kind == CharacterKind::Animal
    }

    pub fn constitution(&self) -> f64 {
        self.stats.constitution
    }
}
