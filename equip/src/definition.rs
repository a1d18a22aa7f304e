//! Equip definitions and the one-time bonuses applied when an equip is created.

use crate::stat::{Stat, StatBlock, StatRange};

/// Number of level-up rolls applied to a freshly created equip.
pub const LEVEL_UP_ROLLS: u32 = 5;

/// Per-level gain for one stat of a levelling equip.
///
/// Each of the [`LEVEL_UP_ROLLS`] rolls adds a uniform integer in
/// `[0, per_level_max]` to `stat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelUpBonus {
    pub stat: Stat,
    pub per_level_max: u32,
}

impl LevelUpBonus {
    pub const fn new(stat: Stat, per_level_max: u32) -> Self {
        Self {
            stat,
            per_level_max,
        }
    }
}

/// A crafting crystal fused into an equip when it is created.
///
/// Each bonus only applies if the equip's base value for that stat is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crystal {
    pub name: &'static str,
    pub bonuses: &'static [(Stat, StatRange)],
}

/// Immutable description of an equip the simulator can scroll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipDefinition {
    /// Short code used as the slash command choice value.
    pub code: &'static str,
    pub name: &'static str,
    /// Upgrade slots on a clean copy of the equip.
    pub slots: u32,
    /// Base stats before any level-up or crystal bonus.
    pub stats: StatBlock,
    /// Level-up gains; empty for equips that do not level.
    pub level_up: &'static [LevelUpBonus],
    /// Crafting crystals; empty for uncrafted equips.
    pub crystals: &'static [Crystal],
    /// Discord emoji markup shown next to the equip name.
    pub emoji: &'static str,
    pub thumbnail: &'static str,
    /// Embed colour as a 24-bit RGB value.
    pub color: u32,
}

impl EquipDefinition {
    pub fn levels_up(&self) -> bool {
        !self.level_up.is_empty()
    }

    pub fn is_crafted(&self) -> bool {
        !self.crystals.is_empty()
    }
}
