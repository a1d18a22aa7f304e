use equip::prelude::*;

use crate::builder::EquipBuilder;

/// Level-up table touching a stat the base equip does not have.
pub const SPEED_LEVEL_UP: &[LevelUpBonus] = &[LevelUpBonus::new(Stat::Speed, 2)];

/// A crystal that always adds 5 strength and 5 weapon attack.
pub const FIXED_CRYSTAL: Crystal = Crystal {
    name: "Fixed Crystal",
    bonuses: &[
        (Stat::Str, StatRange::fixed(5)),
        (Stat::WeaponAttack, StatRange::fixed(5)),
    ],
};

pub const FIXED_CRYSTALS: &[Crystal] = &[FIXED_CRYSTAL];

/// Seven slots and 5 weapon attack, nothing else.
pub fn cloak() -> EquipDefinition {
    EquipBuilder::new("cloak")
        .name("Test Cloak")
        .slots(7)
        .stat(Stat::WeaponAttack, 5)
        .build()
}

/// Two slots and every main stat, for slot exhaustion tests.
pub fn two_slot_necklace() -> EquipDefinition {
    EquipBuilder::new("necklace")
        .name("Test Necklace")
        .slots(2)
        .stats(StatBlock::new(20, 20, 20, 20, 26, 26, 0, 0))
        .build()
}

/// An equip that gains speed on level-up even though its base speed is zero.
pub fn levelling_weapon() -> EquipDefinition {
    EquipBuilder::new("weapon")
        .name("Test Weapon")
        .slots(7)
        .stat(Stat::WeaponAttack, 6)
        .level_up(SPEED_LEVEL_UP)
        .build()
}

/// A crafted earring with strength only, so the weapon attack half of
/// [`FIXED_CRYSTAL`] never applies.
pub fn crafted_earring() -> EquipDefinition {
    EquipBuilder::new("earring")
        .name("Test Earring")
        .slots(7)
        .stat(Stat::Str, 5)
        .crystals(FIXED_CRYSTALS)
        .build()
}

/// Looks up an equip from the built-in table.
///
/// # Panics
/// - If `code` is not in the built-in table (indicates a broken test)
pub fn builtin(code: &str) -> EquipDefinition {
    EQUIPS
        .iter()
        .find(|equip| equip.code == code)
        .cloned()
        .expect("Unknown built-in equip code in test")
}
