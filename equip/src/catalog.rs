//! Built-in equip table.

use crate::definition::{Crystal, EquipDefinition, LevelUpBonus};
use crate::stat::{Stat, StatBlock, StatRange};

/// Crafting crystals available to crafted equips.
pub mod crystal {
    use super::*;

    pub const POWER: Crystal = Crystal {
        name: "Power Crystal",
        bonuses: &[(Stat::Str, StatRange::fixed(5))],
    };

    pub const DEX: Crystal = Crystal {
        name: "DEX Crystal",
        bonuses: &[(Stat::Dex, StatRange::fixed(5))],
    };

    pub const WISDOM: Crystal = Crystal {
        name: "Wisdom Crystal",
        bonuses: &[(Stat::Int, StatRange::fixed(5))],
    };

    pub const LUK: Crystal = Crystal {
        name: "LUK Crystal",
        bonuses: &[(Stat::Luk, StatRange::fixed(5))],
    };

    pub const DARK: Crystal = Crystal {
        name: "Dark Crystal",
        bonuses: &[
            (Stat::Str, StatRange::new(1, 5)),
            (Stat::Dex, StatRange::new(1, 5)),
            (Stat::Int, StatRange::new(1, 5)),
            (Stat::Luk, StatRange::new(1, 5)),
        ],
    };

    pub const BLACK: Crystal = Crystal {
        name: "Black Crystal",
        bonuses: &[
            (Stat::WeaponAttack, StatRange::new(1, 6)),
            (Stat::MagicAttack, StatRange::new(1, 6)),
        ],
    };

    /// The full crystal set fused into crafted accessories.
    pub const FULL_SET: &[Crystal] = &[POWER, DEX, WISDOM, LUK, BLACK, DARK];
}

const MOONLIGHT_LEVEL_UP: &[LevelUpBonus] = &[
    LevelUpBonus::new(Stat::Str, 1),
    LevelUpBonus::new(Stat::Dex, 1),
    LevelUpBonus::new(Stat::Int, 1),
    LevelUpBonus::new(Stat::Luk, 1),
    LevelUpBonus::new(Stat::WeaponAttack, 2),
    LevelUpBonus::new(Stat::MagicAttack, 2),
    LevelUpBonus::new(Stat::Speed, 2),
    LevelUpBonus::new(Stat::Jump, 1),
];

/// Every equip the simulator supports, in the order they are offered to users.
pub static EQUIPS: &[EquipDefinition] = &[
    EquipDefinition {
        code: "bfc",
        name: "Blackfist Cloak",
        slots: 7,
        stats: StatBlock::new(0, 0, 0, 0, 5, 0, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:bfc:967988064402178049>",
        thumbnail: "https://cdn.discordapp.com/attachments/967988459656601660/967988530028625980/bfc.png",
        color: 0x000000,
    },
    EquipDefinition {
        code: "fs",
        name: "Facestompers",
        slots: 9,
        stats: StatBlock::new(0, 0, 0, 0, 5, 0, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:fs:967988074711744542>",
        thumbnail: "https://cdn.discordapp.com/attachments/962311887050113054/962312016079519764/fs.png",
        color: 0x660000,
    },
    EquipDefinition {
        code: "oz",
        name: "Oz's Brilliant Belt",
        slots: 5,
        stats: StatBlock::new(1, 1, 1, 1, 1, 5, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:oz:967988129485164594>",
        thumbnail: "https://cdn.discordapp.com/attachments/962311887050113054/962311959729029160/belt.png",
        color: 0xFFFF00,
    },
    EquipDefinition {
        code: "abr",
        name: "Angelic Blessing",
        slots: 5,
        stats: StatBlock::new(3, 3, 3, 3, 5, 5, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:abr:967988052880420905>",
        thumbnail: "https://cdn.discordapp.com/attachments/962311887050113054/962998552395665418/abr.png",
        color: 0xFFBBFF,
    },
    EquipDefinition {
        code: "eye",
        name: "Magic Eye Patch",
        slots: 5,
        stats: StatBlock::new(3, 3, 3, 3, 5, 6, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:eyepatch:967988085696630795>",
        thumbnail: "https://cdn.discordapp.com/attachments/962311887050113054/962998585224470608/eyepatch.png",
        color: 0x772233,
    },
    EquipDefinition {
        code: "roa",
        name: "Ring of Alchemist",
        slots: 3,
        stats: StatBlock::new(1, 1, 1, 1, 0, 0, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:roa:967988119666298910>",
        thumbnail: "https://cdn.discordapp.com/attachments/962311887050113054/963012914883735592/roa.png",
        color: 0x99AABB,
    },
    EquipDefinition {
        code: "czak",
        name: "Chaos Zakum Helmet",
        slots: 12,
        stats: StatBlock::new(24, 24, 24, 24, 0, 0, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:czak:967988094227873883>",
        thumbnail: "https://cdn.discordapp.com/attachments/962311887050113054/963435445893619712/czak.png",
        color: 0xAA8866,
    },
    EquipDefinition {
        code: "chtp",
        name: "Chaos Horntail Necklace",
        slots: 2,
        stats: StatBlock::new(20, 20, 20, 20, 26, 26, 0, 0),
        level_up: &[],
        crystals: &[],
        emoji: "<:chtp:996122590395502803>",
        thumbnail: "https://cdn.discordapp.com/attachments/967988459656601660/996122676068360192/chtp.png",
        color: 0x743426,
    },
    EquipDefinition {
        code: "ml",
        name: "Timeless Moonlight",
        slots: 7,
        stats: StatBlock::new(0, 0, 0, 0, 6, 11, 0, 0),
        level_up: MOONLIGHT_LEVEL_UP,
        crystals: &[],
        emoji: "<:moonlight:971657503551127582>",
        thumbnail: "https://cdn.discordapp.com/attachments/967988459656601660/971657671541395516/moonlight.png",
        color: 0xFFFFFF,
    },
    EquipDefinition {
        code: "terror",
        name: "Endless Terror",
        slots: 5,
        stats: StatBlock::new(3, 3, 3, 3, 1, 1, 0, 0),
        level_up: &[],
        crystals: crystal::FULL_SET,
        emoji: "<:terror:1023023203225968710>",
        thumbnail: "https://cdn.discordapp.com/attachments/967988459656601660/1023023400056279060/terror.png",
        color: 0x654882,
    },
    EquipDefinition {
        code: "cfe",
        name: "Commanding Force Earrings",
        slots: 7,
        stats: StatBlock::new(5, 5, 5, 5, 0, 0, 0, 0),
        level_up: &[],
        crystals: crystal::FULL_SET,
        emoji: "<:cfe:1023023201304985661>",
        thumbnail: "https://cdn.discordapp.com/attachments/967988459656601660/1023023476203851866/cfe.png",
        color: 0x72655D,
    },
    EquipDefinition {
        code: "berserked",
        name: "Berserked",
        slots: 7,
        stats: StatBlock::new(5, 5, 5, 5, 0, 0, 0, 0),
        level_up: &[],
        crystals: crystal::FULL_SET,
        emoji: "<:berserked:1023023199258169445>",
        thumbnail: "https://cdn.discordapp.com/attachments/967988459656601660/1023023534777323530/berserked.png",
        color: 0xF0DEC7,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = EQUIPS.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), EQUIPS.len());
    }

    #[test]
    fn only_moonlight_levels_up() {
        let levelling: Vec<&str> = EQUIPS
            .iter()
            .filter(|e| e.levels_up())
            .map(|e| e.code)
            .collect();
        assert_eq!(levelling, vec!["ml"]);
    }

    #[test]
    fn crystal_ranges_are_ordered() {
        for crystal in crystal::FULL_SET {
            for (_, range) in crystal.bonuses {
                assert!(range.min <= range.max, "{} has an inverted range", crystal.name);
            }
        }
    }
}
