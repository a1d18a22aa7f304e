//! Stat kinds and stat value storage.

use std::fmt;

/// One of the eight stats an equip can carry.
///
/// Declaration order is the display order used everywhere stats are listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stat {
    Str,
    Dex,
    Int,
    Luk,
    WeaponAttack,
    MagicAttack,
    Speed,
    Jump,
}

impl Stat {
    /// Every stat in display order.
    pub const ALL: [Stat; 8] = [
        Stat::Str,
        Stat::Dex,
        Stat::Int,
        Stat::Luk,
        Stat::WeaponAttack,
        Stat::MagicAttack,
        Stat::Speed,
        Stat::Jump,
    ];

    /// Short lowercase key, as used in scroll result summaries.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Str => "str",
            Stat::Dex => "dex",
            Stat::Int => "int",
            Stat::Luk => "luk",
            Stat::WeaponAttack => "wa",
            Stat::MagicAttack => "ma",
            Stat::Speed => "speed",
            Stat::Jump => "jump",
        }
    }

    /// Long uppercase label shown on the equip card.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Str => "STR",
            Stat::Dex => "DEX",
            Stat::Int => "INT",
            Stat::Luk => "LUK",
            Stat::WeaponAttack => "WEAPON ATTACK",
            Stat::MagicAttack => "MAGIC ATTACK",
            Stat::Speed => "SPEED",
            Stat::Jump => "JUMP",
        }
    }

    /// Attack stats are shown as a plain number, everything else as a bonus (`+N`).
    pub fn is_attack(&self) -> bool {
        matches!(self, Stat::WeaponAttack | Stat::MagicAttack)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive integer range `[min, max]` a bonus is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`.
    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }
}

/// Values for all eight stats.
///
/// Values are unsigned so a stat can never go below zero; applying a negative
/// delta that would cross zero leaves the stat at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatBlock([u32; 8]);

impl StatBlock {
    /// Builds a block from values given in display order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        str: u32,
        dex: u32,
        int: u32,
        luk: u32,
        weapon_attack: u32,
        magic_attack: u32,
        speed: u32,
        jump: u32,
    ) -> Self {
        Self([
            str,
            dex,
            int,
            luk,
            weapon_attack,
            magic_attack,
            speed,
            jump,
        ])
    }

    pub fn get(&self, stat: Stat) -> u32 {
        self.0[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        self.0[stat.index()] = value;
    }

    /// Adds a non-negative bonus to `stat`.
    pub fn add(&mut self, stat: Stat, bonus: u32) {
        let slot = &mut self.0[stat.index()];
        *slot = slot.saturating_add(bonus);
    }

    /// Applies a signed delta to `stat`, flooring the result at zero.
    ///
    /// # Returns
    /// - The stat's new value
    pub fn apply_delta(&mut self, stat: Stat, delta: i32) -> u32 {
        let slot = &mut self.0[stat.index()];
        *slot = slot.saturating_add_signed(delta);
        *slot
    }

    /// Iterates `(stat, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Stats whose value is strictly positive, in display order.
    pub fn positive(&self) -> impl Iterator<Item = Stat> + '_ {
        self.iter()
            .filter(|&(_, value)| value > 0)
            .map(|(stat, _)| stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_values_in_display_order() {
        let block = StatBlock::new(1, 2, 3, 4, 5, 6, 7, 8);
        let values: Vec<u32> = block.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(block.get(Stat::MagicAttack), 6);
    }

    #[test]
    fn apply_delta_floors_at_zero() {
        let mut block = StatBlock::new(0, 0, 0, 0, 3, 0, 0, 0);
        assert_eq!(block.apply_delta(Stat::WeaponAttack, -5), 0);
        assert_eq!(block.apply_delta(Stat::WeaponAttack, 4), 4);
    }

    #[test]
    fn positive_skips_zero_stats() {
        let block = StatBlock::new(0, 2, 0, 0, 5, 0, 0, 1);
        let stats: Vec<Stat> = block.positive().collect();
        assert_eq!(stats, vec![Stat::Dex, Stat::WeaponAttack, Stat::Jump]);
    }
}
