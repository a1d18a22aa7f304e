use equip::prelude::*;

/// Builder for equip definitions used in tests.
///
/// Starts from an equip with seven slots, all stats at zero, no level-up table and
/// no crystals. Chain setters to describe exactly the equip a test needs, then call
/// `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use equip::prelude::Stat;
/// use test_utils::builder::EquipBuilder;
///
/// let definition = EquipBuilder::new("cape")
///     .slots(2)
///     .stat(Stat::WeaponAttack, 5)
///     .build();
/// ```
pub struct EquipBuilder {
    /// Definition under construction.
    definition: EquipDefinition,
}

impl EquipBuilder {
    /// Creates a builder for an equip with the given catalog code.
    ///
    /// # Arguments
    /// - `code` - Short code the definition will be registered under
    ///
    /// # Returns
    /// - New `EquipBuilder` with default slot count and zeroed stats
    pub fn new(code: &'static str) -> Self {
        Self {
            definition: EquipDefinition {
                code,
                name: "Test Equip",
                slots: 7,
                stats: StatBlock::default(),
                level_up: &[],
                crystals: &[],
                emoji: ":test:",
                thumbnail: "https://example.com/equip.png",
                color: 0x123456,
            },
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.definition.name = name;
        self
    }

    pub fn slots(mut self, slots: u32) -> Self {
        self.definition.slots = slots;
        self
    }

    /// Sets one base stat, leaving the others untouched.
    pub fn stat(mut self, stat: Stat, value: u32) -> Self {
        self.definition.stats.set(stat, value);
        self
    }

    /// Replaces every base stat at once.
    pub fn stats(mut self, stats: StatBlock) -> Self {
        self.definition.stats = stats;
        self
    }

    pub fn level_up(mut self, level_up: &'static [LevelUpBonus]) -> Self {
        self.definition.level_up = level_up;
        self
    }

    pub fn crystals(mut self, crystals: &'static [Crystal]) -> Self {
        self.definition.crystals = crystals;
        self
    }

    /// Finishes the definition.
    ///
    /// # Returns
    /// - `EquipDefinition` - Definition with every configured field applied
    pub fn build(self) -> EquipDefinition {
        self.definition
    }
}
