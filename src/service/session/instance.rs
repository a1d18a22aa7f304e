//! Equip instance and its randomized state transitions.
//!
//! An `EquipInstance` is one user's copy of a catalog equip. It owns the current
//! `UpgradeSession` plus every session discarded by a restart. All transitions take
//! the random number generator as a parameter so tests can replay them from a seed.
//!
//! Invalid transitions (scrolling an equip with no slots left, restoring a slot that
//! was never consumed by a passed upgrade) are no-ops reported through the return
//! value rather than errors.

use std::mem;

use equip::definition::LEVEL_UP_ROLLS;
use equip::prelude::{EquipDefinition, Stat, StatBlock};
use rand::Rng;

use crate::model::session::{StatChanges, UpgradeMode, UpgradeOutcome, UpgradeSession};

/// One user's copy of an equip being scrolled.
#[derive(Clone, Debug)]
pub struct EquipInstance {
    /// Catalog definition the copy was made from; never modified.
    definition: EquipDefinition,
    /// Copy currently being scrolled.
    session: UpgradeSession,
    /// Copies discarded by restarts, oldest first.
    history: Vec<UpgradeSession>,
}

impl EquipInstance {
    /// Creates a fresh copy of `definition`.
    ///
    /// Copies the base stats, applies five level-up rolls for every stat in the
    /// level-up table, then fuses every crafting crystal. A crystal bonus only
    /// applies to stats the base equip already has.
    ///
    /// # Arguments
    /// - `definition` - Catalog entry to copy
    /// - `rng` - Source of every random draw
    ///
    /// # Returns
    /// - `EquipInstance` - Copy with all slots available and no upgrades
    pub fn new<R: Rng>(definition: EquipDefinition, rng: &mut R) -> Self {
        let mut session = fresh_session(&definition, rng);
        add_crafting_stats(&definition, &mut session.stats, rng);

        Self {
            definition,
            session,
            history: Vec::new(),
        }
    }

    pub fn definition(&self) -> &EquipDefinition {
        &self.definition
    }

    pub fn session(&self) -> &UpgradeSession {
        &self.session
    }

    pub fn history(&self) -> &[UpgradeSession] {
        &self.history
    }

    /// Whether an upgrade attempt would run.
    pub fn can_upgrade(&self) -> bool {
        self.session.slots > 0
    }

    /// Whether a slot restoration attempt would run.
    ///
    /// Only slots lost to failed upgrades can come back: the clean slot count minus
    /// passed upgrades must exceed the slots left.
    pub fn is_restorable(&self) -> bool {
        self.definition.slots.saturating_sub(self.session.upgrades) > self.session.slots
    }

    /// Uses one upgrade scroll.
    ///
    /// Consumes a slot whether or not the scroll passes. On a pass every stat above
    /// zero receives an independent roll from `mode`'s range, floored at zero, and
    /// the upgrade count goes up by one.
    ///
    /// # Arguments
    /// - `pass_rate` - Percent chance in `[0, 100]` that the scroll passes
    /// - `mode` - Stat roll distribution
    /// - `rng` - Source of every random draw
    ///
    /// # Returns
    /// - `UpgradeOutcome` with `passed: true` and the rolled deltas on a pass
    /// - `UpgradeOutcome::failed()` on a failed scroll, or without touching any state
    ///   when no slots are left
    pub fn attempt_upgrade<R: Rng>(
        &mut self,
        pass_rate: u32,
        mode: UpgradeMode,
        rng: &mut R,
    ) -> UpgradeOutcome {
        if !self.can_upgrade() {
            return UpgradeOutcome::failed();
        }

        self.session.slots -= 1;

        if !roll_pass(pass_rate, rng) {
            return UpgradeOutcome::failed();
        }

        let positive: Vec<Stat> = self.session.stats.positive().collect();
        let mut changes = StatChanges::new();
        for stat in positive {
            let roll = rng.random_range(mode.roll_range());
            self.session.stats.apply_delta(stat, roll);
            changes.insert(stat, roll);
        }

        self.session.upgrades += 1;

        if !changes.is_empty() {
            self.session.results.push(changes.clone());
        }

        UpgradeOutcome {
            passed: true,
            changes,
        }
    }

    /// Uses one slot restoration scroll.
    ///
    /// # Arguments
    /// - `pass_rate` - Percent chance in `[0, 100]` that the scroll passes
    /// - `rng` - Source of every random draw
    ///
    /// # Returns
    /// - `true` - A slot was restored
    /// - `false` - The scroll failed, or the equip has no restorable slot
    pub fn attempt_restore<R: Rng>(&mut self, pass_rate: u32, rng: &mut R) -> bool {
        if !self.is_restorable() {
            return false;
        }

        if roll_pass(pass_rate, rng) {
            self.session.slots += 1;
            true
        } else {
            false
        }
    }

    /// Discards the current copy and starts over from the catalog definition.
    ///
    /// The discarded session is kept in `history`. Level-up rolls are drawn again,
    /// but crafting crystals are not: they are fused once when the instance is
    /// created and a restarted copy does not get them back.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        let session = fresh_session(&self.definition, rng);
        self.history.push(mem::replace(&mut self.session, session));
    }
}

/// Draws a uniform integer in `[1, 100]` and compares it with `pass_rate`.
fn roll_pass<R: Rng>(pass_rate: u32, rng: &mut R) -> bool {
    rng.random_range(1..=100u32) <= pass_rate
}

/// Copies the base stats and applies the level-up rolls.
fn fresh_session<R: Rng>(definition: &EquipDefinition, rng: &mut R) -> UpgradeSession {
    let mut stats = definition.stats;
    add_level_up_stats(definition, &mut stats, rng);

    UpgradeSession::new(stats, definition.slots)
}

fn add_level_up_stats<R: Rng>(
    definition: &EquipDefinition,
    stats: &mut StatBlock,
    rng: &mut R,
) {
    for bonus in definition.level_up {
        let gained: u32 = (0..LEVEL_UP_ROLLS)
            .map(|_| rng.random_range(0..=bonus.per_level_max))
            .sum();
        stats.add(bonus.stat, gained);
    }
}

fn add_crafting_stats<R: Rng>(
    definition: &EquipDefinition,
    stats: &mut StatBlock,
    rng: &mut R,
) {
    for crystal in definition.crystals {
        for &(stat, range) in crystal.bonuses {
            if definition.stats.get(stat) == 0 {
                continue;
            }
            stats.add(stat, rng.random_range(range.min..=range.max));
        }
    }
}
