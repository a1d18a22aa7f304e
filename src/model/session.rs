use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use equip::prelude::{Stat, StatBlock};

/// Pass rate of an upgrade scroll when the `pass` option is not set.
pub const DEFAULT_UPGRADE_PASS_RATE: u32 = 60;

/// Pass rate of an upgrade scroll when the `pass` option is set.
pub const GUARANTEED_PASS_RATE: u32 = 100;

/// Pass rate of a slot restoration scroll.
pub const RESTORE_PASS_RATE: u32 = 20;

/// Signed change per stat recorded for one passed upgrade.
///
/// The value is the rolled delta, not the clamped difference: a -5 roll on a stat
/// of 3 is recorded as -5 even though the stat only drops to 0.
pub type StatChanges = BTreeMap<Stat, i32>;

/// Stat roll distribution of an upgrade scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpgradeMode {
    /// Chaos Scroll: every positive stat moves by a roll in `[-5, 5]`.
    #[default]
    Standard,
    /// Chaos Scroll of Goodness: every positive stat gains a roll in `[1, 5]`.
    Aggressive,
}

impl UpgradeMode {
    /// Inclusive range of the per-stat roll.
    pub fn roll_range(&self) -> RangeInclusive<i32> {
        match self {
            Self::Standard => -5..=5,
            Self::Aggressive => 1..=5,
        }
    }
}

/// Result of one upgrade attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpgradeOutcome {
    pub passed: bool,
    /// Empty unless the attempt passed.
    pub changes: StatChanges,
}

impl UpgradeOutcome {
    /// Outcome of an attempt that failed or never ran.
    pub fn failed() -> Self {
        Self::default()
    }
}

/// Mutable state of one equip copy being scrolled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeSession {
    /// Current stats, owned by this session alone.
    pub stats: StatBlock,
    /// Upgrade slots left.
    pub slots: u32,
    /// Passed upgrades since the copy was created.
    pub upgrades: u32,
    /// Changes of every passed upgrade, oldest first.
    pub results: Vec<StatChanges>,
}

impl UpgradeSession {
    pub fn new(stats: StatBlock, slots: u32) -> Self {
        Self {
            stats,
            slots,
            upgrades: 0,
            results: Vec::new(),
        }
    }
}

/// Pass rates and roll mode a session runs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRates {
    /// Percent chance in `[0, 100]` that an upgrade passes.
    pub upgrade_pass_rate: u32,
    /// Percent chance in `[0, 100]` that a slot restoration passes.
    pub restore_pass_rate: u32,
    pub mode: UpgradeMode,
}

impl Default for ScrollRates {
    fn default() -> Self {
        Self {
            upgrade_pass_rate: DEFAULT_UPGRADE_PASS_RATE,
            restore_pass_rate: RESTORE_PASS_RATE,
            mode: UpgradeMode::Standard,
        }
    }
}

/// Scrolls spent and restarts made during one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTally {
    pub upgrade_scrolls: u32,
    pub restore_scrolls: u32,
    pub restarts: u32,
}

impl ScrollTally {
    /// Number of equip copies scrolled so far, the current one included.
    pub fn rerolls(&self) -> u32 {
        self.restarts + 1
    }
}

/// What a processed action did, handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Upgrade(UpgradeOutcome),
    Restore { passed: bool },
    Restarted,
    Stopped,
}
