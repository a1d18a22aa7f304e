use equip::prelude::*;
use test_utils::{builder::EquipBuilder, fixture, rng};

use crate::model::session::{UpgradeMode, UpgradeOutcome};
use crate::service::session::EquipInstance;

mod attempt_restore;
mod construct;
mod restart;

/// Runs upgrades at a 0% pass rate until `failures` slots are burnt.
fn burn_slots(instance: &mut EquipInstance, failures: u32, rng: &mut rand::rngs::StdRng) {
    for _ in 0..failures {
        let outcome = instance.attempt_upgrade(0, UpgradeMode::Standard, rng);
        assert_eq!(outcome, UpgradeOutcome::failed());
    }
}
