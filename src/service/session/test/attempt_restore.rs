use super::*;

/// Tests restoring a slot on a clean equip.
///
/// Verifies that with all slots still available (7 - 0 is not greater than 7)
/// restoration is never possible, whatever the pass rate.
///
/// Expected: false, slots stay 7
#[test]
fn clean_equip_is_not_restorable() {
    let mut rng = rng::seeded(1);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);

    assert!(!instance.is_restorable());
    assert!(!instance.attempt_restore(100, &mut rng));
    assert_eq!(instance.session().slots, 7);
}

/// Tests restoring a slot burnt by a failed scroll.
///
/// Expected: true, slot count back to 7, upgrades and stats untouched
#[test]
fn restores_slot_lost_to_failed_scroll() {
    let mut rng = rng::seeded(2);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);
    burn_slots(&mut instance, 1, &mut rng);
    let stats = instance.session().stats;

    assert!(instance.is_restorable());
    assert!(instance.attempt_restore(100, &mut rng));

    let session = instance.session();
    assert_eq!(session.slots, 7);
    assert_eq!(session.upgrades, 0);
    assert_eq!(session.stats, stats);
    assert!(!instance.is_restorable());
}

/// Tests that slots used by passed upgrades cannot be restored.
///
/// Expected: false after two passes and no failures
#[test]
fn passed_upgrades_are_not_restorable() {
    let mut rng = rng::seeded(3);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);
    instance.attempt_upgrade(100, UpgradeMode::Standard, &mut rng);
    instance.attempt_upgrade(100, UpgradeMode::Standard, &mut rng);

    assert!(!instance.is_restorable());
    assert!(!instance.attempt_restore(100, &mut rng));
    assert_eq!(instance.session().slots, 5);
}

/// Tests a failed restoration.
///
/// Expected: false, slot count unchanged, equip still restorable
#[test]
fn failed_restore_changes_nothing() {
    let mut rng = rng::seeded(4);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);
    burn_slots(&mut instance, 2, &mut rng);

    assert!(!instance.attempt_restore(0, &mut rng));

    assert_eq!(instance.session().slots, 5);
    assert!(instance.is_restorable());
}

/// Tests the restoration ceiling after mixed results.
///
/// Verifies that after one pass and two failures exactly two slots can come back.
///
/// Expected: two restorations pass, the third is refused
#[test]
fn restores_up_to_failed_scroll_count() {
    let mut rng = rng::seeded(5);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);
    instance.attempt_upgrade(100, UpgradeMode::Standard, &mut rng);
    burn_slots(&mut instance, 2, &mut rng);
    assert_eq!(instance.session().slots, 4);

    assert!(instance.attempt_restore(100, &mut rng));
    assert!(instance.attempt_restore(100, &mut rng));
    assert!(!instance.attempt_restore(100, &mut rng));
    assert_eq!(instance.session().slots, 6);
}
