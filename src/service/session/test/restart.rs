use super::*;

/// Tests restarting a scrolled equip.
///
/// Verifies that restart resets slots and upgrades to a clean copy and keeps the
/// discarded session in history.
///
/// Expected: 7 slots, 0 upgrades, one history entry equal to the old session
#[test]
fn resets_session_and_keeps_history() {
    let mut rng = rng::seeded(1);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);
    instance.attempt_upgrade(100, UpgradeMode::Standard, &mut rng);
    burn_slots(&mut instance, 1, &mut rng);
    let discarded = instance.session().clone();

    instance.restart(&mut rng);

    let session = instance.session();
    assert_eq!(session.slots, 7);
    assert_eq!(session.upgrades, 0);
    assert_eq!(session.stats, fixture::cloak().stats);
    assert!(session.results.is_empty());
    assert_eq!(instance.history(), &[discarded]);
}

/// Tests repeated restarts.
///
/// Expected: history grows by one per restart, oldest first
#[test]
fn history_grows_with_each_restart() {
    let mut rng = rng::seeded(2);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);

    instance.attempt_upgrade(0, UpgradeMode::Standard, &mut rng);
    instance.restart(&mut rng);
    instance.restart(&mut rng);
    instance.restart(&mut rng);

    assert_eq!(instance.history().len(), 3);
    assert_eq!(instance.history()[0].slots, 6);
    assert_eq!(instance.history()[1].slots, 7);
}

/// Tests that restart rolls level-up bonuses again.
///
/// Verifies that speed, which only comes from level-up rolls, stays within the
/// five-roll bound after every restart and takes more than one value.
///
/// Expected: speed in [0, 10] each time, with variation across restarts
#[test]
fn rerolls_level_up_bonuses() {
    let mut rng = rng::seeded(3);
    let mut instance = EquipInstance::new(fixture::levelling_weapon(), &mut rng);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..100 {
        instance.restart(&mut rng);
        let speed = instance.session().stats.get(Stat::Speed);
        assert!(speed <= 10);
        seen.insert(speed);
    }

    assert!(seen.len() > 3);
}

/// Tests that restart does not fuse crystals again.
///
/// Crystals are applied once when the instance is created; a restarted copy
/// starts from the base stats plus level-up rolls only.
///
/// Expected: str 10 before restart, 5 after
#[test]
fn does_not_reapply_crystals() {
    let mut rng = rng::seeded(4);
    let mut instance = EquipInstance::new(fixture::crafted_earring(), &mut rng);
    assert_eq!(instance.session().stats.get(Stat::Str), 10);

    instance.restart(&mut rng);

    assert_eq!(instance.session().stats.get(Stat::Str), 5);
    assert_eq!(instance.history()[0].stats.get(Stat::Str), 10);
}
