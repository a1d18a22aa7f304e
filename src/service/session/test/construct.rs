use super::*;

/// Tests constructing an instance from a plain equip.
///
/// Verifies that an equip without level-up table or crystals starts with exactly
/// its base stats, all slots and no upgrades.
///
/// Expected: stats {wa: 5}, 7 slots, 0 upgrades
#[test]
fn copies_base_stats_and_slots() {
    let mut rng = rng::seeded(1);

    let instance = EquipInstance::new(fixture::cloak(), &mut rng);

    let session = instance.session();
    assert_eq!(session.stats, StatBlock::new(0, 0, 0, 0, 5, 0, 0, 0));
    assert_eq!(session.slots, 7);
    assert_eq!(session.upgrades, 0);
    assert!(session.results.is_empty());
    assert!(instance.history().is_empty());
}

/// Tests that the instance works on its own copy of the stats.
///
/// Verifies that scrolling an instance leaves the definition it was made from
/// unchanged.
///
/// Expected: definition stats equal the fixture's stats after an upgrade
#[test]
fn leaves_definition_untouched() {
    let mut rng = rng::seeded(2);
    let mut instance = EquipInstance::new(fixture::cloak(), &mut rng);

    instance.attempt_upgrade(100, UpgradeMode::Aggressive, &mut rng);

    assert_eq!(instance.definition().stats, fixture::cloak().stats);
    assert_ne!(instance.session().stats, fixture::cloak().stats);
}

/// Tests level-up bonuses on construction.
///
/// Verifies that five rolls in `[0, 2]` land on speed even though the base equip
/// has no speed, and that no other stat moves.
///
/// Expected: speed within [0, 10] for every seed, weapon attack still 6
#[test]
fn applies_five_level_up_rolls() {
    let mut seen = std::collections::HashSet::new();

    for seed in 0..200 {
        let mut rng = rng::seeded(seed);
        let instance = EquipInstance::new(fixture::levelling_weapon(), &mut rng);
        let stats = instance.session().stats;

        assert!(stats.get(Stat::Speed) <= 10);
        assert_eq!(stats.get(Stat::WeaponAttack), 6);
        seen.insert(stats.get(Stat::Speed));
    }

    // Sums of five draws spread well beyond a single value.
    assert!(seen.len() > 3);
}

/// Tests crystal bonuses on construction.
///
/// Verifies that a crystal only adds to stats the base equip already has: the
/// strength half of the crystal applies, the weapon attack half does not.
///
/// Expected: str 5 + 5 = 10, wa stays 0
#[test]
fn applies_crystals_only_to_existing_stats() {
    let mut rng = rng::seeded(3);

    let instance = EquipInstance::new(fixture::crafted_earring(), &mut rng);

    let stats = instance.session().stats;
    assert_eq!(stats.get(Stat::Str), 10);
    assert_eq!(stats.get(Stat::WeaponAttack), 0);
}

/// Tests the built-in crafted equips.
///
/// Verifies that the full crystal set keeps every bonus inside its range for an
/// equip with main stats only.
///
/// Expected: each main stat gains 5 + [1, 5], attack stays 0
#[test]
fn builtin_crafted_equip_gains_full_crystal_set() {
    for seed in 0..50 {
        let mut rng = rng::seeded(seed);
        let instance = EquipInstance::new(fixture::builtin("cfe"), &mut rng);
        let stats = instance.session().stats;

        for stat in [Stat::Str, Stat::Dex, Stat::Int, Stat::Luk] {
            let value = stats.get(stat);
            assert!((11..=15).contains(&value), "{} was {}", stat, value);
        }
        assert_eq!(stats.get(Stat::WeaponAttack), 0);
        assert_eq!(stats.get(Stat::MagicAttack), 0);
    }
}

/// Tests that construction is reproducible.
///
/// Expected: two instances from the same seed are identical
#[test]
fn same_seed_builds_same_instance() {
    let definition = EquipBuilder::new("ring")
        .stats(StatBlock::new(1, 1, 1, 1, 0, 0, 0, 0))
        .level_up(fixture::SPEED_LEVEL_UP)
        .crystals(fixture::FIXED_CRYSTALS)
        .build();

    let a = EquipInstance::new(definition.clone(), &mut rng::seeded(9));
    let b = EquipInstance::new(definition, &mut rng::seeded(9));

    assert_eq!(a.session(), b.session());
}
