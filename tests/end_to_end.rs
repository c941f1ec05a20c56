use poe_skilltext::{
    extract::{
        additional_observations, combine_quality_range, constant_observations,
        progression_observations, quality_observations,
    },
    parsers::dataset::Dataset,
    resolve_all, StatObservation,
};

const GRAMMAR: &str = "\
description
base_chance_to_ignite_%
1
{0}% chance to Ignite enemies

description
2 spell_minimum_base_fire_damage spell_maximum_base_fire_damage
1
Deals {0} to {1} [Fire] Damage

description
projectile_count
1
Fires {0} [Projectile|Projectiles]

description
base_skill_effect_duration
2
1000 Skill duration is {0} second milliseconds_to_seconds_2dp_if_required 1
Skill duration is {0} seconds milliseconds_to_seconds_2dp_if_required

description
critical_strike_chance_+%
1
+{0}% to [Critical|Critical Hit] Chance
";

fn fireball_dataset() -> Dataset {
    Dataset::from_slice(
        br#"{
            "GrantedEffects": {"rows": [
                {"Id": "FireballPlayer", "ActiveSkill": {"Id": "fireball"},
                 "CastTime": 850, "CostTypes": [{"Id": "Mana"}]}
            ]},
            "GrantedEffectStatSets": {"rows": [
                {"Id": "FireballPlayer",
                 "ConstantStats": [
                     {"Id": "base_chance_to_ignite_%"},
                     {"Id": "base_skill_effect_duration"}
                 ],
                 "ConstantStatsValues": [25, 1000]}
            ]},
            "GrantedEffectStatSetsPerLevel": {"rows": [
                {"StatSet": {"Id": "FireballPlayer"}, "ActorLevel": 1,
                 "FloatStats": [
                     {"Id": "spell_minimum_base_fire_damage"},
                     {"Id": "spell_maximum_base_fire_damage"}
                 ],
                 "BaseResolvedValues": [9, 13],
                 "AdditionalStats": [{"Id": "projectile_count"}],
                 "AdditionalStatsValues": [1]},
                {"StatSet": {"Id": "FireballPlayer"}, "ActorLevel": 3,
                 "FloatStats": [
                     {"Id": "spell_minimum_base_fire_damage"},
                     {"Id": "spell_maximum_base_fire_damage"}
                 ],
                 "BaseResolvedValues": [14, 21],
                 "AdditionalStats": [{"Id": "projectile_count"}],
                 "AdditionalStatsValues": [2]}
            ]},
            "GrantedEffectQualityStats": {"rows": [
                {"GrantedEffect": {"Id": "FireballPlayer"},
                 "Stats": [{"Id": "critical_strike_chance_+%"}],
                 "StatsValuesPermille": [100]}
            ]}
        }"#,
    )
    .unwrap()
}

#[test]
fn resolves_a_full_skill() {
    let dataset = fireball_dataset();

    let mut observations = constant_observations(&dataset, "FireballPlayer");
    observations.extend(progression_observations(&dataset, "FireballPlayer"));
    observations.extend(additional_observations(&dataset, "FireballPlayer"));

    let lines = resolve_all(&observations, true, GRAMMAR);

    assert_eq!(
        lines,
        vec![
            "25% chance to Ignite enemies",
            "Skill duration is 1 second",
            "Deals 9 to 13 Fire Damage",
            "Deals 14 to 21 Fire Damage",
            "Fires 1 Projectile",
            "Fires 2 Projectiles",
        ]
    );
}

#[test]
fn duration_above_one_second_keeps_the_plural_variant() {
    let observations = [StatObservation::new("base_skill_effect_duration", 2000.0)];
    let lines = resolve_all(&observations, true, GRAMMAR);

    assert_eq!(lines, vec!["Skill duration is 2 seconds"]);
}

#[test]
fn quality_lines_fold_into_a_range() {
    let dataset = fireball_dataset();

    let quality = quality_observations(&dataset, "FireballPlayer");
    let lines = resolve_all(&quality, true, GRAMMAR);

    assert_eq!(
        lines,
        vec![
            "+0.1% to Critical Hit Chance",
            "+2% to Critical Hit Chance",
        ]
    );
    assert_eq!(
        combine_quality_range(&lines).as_deref(),
        Some("+(0.1\u{2013}2)% to Critical Hit Chance")
    );
}

#[test]
fn second_id_of_a_damage_pair_is_already_consumed() {
    let observations = [
        StatObservation::new("spell_minimum_base_fire_damage", 9.0),
        StatObservation::new("spell_maximum_base_fire_damage", 13.0),
    ];

    let lines = resolve_all(&observations, true, GRAMMAR);
    assert_eq!(lines, vec!["Deals 9 to 13 Fire Damage"]);
}
