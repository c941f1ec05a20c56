/**
Walks the dataset tables for one skill and produces the stat observations the
resolution engine consumes.

Per-level stats are emitted level-by-level so that grouping the observations
afterwards yields one value per gem level for each id, in level order.
*/
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::warn;

use crate::{
    numeric::format_value,
    parsers::dataset::{Dataset, GrantedEffectRow, RowRef},
    types::StatObservation,
};

/// Quality bonuses are stored permille per quality point; gems are described
/// at the 1% and 20% quality endpoints
const QUALITY_MAX: f64 = 20.0;

static STAT_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"to (.*)").unwrap());
static STAT_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]?\d*\.?\d+)%").unwrap());

/// Constant gem header data
#[derive(Debug, Clone, PartialEq)]
pub struct SkillConstants {
    /// Seconds
    pub cast_time: Option<f64>,
    /// Eg. Mana
    pub cost_type: Option<String>,
}

/// The granted effect behind an active skill id
pub fn granted_effect_for_skill<'a>(
    dataset: &'a Dataset,
    skill_id: &str,
) -> Option<&'a GrantedEffectRow> {
    dataset.GrantedEffects.rows.iter().find(|row| {
        row.ActiveSkill
            .as_ref()
            .is_some_and(|skill| skill.Id == skill_id)
    })
}

pub fn skill_constants(effect: &GrantedEffectRow) -> SkillConstants {
    SkillConstants {
        cast_time: effect.CastTime.map(|ms| ms / 1000.0),
        cost_type: effect
            .CostTypes
            .first()
            .map(|cost_type| cost_type.Id.clone()),
    }
}

/// Stats that do not change with gem level
pub fn constant_observations(dataset: &Dataset, effect_id: &str) -> Vec<StatObservation> {
    dataset
        .GrantedEffectStatSets
        .rows
        .iter()
        .filter(|row| row.Id == effect_id)
        .flat_map(|row| zip_stat_values(&row.ConstantStats, &row.ConstantStatsValues))
        .collect()
}

/// Float stats of every per-level row of the effect's stat set, in row order
pub fn progression_observations(dataset: &Dataset, effect_id: &str) -> Vec<StatObservation> {
    dataset
        .GrantedEffectStatSetsPerLevel
        .rows
        .iter()
        .filter(|row| row.StatSet.Id == effect_id)
        .flat_map(|row| {
            let values = row
                .BaseResolvedValues
                .as_deref()
                .unwrap_or(&row.FloatStatsValues);

            zip_stat_values(&row.FloatStats, values)
        })
        .collect()
}

/// Additional stats of every per-level row, in row order
pub fn additional_observations(dataset: &Dataset, effect_id: &str) -> Vec<StatObservation> {
    dataset
        .GrantedEffectStatSetsPerLevel
        .rows
        .iter()
        .filter(|row| row.StatSet.Id == effect_id)
        .flat_map(|row| zip_stat_values(&row.AdditionalStats, &row.AdditionalStatsValues))
        .collect()
}

/// Two observations per quality stat: the value at 1% and at 20% quality
pub fn quality_observations(dataset: &Dataset, effect_id: &str) -> Vec<StatObservation> {
    dataset
        .GrantedEffectQualityStats
        .rows
        .iter()
        .filter(|row| row.GrantedEffect.Id == effect_id)
        .flat_map(|row| {
            let Some(stat) = row.Stats.first().filter(|stat| !stat.Id.is_empty()) else {
                warn!("quality stat row without a stat id");
                return vec![];
            };
            let per_point = row.StatsValuesPermille.first().copied().unwrap_or(0.0) / 1000.0;

            vec![
                StatObservation::new(stat.Id.clone(), per_point),
                StatObservation::new(stat.Id.clone(), per_point * QUALITY_MAX),
            ]
        })
        .collect()
}

/// Fold rendered quality lines into a single range string.
/// Eg. ["+0.1% to Critical Hit Chance 1", "+2% to Critical Hit Chance 1"]
///     -> "+(0.1–2)% to Critical Hit Chance"
pub fn combine_quality_range(descriptions: &[String]) -> Option<String> {
    let name = descriptions.iter().find_map(|description| {
        STAT_NAME.captures(description).map(|caps| {
            caps[1]
                .trim_end_matches(|c: char| c.is_ascii_digit())
                .trim()
                .to_string()
        })
    })?;

    let (min, max) = descriptions
        .iter()
        .filter_map(|description| {
            STAT_PERCENT
                .captures(description)
                .and_then(|caps| caps[1].parse::<f64>().ok())
        })
        .minmax()
        .into_option()?;

    Some(format!(
        "+({}\u{2013}{})% to {name}",
        format_value(min),
        format_value(max)
    ))
}

fn zip_stat_values(stats: &[RowRef], values: &[f64]) -> Vec<StatObservation> {
    stats
        .iter()
        .enumerate()
        .filter_map(|(index, stat)| {
            if stat.Id.is_empty() {
                warn!(index, "stat row without an id");
                return None;
            }

            Some(StatObservation::new(
                stat.Id.clone(),
                values.get(index).copied().unwrap_or(0.0),
            ))
        })
        .collect()
}
