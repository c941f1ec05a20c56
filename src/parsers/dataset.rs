#![allow(non_snake_case)]
/**
Skill gem dataset - rows keyed by table name
Exported from the game's dat viewer as one JSON document. Only the tables the
extractor walks are modelled; unknown tables and fields are ignored.
["GrantedEffects"]["rows"]: active skill link, cast time, cost types
["GrantedEffectStatSets"]["rows"]: constant stats per granted effect
["GrantedEffectStatSetsPerLevel"]["rows"]: float/additional stats per gem level
["GrantedEffectQualityStats"]["rows"]: permille stat bonuses per quality point
*/
use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;

use crate::{error::DataError, types::StatID};

/// Reference to another row by its string id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowRef {
    /// Empty when the source row is a placeholder
    #[serde(default)]
    pub Id: StatID,
}

#[derive(Debug, Deserialize)]
pub struct Table<T> {
    #[serde(default)]
    pub rows: Vec<T>,
}

// Manual impl so T doesn't inherit the requirement
impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: vec![] }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub GrantedEffects: Table<GrantedEffectRow>,
    #[serde(default)]
    pub GrantedEffectStatSets: Table<StatSetRow>,
    #[serde(default)]
    pub GrantedEffectStatSetsPerLevel: Table<StatSetPerLevelRow>,
    #[serde(default)]
    pub GrantedEffectQualityStats: Table<QualityStatRow>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GrantedEffectRow {
    pub Id: String,
    /// The skill this effect belongs to. Eg. fireball
    #[serde(default)]
    pub ActiveSkill: Option<RowRef>,
    /// Milliseconds
    #[serde(default)]
    pub CastTime: Option<f64>,
    /// Eg. Mana
    #[serde(default)]
    pub CostTypes: Vec<RowRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatSetRow {
    pub Id: String,
    #[serde(default)]
    pub ConstantStats: Vec<RowRef>,
    #[serde(default)]
    pub ConstantStatsValues: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatSetPerLevelRow {
    /// Link to the owning stat set
    pub StatSet: RowRef,
    #[serde(default)]
    pub ActorLevel: f64,
    #[serde(default)]
    pub FloatStats: Vec<RowRef>,
    /// Preferred value source for FloatStats
    #[serde(default)]
    pub BaseResolvedValues: Option<Vec<f64>>,
    /// Fallback when BaseResolvedValues is absent
    #[serde(default)]
    pub FloatStatsValues: Vec<f64>,
    #[serde(default)]
    pub AdditionalStats: Vec<RowRef>,
    #[serde(default)]
    pub AdditionalStatsValues: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QualityStatRow {
    pub GrantedEffect: RowRef,
    #[serde(default)]
    pub Stats: Vec<RowRef>,
    #[serde(default)]
    pub StatsValuesPermille: Vec<f64>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DataError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
