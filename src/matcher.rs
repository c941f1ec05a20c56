use std::collections::HashSet;

use crate::{
    grouping::GroupedStats,
    types::{DescriptionBlock, StatID},
};

/// First block (in parse order) whose id list contains the stat id exactly.
/// `None` is an expected outcome for stats with no authored description.
pub fn find_block<'a>(
    blocks: &'a [DescriptionBlock],
    stat_id: &str,
) -> Option<&'a DescriptionBlock> {
    blocks
        .iter()
        .find(|block| block.stat_ids().any(|id| id == stat_id))
}

/// One value column per block id, in id order. Ids with no recorded values
/// contribute a single 0 so placeholder substitution always has something to
/// align against. Ids that were found are added to `consumed`.
pub fn align_block_values(
    block: &DescriptionBlock,
    grouped: &GroupedStats,
    consumed: &mut HashSet<StatID>,
) -> Vec<Vec<f64>> {
    block
        .stat_ids()
        .map(|stat_id| match grouped.get(stat_id) {
            Some(values) => {
                consumed.insert(stat_id.to_string());
                values.clone()
            }
            None => vec![0.0],
        })
        .collect()
}
