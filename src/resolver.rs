use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    grouping::group_observations,
    matcher::{align_block_values, find_block},
    parsers::grammar::parse_description_blocks,
    render::{collapse_step, render_step},
    types::StatObservation,
};

/// Resolve every observed stat against the description grammar.
///
/// Observations are grouped by id in arrival order; each first-seen id
/// contributes the rendered lines for all of its progression steps
/// contiguously. With `skip_resolved`, an id already satisfied by an earlier
/// multi-id block produces no further output.
///
/// Stats with no authored description are skipped with a warning.
pub fn resolve_all(
    observations: &[StatObservation],
    skip_resolved: bool,
    grammar: &str,
) -> Vec<String> {
    if observations.is_empty() {
        warn!("no stat observations supplied");
        return vec![];
    }

    let blocks = parse_description_blocks(grammar);
    let grouped = group_observations(observations);

    let mut consumed = HashSet::new();
    let mut rendered = vec![];

    for (stat_id, values) in grouped.iter() {
        if skip_resolved && consumed.contains(stat_id) {
            continue;
        }

        let Some(block) = find_block(&blocks, stat_id) else {
            warn!(%stat_id, "no description block for stat");
            continue;
        };
        debug!(%stat_id, ids_line = %block.ids_line, "matched description block");

        let columns = align_block_values(block, &grouped, &mut consumed);

        for (step, &driving_value) in values.iter().enumerate() {
            let candidates = render_step(block, &columns, step);
            rendered.extend(collapse_step(candidates, driving_value));
        }
    }

    rendered
}
