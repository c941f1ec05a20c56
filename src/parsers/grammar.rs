/**
Parser for the flat stat description text format.

Eg.
    description
    base_skill_effect_duration
    1
    Base duration is {0} seconds milliseconds_to_seconds_2dp_if_required

A `description` line opens a block. The first following line lists the stat
ids, an optional all-digit line carries the variant count, and every other
line up to the next marker is a template.
*/
use crate::types::DescriptionBlock;

const BLOCK_MARKER: &str = "description";

pub fn parse_description_blocks(raw: &str) -> Vec<DescriptionBlock> {
    let lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

    let mut blocks = vec![];
    let mut current: Option<DescriptionBlock> = None;

    for line in lines {
        if line == BLOCK_MARKER {
            blocks.extend(current.take());
            current = Some(DescriptionBlock::default());
            continue;
        }

        // Text before the first marker is preamble and carries no templates
        let Some(block) = current.as_mut() else {
            continue;
        };

        if block.ids_line.is_empty() {
            block.ids_line = line.to_string();
        } else if block.value_count.is_none() && line.chars().all(|c| c.is_ascii_digit()) {
            block.value_count = Some(line.to_string());
        } else {
            block.templates.push(line.to_string());
        }
    }

    // Trailing block with no marker after it
    blocks.extend(current);

    blocks
}
