/**
*   Core data shapes shared across the engine
*/

/// Eg. number_of_additional_projectiles
pub type StatID = String;

/// One numeric reading of a stat at one progression step (a gem level or a
/// quality tier). Order among same-id observations is the step order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatObservation {
    pub id: StatID,
    pub value: f64,
}

impl StatObservation {
    pub fn new(id: impl Into<StatID>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// A parsed unit of the stat description grammar: one-or-more stat ids paired
/// with one-or-more description templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptionBlock {
    /// Raw id line. Eg. "2 base_chance_to_ignite_% chance_to_ignite_%"
    /// A leading all-digit token is a count, not an id.
    pub ids_line: String,
    /// The value-count line, recorded but never used for alignment
    pub value_count: Option<String>,
    /// Template lines, verbatim
    pub templates: Vec<String>,
}

impl DescriptionBlock {
    /// Id tokens of this block, with count tokens filtered out.
    /// `{i}` placeholders in templates refer to the i-th token returned here.
    pub fn stat_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids_line
            .split_whitespace()
            .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_ids_filters_count_tokens() {
        let block = DescriptionBlock {
            ids_line: "2 base_chance_to_ignite_% chance_to_ignite_%".to_string(),
            ..Default::default()
        };

        assert_eq!(
            block.stat_ids().collect::<Vec<_>>(),
            vec!["base_chance_to_ignite_%", "chance_to_ignite_%"]
        );
    }

    #[test]
    fn test_stat_ids_empty_line() {
        let block = DescriptionBlock::default();
        assert_eq!(block.stat_ids().count(), 0);
    }
}
