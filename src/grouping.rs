use crate::{
    hashvec::HashVec,
    types::{StatID, StatObservation},
};

/// Per-id value sequences, keyed in first-seen order. The value order within
/// an id is the progression-step order.
pub type GroupedStats = HashVec<StatID, Vec<f64>>;

/// Group observations by id, preserving arrival order for keys and values.
/// Observations with an empty id are dropped.
pub fn group_observations(observations: &[StatObservation]) -> GroupedStats {
    observations
        .iter()
        .fold(GroupedStats::default(), |mut grouped, observation| {
            if !observation.id.is_empty() {
                grouped
                    .entry_or_default(observation.id.clone())
                    .push(observation.value);
            }

            grouped
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_order() {
        let observations = [
            StatObservation::new("spell_damage", 10.0),
            StatObservation::new("cast_speed", 3.0),
            StatObservation::new("spell_damage", 14.0),
            StatObservation::new("spell_damage", 18.0),
        ];

        let grouped = group_observations(&observations);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("spell_damage"), Some(&vec![10.0, 14.0, 18.0]));
        assert_eq!(grouped.get("cast_speed"), Some(&vec![3.0]));

        let keys = grouped.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["spell_damage", "cast_speed"]);
    }

    #[test]
    fn test_empty_ids_are_dropped() {
        let observations = [StatObservation::new("", 5.0)];
        assert!(group_observations(&observations).is_empty());
    }
}
