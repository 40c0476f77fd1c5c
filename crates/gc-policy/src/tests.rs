//! Unit tests for the selection policies.

#[cfg(test)]
mod policies {
    use gc_measure::{DensityHistory, DensitySample};

    use crate::{PolicyError, SelectionPolicy};

    fn history_from_rows(rows: &[Vec<f64>]) -> DensityHistory {
        let mut h = DensityHistory::new();
        for (i, row) in rows.iter().enumerate() {
            h.push(DensitySample {
                time_step: i as u64 + 1,
                densities: row.clone(),
            });
        }
        h
    }

    #[test]
    fn fixed_returns_the_current_index() {
        let h = DensityHistory::new();
        for current in 0..5 {
            let next = SelectionPolicy::Fixed.select(current, &h, 25, 5).unwrap();
            assert_eq!(next, current);
        }
    }

    #[test]
    fn round_robin_is_periodic_and_never_repeats() {
        let h = DensityHistory::new();
        let count = 5;
        let mut current = 0;
        let mut seen = Vec::new();
        for _ in 0..2 * count {
            let next = SelectionPolicy::RoundRobin
                .select(current, &h, 25, count)
                .unwrap();
            assert_ne!(next, current, "round robin repeated an index");
            seen.push(next);
            current = next;
        }
        // Periodic with period `count`.
        assert_eq!(seen[..count], seen[count..]);
    }

    #[test]
    fn greedy_picks_the_lowest_mean_density() {
        // 5 corridors of area 1.0, 25-sample window, corridor 2 lowest mean.
        let rows: Vec<Vec<f64>> = (0..25)
            .map(|_| vec![0.8, 0.5, 0.1, 0.5, 0.9])
            .collect();
        let h = history_from_rows(&rows);
        let next = SelectionPolicy::GreedyMinDensity
            .select(0, &h, 25, 5)
            .unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn greedy_averages_only_the_last_window() {
        // Corridor 0 is current.  Corridor 1 was empty for a long time but
        // is crowded in the most recent window; corridor 2 is the opposite.
        let mut rows: Vec<Vec<f64>> = (0..25).map(|_| vec![0.5, 0.0, 2.0]).collect();
        rows.extend((0..25).map(|_| vec![0.5, 2.0, 0.1]));
        let h = history_from_rows(&rows);
        let next = SelectionPolicy::GreedyMinDensity
            .select(0, &h, 25, 3)
            .unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn greedy_never_reselects_the_current_corridor() {
        // Current corridor has the lowest raw density; it must still lose.
        let rows: Vec<Vec<f64>> = (0..25).map(|_| vec![0.0, 0.3, 0.2]).collect();
        let h = history_from_rows(&rows);
        let next = SelectionPolicy::GreedyMinDensity
            .select(0, &h, 25, 3)
            .unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn greedy_breaks_ties_toward_the_highest_index() {
        let rows: Vec<Vec<f64>> = (0..25).map(|_| vec![0.4, 0.2, 0.2, 0.2]).collect();
        let h = history_from_rows(&rows);
        let next = SelectionPolicy::GreedyMinDensity
            .select(0, &h, 25, 4)
            .unwrap();
        assert_eq!(next, 3);
    }

    #[test]
    fn greedy_with_short_history_uses_available_samples() {
        // Only the seed and one step recorded — first control tick situation.
        let rows = vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.6, 0.2]];
        let h = history_from_rows(&rows);
        let next = SelectionPolicy::GreedyMinDensity
            .select(0, &h, 25, 3)
            .unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn greedy_on_empty_history_is_an_error() {
        let h = DensityHistory::new();
        let err = SelectionPolicy::GreedyMinDensity
            .select(0, &h, 25, 5)
            .unwrap_err();
        assert!(matches!(err, PolicyError::EmptyHistory));
    }

    #[test]
    fn greedy_rejects_samples_narrower_than_the_corridor_count() {
        // History recorded with 3 columns, caller claims 5 corridors: the
        // current index 4 has no column to mask.
        let rows: Vec<Vec<f64>> = (0..25).map(|_| vec![0.1, 0.2, 0.3]).collect();
        let h = history_from_rows(&rows);
        let err = SelectionPolicy::GreedyMinDensity
            .select(4, &h, 25, 5)
            .unwrap_err();
        assert!(matches!(err, PolicyError::IndexOutOfRange { index: 4, count: 3 }));
    }

    #[test]
    fn out_of_range_current_index_is_rejected() {
        let h = DensityHistory::new();
        let err = SelectionPolicy::Fixed.select(5, &h, 25, 5).unwrap_err();
        assert!(matches!(err, PolicyError::IndexOutOfRange { index: 5, count: 5 }));
    }

    #[test]
    fn parse_and_display_round_trip() {
        for policy in [
            SelectionPolicy::Fixed,
            SelectionPolicy::RoundRobin,
            SelectionPolicy::GreedyMinDensity,
        ] {
            let parsed: SelectionPolicy = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }
        let err = "open-loop".parse::<SelectionPolicy>().unwrap_err();
        assert!(matches!(err, PolicyError::UnknownPolicy(ref name) if name == "open-loop"));
    }
}
