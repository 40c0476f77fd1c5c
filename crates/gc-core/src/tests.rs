//! Unit tests for gc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RegionId, TargetId};

    #[test]
    fn index_and_from() {
        let id = RegionId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RegionId::from(42u32), id);
    }

    #[test]
    fn ordering() {
        assert!(RegionId(0) < RegionId(1));
        assert!(TargetId(51) > TargetId(11));
    }

    #[test]
    fn display() {
        assert_eq!(RegionId(7).to_string(), "RegionId(7)");
        assert_eq!(TargetId(21).to_string(), "TargetId(21)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, Polygon};

    fn unit_square() -> Polygon {
        Polygon::rectangle(0.0, 0.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn rectangle_area() {
        assert!((unit_square().area() - 1.0).abs() < 1e-12);
        let corridor = Polygon::rectangle(10.0, 5.0, 2.0, 15.0).unwrap();
        assert!((corridor.area() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn shoelace_is_orientation_independent() {
        // Same square, clockwise vertex order.
        let cw = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap();
        assert!((cw.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn closed_ring_is_accepted() {
        let p = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0), // closing duplicate
        ])
        .unwrap();
        assert_eq!(p.vertices().len(), 4);
        assert!((p.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_rings_are_rejected() {
        assert!(Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_err());
        // Collinear ring encloses nothing.
        assert!(
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
            ])
            .is_err()
        );
    }

    #[test]
    fn containment_is_boundary_exclusive() {
        let sq = unit_square();
        assert!(sq.contains(Point::new(0.5, 0.5)));
        assert!(!sq.contains(Point::new(1.5, 0.5)));
        // Edge and vertex points count as outside.
        assert!(!sq.contains(Point::new(0.0, 0.5)));
        assert!(!sq.contains(Point::new(0.5, 1.0)));
        assert!(!sq.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn containment_in_non_convex_polygon() {
        // L-shape: the notch at the top right is outside.
        let l = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap();
        assert!(l.contains(Point::new(0.5, 1.5)));
        assert!(l.contains(Point::new(1.5, 0.5)));
        assert!(!l.contains(Point::new(1.5, 1.5)));
        assert!((l.area() - 3.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::SamplingGrid;

    #[test]
    fn exact_ratio_is_required() {
        assert!(SamplingGrid::new(0.4, 10.0).is_ok());
        assert!(SamplingGrid::new(0.3, 10.0).is_err());
        assert!(SamplingGrid::new(0.0, 10.0).is_err());
        assert!(SamplingGrid::new(0.4, -1.0).is_err());
        // Control period shorter than sensing period makes no sense.
        assert!(SamplingGrid::new(10.0, 0.4).is_err());
    }

    #[test]
    fn steps_per_control() {
        let grid = SamplingGrid::new(0.4, 10.0).unwrap();
        assert_eq!(grid.steps_per_control(), 25);
    }

    #[test]
    fn time_steps_are_one_based() {
        let grid = SamplingGrid::new(0.4, 10.0).unwrap();
        assert_eq!(grid.time_step(0.0), 1);
        assert_eq!(grid.time_step(0.4), 2);
        assert_eq!(grid.time_step(10.4), 27);
        // Engine-side rounding of the reported time must not shift the step.
        assert_eq!(grid.time_step(0.400_000_01), 2);
        assert_eq!(grid.time_step(0.399_999_99), 2);
    }

    #[test]
    fn control_steps_are_offset_by_one_sensing_period() {
        let grid = SamplingGrid::new(0.4, 10.0).unwrap();
        assert!(!grid.is_control_step(0.0));
        assert!(grid.is_control_step(0.4));
        assert!(!grid.is_control_step(0.8));
        assert!(!grid.is_control_step(10.0));
        assert!(grid.is_control_step(10.4));
        assert!(grid.is_control_step(20.4));
    }

    #[test]
    fn equal_periods_control_every_step() {
        let grid = SamplingGrid::new(1.0, 1.0).unwrap();
        assert_eq!(grid.steps_per_control(), 1);
        assert!(grid.is_control_step(1.0));
        assert!(grid.is_control_step(2.0));
        assert!(!grid.is_control_step(0.0));
    }
}

#[cfg(test)]
mod config {
    use std::path::PathBuf;

    use crate::{CorridorSpec, ReactionModel, RegionId, RunConfig, TargetId};

    fn five_corridors() -> Vec<CorridorSpec> {
        (0..5u32)
            .map(|i| CorridorSpec {
                measurement_area: RegionId(i + 1),
                processor_id: 14 + i,
                target: TargetId((i + 1) * 10 + 1),
            })
            .collect()
    }

    #[test]
    fn route_choice_defaults() {
        let cfg = RunConfig::route_choice(five_corridors(), PathBuf::from("out"));
        assert_eq!(cfg.control_model_name, "distributePeds");
        assert_eq!(cfg.control_model_type, "RouteChoice");
        assert_eq!(cfg.initial_command_id, 111);
        assert_eq!(cfg.corridor_count(), 5);
        assert_eq!(cfg.grid().unwrap().steps_per_control(), 25);
    }

    #[test]
    fn id_projections_preserve_corridor_order() {
        let cfg = RunConfig::route_choice(five_corridors(), PathBuf::from("out"));
        assert_eq!(
            cfg.target_ids(),
            vec![TargetId(11), TargetId(21), TargetId(31), TargetId(41), TargetId(51)]
        );
        assert_eq!(cfg.processor_ids(), vec![14, 15, 16, 17, 18]);
    }

    #[test]
    fn empty_corridor_list_is_rejected() {
        let cfg = RunConfig::route_choice(vec![], PathBuf::from("out"));
        assert!(cfg.grid().is_err());
    }

    #[test]
    fn reaction_model_wire_names() {
        let json = serde_json::to_string(&ReactionModel::default()).unwrap();
        assert!(json.contains("\"isBernoulliParameterCertain\":true"));
        assert!(json.contains("\"BernoulliParameter\":1.0"));

        let reduced = ReactionModel::with_probability(0.5);
        assert!(!reduced.is_bernoulli_parameter_certain);
        assert_eq!(reduced.bernoulli_parameter, 0.5);
    }
}
