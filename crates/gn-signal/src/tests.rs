//! Unit tests for gn-signal.

#[cfg(test)]
mod helpers {
    use gn_core::{Cell, CellKind, Grid, GridBuilder};

    /// 3×3 open grid with a signal post at (1,1).
    pub fn one_post() -> Grid {
        GridBuilder::open(3, 3)
            .with_cell(Cell::new(0, 0), CellKind::Start)
            .with_cell(Cell::new(2, 2), CellKind::Goal)
            .with_cell(Cell::new(1, 1), CellKind::SignalPost)
            .build()
            .unwrap()
    }
}

// ── Timing ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timing {
    use crate::{SignalError, SignalTiming};

    #[test]
    fn default_is_four_red_two_and_a_half_green() {
        let t = SignalTiming::default();
        assert_eq!(t.red_secs, 4.0);
        assert_eq!(t.green_secs, 2.5);
        assert_eq!(t.cycle_secs(), 6.5);
    }

    #[test]
    fn non_positive_durations_rejected() {
        assert!(matches!(SignalTiming::new(0.0, 1.0), Err(SignalError::InvalidTiming { .. })));
        assert!(matches!(SignalTiming::new(1.0, -2.0), Err(SignalError::InvalidTiming { .. })));
        assert!(SignalTiming::new(f64::NAN, 1.0).is_err());
        assert!(SignalTiming::new(1.0, 1.0).is_ok());
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use gn_core::{Cell, CellKind, CoreError, GridBuilder};

    use super::helpers::one_post;
    use crate::{SignalController, SignalError, SignalState, SignalTiming};

    #[test]
    fn one_signal_per_post_all_red() {
        let grid = GridBuilder::open(4, 4)
            .with_cell(Cell::new(0, 0), CellKind::Start)
            .with_cell(Cell::new(3, 3), CellKind::Goal)
            .with_cell(Cell::new(2, 1), CellKind::SignalPost)
            .with_cell(Cell::new(0, 3), CellKind::SignalPost)
            .build()
            .unwrap();
        let sc = SignalController::from_grid(&grid, SignalTiming::default()).unwrap();
        assert_eq!(sc.len(), 2);
        let posts: Vec<Cell> = sc.iter().map(|s| s.position).collect();
        assert_eq!(posts, vec![Cell::new(0, 3), Cell::new(2, 1)]);
        assert!(sc.iter().all(|s| s.state() == SignalState::Red && s.timer() == 0.0));
    }

    #[test]
    fn red_at_3_9_green_at_4_1() {
        let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        let post = Cell::new(1, 1);

        assert_eq!(sc.update(3.9).unwrap(), 0);
        assert_eq!(sc.state_at(post), Some(SignalState::Red));
        assert!(sc.is_red(post));

        assert_eq!(sc.update(0.2).unwrap(), 1);
        assert_eq!(sc.state_at(post), Some(SignalState::Green));
        assert_eq!(sc.get(post).unwrap().timer(), 0.0, "timer resets on transition");
    }

    #[test]
    fn full_cycle_returns_to_red() {
        let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        let post = Cell::new(1, 1);
        sc.update(4.0).unwrap();
        assert_eq!(sc.state_at(post), Some(SignalState::Green));
        sc.update(2.4).unwrap();
        assert_eq!(sc.state_at(post), Some(SignalState::Green));
        sc.update(0.2).unwrap();
        assert_eq!(sc.state_at(post), Some(SignalState::Red));
    }

    #[test]
    fn fine_steps_switch_between_3_9_and_4_1_seconds() {
        let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        let post = Cell::new(1, 1);
        let dt = 1.0 / 60.0;
        let mut t = 0.0;
        while t < 3.9 {
            sc.update(dt).unwrap();
            t += dt;
        }
        assert!(sc.is_red(post));
        while t < 4.1 {
            sc.update(dt).unwrap();
            t += dt;
        }
        assert_eq!(sc.state_at(post), Some(SignalState::Green));
    }

    #[test]
    fn dividing_tick_sizes_flip_on_the_exact_tick() {
        let post = Cell::new(1, 1);
        for dt in [1.0_f64 / 60.0, 0.1, 0.05, 0.25] {
            let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
            let red_ticks = (4.0 / dt).round() as usize;
            let green_ticks = (2.5 / dt).round() as usize;

            for _ in 0..red_ticks - 1 {
                sc.update(dt).unwrap();
            }
            assert_eq!(sc.state_at(post), Some(SignalState::Red), "dt={dt} one tick before red ends");
            sc.update(dt).unwrap();
            assert_eq!(sc.state_at(post), Some(SignalState::Green), "dt={dt} after {red_ticks} ticks");

            for _ in 0..green_ticks - 1 {
                sc.update(dt).unwrap();
            }
            assert_eq!(sc.state_at(post), Some(SignalState::Green), "dt={dt} one tick before green ends");
            sc.update(dt).unwrap();
            assert_eq!(
                sc.state_at(post),
                Some(SignalState::Red),
                "dt={dt} after {} ticks",
                red_ticks + green_ticks
            );
        }
    }

    #[test]
    fn one_transition_per_update() {
        let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        sc.update(100.0).unwrap();
        assert_eq!(sc.state_at(Cell::new(1, 1)), Some(SignalState::Green));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        assert_eq!(sc.update(0.0).unwrap(), 0);
        assert_eq!(sc.get(Cell::new(1, 1)).unwrap().timer(), 0.0);
    }

    #[test]
    fn invalid_dt_rejected() {
        let mut sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        assert!(matches!(
            sc.update(-0.5),
            Err(SignalError::Core(CoreError::InvalidDt(_)))
        ));
        assert!(sc.update(f64::INFINITY).is_err());
    }

    #[test]
    fn no_signal_off_post() {
        let sc = SignalController::from_grid(&one_post(), SignalTiming::default()).unwrap();
        assert_eq!(sc.state_at(Cell::new(0, 1)), None);
        assert!(!sc.is_red(Cell::new(0, 1)));
    }

    #[test]
    fn bad_timing_rejected_at_construction() {
        let bad = SignalTiming { red_secs: 0.0, green_secs: 1.0 };
        assert!(SignalController::from_grid(&one_post(), bad).is_err());
    }
}
