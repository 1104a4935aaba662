//! Unit tests for gn-sim.
//!
//! Scenarios run at speed 0.5 on unit cells with `dt = 0.1`, so the agent
//! takes exactly three ticks per cell and tick counts are exact.

#[cfg(test)]
mod helpers {
    use gn_agent::MotionState;
    use gn_core::{Cell, CellKind, Grid, GridBuilder, Tick};
    use gn_search::{Path, SearchStrategy};

    use crate::{Frame, RouteStatus, RunSummary, SimConfig, SimObserver};

    pub const DT: f64 = 0.1;

    /// Fast agent, obstacle placed as soon as the agent reaches index 4.
    pub fn test_config() -> SimConfig {
        let mut c = SimConfig::default();
        c.agent.speed = 0.5;
        c.obstacles.delay_secs = 0.0;
        c.run.dt_secs = DT;
        c
    }

    pub fn open_5x5() -> Grid {
        GridBuilder::open(5, 5)
            .with_cell(Cell::new(0, 0), CellKind::Start)
            .with_cell(Cell::new(4, 4), CellKind::Goal)
            .build()
            .unwrap()
    }

    pub fn corridor(cols: usize) -> GridBuilder {
        GridBuilder::open(1, cols)
            .with_cell(Cell::new(0, 0), CellKind::Start)
            .with_cell(Cell::new(0, cols - 1), CellKind::Goal)
    }

    pub fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
        pairs.iter().map(|&p| Cell::from(p)).collect()
    }

    /// Records every hook call.
    #[derive(Default)]
    pub struct Recorder {
        pub run_starts:  Vec<(SearchStrategy, usize)>,
        pub tick_starts: u64,
        pub obstacles:   Vec<(Tick, Cell)>,
        pub replans:     Vec<(Tick, Cell, Vec<Cell>)>,
        pub frames:      Vec<(Tick, Cell, MotionState, RouteStatus)>,
        /// Frames where the agent's cell was in the blocked set.
        pub violations:  usize,
        pub end:         Option<RunSummary>,
    }

    impl SimObserver for Recorder {
        fn on_run_start(&mut self, strategy: SearchStrategy, path: &Path) {
            self.run_starts.push((strategy, path.len()));
        }
        fn on_tick_start(&mut self, _tick: Tick) {
            self.tick_starts += 1;
        }
        fn on_obstacle_placed(&mut self, tick: Tick, cell: Cell) {
            self.obstacles.push((tick, cell));
        }
        fn on_replan(&mut self, tick: Tick, from: Cell, path: &Path) {
            self.replans.push((tick, from, path.cells().to_vec()));
        }
        fn on_frame(&mut self, frame: &Frame<'_>) {
            if frame.blocked.contains(frame.cell) {
                self.violations += 1;
            }
            self.frames.push((frame.tick, frame.cell, frame.motion, frame.status));
        }
        fn on_run_end(&mut self, summary: &RunSummary) {
            self.end = Some(summary.clone());
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::io::Write;

    use gn_search::SearchStrategy;

    use crate::{SimConfig, SimError};

    #[test]
    fn defaults() {
        let c = SimConfig::default();
        assert_eq!(c.agent.speed, 0.1);
        assert_eq!(c.agent.cell_size, 1.0);
        assert_eq!(c.signals.red_secs, 4.0);
        assert_eq!(c.signals.green_secs, 2.5);
        assert!(c.obstacles.enabled);
        assert_eq!(c.obstacles.delay_secs, 6.0);
        assert_eq!(c.obstacles.min_path_index, 4);
        assert_eq!(c.obstacles.lookahead_steps, 6);
        assert_eq!(c.obstacles.max_placements, 1);
        assert_eq!(c.run.strategy, SearchStrategy::AStar);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SimConfig::from_toml_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let c = SimConfig::from_toml_str(
            "[agent]\nspeed = 0.25\n\n[run]\nstrategy = \"bfs\"\nmax_ticks = 500\n",
        )
        .unwrap();
        assert_eq!(c.agent.speed, 0.25);
        assert_eq!(c.agent.cell_size, 1.0);
        assert_eq!(c.run.strategy, SearchStrategy::Bfs);
        assert_eq!(c.run.max_ticks, 500);
        assert_eq!(c.signals.red_secs, 4.0);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            SimConfig::from_toml_str("[agent]\nspeed = 0.0\n"),
            Err(SimError::Config(_))
        ));
        assert!(SimConfig::from_toml_str("[signals]\ngreen_secs = -1.0\n").is_err());
        assert!(SimConfig::from_toml_str("[obstacles]\ndelay_secs = -0.5\n").is_err());
        assert!(SimConfig::from_toml_str("[run]\nmax_ticks = 0\n").is_err());
    }

    #[test]
    fn unknown_strategy_is_config_error() {
        assert!(matches!(
            SimConfig::from_toml_str("[run]\nstrategy = \"greedy\"\n"),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn disabled_obstacles_never_place() {
        let c = SimConfig::from_toml_str("[obstacles]\nenabled = false\n").unwrap();
        assert_eq!(c.placement_policy().max_placements, 0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[signals]\nred_secs = 3.0").unwrap();
        let c = SimConfig::load(file.path()).unwrap();
        assert_eq!(c.signals.red_secs, 3.0);
        assert_eq!(c.signal_timing().green_secs, 2.5);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let r = SimConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(r, Err(SimError::Config(_))));
    }
}

// ── Builder and run lifecycle ─────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use gn_core::{Cell, CellKind, CoreError, GridBuilder};
    use gn_search::SearchStrategy;

    use super::helpers::{corridor, open_5x5, test_config, Recorder, DT};
    use crate::{NoopObserver, RouteStatus, SimBuilder, SimConfig, SimError};

    #[test]
    fn builder_rejects_bad_config() {
        let mut c = SimConfig::default();
        c.agent.cell_size = 0.0;
        assert!(matches!(SimBuilder::new(open_5x5()).config(c).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn new_sim_is_pending() {
        let sim = SimBuilder::new(open_5x5()).build().unwrap();
        assert_eq!(sim.status(), RouteStatus::Pending);
        assert_eq!(sim.agent().agent().cell, Cell::new(0, 0));
        assert!(sim.world().blocked().is_empty());
    }

    #[test]
    fn strategy_override() {
        let sim = SimBuilder::new(open_5x5()).strategy(SearchStrategy::Dfs).build().unwrap();
        assert_eq!(sim.strategy(), SearchStrategy::Dfs);
        assert_eq!(sim.config.run.strategy, SearchStrategy::Dfs);
    }

    #[test]
    fn start_run_computes_initial_route() {
        let mut sim = SimBuilder::new(open_5x5()).build().unwrap();
        assert_eq!(sim.start_run(SearchStrategy::AStar).unwrap(), RouteStatus::Active);
        let path = sim.agent().agent().path();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.last(), Some(Cell::new(4, 4)));
    }

    #[test]
    fn enclosed_goal_is_no_route_at_start() {
        let grid = GridBuilder::open(3, 3)
            .with_cell(Cell::new(0, 0), CellKind::Start)
            .with_cell(Cell::new(2, 2), CellKind::Goal)
            .with_cell(Cell::new(1, 2), CellKind::Blocked)
            .with_cell(Cell::new(2, 1), CellKind::Blocked)
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(grid).build().unwrap();
        for s in SearchStrategy::ALL {
            assert_eq!(sim.start_run(s).unwrap(), RouteStatus::NoRoute);
            assert!(sim.agent().agent().path().is_empty());
        }
        let summary = sim.run_until_done(DT, 100, &mut NoopObserver).unwrap();
        assert_eq!(summary.outcome, RouteStatus::NoRoute);
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.final_cell, Cell::new(0, 0));
    }

    #[test]
    fn invalid_dt_rejected() {
        let mut sim = SimBuilder::new(open_5x5()).build().unwrap();
        sim.start_run(SearchStrategy::AStar).unwrap();
        assert!(matches!(sim.tick(-0.1), Err(SimError::Core(CoreError::InvalidDt(_)))));
        assert!(sim.tick(f64::NAN).is_err());
        assert!(sim.run_until_done(f64::INFINITY, 10, &mut NoopObserver).is_err());
    }

    #[test]
    fn tick_limit_leaves_run_active() {
        let mut sim = SimBuilder::new(open_5x5()).config(test_config()).build().unwrap();
        let summary = sim.run_until_done(DT, 3, &mut NoopObserver).unwrap();
        assert_eq!(summary.outcome, RouteStatus::Active);
        assert_eq!(summary.ticks, 3);

        // Continuing picks up where the first call stopped.
        let summary = sim.run_until_done(DT, 1_000, &mut NoopObserver).unwrap();
        assert_eq!(summary.outcome, RouteStatus::Arrived);
        assert_eq!(summary.ticks, 33);
    }

    #[test]
    fn resumed_run_is_announced_once() {
        let mut sim = SimBuilder::new(open_5x5()).config(test_config()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_until_done(DT, 3, &mut rec).unwrap();
        sim.run_until_done(DT, 3, &mut rec).unwrap();
        let summary = sim.run_until_done(DT, 1_000, &mut rec).unwrap();
        assert_eq!(summary.outcome, RouteStatus::Arrived);
        assert_eq!(rec.run_starts, vec![(SearchStrategy::AStar, 9)]);
        assert_eq!(rec.tick_starts, 33);

        sim.start_run(SearchStrategy::Bfs).unwrap();
        sim.run_until_done(DT, 1_000, &mut rec).unwrap();
        assert_eq!(rec.run_starts, vec![(SearchStrategy::AStar, 9), (SearchStrategy::Bfs, 9)]);
    }

    #[test]
    fn restart_clears_blocked_and_rearms() {
        let mut sim = SimBuilder::new(corridor(12).build().unwrap())
            .config({
                let mut c = test_config();
                c.obstacles.lookahead_steps = 2;
                c
            })
            .build()
            .unwrap();
        let first = sim.run_until_done(DT, 1_000, &mut NoopObserver).unwrap();
        assert_eq!(first.outcome, RouteStatus::NoRoute);
        assert_eq!(sim.world().blocked().len(), 1);
        assert!(sim.scheduler().is_spent());

        assert_eq!(sim.start_run(SearchStrategy::Bfs).unwrap(), RouteStatus::Active);
        assert!(sim.world().blocked().is_empty());
        assert!(!sim.scheduler().is_spent());
        assert_eq!(sim.clock().current_tick.0, 0);
        assert_eq!(sim.replans(), 0);
        assert_eq!(sim.agent().agent().cell, Cell::new(0, 0));
        assert_eq!(sim.strategy(), SearchStrategy::Bfs);
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use gn_agent::MotionState;
    use gn_core::{Cell, CellKind, Tick};
    use gn_search::SearchStrategy;

    use super::helpers::{cells, corridor, open_5x5, test_config, Recorder, DT};
    use crate::{RouteStatus, SimBuilder};

    #[test]
    fn obstacle_forces_detour_and_agent_arrives() {
        let mut sim = SimBuilder::new(open_5x5()).config(test_config()).build().unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run_until_done(DT, 1_000, &mut rec).unwrap();

        // Initial A* route runs along row 0 then down column 4; the scan
        // starts at index min(4 + 6, 9 - 2) = 7, i.e. (3,4).
        assert_eq!(rec.run_starts, vec![(SearchStrategy::AStar, 9)]);
        assert_eq!(rec.obstacles, vec![(Tick(11), Cell::new(3, 4))]);
        assert_eq!(
            rec.replans,
            vec![(Tick(20), Cell::new(2, 4), cells(&[(2, 4), (2, 3), (3, 3), (4, 3), (4, 4)]))]
        );

        assert_eq!(summary.outcome, RouteStatus::Arrived);
        assert_eq!(summary.ticks, 33);
        assert_eq!(summary.replans, 1);
        assert_eq!(summary.obstacles, 1);
        assert_eq!(summary.final_cell, Cell::new(4, 4));
        assert_eq!(rec.end, Some(summary));
        assert_eq!(rec.tick_starts, 33);
        assert_eq!(rec.violations, 0);
        assert!(rec.frames.iter().all(|f| f.1 != Cell::new(3, 4)));
    }

    #[test]
    fn bfs_and_dfs_also_arrive() {
        for (strategy, ticks, blocked) in [
            (SearchStrategy::Bfs, 33, Cell::new(4, 3)),
            (SearchStrategy::Dfs, 45, Cell::new(2, 0)),
        ] {
            let mut sim = SimBuilder::new(open_5x5())
                .config(test_config())
                .strategy(strategy)
                .build()
                .unwrap();
            let mut rec = Recorder::default();
            let summary = sim.run_until_done(DT, 1_000, &mut rec).unwrap();
            assert_eq!(summary.outcome, RouteStatus::Arrived, "{strategy}");
            assert_eq!(summary.ticks, ticks, "{strategy}");
            assert_eq!(rec.obstacles, vec![(Tick(11), blocked)], "{strategy}");
            assert_eq!(rec.violations, 0, "{strategy}");
        }
    }

    #[test]
    fn one_replan_per_blocking_condition() {
        let mut sim = SimBuilder::new(open_5x5()).config(test_config()).build().unwrap();
        sim.start_run(SearchStrategy::AStar).unwrap();
        let mut requests = 0;
        for _ in 0..33 {
            if sim.tick(DT).unwrap().replan_requested {
                requests += 1;
            }
        }
        assert_eq!(requests, 1);
        assert_eq!(sim.status(), RouteStatus::Arrived);
    }

    #[test]
    fn cut_off_goal_reports_no_route() {
        let mut config = test_config();
        config.obstacles.lookahead_steps = 2;
        let mut sim = SimBuilder::new(corridor(12).build().unwrap()).config(config).build().unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run_until_done(DT, 1_000, &mut rec).unwrap();

        assert_eq!(rec.obstacles, vec![(Tick(11), Cell::new(0, 6))]);
        assert_eq!(rec.replans, vec![(Tick(17), Cell::new(0, 5), vec![])]);
        assert_eq!(summary.outcome, RouteStatus::NoRoute);
        assert_eq!(summary.ticks, 17);
        assert_eq!(summary.final_cell, Cell::new(0, 5));

        let last = rec.frames.last().unwrap();
        assert_eq!(last.2, MotionState::Idle);
        assert_eq!(last.3, RouteStatus::NoRoute);

        // Further ticks leave the agent where it is.
        let before = sim.agent().agent().position;
        for _ in 0..10 {
            let report = sim.tick(DT).unwrap();
            assert!(!report.replan_requested);
            assert_eq!(report.status, RouteStatus::NoRoute);
        }
        assert_eq!(sim.agent().agent().position, before);
    }

    #[test]
    fn red_signal_holds_agent_then_releases() {
        let grid = corridor(6)
            .with_cell(Cell::new(0, 2), CellKind::SignalPost)
            .build()
            .unwrap();
        let mut config = test_config();
        config.obstacles.enabled = false;
        let mut sim = SimBuilder::new(grid).config(config).build().unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run_until_done(DT, 1_000, &mut rec).unwrap();

        let halted = rec.frames.iter().filter(|f| f.2 == MotionState::HaltedAtSignal).count();
        assert!(halted > 30, "halted for {halted} ticks");
        assert_eq!(summary.outcome, RouteStatus::Arrived);
        assert!(summary.elapsed_secs > 4.0);
        assert!(rec.obstacles.is_empty());
    }

    #[test]
    fn signals_persist_across_runs() {
        let grid = corridor(6)
            .with_cell(Cell::new(0, 2), CellKind::SignalPost)
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(grid).config(test_config()).build().unwrap();
        sim.start_run(SearchStrategy::AStar).unwrap();
        for _ in 0..7 {
            sim.tick(DT).unwrap();
        }
        let before = sim.world().signals().get(Cell::new(0, 2)).cloned();
        sim.start_run(SearchStrategy::AStar).unwrap();
        assert_eq!(sim.world().signals().get(Cell::new(0, 2)).cloned(), before);
        assert!(before.is_some_and(|s| s.timer() > 0.0));
    }

    #[test]
    fn identical_sims_produce_identical_frames() {
        let run = || {
            let mut sim = SimBuilder::new(open_5x5()).config(test_config()).build().unwrap();
            let mut rec = Recorder::default();
            let summary = sim.run_until_done(DT, 1_000, &mut rec).unwrap();
            (summary, rec.frames, rec.replans)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn frame_reflects_world() {
        let grid = corridor(6)
            .with_cell(Cell::new(0, 3), CellKind::SignalPost)
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(grid).config(test_config()).build().unwrap();
        sim.start_run(SearchStrategy::AStar).unwrap();
        sim.tick(DT).unwrap();
        let frame = sim.frame();
        assert_eq!(frame.tick, Tick(1));
        assert_eq!(frame.path.len(), 6);
        assert_eq!(frame.path_index, 1);
        assert_eq!(frame.status, RouteStatus::Active);
        let states: Vec<_> = frame.signal_states().collect();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].0, Cell::new(0, 3));
    }
}
