//! gridnav-headless — run the gridnav route follower without a window.
//!
//! Loads a map (or the built-in demo city), runs one search strategy (or all
//! three back to back on the same world), prints a summary table and
//! optionally writes `agent_frames.csv` / `events.csv`.
//!
//! ```text
//! gridnav-headless --map city.csv --config gridnav.toml --strategy bfs --out output/
//! RUST_LOG=gn_sim=debug gridnav-headless --all --render
//! ```

mod render;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gn_core::Grid;
use gn_output::{CsvWriter, SimOutputObserver};
use gn_search::SearchStrategy;
use gn_sim::{NoopObserver, RunSummary, Sim, SimBuilder, SimConfig};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "gridnav-headless", about = "Grid route following with signals and obstacles")]
struct Args {
    /// Map file: `.csv` for headerless CSV codes, anything else for the text format.
    #[arg(long)]
    map: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search strategy: bfs, dfs or astar.  Overrides `run.strategy`.
    #[arg(long)]
    strategy: Option<SearchStrategy>,

    /// Run bfs, dfs and astar in turn on the same world.
    #[arg(long, conflicts_with = "strategy")]
    all: bool,

    /// Seconds per tick.  Overrides `run.dt_secs`.
    #[arg(long)]
    dt: Option<f64>,

    /// Tick limit per run.  Overrides `run.max_ticks`.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Directory for CSV output (one subdirectory per strategy with --all).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write every Nth frame to the CSV output.
    #[arg(long, default_value_t = 1)]
    frame_interval: u64,

    /// Print the map with the agent's final state after each run.
    #[arg(long)]
    render: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gridnav_headless=info,gn_sim=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            SimConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(dt) = args.dt {
        config.run.dt_secs = dt;
    }
    if let Some(n) = args.max_ticks {
        config.run.max_ticks = n;
    }
    if let Some(s) = args.strategy {
        config.run.strategy = s;
    }

    let grid = load_map(args.map.as_deref())?;
    println!(
        "Map: {}×{}  start {}  goal {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal()
    );

    let strategies = if args.all { SearchStrategy::ALL.to_vec() } else { vec![config.run.strategy] };

    let mut sim = SimBuilder::new(grid).config(config).build().context("building simulation")?;

    let mut summaries = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let out_dir = args.out.as_ref().map(|dir| {
            if args.all { dir.join(strategy.as_str()) } else { dir.clone() }
        });

        let t0 = Instant::now();
        let summary = run_one(&mut sim, strategy, out_dir.as_deref(), args.frame_interval)?;
        info!(%strategy, wall_ms = t0.elapsed().as_millis() as u64, "run finished");

        if args.render {
            println!();
            println!("[{strategy}] final state:");
            print!("{}", render::render(sim.world().grid(), &sim.frame()));
        }
        summaries.push(summary);
    }

    print_table(&summaries);
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_map(path: Option<&Path>) -> Result<Grid> {
    let Some(path) = path else {
        info!("no --map given, using the built-in demo city");
        return gn_map::demo_city().context("parsing the built-in demo city");
    };

    let is_csv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let grid = if is_csv {
        gn_map::load_grid_csv(path)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        gn_map::parse_grid_text(&text)
    };
    grid.with_context(|| format!("loading map {}", path.display()))
}

fn run_one(
    sim:            &mut Sim,
    strategy:       SearchStrategy,
    out_dir:        Option<&Path>,
    frame_interval: u64,
) -> Result<RunSummary> {
    sim.start_run(strategy)?;
    let dt = sim.config.run.dt_secs;
    let max_ticks = sim.config.run.max_ticks;

    let Some(dir) = out_dir else {
        return Ok(sim.run_until_done(dt, max_ticks, &mut NoopObserver)?);
    };

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let writer = CsvWriter::new(dir)?;
    let mut obs = SimOutputObserver::new(writer).with_frame_interval(frame_interval);
    let summary = sim.run_until_done(dt, max_ticks, &mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!("CSV output written to {}", dir.display());
    Ok(summary)
}

fn print_table(summaries: &[RunSummary]) {
    println!();
    println!(
        "{:<8} {:<10} {:>8} {:>10} {:>8} {:>10} {:<10}",
        "Strategy", "Outcome", "Ticks", "Seconds", "Replans", "Obstacles", "Final"
    );
    println!("{}", "-".repeat(70));
    for s in summaries {
        println!(
            "{:<8} {:<10} {:>8} {:>10.2} {:>8} {:>10} {:<10}",
            s.strategy.as_str(),
            s.outcome.as_str(),
            s.ticks,
            s.elapsed_secs,
            s.replans,
            s.obstacles,
            s.final_cell.to_string(),
        );
    }
}
