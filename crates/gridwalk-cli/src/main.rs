//! `gridwalk`: load a maze, run a search, print what it explored.

mod compare;
mod options;
mod render;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use gridwalk_core::{Maze, MazeConfig};
use gridwalk_paths::{ExplorationSink, SearchRequest};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::options::{Options, RunOptions};
use crate::render::Board;

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter_or("GRIDWALK_LOG", "warn")
        .write_style("GRIDWALK_LOG_STYLE");
    env_logger::init_from_env(env);

    let options = Options::parse_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    log::debug!("options: {options:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options {
        Options::Run(opts) => run(&opts, &mut out),
        Options::Compare { maze } => {
            let grid = load_maze(&maze)?.snapshot();
            writeln!(out, "{}", describe(&grid.to_config()))?;
            compare::write_table(&mut out, &compare::compare(&grid))?;
            Ok(())
        }
    }
}

fn load_maze(path: &Path) -> Result<Maze> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let cfg = MazeConfig::from_json_reader(BufReader::new(file))
        .with_context(|| format!("cannot read maze {}", path.display()))?;
    Maze::from_config(&cfg).with_context(|| format!("invalid maze {}", path.display()))
}

fn describe(cfg: &MazeConfig) -> String {
    format!(
        "maze {}x{}, start {:?}, goal {:?}, {} obstacles",
        cfg.rows,
        cfg.cols,
        cfg.start,
        cfg.goal,
        cfg.obstacles.len()
    )
}

fn run<W: Write>(opts: &RunOptions, out: &mut W) -> Result<()> {
    let mut maze = load_maze(&opts.maze)?;
    if let Some(seed) = opts.random_goal {
        let mut rng = StdRng::seed_from_u64(seed);
        let goal = maze.relocate_goal(&mut rng)?;
        log::info!("goal moved to {goal}");
    }
    let grid = maze.snapshot();
    let request = SearchRequest::new(opts.strategy).with_relaxations(opts.relaxations);
    let outcome = request.run(&grid);

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &outcome)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", describe(&grid.to_config()))?;
    let mut board = Board::new(&grid);
    for event in &outcome.events {
        board.on_event(event);
        if opts.trace || render::is_status(event) {
            writeln!(out, "{event}")?;
        }
    }
    write!(out, "{board}")?;

    let stats = outcome.stats;
    match (outcome.winner, outcome.result.path()) {
        (Some(alg), Some(path)) => {
            writeln!(out, "{} via {alg}: {path}", opts.strategy)?;
        }
        _ => writeln!(out, "{}: no path", opts.strategy)?,
    }
    writeln!(
        out,
        "expanded {}, pushed {}, frontier peak {}",
        stats.expanded, stats.pushed, stats.max_frontier
    )?;
    Ok(())
}
