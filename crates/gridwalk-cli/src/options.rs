//! Command-line options.
//!
//! `gridwalk run <MAZE> [-a STRATEGY] [--trace] [--relaxations] [--random-goal SEED] [--json]`
//! `gridwalk compare <MAZE>`

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use gridwalk_paths::Strategy;

fn maze_arg() -> Arg {
    Arg::new("maze")
        .value_name("MAZE")
        .help("JSON maze file with rows, cols, start, goal and obstacles")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn make_options_parser() -> Command {
    Command::new("gridwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Step-by-step pathfinding on an occupancy grid")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run one strategy and draw what it explored")
                .arg(maze_arg())
                .arg(
                    Arg::new("algorithm")
                        .short('a')
                        .long("algorithm")
                        .value_name("STRATEGY")
                        .help("bfs, dfs, ucs, greedy, astar or hybrid")
                        .default_value("bfs")
                        .value_parser(|s: &str| s.parse::<Strategy>()),
                )
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .help("Print every exploration step")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("relaxations")
                        .long("relaxations")
                        .help("Also report cost and heuristic updates")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("random-goal")
                        .long("random-goal")
                        .value_name("SEED")
                        .help("Move the goal to a random empty cell first")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the outcome as JSON instead of a drawing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Run all five algorithms and tabulate their cost")
                .arg(maze_arg()),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub maze: PathBuf,
    pub strategy: Strategy,
    pub trace: bool,
    pub relaxations: bool,
    pub random_goal: Option<u64>,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Options {
    Run(RunOptions),
    Compare { maze: PathBuf },
}

impl Options {
    /// Parse a full argument list, binary name first.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        match matches.subcommand() {
            Some(("run", m)) => Ok(Self::Run(RunOptions {
                maze: maze_path(m)?,
                strategy: m
                    .get_one::<Strategy>("algorithm")
                    .copied()
                    .unwrap_or(Strategy::Bfs),
                trace: m.get_flag("trace"),
                relaxations: m.get_flag("relaxations"),
                random_goal: m.get_one::<u64>("random-goal").copied(),
                json: m.get_flag("json"),
            })),
            Some(("compare", m)) => Ok(Self::Compare {
                maze: maze_path(m)?,
            }),
            _ => Err(clap::Error::raw(
                ErrorKind::MissingSubcommand,
                "expected `run` or `compare`\n",
            )),
        }
    }
}

fn maze_path(m: &ArgMatches) -> Result<PathBuf, clap::Error> {
    m.get_one::<PathBuf>("maze").cloned().ok_or_else(|| {
        clap::Error::raw(ErrorKind::MissingRequiredArgument, "missing MAZE argument\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        Options::parse_from_args(std::iter::once("gridwalk").chain(args.iter().copied()))
    }

    #[test]
    fn parser_is_well_formed() {
        make_options_parser().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let opts = parse(&["run", "maze.json"]).unwrap();
        assert_eq!(
            opts,
            Options::Run(RunOptions {
                maze: PathBuf::from("maze.json"),
                strategy: Strategy::Bfs,
                trace: false,
                relaxations: false,
                random_goal: None,
                json: false,
            })
        );
    }

    #[test]
    fn run_with_everything() {
        let opts = parse(&[
            "run",
            "m.json",
            "-a",
            "A*",
            "--trace",
            "--relaxations",
            "--random-goal",
            "7",
            "--json",
        ])
        .unwrap();
        let Options::Run(run) = opts else {
            panic!("expected run");
        };
        assert_eq!(run.strategy, Strategy::AStar);
        assert!(run.trace && run.relaxations && run.json);
        assert_eq!(run.random_goal, Some(7));
    }

    #[test]
    fn compare_takes_a_maze() {
        assert_eq!(
            parse(&["compare", "x.json"]).unwrap(),
            Options::Compare {
                maze: PathBuf::from("x.json")
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["run", "m.json", "-a", "jps"]).is_err());
        assert!(parse(&["run"]).is_err());
        assert!(parse(&["walk", "m.json"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
