//! Terminal driver for the A* walker.
//!
//! Run: cargo run --bin mazewalk -- --random 25 --mode auto

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use mazewalk_demos::{DemoError, Overrides, Source, load_config, render, share_data, summary};
use mazewalk_gen::{Fixture, RandomMaze};
use mazewalk_paths::{DEFAULT_MAX_STEPS, Heuristic, RunOutcome, StepOutcome, Walker};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run to completion and print the result.
    Run,
    /// Step on a timer, redrawing after every step.
    Auto,
    /// Step each time Enter is pressed; `q` quits.
    Manual,
}

fn parse_fixture(name: &str) -> Result<Fixture, String> {
    Fixture::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Fixture::ALL.iter().map(|f| f.name()).collect();
        format!("unknown fixture `{name}`, expected one of: {}", names.join(", "))
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Euclidean,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Euclidean => Heuristic::Euclidean,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through an A* search on a grid maze", long_about = None)]
struct Args {
    /// Number of rows (overrides the maze source)
    #[arg(short, long)]
    rows: Option<i32>,

    /// Number of columns (overrides the maze source)
    #[arg(short, long)]
    columns: Option<i32>,

    /// Let diagonal steps squeeze past a corner blocked on one side
    /// (`--cut-corners` alone means true)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    cut_corners: Option<bool>,

    /// Only allow orthogonal steps
    #[arg(long)]
    no_diagonal: bool,

    /// Generate a random maze with this many obstacles
    #[arg(long, conflicts_with_all = ["fixture", "data"])]
    random: Option<usize>,

    /// Random walls to add to a random maze
    #[arg(long, default_value_t = 0)]
    walls: usize,

    /// Seed for the random maze
    #[arg(long)]
    seed: Option<u64>,

    /// Use a built-in maze: detour, walled-detour, single-obstacle or scattered
    #[arg(short, long, value_parser = parse_fixture, conflicts_with = "data")]
    fixture: Option<Fixture>,

    /// Maze description as JSON, as printed by --print-data
    #[arg(long)]
    data: Option<String>,

    /// How steps are paced
    #[arg(short, long, value_enum, default_value_t = Mode::Run)]
    mode: Mode,

    /// Delay between steps in auto mode, in milliseconds
    #[arg(long, default_value_t = 200)]
    delay: u64,

    /// Give up after this many steps
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Label open cells with an arrow towards their parent
    #[arg(long)]
    arrows: bool,

    /// Print the maze as shareable JSON before searching
    #[arg(long)]
    print_data: bool,
}

impl Args {
    fn source(&self) -> Source {
        if let Some(json) = &self.data {
            return Source::Data(json.clone());
        }
        if let Some(obstacles) = self.random {
            return Source::Random {
                params: RandomMaze {
                    obstacles,
                    walls: self.walls,
                    ..RandomMaze::default()
                },
                seed: self.seed,
            };
        }
        Source::Fixture(self.fixture.unwrap_or(Fixture::Scattered))
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            rows: self.rows,
            columns: self.columns,
            cut_corners: self.cut_corners,
            diagonal: self.no_diagonal.then_some(false),
        }
    }
}

fn draw(w: &Walker, arrows: bool, clear: bool) {
    if clear {
        print!("\x1b[2J\x1b[H");
    }
    print!("{}", render(w, arrows));
    println!("{}", summary(w));
    let _ = io::stdout().flush();
}

fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::GoalFound(path) => {
            let waypoints: Vec<String> = path.iter().map(ToString::to_string).collect();
            log::info!("path: {}", waypoints.join(" "));
        }
        RunOutcome::NoPathExists => log::info!("the goal cannot be reached"),
        RunOutcome::BudgetExhausted => log::warn!("gave up before the search finished"),
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let source = args.source();
    log::info!("maze source: {source:?}");
    let cfg = load_config(&source, &args.overrides())?;
    if args.print_data {
        println!("{}", share_data(&cfg)?);
    }

    let mut walker = Walker::with_heuristic(cfg.build()?, args.heuristic.into());
    log::info!(
        "searching {} from {} to {} (cut corners: {}, diagonal: {})",
        walker.maze().dims(),
        cfg.start,
        cfg.goal,
        cfg.cut_corners,
        cfg.diagonal
    );

    match args.mode {
        Mode::Run => {
            let outcome = walker.run(args.max_steps);
            draw(&walker, args.arrows, false);
            report(&outcome);
        }
        Mode::Auto => {
            draw(&walker, args.arrows, true);
            while !walker.is_finished() && walker.iterations() < args.max_steps {
                thread::sleep(Duration::from_millis(args.delay));
                walker.step();
                draw(&walker, args.arrows, true);
            }
            report(&walker.run(0));
        }
        Mode::Manual => {
            draw(&walker, args.arrows, false);
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim() == "q" {
                    break;
                }
                let outcome = walker.step();
                draw(&walker, args.arrows, false);
                if outcome != StepOutcome::Continuing {
                    break;
                }
            }
            report(&walker.run(0));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
