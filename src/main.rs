// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::Context;
use clap::Parser;
use cube_search::context::{parse_blacklist, solve, SolutionLimit, SolverConfig};
use cube_search::cubie::{format_moves, parse_moves, CubieCube, Move};
use cube_search::memo::{TableCache, Tables};
use cube_search::scramble::{random_scramble, seeded_rng, SCRAMBLE_LENGTH};
use cube_search::state::StatsLog;
use log::info;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "cube")]
#[command(about = "Two-phase Rubik's Cube solver", long_about = None)]
struct Cli {
    /// Solve the cube given as 54 facelets in URFDLB order, e.g. UUUUUUUUURRR...
    #[arg(long, value_name = "FACELETS")]
    solve: Option<String>,

    /// Solve a scramble: the given moves, or 50 random moves if none are given
    #[arg(long, value_name = "MOVES", num_args = 0..=1, require_equals = true)]
    solve_scramble: Option<Option<String>>,

    /// Maximum total solution length
    #[arg(long, default_value_t = 25)]
    max_depth: usize,

    /// Solutions to find: 0 = phase 1 only, -1 = all
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    n_solutions: i64,

    /// Faces never to turn, e.g. LB
    #[arg(long, value_name = "FACES", default_value = "")]
    move_blacklist: String,

    /// Solve random scrambles for a while and report throughput
    #[arg(long)]
    benchmarks: bool,

    /// Benchmark duration in seconds
    #[arg(long, default_value_t = 10)]
    benchmark_seconds: u64,

    /// Delete cached tables and rebuild them
    #[arg(long)]
    rebuild_tables: bool,

    /// Directory for cached tables
    #[arg(long, value_name = "DIR", default_value = "cache")]
    cache_dir: PathBuf,

    /// Write per-solve statistics as CSV
    #[arg(long, value_name = "FILE")]
    stats_csv: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // Failures are reported, not signalled through the exit status.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return;
        }
    };
    if let Err(err) = run(&cli) {
        println!("Error: {:#}", err);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = SolverConfig::default()
        .with_max_depth(cli.max_depth)?
        .with_solutions(SolutionLimit::from_count(cli.n_solutions)?)
        .with_blacklist(parse_blacklist(&cli.move_blacklist)?)
        .with_cache_dir(&cli.cache_dir)
        .with_rebuild_tables(cli.rebuild_tables);
    if let Some(Some(moves)) = &cli.solve_scramble {
        config = config.with_scramble(parse_moves(moves).context("parsing --solve-scramble")?);
    }

    let cache = TableCache::new(config.cache_dir());
    if config.rebuild_tables() {
        info!("Removing cached tables in {}", config.cache_dir().display());
        cache.clear().context("clearing the table cache")?;
    }
    let tables = Tables::build(&cache);
    let mut log = StatsLog::new();

    if let Some(facelets) = &cli.solve {
        let cube: CubieCube = facelets.parse().context("parsing --solve")?;
        report(&tables, &config, &cube, &mut log);
    }

    if cli.solve_scramble.is_some() {
        let scramble: Vec<Move> = match config.scramble() {
            Some(moves) => moves.to_vec(),
            None => random_scramble(&mut rand::thread_rng(), SCRAMBLE_LENGTH),
        };
        println!("Scramble: {}", format_moves(&scramble));
        let cube = CubieCube::from_moves(&scramble);
        report(&tables, &config, &cube, &mut log);
    }

    if cli.benchmarks {
        benchmark(&tables, &config, Duration::from_secs(cli.benchmark_seconds), &mut log);
    }

    if let Some(path) = &cli.stats_csv {
        log.save_csv(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {} solve records to {}", log.len(), path.display());
    }
    Ok(())
}

fn report(tables: &Tables, config: &SolverConfig, cube: &CubieCube, log: &mut StatsLog) {
    let start = Instant::now();
    let solutions = solve(tables, config, cube, log);
    if solutions.is_empty() {
        println!("Failed to solve within {} moves", config.max_depth());
        return;
    }
    for solution in &solutions {
        println!("{}", solution);
    }
    println!("{} solution(s) in {:.2?}", solutions.len(), start.elapsed());
}

fn benchmark(tables: &Tables, config: &SolverConfig, budget: Duration, log: &mut StatsLog) {
    let mut rng = seeded_rng(0);
    let start = Instant::now();
    let mut solves = 0u32;
    let mut failures = 0u32;
    let mut total_length = 0usize;
    while start.elapsed() < budget {
        let scramble = random_scramble(&mut rng, SCRAMBLE_LENGTH);
        let solutions = solve(tables, config, &CubieCube::from_moves(&scramble), log);
        match solutions.first() {
            Some(solution) => total_length += solution.len(),
            None => failures += 1,
        }
        solves += 1;
    }
    let elapsed = start.elapsed();
    let solved = solves - failures;
    println!("Benchmark: {} solves in {:.2?} ({} failed)", solves, elapsed, failures);
    if solves > 0 {
        println!("  {:.2} solves/s", solves as f64 / elapsed.as_secs_f64());
        println!("  {:.2?} per solve", elapsed / solves);
    }
    if solved > 0 {
        println!("  {:.2} moves per solution", total_length as f64 / solved as f64);
    }
}
