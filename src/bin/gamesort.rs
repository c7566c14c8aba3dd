use std::env;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Builder as LoggerBuilder;
use log::{LevelFilter, info, warn};
use rand::seq::SliceRandom;

use gamesort::catalog::{Game, create_rng, generate_catalog};
use gamesort::common::{format_elapsed, reset_sigpipe};
use gamesort::sort::{
    Algorithm, Relation, SortConfig, find_game_disorder, parse_run_size, sort_games,
};

#[derive(Parser)]
#[command(
    name = "gamesort",
    about = "Sort a generated game catalog and compare sorting algorithms"
)]
struct Cli {
    /// Number of records in the generated catalog
    #[arg(short = 'n', long = "count", value_name = "N", default_value_t = 10_000)]
    count: usize,

    /// Seed for the catalog generator (random when omitted)
    #[arg(long = "seed", value_name = "SEED")]
    seed: Option<u64>,

    /// Sort key: title, score, genre or platform
    #[arg(short = 'k', long = "key", value_name = "KEY", default_value = "title")]
    key: Relation,

    /// Algorithm to run: insertion, merge, timsort or std (repeatable; default all)
    #[arg(short = 'a', long = "algorithm", value_name = "ALGO")]
    algorithms: Vec<Algorithm>,

    /// Run length for the hybrid sort
    #[arg(long = "run-size", value_name = "N", value_parser = parse_run_size, default_value = "32")]
    run_size: NonZeroUsize,

    /// Sort in descending order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Print the first N records of the sorted catalog
    #[arg(long = "head", value_name = "N", default_value_t = 0)]
    head: usize,

    /// Verify each result is sorted and matches the standard stable sort
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = LoggerBuilder::new();
    builder.filter(None, level);
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

/// Sort the catalog with every requested algorithm. Returns `false` when
/// `--check` finds an algorithm whose output disagrees with the reference.
fn run(cli: &Cli) -> Result<bool> {
    let mut rng = create_rng(cli.seed);
    let start = Instant::now();
    let catalog = generate_catalog(cli.count, &mut rng);
    info!(
        "generated {} records in {}",
        catalog.len(),
        format_elapsed(start.elapsed())
    );

    let algorithms: Vec<Algorithm> = if cli.algorithms.is_empty() {
        Algorithm::all(cli.run_size).to_vec()
    } else {
        cli.algorithms
            .iter()
            .map(|a| a.with_run_size(cli.run_size))
            .collect()
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(
        out,
        "Sorting {} records by {}{}:",
        catalog.len(),
        cli.key,
        if cli.reverse { " (descending)" } else { "" }
    )?;

    let handles: Vec<&Game> = catalog.iter().collect();
    let mut all_agree = true;
    let mut last_order = Vec::new();

    for algorithm in algorithms {
        let config = SortConfig {
            relation: cli.key,
            algorithm,
            descending: cli.reverse,
        };

        let mut order = handles.clone();
        order.shuffle(&mut rng);
        let input = if cli.check { order.clone() } else { Vec::new() };

        let start = Instant::now();
        sort_games(&mut order, &config);
        let elapsed = start.elapsed();
        writeln!(out, "{} took {}", algorithm, format_elapsed(elapsed))?;

        if cli.check && !agrees_with_reference(&input, &order, &config) {
            all_agree = false;
        }
        last_order = order;
    }

    if let (Some(first), Some(last)) = (last_order.first(), last_order.last()) {
        writeln!(out, "First record: {}", first)?;
        writeln!(out, "Last record: {}", last)?;
    }
    for game in last_order.iter().take(cli.head) {
        writeln!(out, "{}", game)?;
    }
    out.flush().context("failed to flush output")?;

    Ok(all_agree)
}

/// Compare `sorted` against the standard stable sort of the same `input`.
/// Records are compared by identity, so equal-keyed records in a different
/// relative order count as a disagreement.
fn agrees_with_reference(input: &[&Game], sorted: &[&Game], config: &SortConfig) -> bool {
    if let Some(i) = find_game_disorder(sorted, config) {
        warn!(
            "{}: records {} and {} are out of order",
            config.algorithm,
            i,
            i + 1
        );
        return false;
    }

    let mut reference = input.to_vec();
    sort_games(
        &mut reference,
        &SortConfig {
            algorithm: Algorithm::Std,
            ..*config
        },
    );
    match reference
        .iter()
        .zip(sorted)
        .position(|(a, b)| !std::ptr::eq(*a, *b))
    {
        Some(i) => {
            warn!(
                "{}: differs from the reference sort at position {}",
                config.algorithm, i
            );
            false
        }
        None => {
            info!("{}: matches the reference sort", config.algorithm);
            true
        }
    }
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("gamesort: {:#}", e);
            process::exit(2);
        }
    }
}
