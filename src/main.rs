#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use dupscan::config::{BenchConfig, ReportFormat};
use dupscan::{Finder, bench, process, report};

fn cli() -> Command {
    Command::new("dupscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare naive and optimized duplicate detection")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
        .subcommand(bench_command())
        .subcommand(
            Command::new("process")
                .about("Find the repeats in a fixed sample and time it")
                .arg(
                    Arg::new("len")
                        .long("len")
                        .value_parser(value_parser!(usize))
                        .default_value("1000")
                        .help("Length of the sequential part of the sample"),
                )
                .arg(
                    Arg::new("finder")
                        .long("finder")
                        .value_parser(["naive", "optimized"])
                        .default_value("optimized")
                        .help("Finder to run"),
                ),
        )
}

fn bench_command() -> Command {
    Command::new("bench")
        .about("Time both finders over growing inputs (default)")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
        .arg(
            Arg::new("sizes")
                .long("sizes")
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .help("Comma separated input sizes"),
        )
        .arg(
            Arg::new("dup-ratio")
                .long("dup-ratio")
                .value_parser(value_parser!(f64))
                .help("Injected repeats as a fraction of the size"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed for reproducible inputs"),
        )
        .arg(
            Arg::new("regression-floor")
                .long("regression-floor")
                .value_parser(value_parser!(usize))
                .help("Warn when the optimized finder is slower from this size on"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["table", "json"])
                .help("Report format"),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let log_level = match matches.get_count("verbose") {
        0 => None,
        1 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };
    dupscan::setup(log_level);

    match matches.subcommand() {
        Some(("process", sub)) => run_process(sub),
        Some(("bench", sub)) => run_bench(sub),
        _ => run_bench(&bench_command().get_matches_from(["bench"])),
    }
}

/// Apply command line flags on top of an already loaded config.
fn apply_flags(mut config: BenchConfig, matches: &ArgMatches) -> Result<BenchConfig> {
    if let Some(sizes) = matches.get_many::<usize>("sizes") {
        config.sizes = sizes.copied().collect();
    }
    if let Some(&dup_ratio) = matches.get_one::<f64>("dup-ratio") {
        config.dup_ratio = dup_ratio;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if let Some(&floor) = matches.get_one::<usize>("regression-floor") {
        config.regression_floor = floor;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format
            .parse::<ReportFormat>()
            .with_context(|| format!("Unknown report format: {format}"))?;
    }

    config.validate().context("Invalid benchmark configuration")?;
    Ok(config)
}

fn run_bench(matches: &ArgMatches) -> Result<()> {
    // defaults, then the config file, then flags
    let explicit = matches.get_one::<PathBuf>("config");
    let loaded = BenchConfig::load(explicit.map(PathBuf::as_path))
        .context("Failed to load benchmark configuration")?;
    let config = apply_flags(loaded, matches)?;
    let rows = bench::run(&config);

    let mut stdout = std::io::stdout().lock();
    report::write_report(&mut stdout, &rows, config.format).context("Failed to write report")?;
    Ok(())
}

fn run_process(matches: &ArgMatches) -> Result<()> {
    let len = matches.get_one::<usize>("len").copied().unwrap_or(process::DEFAULT_SAMPLE_LEN);
    let finder = match matches.get_one::<String>("finder") {
        Some(name) => name
            .parse::<Finder>()
            .with_context(|| format!("Unknown finder: {name}"))?,
        None => Finder::Optimized,
    };

    let outcome = process::process(len, finder);
    println!("{outcome}");
    Ok(())
}
