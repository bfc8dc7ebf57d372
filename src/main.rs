// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `chips`: command-line driver for the longest chip chain search.

use anyhow::Result;
use chip_search::report::{compare_variants, render_path};
use chip_search::samples::{self, DEFAULT_END, DEFAULT_START, SAMPLES};
use chip_search::{Chip, ChipError, Color, SearchEngine, Variant};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chips")]
#[command(about = "Find the longest chain of color chips from a start color to an end color", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search with one variant and print the path.
    Find {
        #[arg(long, default_value = "indexed", value_parser = Variant::parse)]
        variant: Variant,

        #[command(flatten)]
        input: Input,
    },

    /// Run every variant on the same input and compare.
    Compare {
        #[command(flatten)]
        input: Input,
    },

    /// Compare every variant on every sample and check the expected outcomes.
    Test {
        /// Also run samples that take seconds to search.
        #[arg(long)]
        include_slow: bool,
    },

    /// List the sample datasets.
    Samples,
}

#[derive(Args)]
struct Input {
    /// Start color.
    #[arg(long, default_value_t = DEFAULT_START, value_parser = Color::parse)]
    start: Color,

    /// End color.
    #[arg(long, default_value_t = DEFAULT_END, value_parser = Color::parse)]
    end: Color,

    /// Named sample dataset (see `chips samples`).
    #[arg(long, default_value = "original", conflicts_with = "chip")]
    sample: String,

    /// A chip as START:END, e.g. Blue:Yellow. Repeat for each chip, in order.
    #[arg(long = "chip", value_parser = parse_chip)]
    chip: Vec<Chip>,
}

impl Input {
    fn chips(&self) -> Result<Vec<Chip>, ChipError> {
        if !self.chip.is_empty() {
            return Ok(self.chip.clone());
        }
        Ok(samples::sample(&self.sample)?.chips.to_vec())
    }
}

fn parse_chip(s: &str) -> Result<Chip, ChipError> {
    s.parse()
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_chips(chips: &[Chip]) {
    println!("Chips: {}", chips.len());
    for (id, chip) in chips.iter().enumerate() {
        println!("  [{}] {}", id, chip);
    }
}

fn find(variant: Variant, input: &Input) -> Result<()> {
    let chips = input.chips()?;
    let mut engine = SearchEngine::new(variant);
    println!("Finding the longest path with the {} search...", variant);
    let path = engine.search(&chips, input.start, input.end);
    debug!(statistics = %engine.statistics(), "search finished");
    println!("{}", render_path(&chips, &path, input.start, input.end));
    Ok(())
}

fn compare(input: &Input) -> Result<()> {
    let chips = input.chips()?;
    print_chips(&chips);
    let comparison = compare_variants(&chips, input.start, input.end);
    print!("{}", comparison.render(&chips));
    Ok(())
}

fn test(include_slow: bool) -> Result<()> {
    println!("Chip Search Tests");
    println!("===========================================");
    println!();

    let mut failures = 0;
    for (number, sample) in SAMPLES.iter().enumerate() {
        if sample.slow && !include_slow {
            println!(
                "Test Case {}: {} (skipped, use --include-slow)",
                number + 1,
                sample.description
            );
            println!();
            continue;
        }
        println!("Test Case {}: {}", number + 1, sample.description);
        println!("Expected: {:?}", sample.expected);
        print_chips(sample.chips);

        let comparison = compare_variants(sample.chips, DEFAULT_START, DEFAULT_END);
        print!("{}", comparison.render(sample.chips));

        if !comparison.agree() || !sample.expected.accepts(comparison.longest()) {
            warn!(sample = sample.name, "unexpected result");
            println!("X Expected {:?}", sample.expected);
            failures += 1;
        }
        println!();
    }

    if failures > 0 {
        anyhow::bail!("{} test case(s) failed", failures);
    }
    Ok(())
}

fn list_samples() {
    for sample in SAMPLES {
        println!("{:<14} {} ({} chips)", sample.name, sample.description, sample.chips.len());
        for chip in sample.chips {
            println!("    {}", chip);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Find { variant, input }) => find(variant, &input),
        Some(Commands::Compare { input }) => compare(&input),
        Some(Commands::Test { include_slow }) => test(include_slow),
        Some(Commands::Samples) => {
            list_samples();
            Ok(())
        }
        None => {
            let input = Input {
                start: DEFAULT_START,
                end: DEFAULT_END,
                sample: "original".to_string(),
                chip: Vec::new(),
            };
            find(Variant::default(), &input)
        }
    }
}
