// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Side-by-side runs of every search variant.
//!
//! Runs each [`Variant`] over the same chips, times it, and checks that all
//! of them found paths of the same length. Used by the `compare` and `test`
//! commands of the `chips` binary.

use crate::chips::{Chip, Color, Path};
use crate::engine::{SearchEngine, Variant};
use crate::memo::AdjacencyIndex;
use crate::state::Statistics;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tracing::info;

/// Result of running one variant.
#[derive(Debug, Clone)]
pub struct VariantRun {
    pub variant: Variant,
    pub path: Path,
    pub elapsed: Duration,
    pub statistics: Statistics,
}

/// Results of running every variant over one chip collection.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub start: Color,
    pub end: Color,
    pub runs: Vec<VariantRun>,
}

impl Comparison {
    /// True if every variant found a path of the same length.
    pub fn agree(&self) -> bool {
        match self.runs.split_first() {
            Some((first, rest)) => rest.iter().all(|run| run.path.len() == first.path.len()),
            None => true,
        }
    }

    /// True if every variant found exactly the same path.
    pub fn identical(&self) -> bool {
        match self.runs.split_first() {
            Some((first, rest)) => rest.iter().all(|run| run.path == first.path),
            None => true,
        }
    }

    /// Length of the longest path any variant found.
    pub fn longest(&self) -> usize {
        self.runs.iter().map(|run| run.path.len()).max().unwrap_or(0)
    }

    /// Render every run, followed by the agreement verdict.
    pub fn render(&self, chips: &[Chip]) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(&render_run(chips, run, self.start, self.end));
        }
        if self.agree() {
            out.push_str("✓ All solutions agree\n");
        } else {
            out.push_str("X Solutions differ!\n");
        }
        out
    }
}

/// Run every variant over `chips`, sharing one adjacency index.
pub fn compare_variants(chips: &[Chip], start: Color, end: Color) -> Comparison {
    let adjacency = AdjacencyIndex::build(chips);
    let runs = Variant::iter()
        .map(|variant| {
            let mut engine = SearchEngine::new(variant);
            let began = Instant::now();
            let path = engine.search_with_index(chips, &adjacency, start, end);
            let elapsed = began.elapsed();
            info!(
                %variant,
                length = path.len(),
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                statistics = %engine.statistics(),
                "variant finished"
            );
            VariantRun {
                variant,
                path,
                elapsed,
                statistics: engine.statistics().clone(),
            }
        })
        .collect();
    Comparison { start, end, runs }
}

/// Message printed when a search finds nothing.
pub fn no_path_message(start: Color, end: Color) -> String {
    format!("No path found from {} to {}", start, end)
}

/// Render one path result, as printed by `chips find`.
pub fn render_path(chips: &[Chip], path: &Path, start: Color, end: Color) -> String {
    if path.is_empty() {
        return no_path_message(start, end);
    }
    format!(
        "Longest path found with length: {}\n  {}",
        path.len(),
        path.render(chips, start, end)
    )
}

fn render_run(chips: &[Chip], run: &VariantRun, start: Color, end: Color) -> String {
    let millis = run.elapsed.as_secs_f64() * 1000.0;
    let mut out = format!("{} solution:\n", run.variant);
    if run.path.is_empty() {
        out.push_str(&format!(
            "{} (Time: {:.2} ms)\n",
            no_path_message(start, end),
            millis
        ));
    } else {
        out.push_str(&format!(
            "✓ Solution found: {} chips (Time: {:.2} ms)\n",
            run.path.len(),
            millis
        ));
        out.push_str(&format!("  {}\n", run.path.render(chips, start, end)));
    }
    out
}
