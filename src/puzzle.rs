use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use tracing::info;

use crate::common::{SearchOutcome, Solution};
use crate::map::Map;
use crate::stat::Stats;

/// One puzzle instance: the immutable board plus the stone weight list,
/// index-aligned with the stone scan order on the board.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub weights: Vec<usize>,
    pub map: Map,
}

impl Puzzle {
    /// Load a puzzle file: first line is the whitespace-separated weight
    /// list, the remaining lines are the grid.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open puzzle {path}"))?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let weight_line = lines
            .next()
            .context("puzzle file is empty")?
            .context("failed to read weight line")?;
        let rows: Vec<Vec<char>> = lines
            .map(|line| line.map(|l| l.chars().collect()))
            .collect::<std::io::Result<_>>()
            .context("failed to read grid lines")?;

        Self::parse(&weight_line, &rows).with_context(|| format!("invalid puzzle {path}"))
    }

    /// Parse an already-read weight line and grid rows. Validation errors
    /// here are configuration errors: no search is ever attempted on them.
    pub fn parse(weight_line: &str, rows: &[Vec<char>]) -> Result<Self> {
        let weights = weight_line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<usize>()
                    .with_context(|| format!("invalid stone weight {token:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let map = Map::from_rows(rows)?;
        if map.stone_starts().len() != weights.len() {
            bail!(
                "number of stones ({}) does not match number of weights ({})",
                map.stone_starts().len(),
                weights.len()
            );
        }

        Ok(Puzzle { weights, map })
    }

    /// The heuristic's square assignment needs one switch per stone.
    /// Surfaced before the informed search starts.
    pub fn validate_for_heuristic(&self) -> Result<()> {
        if self.map.stone_starts().len() != self.map.switches.len() {
            bail!(
                "number of stones ({}) does not match number of switches ({})",
                self.map.stone_starts().len(),
                self.map.switches.len()
            );
        }
        Ok(())
    }
}

/// Machine-readable record of one completed run.
#[derive(Debug, Serialize)]
pub struct ResultRecord {
    pub input_file: String,
    pub algorithm: String,
    pub outcome: String,
    pub steps: usize,
    pub total_weight: usize,
    pub cost: usize,
    pub nodes_generated: usize,
    pub time_us: usize,
    pub peak_memory_bytes: usize,
    pub path: String,
}

impl ResultRecord {
    pub fn new(input_file: &str, algorithm: &str, outcome: &SearchOutcome, stats: &Stats) -> Self {
        let (label, solution) = match outcome {
            SearchOutcome::Solved(solution) => ("solved", Some(solution)),
            SearchOutcome::NoPath => ("no_path", None),
            SearchOutcome::DepthLimitExceeded => ("depth_limit_exceeded", None),
        };
        ResultRecord {
            input_file: input_file.to_string(),
            algorithm: algorithm.to_string(),
            outcome: label.to_string(),
            steps: solution.map_or(0, Solution::steps),
            total_weight: solution.map_or(0, Solution::total_weight),
            cost: solution.map_or(0, |s| s.cost),
            nodes_generated: stats.nodes_generated,
            time_us: stats.time_us,
            peak_memory_bytes: stats.peak_memory_bytes,
            path: solution.map_or_else(String::new, |s| s.path.clone()),
        }
    }

    pub fn append_to_json(&self, path: &str) -> Result<()> {
        let mut file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open result file {path}"))?;
        serde_json::to_writer(&mut file, self)?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

/// Write a solved run in the plain-text report format.
pub fn write_output(
    path: &str,
    algorithm: &str,
    solution: &Solution,
    stats: &Stats,
) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create output file {path}"))?;
    writeln!(file, "{algorithm}")?;
    writeln!(file, "Steps: {}", solution.steps())?;
    writeln!(file, "Total Weight Pushed: {}", solution.total_weight())?;
    writeln!(file, "Nodes Generated: {}", stats.nodes_generated)?;
    writeln!(file, "Time Taken: {:.4} seconds", stats.time_us as f64 / 1e6)?;
    writeln!(
        file,
        "Memory Used: {:.2} KB",
        stats.peak_memory_bytes as f64 / 1024.0
    )?;
    writeln!(file, "{}", solution.path)?;
    info!("wrote solution to {path}");
    Ok(())
}

/// Write a failed run: an `Error` header line followed by the message.
pub fn write_error_output(path: &str, message: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create output file {path}"))?;
    writeln!(file, "Error")?;
    writeln!(file, "{message}")?;
    Ok(())
}

/// Write an unsolved run; `message` labels the outcome.
pub fn write_message_output(path: &str, message: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create output file {path}"))?;
    writeln!(file, "{message}")?;
    Ok(())
}
