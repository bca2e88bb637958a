use sokoban_rust::common::SearchOutcome;
use sokoban_rust::config::{Cli, Config};
use sokoban_rust::puzzle::{self, Puzzle, ResultRecord};
use sokoban_rust::solver::solver_for;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();
    let cli = Cli::parse();
    let config = Config::new(&cli);
    config.validate()?;

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create output dir {}", config.output_dir))?;

    let inputs = collect_inputs(&config)?;
    for input in inputs {
        // One bad puzzle file gets an error report, not an aborted batch.
        if let Err(err) = run_puzzle(&config, &input) {
            error!("{}: {err:#}", input.display());
        }
    }

    Ok(())
}

fn collect_inputs(config: &Config) -> Result<Vec<PathBuf>> {
    if let Some(path) = &config.input_path {
        return Ok(vec![PathBuf::from(path)]);
    }

    let dir = config.input_dir.as_ref().expect("validated by config");
    let mut inputs: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read input dir {dir}"))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    inputs.sort();
    Ok(inputs)
}

fn run_puzzle(config: &Config, input: &Path) -> Result<()> {
    let input_str = input.to_string_lossy();
    let stem = input
        .file_stem()
        .context("input path has no file name")?
        .to_string_lossy();
    let output_path = format!("{}/{}.txt", config.output_dir, stem);

    let puzzle = match Puzzle::load_from_file(&input_str) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            puzzle::write_error_output(&output_path, &format!("{err:#}"))?;
            return Err(err);
        }
    };

    let mut solver = solver_for(config, puzzle);
    let outcome = match solver.solve(config) {
        Ok(outcome) => outcome,
        Err(err) => {
            puzzle::write_error_output(&output_path, &format!("{err:#}"))?;
            return Err(err);
        }
    };

    match &outcome {
        SearchOutcome::Solved(solution) => {
            puzzle::write_output(&output_path, solver.name(), solution, solver.stats())?;
        }
        SearchOutcome::NoPath => {
            puzzle::write_message_output(&output_path, "No solution found")?;
        }
        SearchOutcome::DepthLimitExceeded => {
            puzzle::write_message_output(
                &output_path,
                "The searching got over the limit of recursion",
            )?;
        }
    }

    if let Some(record_path) = &config.record_path {
        ResultRecord::new(&input_str, solver.name(), &outcome, solver.stats())
            .append_to_json(record_path)?;
    }

    info!("processed {} -> {output_path}", input.display());
    Ok(())
}
