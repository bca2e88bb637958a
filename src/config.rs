use anyhow::anyhow;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "Rust Sokoban",
    about = "Weighted Sokoban search algorithms implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to a single puzzle input file")]
    pub input_path: Option<String>,

    #[arg(long, help = "Directory of puzzle input files to process in turn")]
    pub input_dir: Option<String>,

    #[arg(
        long,
        help = "Directory for the per-puzzle output files",
        default_value = "output"
    )]
    pub output_dir: String,

    #[arg(long, help = "Solver to use: bfs, dfs, ucs or astar", default_value = "ucs")]
    pub solver: String,

    #[arg(
        long,
        help = "Depth bound for the depth-first solver",
        default_value_t = 10_000
    )]
    pub max_depth: usize,

    #[arg(long, help = "Optional JSON-lines file to append run records to")]
    pub record_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: Option<String>,
    pub input_dir: Option<String>,
    pub output_dir: String,
    pub solver: String,
    pub max_depth: usize,
    pub record_path: Option<String>,
}

impl Config {
    pub fn new(cli: &Cli) -> Self {
        Self {
            input_path: cli.input_path.clone(),
            input_dir: cli.input_dir.clone(),
            output_dir: cli.output_dir.clone(),
            solver: cli.solver.clone(),
            max_depth: cli.max_depth,
            record_path: cli.record_path.clone(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.solver.as_str() {
            "bfs" | "dfs" | "ucs" | "astar" => {}
            other => {
                return Err(anyhow!(
                    "unknown solver {other:?}, expected one of bfs, dfs, ucs, astar"
                ));
            }
        }

        if self.input_path.is_none() && self.input_dir.is_none() {
            return Err(anyhow!("either --input-path or --input-dir is required"));
        }

        if self.solver == "dfs" && self.max_depth == 0 {
            return Err(anyhow!("depth bound must be at least 1"));
        }

        Ok(())
    }
}
