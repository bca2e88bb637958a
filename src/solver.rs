mod astar;
mod bfs;
mod common;
mod dfs;
mod ucs;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use ucs::Ucs;

use crate::common::SearchOutcome;
use crate::config::Config;
use crate::puzzle::Puzzle;
use crate::stat::Stats;

pub trait Solver {
    /// Run the search to completion. Configuration problems (for the
    /// informed driver, unbalanced stone/switch counts) surface as errors
    /// before the loop starts; an exhausted frontier is a normal outcome.
    fn solve(&mut self, config: &Config) -> anyhow::Result<SearchOutcome>;

    fn stats(&self) -> &Stats;

    fn name(&self) -> &'static str;
}

pub fn solver_for(config: &Config, puzzle: Puzzle) -> Box<dyn Solver> {
    match config.solver.as_str() {
        "bfs" => Box::new(Bfs::new(puzzle)),
        "dfs" => Box::new(Dfs::new(puzzle)),
        "ucs" => Box::new(Ucs::new(puzzle)),
        "astar" => Box::new(AStar::new(puzzle)),
        // Rejected by Config::validate before we get here.
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(weights: &str, grid: &str) -> Puzzle {
        let rows: Vec<Vec<char>> = grid.lines().map(|line| line.chars().collect()).collect();
        Puzzle::parse(weights, &rows).unwrap()
    }

    fn config(solver: &str) -> Config {
        Config {
            input_path: None,
            input_dir: None,
            output_dir: "output".to_string(),
            solver: solver.to_string(),
            max_depth: 10_000,
            record_path: None,
        }
    }

    fn solve(solver_name: &str, weights: &str, grid: &str) -> SearchOutcome {
        let config = config(solver_name);
        let mut solver = solver_for(&config, puzzle(weights, grid));
        solver.solve(&config).unwrap()
    }

    const CORRIDOR: &str = "#######\n#@ $ .#\n#######";

    #[test]
    fn test_all_drivers_solve_the_corridor() {
        // Walk right once, then push twice: "rRR", cost 1 + 2 * (1 + 2).
        for name in ["bfs", "dfs", "ucs", "astar"] {
            match solve(name, "2", CORRIDOR) {
                SearchOutcome::Solved(solution) => {
                    assert_eq!(solution.path, "rRR", "{name}");
                    assert_eq!(solution.cost, 7, "{name}");
                }
                other => panic!("{name} returned {other:?}"),
            }
        }
    }

    #[test]
    fn test_ucs_and_astar_agree_on_optimal_cost() {
        let grid = "########\n#@$  . #\n# $  . #\n########";
        let ucs = solve("ucs", "3 1", grid);
        let astar = solve("astar", "3 1", grid);

        let (SearchOutcome::Solved(a), SearchOutcome::Solved(b)) = (ucs, astar) else {
            panic!("expected both drivers to solve the puzzle");
        };
        assert_eq!(a.cost, b.cost);
    }

    #[test]
    fn test_bfs_fewest_actions_can_cost_more_than_ucs() {
        // The stone sits between two switches. Three pushes right reach
        // the far one in 3 actions at cost 3 * (1 + 5) = 18; walking
        // behind the stone and pushing it left twice takes 6 actions but
        // only costs 4 + 2 * (1 + 5) = 16.
        let grid = "########\n#.@$  .#\n#      #\n########";
        let bfs = solve("bfs", "5", grid);
        let ucs = solve("ucs", "5", grid);

        let (SearchOutcome::Solved(fewest), SearchOutcome::Solved(cheapest)) = (bfs, ucs) else {
            panic!("expected both drivers to solve the puzzle");
        };
        assert_eq!(fewest.steps(), 3);
        assert_eq!(fewest.cost, 18);
        assert_eq!(cheapest.cost, 16);
        assert!(fewest.cost > cheapest.cost);
    }

    #[test]
    fn test_no_path_is_a_normal_outcome() {
        // The stone is boxed into a corner pocket and can never reach
        // the switch.
        let grid = "#####\n#@$##\n## .#\n#####";
        for name in ["bfs", "ucs", "astar"] {
            assert_eq!(solve(name, "1", grid), SearchOutcome::NoPath, "{name}");
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let grid = "########\n#@$  . #\n# $  . #\n########";
        let first = solve("ucs", "2 2", grid);
        let second = solve("ucs", "2 2", grid);

        assert_eq!(first, second);
    }
}
