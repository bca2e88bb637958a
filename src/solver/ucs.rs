use super::common::OpenNode;
use super::Solver;
use crate::common::{SearchOutcome, Solution, State, StateKey};
use crate::config::Config;
use crate::puzzle::Puzzle;
use crate::stat::Stats;

use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;
use tracing::debug;

/// Uniform-cost graph search, Dijkstra-style: the frontier is ordered by
/// accumulated cost, so the first goal popped is cost-optimal under the
/// nonnegative step costs.
pub struct Ucs {
    puzzle: Puzzle,
    stats: Stats,
}

impl Ucs {
    pub fn new(puzzle: Puzzle) -> Self {
        Ucs {
            puzzle,
            stats: Stats::default(),
        }
    }
}

impl Solver for Ucs {
    fn solve(&mut self, _config: &Config) -> anyhow::Result<SearchOutcome> {
        let start_time = Instant::now();
        let mut open = BinaryHeap::new();
        let mut visited: HashSet<StateKey> = HashSet::new();
        let mut seq = 0usize;

        let initial = State::initial(&self.puzzle.map);
        open.push(OpenNode::new(initial.cost, seq, initial));

        while let Some(node) = open.pop() {
            let current = node.state;
            self.stats.nodes_generated += 1;

            if current.is_goal(&self.puzzle.map) {
                self.stats.time_us = start_time.elapsed().as_micros() as usize;
                self.stats.costs = current.cost;
                self.stats.print(self.name());
                return Ok(SearchOutcome::Solved(Solution {
                    path: current.path,
                    cost: current.cost,
                }));
            }

            if !visited.insert(current.key()) {
                continue;
            }

            for successor in current.successors(&self.puzzle.weights, &self.puzzle.map) {
                if !visited.contains(&successor.key()) {
                    seq += 1;
                    open.push(OpenNode::new(successor.cost, seq, successor));
                }
            }
        }

        self.stats.time_us = start_time.elapsed().as_micros() as usize;
        debug!("frontier exhausted without reaching the goal");
        Ok(SearchOutcome::NoPath)
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn name(&self) -> &'static str {
        "Uniform Cost Search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(weights: &str, grid: &str) -> Puzzle {
        let rows: Vec<Vec<char>> = grid.lines().map(|line| line.chars().collect()).collect();
        Puzzle::parse(weights, &rows).unwrap()
    }

    fn config() -> Config {
        Config {
            input_path: None,
            input_dir: None,
            output_dir: "output".to_string(),
            solver: "ucs".to_string(),
            max_depth: 10_000,
            record_path: None,
        }
    }

    #[test]
    fn test_optimal_cost_on_corridor() {
        let mut solver = Ucs::new(puzzle("2", "#######\n#@ $ .#\n#######"));
        let outcome = solver.solve(&config()).unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Solved(Solution {
                path: "rRR".to_string(),
                cost: 7,
            })
        );
        assert_eq!(solver.stats().costs, 7);
    }

    #[test]
    fn test_orders_stones_to_minimize_walking() {
        // Pushing the top stone first needs 4 connecting moves; starting
        // with the bottom stone needs 5. Push costs are fixed, so the
        // optimum is 3*(1+3) + 3*(1+1) + 4 = 22.
        let mut solver = Ucs::new(puzzle("3 1", "########\n#@$  . #\n# $  . #\n########"));
        let outcome = solver.solve(&config()).unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Solved(Solution {
                path: "RRRllldRRR".to_string(),
                cost: 22,
            })
        );
    }

    #[test]
    fn test_no_path() {
        let mut solver = Ucs::new(puzzle("1", "#####\n#@$##\n## .#\n#####"));

        assert_eq!(solver.solve(&config()).unwrap(), SearchOutcome::NoPath);
    }
}
