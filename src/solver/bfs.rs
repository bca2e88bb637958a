use super::Solver;
use crate::common::{SearchOutcome, Solution, State, StateKey};
use crate::config::Config;
use crate::puzzle::Puzzle;
use crate::stat::Stats;

use std::collections::{HashSet, VecDeque};
use std::time::Instant;
use tracing::debug;

/// Breadth-first graph search. The first goal popped has the fewest
/// actions, which is not necessarily the cheapest cost.
pub struct Bfs {
    puzzle: Puzzle,
    stats: Stats,
}

impl Bfs {
    pub fn new(puzzle: Puzzle) -> Self {
        Bfs {
            puzzle,
            stats: Stats::default(),
        }
    }
}

impl Solver for Bfs {
    fn solve(&mut self, _config: &Config) -> anyhow::Result<SearchOutcome> {
        let start_time = Instant::now();
        let mut queue = VecDeque::new();
        let mut visited: HashSet<StateKey> = HashSet::new();
        queue.push_back(State::initial(&self.puzzle.map));

        while let Some(current) = queue.pop_front() {
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
                    queue.push_back(successor);
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
        "Breadth-First Search"
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
            solver: "bfs".to_string(),
            max_depth: 10_000,
            record_path: None,
        }
    }

    #[test]
    fn test_finds_fewest_actions() {
        let mut solver = Bfs::new(puzzle("9", "#######\n#@ $ .#\n#######"));
        let outcome = solver.solve(&config()).unwrap();

        let SearchOutcome::Solved(solution) = outcome else {
            panic!("expected a solution");
        };
        assert_eq!(solution.steps(), 3);
        assert_eq!(solution.path, "rRR");
        assert!(solver.stats().nodes_generated > 0);
    }

    #[test]
    fn test_already_solved_puzzle_is_zero_steps() {
        let mut solver = Bfs::new(puzzle("1", "#####\n#@*.#\n#####"));
        let outcome = solver.solve(&config()).unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Solved(Solution {
                path: String::new(),
                cost: 0,
            })
        );
    }
}
