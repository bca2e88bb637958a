use super::Solver;
use crate::common::{SearchOutcome, Solution, State, StateKey};
use crate::config::Config;
use crate::puzzle::Puzzle;
use crate::stat::Stats;

use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// Depth-first search on an explicit stack. The configured depth bound
/// replaces a host recursion limit: states at the bound are not expanded,
/// and if the whole frontier drains after any state was cut off, the run
/// reports `DepthLimitExceeded` with its partial statistics.
pub struct Dfs {
    puzzle: Puzzle,
    stats: Stats,
}

impl Dfs {
    pub fn new(puzzle: Puzzle) -> Self {
        Dfs {
            puzzle,
            stats: Stats::default(),
        }
    }
}

impl Solver for Dfs {
    fn solve(&mut self, config: &Config) -> anyhow::Result<SearchOutcome> {
        let start_time = Instant::now();
        let mut stack = vec![State::initial(&self.puzzle.map)];
        let mut visited: HashSet<StateKey> = HashSet::new();
        let mut depth_limited = false;

        while let Some(current) = stack.pop() {
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

            // Depth equals the number of actions taken so far.
            if current.path.len() >= config.max_depth {
                depth_limited = true;
                continue;
            }

            for successor in current.successors(&self.puzzle.weights, &self.puzzle.map) {
                if !visited.contains(&successor.key()) {
                    stack.push(successor);
                }
            }
        }

        self.stats.time_us = start_time.elapsed().as_micros() as usize;
        if depth_limited {
            debug!("depth bound {} cut off the search", config.max_depth);
            Ok(SearchOutcome::DepthLimitExceeded)
        } else {
            debug!("frontier exhausted without reaching the goal");
            Ok(SearchOutcome::NoPath)
        }
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn name(&self) -> &'static str {
        "Depth-First Search"
    }
}
