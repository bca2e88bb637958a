use super::common::OpenNode;
use super::Solver;
use crate::common::{SearchOutcome, Solution, State, StateKey};
use crate::config::Config;
use crate::heuristic::heuristic;
use crate::puzzle::Puzzle;
use crate::stat::Stats;

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;
use tracing::debug;

/// Best-first search on f = accumulated cost + heuristic. The heuristic is
/// admissible but not consistent (the stone/switch assignment can shift
/// between expansions), so a best-f map kept next to the visited set lets a
/// state re-enter the frontier whenever its f-cost improves.
pub struct AStar {
    puzzle: Puzzle,
    stats: Stats,
}

impl AStar {
    pub fn new(puzzle: Puzzle) -> Self {
        AStar {
            puzzle,
            stats: Stats::default(),
        }
    }
}

impl Solver for AStar {
    fn solve(&mut self, _config: &Config) -> anyhow::Result<SearchOutcome> {
        // Fatal configuration error, surfaced before any expansion.
        self.puzzle.validate_for_heuristic()?;

        let start_time = Instant::now();
        let mut open = BinaryHeap::new();
        let mut visited: HashSet<StateKey> = HashSet::new();
        let mut best_f: HashMap<StateKey, usize> = HashMap::new();
        let mut seq = 0usize;

        let initial = State::initial(&self.puzzle.map);
        let initial_f = initial.cost + heuristic(&initial, &self.puzzle.weights, &self.puzzle.map);
        best_f.insert(initial.key(), initial_f);
        open.push(OpenNode::new(initial_f, seq, initial));

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
                let key = successor.key();
                let f_cost =
                    successor.cost + heuristic(&successor, &self.puzzle.weights, &self.puzzle.map);

                // Insert unseen states, and reopen seen ones whose f-cost
                // improved on the best recorded for this dedup key.
                if !visited.contains(&key) || f_cost < best_f.get(&key).copied().unwrap_or(usize::MAX)
                {
                    best_f.insert(key, f_cost);
                    seq += 1;
                    open.push(OpenNode::new(f_cost, seq, successor));
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
        "A Star Search"
    }
}
