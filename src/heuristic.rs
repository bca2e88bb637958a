use crate::assignment::min_cost_assignment;
use crate::common::{Position, State};
use crate::map::Map;

pub fn manhattan_distance(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Admissible lower bound on the remaining cost of `state`.
///
/// Exactly 0 at a goal state. Otherwise: minimum-cost assignment of stones
/// to switches over `weight[i] * manhattan(stone_i, switch_j)`, plus the
/// minimum agent-to-stone distance (the agent only has to reach one stone
/// before its next productive push; summing over all stones would
/// overestimate and break admissibility).
///
/// Callers must have checked `#stones == #switches` before search starts;
/// the assignment is only defined on a square matrix.
pub fn heuristic(state: &State, weights: &[usize], map: &Map) -> usize {
    if state.is_goal(map) {
        return 0;
    }
    debug_assert_eq!(state.stones.len(), map.switches.len());

    let cost_matrix: Vec<Vec<usize>> = state
        .stones
        .iter()
        .zip(weights)
        .map(|(&stone, &weight)| {
            map.switches
                .iter()
                .map(|&switch| weight * manhattan_distance(stone, switch))
                .collect()
        })
        .collect();
    let (total_weighted_distance, _) = min_cost_assignment(&cost_matrix);

    let agent_to_nearest_stone = state
        .stones
        .iter()
        .map(|&stone| manhattan_distance(state.agent, stone))
        .min()
        .unwrap_or(0);

    total_weighted_distance + agent_to_nearest_stone
}
