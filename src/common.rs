use crate::map::Map;

pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Lowercase action token for a plain move.
    pub fn move_token(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    /// Uppercase action token for a push.
    pub fn push_token(self) -> char {
        self.move_token().to_ascii_uppercase()
    }
}

/// Dedup identity of a state: agent position plus the stone tuple.
/// Accumulated cost and path are deliberately excluded.
pub type StateKey = (Position, Vec<Position>);

/// One point in the search space. Immutable once created; successors are
/// built only by `State::successors`. There is no parent pointer, the
/// action path carries the full trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub agent: Position,
    /// Index-aligned with the puzzle's weight list for the whole run.
    pub stones: Vec<Position>,
    pub cost: usize,
    pub path: String,
}

impl State {
    /// Initial state read off the map: agent and stones in scan order,
    /// zero cost, empty path.
    pub fn initial(map: &Map) -> Self {
        State {
            agent: map.agent_start(),
            stones: map.stone_starts().to_vec(),
            cost: 0,
            path: String::new(),
        }
    }

    pub fn key(&self) -> StateKey {
        (self.agent, self.stones.clone())
    }

    /// True iff every stone sits on a switch cell of the static grid.
    pub fn is_goal(&self, map: &Map) -> bool {
        self.stones.iter().all(|&stone| map.is_switch(stone))
    }

    /// All legal next states. Per direction the destination cell either
    /// holds a stone (push candidate) or it does not (plain move), so each
    /// direction yields at most one successor.
    pub fn successors(&self, weights: &[usize], map: &Map) -> Vec<State> {
        let mut successors = Vec::new();

        for direction in Direction::ALL {
            let Some(destination) = map.step(self.agent, direction) else {
                continue;
            };

            if map.is_walkable(destination, &self.stones) {
                let mut path = self.path.clone();
                path.push(direction.move_token());
                successors.push(State {
                    agent: destination,
                    stones: self.stones.clone(),
                    cost: self.cost + 1,
                    path,
                });
            } else if let Some(index) =
                self.stones.iter().position(|&stone| stone == destination)
            {
                // The far cell must be free of walls and of every other
                // stone; an illegal push is dropped, not an error.
                let Some(far) = map.step(destination, direction) else {
                    continue;
                };
                if !map.is_walkable(far, &self.stones) {
                    continue;
                }
                let mut stones = self.stones.clone();
                stones[index] = far;
                let mut path = self.path.clone();
                path.push(direction.push_token());
                successors.push(State {
                    agent: destination,
                    stones,
                    cost: self.cost + 1 + weights[index],
                    path,
                });
            }
        }

        successors
    }
}

/// Action path and accumulated cost of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Solution {
    pub path: String,
    pub cost: usize,
}

impl Solution {
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Every step costs at least 1, the remainder is pushed weight.
    pub fn total_weight(&self) -> usize {
        self.cost - self.steps()
    }
}

/// Terminal result of one driver invocation. Exhausting the frontier is a
/// normal outcome, not an error; so is hitting the depth bound in DFS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    NoPath,
    DepthLimitExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(text: &str) -> Map {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        Map::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let map = map("#######\n#@$ . #\n#######");
        let state = State::initial(&map);

        assert_eq!(state.agent, (1, 1));
        assert_eq!(state.stones, vec![(1, 2)]);
        assert_eq!(state.cost, 0);
        assert!(state.path.is_empty());
    }

    #[test]
    fn test_goal_test_uses_static_cells() {
        let map = map("#####\n#@*.#\n#####");
        let mut state = State::initial(&map);
        assert!(state.is_goal(&map));

        state.stones[0] = (1, 1);
        assert!(!state.is_goal(&map));
    }

    #[test]
    fn test_plain_move_successor() {
        let map = map("#####\n#@  #\n#   #\n#####");
        let state = State::initial(&map);
        let successors = state.successors(&[], &map);

        // Right and down are open, up and left are walls.
        assert_eq!(successors.len(), 2);
        for successor in &successors {
            assert_eq!(successor.cost, 1);
            assert_eq!(successor.path.len(), 1);
            assert!(successor.path.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_push_successor_cost_and_token() {
        let map = map("######\n#@$ .#\n######");
        let state = State::initial(&map);
        let successors = state.successors(&[4], &map);

        // Only the push to the right is legal.
        assert_eq!(successors.len(), 1);
        let push = &successors[0];
        assert_eq!(push.agent, (1, 2));
        assert_eq!(push.stones, vec![(1, 3)]);
        assert_eq!(push.cost, 1 + 4);
        assert_eq!(push.path, "R");
    }

    #[test]
    fn test_push_into_wall_is_dropped() {
        let map = map("####\n#@$#\n####");
        let state = State::initial(&map);

        assert!(state.successors(&[1], &map).is_empty());
    }

    #[test]
    fn test_push_into_other_stone_is_dropped() {
        let map = map("######\n#@$$.#\n######");
        let state = State::initial(&map);

        // The blocking stone cannot be shoved into its neighbor.
        assert!(state.successors(&[1, 1], &map).is_empty());
    }

    #[test]
    fn test_at_most_one_successor_per_direction() {
        let map = map("#####\n# $ #\n#$@$#\n# $ #\n#####");
        let state = State::initial(&map);
        let successors = state.successors(&[1, 1, 1, 1], &map);

        assert!(successors.len() <= Direction::ALL.len());
    }

    #[test]
    fn test_move_and_push_are_exclusive_per_direction() {
        let map = map("######\n#@$ .#\n######");
        let successors = State::initial(&map).successors(&[2], &map);

        // The right cell holds a stone: a push is generated, never a
        // plain move into the occupied cell.
        assert_eq!(successors.iter().filter(|s| s.path == "r").count(), 0);
        assert_eq!(successors.iter().filter(|s| s.path == "R").count(), 1);
    }

    #[test]
    fn test_key_ignores_cost_and_path() {
        let map = map("#####\n#@$.#\n#####");
        let a = State::initial(&map);
        let mut b = a.clone();
        b.cost = 17;
        b.path = "udlr".to_string();

        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_solution_weight_split() {
        let solution = Solution {
            path: "rRR".to_string(),
            cost: 9,
        };

        assert_eq!(solution.steps(), 3);
        assert_eq!(solution.total_weight(), 6);
    }
}
