use crate::common::{Direction, Position};

/// Static classification of one board cell. Agent and stones are dynamic
/// and live in `State`, never in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor,
    Switch,
}

#[derive(Debug, Clone)]
pub struct Map {
    pub height: usize,
    pub grid: Vec<Vec<Cell>>,
    pub switches: Vec<Position>,
    agent: Position,
    stones: Vec<Position>,
}

impl Map {
    /// Build a map from raw grid rows (`#` wall, space floor, `.` switch,
    /// `@` agent, `+` agent-on-switch, `$` stone, `*` stone-on-switch).
    ///
    /// Rows may be ragged; every bounds check uses the actual row length.
    pub fn from_rows(rows: &[Vec<char>]) -> anyhow::Result<Self> {
        let mut grid = Vec::with_capacity(rows.len());
        let mut switches = Vec::new();
        let mut stones = Vec::new();
        let mut agent = None;

        for (x, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (y, &ch) in row.iter().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    ' ' => Cell::Floor,
                    '.' => Cell::Switch,
                    '@' => {
                        agent = Some((x, y));
                        Cell::Floor
                    }
                    '+' => {
                        agent = Some((x, y));
                        Cell::Switch
                    }
                    '$' => {
                        stones.push((x, y));
                        Cell::Floor
                    }
                    '*' => {
                        stones.push((x, y));
                        Cell::Switch
                    }
                    other => anyhow::bail!("unknown cell symbol {other:?} at ({x}, {y})"),
                };
                if cell == Cell::Switch {
                    switches.push((x, y));
                }
                cells.push(cell);
            }
            grid.push(cells);
        }

        let agent = agent.ok_or_else(|| anyhow::anyhow!("no agent cell in grid"))?;
        Ok(Map {
            height: grid.len(),
            grid,
            switches,
            agent,
            stones,
        })
    }

    /// Agent position in the initial configuration.
    pub fn agent_start(&self) -> Position {
        self.agent
    }

    /// Stone positions in grid scan order. This order fixes the stone
    /// indices used by the weight list for the whole run.
    pub fn stone_starts(&self) -> &[Position] {
        &self.stones
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.height && y < self.grid[x].len()
    }

    pub fn cell_at(&self, position: Position) -> Cell {
        self.grid[position.0][position.1]
    }

    pub fn is_switch(&self, position: Position) -> bool {
        self.cell_at(position) == Cell::Switch
    }

    /// One step from `position` in `direction`, or `None` when the step
    /// leaves the board or lands on a wall. Stone occupancy is dynamic and
    /// checked by the caller against the current state.
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = position.0 as i32 + dx;
        let y = position.1 as i32 + dy;
        if x < 0 || y < 0 || !self.in_bounds(x as usize, y as usize) {
            return None;
        }
        let next = (x as usize, y as usize);
        (self.cell_at(next) != Cell::Wall).then_some(next)
    }

    /// True iff `position` can hold the agent or a stone right now:
    /// in bounds, not a wall, not occupied by any stone in `stones`.
    pub fn is_walkable(&self, position: Position, stones: &[Position]) -> bool {
        self.in_bounds(position.0, position.1)
            && self.cell_at(position) != Cell::Wall
            && !stones.contains(&position)
    }
}
