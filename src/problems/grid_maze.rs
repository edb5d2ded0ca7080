use std::collections::HashSet;

use crate::problem::Problem;

/// A compass move in the maze. Successors are always generated in this
/// order, which keeps depth-first expansion deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// A rectangular maze with walls; every move costs 1.
///
/// States are `(x, y)` cells, `x` growing east and `y` growing south.
pub struct GridMaze {
    width: i32,
    height: i32,
    walls: HashSet<(i32, i32)>,
    start: (i32, i32),
    goal: (i32, i32),
}

impl GridMaze {
    /// Parses a maze from rows of `#` (wall), `S` (start), `G` (goal), and
    /// open cells (anything else). Panics on a missing start or goal, or on
    /// ragged rows - a malformed layout is a caller bug, not a search
    /// outcome.
    pub fn parse(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "maze needs at least one row");
        let width = rows[0].chars().count() as i32;
        let mut walls = HashSet::new();
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.chars().count() as i32,
                width,
                "maze row {y} differs in width"
            );
            for (x, cell) in row.chars().enumerate() {
                let at = (x as i32, y as i32);
                match cell {
                    '#' => {
                        walls.insert(at);
                    }
                    'S' => start = Some(at),
                    'G' => goal = Some(at),
                    _ => {}
                }
            }
        }

        Self {
            width,
            height: rows.len() as i32,
            walls,
            start: start.expect("maze has no start cell 'S'"),
            goal: goal.expect("maze has no goal cell 'G'"),
        }
    }

    /// Manhattan distance to the goal; admissible and consistent for
    /// unit-cost compass moves.
    pub fn manhattan(&self, state: &(i32, i32)) -> f64 {
        ((state.0 - self.goal.0).abs() + (state.1 - self.goal.1).abs()) as f64
    }

    fn open(&self, at: (i32, i32)) -> bool {
        (0..self.width).contains(&at.0)
            && (0..self.height).contains(&at.1)
            && !self.walls.contains(&at)
    }
}

impl Problem for GridMaze {
    type State = (i32, i32);
    type Action = Direction;

    fn start(&self) -> (i32, i32) {
        self.start
    }

    fn is_goal(&self, state: &(i32, i32)) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &(i32, i32)) -> Vec<((i32, i32), Direction, f64)> {
        assert!(
            self.open(*state),
            "state {state:?} is a wall or outside the maze"
        );
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
        .into_iter()
        .filter_map(|direction| {
            let (dx, dy) = direction.offset();
            let next = (state.0 + dx, state.1 + dy);
            self.open(next).then_some((next, direction, 1.0))
        })
        .collect()
    }
}
