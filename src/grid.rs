// Occupancy grid rebuilt from the board on every decision

use crate::types::{Board, Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Snake,
    Food,
}

/// Row-major H x W classification of the board.
/// Coordinates outside the board are ignored when marking.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Creates an all-free grid. Dimensions must already be positive.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        OccupancyGrid {
            width,
            height,
            cells: vec![Cell::Free; len],
        }
    }

    /// Marks every snake segment, then every food that is not under a snake
    pub fn from_board(board: &Board) -> Self {
        let mut grid = Self::new(board.width, board.height);

        for snake in &board.snakes {
            for segment in &snake.body {
                grid.set(*segment, Cell::Snake);
            }
        }

        for food in &board.food {
            if grid.get(*food) == Some(Cell::Free) {
                grid.set(*food, Cell::Food);
            }
        }

        grid
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }

    /// True if the cell is on the board and no snake occupies it
    pub fn is_open(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Free) | Some(Cell::Food))
    }
}
