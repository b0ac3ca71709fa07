// Greedy move selection
//
// One step toward the first listed food, in fixed priority order, with no
// lookahead. Everything is derived from the snapshot passed in; nothing is
// kept between calls.

use log::{debug, warn};

use crate::error::MoveError;
use crate::grid::OccupancyGrid;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Order in which candidate directions are tried, in both passes
pub const PRIORITY: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Up,
    Direction::Left,
];

/// Returned when every neighbouring cell is blocked or off the board
pub const LAST_RESORT: Direction = Direction::Left;

/// Largest board, in cells, the grid will be allocated for
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// True if stepping in `dir` brings `head` closer to `food` along that axis
fn approaches(dir: Direction, head: Coord, food: Coord) -> bool {
    match dir {
        Direction::Right => food.x > head.x,
        Direction::Left => food.x < head.x,
        Direction::Down => food.y > head.y,
        Direction::Up => food.y < head.y,
    }
}

/// Chooses the next move for `you` on `board`.
///
/// Tries to step toward the first food in `board.food` (right, down, up, left),
/// then any open neighbour in the same order, then falls back to `LAST_RESORT`
/// without checking it.
pub fn choose_move(board: &Board, you: &Battlesnake) -> Result<Direction, MoveError> {
    if board.width <= 0 || board.height <= 0 {
        return Err(MoveError::InvalidDimensions {
            width: board.width,
            height: board.height,
        });
    }

    let cells = (board.width as usize).checked_mul(board.height as usize);
    if cells.map_or(true, |n| n > MAX_BOARD_CELLS) {
        return Err(MoveError::BoardTooLarge {
            width: board.width,
            height: board.height,
        });
    }

    let head = you.head().ok_or(MoveError::MissingHead)?;
    let grid = OccupancyGrid::from_board(board);

    if !grid.in_bounds(head) {
        return Err(MoveError::HeadOffBoard {
            head,
            width: board.width,
            height: board.height,
        });
    }

    if let Some(&food) = board.food.first() {
        let toward_food = PRIORITY
            .iter()
            .copied()
            .find(|&dir| approaches(dir, head, food) && grid.is_open(dir.apply(&head)));

        if let Some(dir) = toward_food {
            debug!("Stepping {} toward food at ({}, {})", dir.as_str(), food.x, food.y);
            return Ok(dir);
        }
    }

    if let Some(dir) = PRIORITY
        .iter()
        .copied()
        .find(|&dir| grid.is_open(dir.apply(&head)))
    {
        return Ok(dir);
    }

    warn!(
        "No open cell around head ({}, {}), defaulting to {}",
        head.x,
        head.y,
        LAST_RESORT.as_str()
    );
    Ok(LAST_RESORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(body: &[(i32, i32)]) -> Battlesnake {
        Battlesnake {
            id: "you".to_string(),
            name: "you".to_string(),
            health: 100,
            body: body.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        }
    }

    fn board(width: i32, height: i32, food: &[(i32, i32)], snakes: Vec<Battlesnake>) -> Board {
        Board {
            width,
            height,
            food: food.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
            snakes,
            hazards: vec![],
        }
    }

    #[test]
    fn test_steps_right_toward_food() {
        let you = snake(&[(2, 2)]);
        let b = board(5, 5, &[(4, 2)], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Right));
    }

    #[test]
    fn test_right_edge_falls_back_to_down() {
        // Neck to the left blocks the only food-approaching move
        let you = snake(&[(4, 2), (3, 2), (2, 2)]);
        let b = board(5, 5, &[(0, 2)], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Down));
    }

    #[test]
    fn test_right_edge_prefers_left_when_it_approaches_food() {
        let you = snake(&[(4, 2)]);
        let b = board(5, 5, &[(0, 2)], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Left));
    }

    #[test]
    fn test_no_food_right_blocked_by_own_body() {
        let you = snake(&[(0, 0), (1, 0), (2, 0)]);
        let b = board(5, 5, &[], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Down));
    }

    #[test]
    fn test_only_first_food_is_targeted() {
        // The nearer food is listed second and must be ignored
        let you = snake(&[(2, 2)]);
        let b = board(5, 5, &[(2, 0), (3, 2)], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Up));
    }

    #[test]
    fn test_down_beats_up_and_left_in_priority() {
        let you = snake(&[(3, 1)]);
        let b = board(5, 5, &[(0, 4)], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Down));
    }

    #[test]
    fn test_blocked_food_moves_fall_through_to_any_open_cell() {
        // Food is up-left, both approaching cells are occupied by another snake
        let you = snake(&[(2, 2)]);
        let other = snake(&[(2, 1), (1, 1), (1, 2)]);
        let b = board(5, 5, &[(0, 0)], vec![you.clone(), other]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Right));
    }

    #[test]
    fn test_food_under_snake_is_still_a_target() {
        let you = snake(&[(1, 1)]);
        let other = snake(&[(4, 4), (4, 3)]);
        let b = board(5, 5, &[(4, 3)], vec![you.clone(), other]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Right));
    }

    #[test]
    fn test_fully_trapped_defaults_to_left() {
        // Corner at (0,0): right and down blocked, up and left off the board
        let you = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let b = board(5, 5, &[(3, 3)], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(LAST_RESORT));
    }

    #[test]
    fn test_one_by_one_board_defaults_to_left() {
        let you = snake(&[(0, 0)]);
        let b = board(1, 1, &[], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Left));
    }

    #[test]
    fn test_missing_head_is_an_error() {
        let you = snake(&[]);
        let b = board(5, 5, &[(1, 1)], vec![]);
        assert_eq!(choose_move(&b, &you), Err(MoveError::MissingHead));
    }

    #[test]
    fn test_zero_sized_board_is_an_error() {
        let you = snake(&[(0, 0)]);
        let b = board(0, 5, &[], vec![]);
        assert!(matches!(
            choose_move(&b, &you),
            Err(MoveError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_oversized_board_is_rejected_before_allocating() {
        let you = snake(&[(0, 0)]);
        for (w, h) in [(i32::MAX, i32::MAX), (1, i32::MAX), (257, 256)] {
            let b = board(w, h, &[], vec![you.clone()]);
            assert_eq!(
                choose_move(&b, &you),
                Err(MoveError::BoardTooLarge { width: w, height: h })
            );
        }
    }

    #[test]
    fn test_largest_allowed_board_still_moves() {
        let you = snake(&[(0, 0)]);
        let b = board(256, 256, &[], vec![you.clone()]);
        assert_eq!(choose_move(&b, &you), Ok(Direction::Right));
    }

    #[test]
    fn test_head_off_board_is_an_error() {
        let you = snake(&[(5, 2)]);
        let b = board(5, 5, &[], vec![]);
        assert!(matches!(
            choose_move(&b, &you),
            Err(MoveError::HeadOffBoard { .. })
        ));
    }

    #[test]
    fn test_edges_never_step_off_board() {
        // Every head position on an empty board, with and without food
        let (w, h) = (4, 3);
        for x in 0..w {
            for y in 0..h {
                for food in [None, Some((0, 0)), Some((w - 1, h - 1)), Some((x, y))] {
                    let you = snake(&[(x, y)]);
                    let food: Vec<(i32, i32)> = food.into_iter().collect();
                    let b = board(w, h, &food, vec![you.clone()]);
                    let dir = choose_move(&b, &you).unwrap();

                    if x == w - 1 {
                        assert_ne!(dir, Direction::Right, "head ({}, {})", x, y);
                    }
                    if x == 0 {
                        assert_ne!(dir, Direction::Left, "head ({}, {})", x, y);
                    }
                    if y == h - 1 {
                        assert_ne!(dir, Direction::Down, "head ({}, {})", x, y);
                    }
                    if y == 0 {
                        assert_ne!(dir, Direction::Up, "head ({}, {})", x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_same_snapshot_same_move() {
        let you = snake(&[(2, 3), (2, 4)]);
        let other = snake(&[(3, 3), (4, 3)]);
        let b = board(6, 6, &[(5, 0), (0, 5)], vec![you.clone(), other]);

        let first = choose_move(&b, &you);
        for _ in 0..10 {
            assert_eq!(choose_move(&b, &you), first);
        }
    }
}
