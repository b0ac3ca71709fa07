// Error type for move decisions
//
// A well-formed snapshot always yields a direction. These variants cover the
// snapshots the selector cannot reason about at all.

use std::fmt;

use crate::types::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Width or height is zero or negative
    InvalidDimensions { width: i32, height: i32 },
    /// More cells than the occupancy grid is allowed to hold
    BoardTooLarge { width: i32, height: i32 },
    /// Our snake was sent without any body segments
    MissingHead,
    /// Our head lies outside the board
    HeadOffBoard { head: Coord, width: i32, height: i32 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{}", width, height)
            }
            Self::BoardTooLarge { width, height } => {
                write!(f, "board {}x{} is too large", width, height)
            }
            Self::MissingHead => write!(f, "snake has no body segments"),
            Self::HeadOffBoard {
                head,
                width,
                height,
            } => write!(
                f,
                "head ({}, {}) is outside the {}x{} board",
                head.x, head.y, width, height
            ),
        }
    }
}

impl std::error::Error for MoveError {}
