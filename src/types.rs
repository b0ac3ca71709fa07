// Battlesnake API Types
// See https://github.com/battlesnakeio/docs/tree/master/apis/snake
//
// Fields the engine may omit are defaulted so that minimal payloads still parse.
// Collections keep the order they had on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Game metadata
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Game {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub ruleset: Value,
    #[serde(default)]
    pub timeout: u32,
}

/// Board state including dimensions, food and snakes
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    #[serde(default)]
    pub food: Vec<Coord>,
    #[serde(default)]
    pub snakes: Vec<Battlesnake>,
    #[serde(default)]
    pub hazards: Vec<Coord>,
}

/// Snake representation; `body` is head-first
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Battlesnake {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: i32,
    pub body: Vec<Coord>,
}

impl Battlesnake {
    pub fn head(&self) -> Option<Coord> {
        self.body.first().copied()
    }
}

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

/// Represents the four possible movement directions for a Battlesnake.
/// The board origin is the top-left corner: `up` decreases y, `down` increases it.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parses the lowercase wire name, ignoring case
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Direction::Up => Coord { x: coord.x, y: coord.y - 1 },
            Direction::Down => Coord { x: coord.x, y: coord.y + 1 },
            Direction::Left => Coord { x: coord.x - 1, y: coord.y },
            Direction::Right => Coord { x: coord.x + 1, y: coord.y },
        }
    }
}

/// Complete game state received from the API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GameState {
    #[serde(default)]
    pub game: Game,
    #[serde(default)]
    pub turn: i32,
    pub board: Board,
    pub you: Battlesnake,
}

/// Body of a `/move` response
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
}

/// Body of a `/start` response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StartResponse {
    pub color: String,
}
