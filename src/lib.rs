// Library exports for the greedy Battlesnake
// This allows the server binary, the replay tool and the integration tests to
// share the decision logic

#[macro_use]
extern crate rocket;

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod grid;
pub mod handler;
pub mod replay;
pub mod selector;
pub mod types;
