// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// The bot holds only immutable configuration and the optional decision log.
// Every move is computed from the request alone.

use log::{debug, info};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::error::MoveError;
use crate::selector;
use crate::types::{Battlesnake, Board, Game, MoveResponse, StartResponse};

/// Battlesnake Bot exposing one method per API endpoint
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and no decision log
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    /// Corresponds to POST /ping
    pub fn ping(&self) {
        info!("PING");
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: Option<&Game>) -> StartResponse {
        debug!("/start called with: {:?}", game);
        match game {
            Some(game) => info!("GAME START {}", game.id),
            None => info!("GAME START"),
        }

        let response = StartResponse {
            color: self.config.appearance.color.clone(),
        };
        debug!("/start responding with: {:?}", response);
        response
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: Option<&Game>) {
        debug!("/end called with: {:?}", game);
        match game {
            Some(game) => info!("GAME OVER {}", game.id),
            None => info!("GAME OVER"),
        }
    }

    /// Computes the next move
    /// Corresponds to POST /move endpoint
    pub fn get_move(
        &self,
        game: &Game,
        turn: i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Result<MoveResponse, MoveError> {
        debug!("/move called with: turn {} board {:?} you {:?}", turn, board, you);
        let direction = selector::choose_move(board, you)?;

        info!("Game {} turn {}: moving {}", game.id, turn, direction.as_str());
        self.debug_logger
            .log_move(&game.id, turn, board, you, direction);

        let response = MoveResponse { direction };
        debug!("/move responding with: {:?}", response);
        Ok(response)
    }
}
