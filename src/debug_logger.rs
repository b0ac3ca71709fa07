// Debug logging module for asynchronous decision logging
//
// Each computed move is appended to a JSONL file from a spawned task so the
// /move response never waits on disk. The replay tool reads the same format.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::{Battlesnake, Board, Direction};

/// One line of the decision log
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub turn: i32,
    #[serde(default)]
    pub game_id: String,
    pub chosen_move: String,
    pub board: Board,
    pub you: Battlesnake,
    pub timestamp: String,
}

/// Shared debug logger state
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logs a move decision (fire-and-forget). Must be called inside a tokio runtime.
    pub fn log_move(
        &self,
        game_id: &str,
        turn: i32,
        board: &Board,
        you: &Battlesnake,
        chosen_move: Direction,
    ) {
        if !self.enabled {
            return;
        }

        let entry = LogEntry {
            turn,
            game_id: game_id.to_string(),
            chosen_move: chosen_move.as_str().to_string(),
            board: board.clone(),
            you: you.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let file_handle = self.file.clone();

        tokio::spawn(async move {
            Self::write_entry(file_handle, entry).await;
        });
    }

    /// Writes and flushes a single entry
    async fn write_entry(file_handle: Arc<Mutex<Option<File>>>, entry: LogEntry) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write debug log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush debug log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize debug log entry: {}", e);
                }
            }
        }
    }
}
