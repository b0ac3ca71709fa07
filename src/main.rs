#[macro_use]
extern crate rocket;

use greedy_snake::bot::Bot;
use greedy_snake::config::Config;
use greedy_snake::debug_logger::DebugLogger;
use greedy_snake::handler;
use log::info;
use std::env;

#[launch]
async fn rocket() -> _ {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting Battlesnake Server...");

    let config = Config::load_or_default();

    // Hosting services hand us `PORT`; Rocket reads `ROCKET_PORT`.
    let port = config.listen_port(env::var("PORT").ok().as_deref());
    info!("Listening on port {}", port);
    env::set_var("ROCKET_PORT", port.to_string());
    if env::var("ROCKET_ADDRESS").is_err() {
        env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    let debug_logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path).await;
    if !debug_logger.is_enabled() {
        info!("Decision log disabled");
    }
    let bot = Bot::new(config).with_debug_logger(debug_logger);

    handler::build_rocket(bot)
}
