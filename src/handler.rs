// HTTP handler bindings for Battlesnake API endpoints
//
// Thin wrappers binding Rocket routes to the Bot. Any fault on /move is logged
// and answered with a `null` body and status 200; the engine applies its own
// default move.

use log::warn;
use rocket::fairing::AdHoc;
use rocket::response::content::RawHtml;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{Build, Rocket, State};
use serde_json::{json, Value};

use crate::bot::Bot;
use crate::types::{GameState, StartResponse};

const INDEX_HTML: &str = "Battlesnake documentation can be found at \
    <a href=\"https://docs.battlesnake.io\">https://docs.battlesnake.io</a>.";

/// GET / endpoint
#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

/// POST /ping endpoint
/// The body is never read, so any payload is accepted
#[post("/ping")]
pub fn ping(bot: &State<Bot>) -> Json<Value> {
    bot.ping();
    Json(json!({}))
}

/// POST /start endpoint
#[post("/start", data = "<start_req>")]
pub fn start(
    bot: &State<Bot>,
    start_req: Result<Json<GameState>, JsonError<'_>>,
) -> Json<StartResponse> {
    let game = start_req.as_ref().ok().map(|req| &req.game);
    Json(bot.start(game))
}

/// POST /move endpoint
#[post("/move", data = "<move_req>")]
pub fn get_move(
    bot: &State<Bot>,
    move_req: Result<Json<GameState>, JsonError<'_>>,
) -> Json<Value> {
    let move_req = match move_req {
        Ok(req) => req,
        Err(e) => {
            warn!("Rejecting malformed /move payload: {:?}", e);
            return Json(Value::Null);
        }
    };

    match bot.get_move(&move_req.game, move_req.turn, &move_req.board, &move_req.you) {
        Ok(response) => match serde_json::to_value(response) {
            Ok(body) => Json(body),
            Err(e) => {
                warn!("Failed to serialize move response: {}", e);
                Json(Value::Null)
            }
        },
        Err(e) => {
            warn!("Turn {}: no move computed: {}", move_req.turn, e);
            Json(Value::Null)
        }
    }
}

/// POST /end endpoint
#[post("/end", data = "<end_req>")]
pub fn end(bot: &State<Bot>, end_req: Result<Json<GameState>, JsonError<'_>>) -> Json<Value> {
    let game = end_req.as_ref().ok().map(|req| &req.game);
    bot.end(game);
    Json(json!({}))
}

/// Builds the Rocket instance serving every endpoint for `bot`
pub fn build_rocket(bot: Bot) -> Rocket<Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/greedy-snake");
            })
        }))
        .mount("/", routes![index, ping, start, get_move, end])
}
