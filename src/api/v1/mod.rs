use crate::common::state::AppState;
use axum::Router;
use axum::routing::{delete, get};

pub mod games;
pub mod leaderboards;
pub mod rankings;
pub mod stats;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games/{game_id}/statistics", get(games::statistics))
        .route("/guilds/{guild_id}/games", delete(games::delete_guild_games))
        .route("/users/{user_id}/games", delete(games::delete_user_games))
        .route("/guilds/{guild_id}/stats", get(stats::guild_stats))
        .route("/users/{user_id}/stats", get(stats::user_stats))
        .route(
            "/guilds/{guild_id}/users/{user_id}/stats",
            get(stats::user_guild_stats),
        )
        .nest("/guilds/{guild_id}/leaderboards", leaderboards_router())
        .nest("/guilds/{guild_id}/users/{user_id}/rankings", rankings_router())
}

fn leaderboards_router() -> Router<AppState> {
    Router::new()
        .route("/wins", get(leaderboards::wins))
        .route("/games", get(leaderboards::games))
        .route("/teammates/best", get(leaderboards::best_teammates))
        .route("/teammates/worst", get(leaderboards::worst_teammates))
        .route("/first-targets", get(leaderboards::first_targets))
        .route("/killed-by", get(leaderboards::killed_by))
}

fn rankings_router() -> Router<AppState> {
    Router::new()
        .route("/colors", get(rankings::colors))
        .route("/names", get(rankings::names))
        .route("/players", get(rankings::players))
        .route("/teammates/best", get(rankings::best_teammates))
        .route("/teammates/worst", get(rankings::worst_teammates))
        .route("/first-targets", get(rankings::first_targets))
        .route("/killed-by", get(rankings::killed_by))
        .route("/actions", get(rankings::actions))
}
