use crate::models::game_events::PlayerAction;
use crate::models::games::GameRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RoleArgs {
    pub role: Option<GameRole>,
}

#[derive(Debug, Deserialize)]
pub struct TeammateArgs {
    pub role: GameRole,
    pub leaderboard_min: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserFirstTargetArgs {
    pub action: PlayerAction,
    pub leaderboard_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct GuildFirstTargetArgs {
    pub action: PlayerAction,
    pub leaderboard_min: i64,
    pub leaderboard_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct KilledByArgs {
    pub leaderboard_min: i64,
}

#[derive(Debug, Deserialize)]
pub struct ActionArgs {
    pub action: PlayerAction,
    pub role: GameRole,
}

#[derive(Debug, Default, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}
