use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Game {
    pub game_id: i64,
    pub guild_id: u64,
    pub connect_code: String,
    /// Unix seconds.
    pub start_time: i64,
    pub win_type: i16,
    /// Unix seconds, `-1` while the game is still in progress.
    pub end_time: i64,
}
