use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserGame {
    pub user_id: u64,
    pub guild_id: u64,
    pub game_id: i64,
    pub player_name: String,
    pub player_color: i16,
    pub player_role: i16,
    pub player_won: bool,
}
