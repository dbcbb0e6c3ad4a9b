use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct GameEvent {
    pub event_id: i64,
    #[sqlx(default)]
    pub user_id: Option<u64>,
    pub game_id: i64,
    pub event_time: i64,
    pub event_type: i16,
    pub payload: String,
}
