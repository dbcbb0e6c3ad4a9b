use crate::common::context::Context;
use crate::entities::game_events::GameEvent;
use crate::models::game_events::GameEventType;

const TABLE_NAME: &str = "game_events";
const READ_FIELDS: &str = "event_id, user_id, game_id, event_time, event_type, payload";
const JOINED_READ_FIELDS: &str =
    "ge.event_id, ge.user_id, ge.game_id, ge.event_time, ge.event_type, ge.payload";

/// All events of a game in the order they happened.
pub async fn fetch_many_by_game<C: Context>(
    ctx: &C,
    game_id: i64,
) -> sqlx::Result<Vec<GameEvent>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE game_id = ? ORDER BY event_time, event_id"
    );
    sqlx::query_as(QUERY)
        .bind(game_id)
        .fetch_all(ctx.db())
        .await
}

/// Player-action events of every game on a guild, grouped by game and
/// ordered by time within each game.
pub async fn fetch_player_actions_by_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
) -> sqlx::Result<Vec<GameEvent>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ge INNER JOIN games g ON g.game_id = ge.game_id",
        " WHERE g.guild_id = ? AND ge.event_type = ?",
        " ORDER BY ge.game_id, ge.event_time, ge.event_id"
    );
    sqlx::query_as(QUERY)
        .bind(guild_id)
        .bind(GameEventType::Player.code())
        .fetch_all(ctx.db())
        .await
}

/// Player-action events, by anyone, of the games a user played on a guild.
/// Same ordering as [`fetch_player_actions_by_guild`].
pub async fn fetch_player_actions_in_user_games<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<Vec<GameEvent>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ge WHERE ge.event_type = ? AND ge.game_id IN (",
        "SELECT game_id FROM users_games WHERE user_id = ? AND guild_id = ?)",
        " ORDER BY ge.game_id, ge.event_time, ge.event_id"
    );
    sqlx::query_as(QUERY)
        .bind(GameEventType::Player.code())
        .bind(user_id)
        .bind(guild_id)
        .fetch_all(ctx.db())
        .await
}

/// The user's own player-action events in the games they played on a guild.
pub async fn fetch_player_actions_by_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<Vec<GameEvent>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ge WHERE ge.event_type = ? AND ge.user_id = ? AND ge.game_id IN (",
        "SELECT game_id FROM users_games WHERE user_id = ? AND guild_id = ?)",
        " ORDER BY ge.game_id, ge.event_time, ge.event_id"
    );
    sqlx::query_as(QUERY)
        .bind(GameEventType::Player.code())
        .bind(user_id)
        .bind(user_id)
        .bind(guild_id)
        .fetch_all(ctx.db())
        .await
}
