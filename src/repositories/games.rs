use crate::common::context::Context;
use crate::entities::games::Game;
use sqlx::Arguments;
use sqlx::mysql::MySqlArguments;

const TABLE_NAME: &str = "games";
const READ_FIELDS: &str = "game_id, guild_id, connect_code, start_time, win_type, end_time";

pub async fn fetch_one<C: Context>(ctx: &C, game_id: i64) -> sqlx::Result<Option<Game>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE game_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(game_id)
        .fetch_optional(ctx.db())
        .await
}

/// Games on the guild that have ended.
pub async fn count_finished_by_guild<C: Context>(ctx: &C, guild_id: u64) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE guild_id = ? AND end_time != -1"
    );
    sqlx::query_scalar(QUERY)
        .bind(guild_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn count_by_guild_and_win_types<C: Context>(
    ctx: &C,
    guild_id: u64,
    win_types: &[i16],
) -> anyhow::Result<i64> {
    if win_types.is_empty() {
        return Ok(0);
    }

    let mut query = String::from("SELECT COUNT(*) FROM games WHERE guild_id = ? AND win_type IN (");
    let mut args = MySqlArguments::default();
    args.add(guild_id)
        .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    for (i, win_type) in win_types.iter().enumerate() {
        query.push_str(if i == 0 { "?" } else { ", ?" });
        args.add(*win_type)
            .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    }
    query.push(')');

    let count = sqlx::query_scalar_with(&query, args)
        .fetch_one(ctx.db())
        .await?;
    Ok(count)
}

pub async fn delete_many_by_guild<C: Context>(ctx: &C, guild_id: u64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE guild_id = ?");
    let result = sqlx::query(QUERY).bind(guild_id).execute(ctx.db()).await?;
    Ok(result.rows_affected())
}
