use crate::common::context::Context;
use crate::entities::users_games::UserGame;
use crate::models::games::GameRole;
use sqlx::Arguments;
use sqlx::mysql::MySqlArguments;

const TABLE_NAME: &str = "users_games";
const READ_FIELDS: &str =
    "user_id, guild_id, game_id, player_name, player_color, player_role, player_won";

/// Optional filters for counting fact rows. Unset fields match everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserGameFilter {
    pub user_id: Option<u64>,
    pub guild_id: Option<u64>,
    pub role: Option<GameRole>,
    pub won: Option<bool>,
}

/// Outcome rows of one game, ordered by user id.
pub async fn fetch_many_by_game<C: Context>(
    ctx: &C,
    game_id: i64,
) -> sqlx::Result<Vec<UserGame>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE game_id = ? ORDER BY user_id"
    );
    sqlx::query_as(QUERY)
        .bind(game_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_many_by_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
) -> sqlx::Result<Vec<UserGame>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE guild_id = ? ORDER BY game_id, user_id"
    );
    sqlx::query_as(QUERY)
        .bind(guild_id)
        .fetch_all(ctx.db())
        .await
}

/// Every row of the games a user played on a guild, the user's own rows
/// included. Same ordering as [`fetch_many_by_guild`].
pub async fn fetch_many_sharing_games_with_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<Vec<UserGame>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE guild_id = ? AND game_id IN (",
        "SELECT game_id FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND guild_id = ?) ORDER BY game_id, user_id"
    );
    sqlx::query_as(QUERY)
        .bind(guild_id)
        .bind(user_id)
        .bind(guild_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_many_by_user_and_guild<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<Vec<UserGame>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND guild_id = ? ORDER BY game_id"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(guild_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn count<C: Context>(ctx: &C, filter: UserGameFilter) -> anyhow::Result<i64> {
    let mut query = String::from("SELECT COUNT(*) FROM users_games WHERE 1 = 1");
    let mut args = MySqlArguments::default();
    if let Some(user_id) = filter.user_id {
        query.push_str(" AND user_id = ?");
        args.add(user_id)
            .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    }
    if let Some(guild_id) = filter.guild_id {
        query.push_str(" AND guild_id = ?");
        args.add(guild_id)
            .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    }
    if let Some(role) = filter.role {
        query.push_str(" AND player_role = ?");
        args.add(role.code())
            .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    }
    if let Some(won) = filter.won {
        query.push_str(" AND player_won = ?");
        args.add(won)
            .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    }

    let count = sqlx::query_scalar_with(&query, args)
        .fetch_one(ctx.db())
        .await?;
    Ok(count)
}

pub async fn count_distinct_guilds_by_user<C: Context>(
    ctx: &C,
    user_id: u64,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(DISTINCT guild_id) FROM ",
        TABLE_NAME,
        " WHERE user_id = ?"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn delete_many_by_user<C: Context>(ctx: &C, user_id: u64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE user_id = ?");
    let result = sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(result.rows_affected())
}
