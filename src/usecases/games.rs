use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::statistics::MatchStatistics;
use crate::repositories::{game_events, games, users_games};
use tracing::info;

/// Loads a game with its telemetry and outcome rows and reduces them.
///
/// A missing `games` row still produces statistics from the outcome rows;
/// only a game with neither is reported as not found.
pub async fn fetch_statistics<C: Context>(ctx: &C, game_id: i64) -> ServiceResult<MatchStatistics> {
    let game = match games::fetch_one(ctx, game_id).await {
        Ok(game) => game,
        Err(e) => return unexpected(e),
    };
    let users = match users_games::fetch_many_by_game(ctx, game_id).await {
        Ok(users) => users,
        Err(e) => return unexpected(e),
    };
    if game.is_none() && users.is_empty() {
        return Err(AppError::GamesNotFound);
    }
    let events = match game_events::fetch_many_by_game(ctx, game_id).await {
        Ok(events) => events,
        Err(e) => return unexpected(e),
    };

    Ok(MatchStatistics::reduce(game.as_ref(), &events, &users))
}

pub async fn delete_all_for_guild<C: Context>(ctx: &C, guild_id: u64) -> ServiceResult<u64> {
    match games::delete_many_by_guild(ctx, guild_id).await {
        Ok(deleted) => {
            info!(guild_id, deleted, "Deleted all games of guild");
            Ok(deleted)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn delete_all_for_user<C: Context>(ctx: &C, user_id: u64) -> ServiceResult<u64> {
    match users_games::delete_many_by_user(ctx, user_id).await {
        Ok(deleted) => {
            info!(user_id, deleted, "Deleted all game records of user");
            Ok(deleted)
        }
        Err(e) => unexpected(e),
    }
}
