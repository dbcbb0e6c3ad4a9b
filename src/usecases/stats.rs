use crate::common::context::Context;
use crate::models::games::{GameResult, GameRole};
use crate::repositories::users_games::UserGameFilter;
use crate::repositories::{games, users_games};
use serde::Serialize;
use std::fmt::Display;
use tracing::error;

/// Reported in place of a count whose query failed.
pub const UNKNOWN_COUNT: i64 = -1;

#[track_caller]
fn count_or_unknown<E: Display>(what: &str, result: Result<i64, E>) -> i64 {
    match result {
        Ok(count) => count,
        Err(e) => {
            let caller = std::panic::Location::caller();
            error!("Failed to count {what} at {caller}: {e}");
            UNKNOWN_COUNT
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuildStats {
    pub games_played: i64,
    pub crewmate_wins: i64,
    pub imposter_wins: i64,
}

#[derive(Debug, Serialize)]
pub struct UserStats {
    pub games_played: i64,
    pub wins: i64,
    pub crewmate_games: i64,
    pub crewmate_wins: i64,
    pub imposter_games: i64,
    pub imposter_wins: i64,
    /// Only filled for global (not guild-scoped) stats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guilds_played_in: Option<i64>,
}

pub async fn num_games_played_on_guild<C: Context>(ctx: &C, guild_id: u64) -> i64 {
    count_or_unknown(
        "games played on guild",
        games::count_finished_by_guild(ctx, guild_id).await,
    )
}

pub async fn num_games_won_as_role_on_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
    role: GameRole,
) -> i64 {
    let win_types = GameResult::winning_role_codes(role);
    count_or_unknown(
        "games won by role on guild",
        games::count_by_guild_and_win_types(ctx, guild_id, &win_types).await,
    )
}

pub async fn num_guilds_played_in_by_user<C: Context>(ctx: &C, user_id: u64) -> i64 {
    count_or_unknown(
        "guilds played in by user",
        users_games::count_distinct_guilds_by_user(ctx, user_id).await,
    )
}

/// Counts a user's game records, optionally scoped to a guild, a role, or
/// only the games they won.
pub async fn num_user_games<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: Option<u64>,
    role: Option<GameRole>,
    won_only: bool,
) -> i64 {
    let filter = UserGameFilter {
        user_id: Some(user_id),
        guild_id,
        role,
        won: won_only.then_some(true),
    };
    count_or_unknown("user games", users_games::count(ctx, filter).await)
}

pub async fn fetch_guild_stats<C: Context>(ctx: &C, guild_id: u64) -> GuildStats {
    GuildStats {
        games_played: num_games_played_on_guild(ctx, guild_id).await,
        crewmate_wins: num_games_won_as_role_on_guild(ctx, guild_id, GameRole::Crewmate).await,
        imposter_wins: num_games_won_as_role_on_guild(ctx, guild_id, GameRole::Imposter).await,
    }
}

pub async fn fetch_user_stats<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: Option<u64>,
) -> UserStats {
    let crewmate = Some(GameRole::Crewmate);
    let imposter = Some(GameRole::Imposter);
    let guilds_played_in = match guild_id {
        Some(_) => None,
        None => Some(num_guilds_played_in_by_user(ctx, user_id).await),
    };
    UserStats {
        games_played: num_user_games(ctx, user_id, guild_id, None, false).await,
        wins: num_user_games(ctx, user_id, guild_id, None, true).await,
        crewmate_games: num_user_games(ctx, user_id, guild_id, crewmate, false).await,
        crewmate_wins: num_user_games(ctx, user_id, guild_id, crewmate, true).await,
        imposter_games: num_user_games(ctx, user_id, guild_id, imposter, false).await,
        imposter_wins: num_user_games(ctx, user_id, guild_id, imposter, true).await,
        guilds_played_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_counts_become_unknown() {
        let failed: Result<i64, &str> = Err("pool timed out");
        assert_eq!(count_or_unknown("anything", failed), UNKNOWN_COUNT);
        assert_eq!(count_or_unknown::<&str>("anything", Ok(12)), 12);
    }
}
