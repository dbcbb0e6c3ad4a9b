use crate::common::context::Context;
use crate::entities::game_events::GameEvent;
use crate::entities::users_games::UserGame;
use crate::models::game_events::PlayerAction;
use crate::models::games::GameRole;
use crate::models::rankings::{
    self, ActionRanking, FirstTargetRanking, KilledByRanking, ModeCount, OtherPlayerRanking,
    PlayerRanking, TeammateOutcome, TeammateRanking,
};
use crate::repositories::{game_events, users_games};
use std::fmt::Display;
use tracing::error;

// Rankings are best-effort: a failed query is logged and reported as an
// empty list, never as an error.

#[track_caller]
fn ok_or_log<T, E: Display>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(rows) => Some(rows),
        Err(e) => {
            let caller = std::panic::Location::caller();
            error!("Failed to fetch {what} at {caller}: {e}");
            None
        }
    }
}

async fn guild_facts_and_actions<C: Context>(
    ctx: &C,
    guild_id: u64,
) -> sqlx::Result<(Vec<UserGame>, Vec<GameEvent>)> {
    let facts = users_games::fetch_many_by_guild(ctx, guild_id).await?;
    let events = game_events::fetch_player_actions_by_guild(ctx, guild_id).await?;
    Ok((facts, events))
}

/// Rows of the games `user_id` played on the guild, with the player actions
/// of everyone in those games.
async fn shared_facts_and_actions<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<(Vec<UserGame>, Vec<GameEvent>)> {
    let facts = users_games::fetch_many_sharing_games_with_user(ctx, user_id, guild_id).await?;
    let events = game_events::fetch_player_actions_in_user_games(ctx, user_id, guild_id).await?;
    Ok((facts, events))
}

/// Rows of the games `user_id` played on the guild, with only the user's own
/// player actions.
async fn shared_facts_and_own_actions<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<(Vec<UserGame>, Vec<GameEvent>)> {
    let facts = users_games::fetch_many_sharing_games_with_user(ctx, user_id, guild_id).await?;
    let events = game_events::fetch_player_actions_by_user(ctx, user_id, guild_id).await?;
    Ok((facts, events))
}

/// Only `user_id`'s own rows and player actions on the guild.
async fn own_facts_and_actions<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> sqlx::Result<(Vec<UserGame>, Vec<GameEvent>)> {
    let facts = users_games::fetch_many_by_user_and_guild(ctx, user_id, guild_id).await?;
    let events = game_events::fetch_player_actions_by_user(ctx, user_id, guild_id).await?;
    Ok((facts, events))
}

pub async fn color_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> Vec<ModeCount<i16>> {
    let result = users_games::fetch_many_by_user_and_guild(ctx, user_id, guild_id).await;
    ok_or_log("color ranking", result)
        .map(|facts| rankings::color_ranking(&facts))
        .unwrap_or_default()
}

pub async fn name_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> Vec<ModeCount<String>> {
    let result = users_games::fetch_many_by_user_and_guild(ctx, user_id, guild_id).await;
    ok_or_log("name ranking", result)
        .map(|facts| rankings::name_ranking(&facts))
        .unwrap_or_default()
}

pub async fn games_played_ranking_for_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
) -> Vec<ModeCount<u64>> {
    let result = users_games::fetch_many_by_guild(ctx, guild_id).await;
    ok_or_log("games played ranking", result)
        .map(|facts| rankings::games_played_ranking(&facts))
        .unwrap_or_default()
}

pub async fn co_participant_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> Vec<OtherPlayerRanking> {
    let result = users_games::fetch_many_sharing_games_with_user(ctx, user_id, guild_id).await;
    ok_or_log("co-participant ranking", result)
        .map(|facts| rankings::co_participant_ranking(user_id, &facts))
        .unwrap_or_default()
}

pub async fn win_rate_ranking_for_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
    role: Option<GameRole>,
) -> Vec<PlayerRanking> {
    let result = users_games::fetch_many_by_guild(ctx, guild_id).await;
    ok_or_log("win rate ranking", result)
        .map(|facts| rankings::win_rate_ranking(&facts, role))
        .unwrap_or_default()
}

pub async fn teammate_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
    role: GameRole,
    outcome: TeammateOutcome,
    leaderboard_min: i64,
) -> Vec<TeammateRanking> {
    let result = users_games::fetch_many_sharing_games_with_user(ctx, user_id, guild_id).await;
    ok_or_log("teammate ranking", result)
        .map(|facts| {
            rankings::teammate_ranking_for_user(user_id, &facts, role, outcome, leaderboard_min)
        })
        .unwrap_or_default()
}

pub async fn teammate_ranking_for_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
    role: GameRole,
    outcome: TeammateOutcome,
    leaderboard_min: i64,
) -> Vec<TeammateRanking> {
    let result = users_games::fetch_many_by_guild(ctx, guild_id).await;
    ok_or_log("guild teammate ranking", result)
        .map(|facts| rankings::teammate_ranking_for_guild(&facts, role, outcome, leaderboard_min))
        .unwrap_or_default()
}

pub async fn first_target_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
    action: PlayerAction,
    leaderboard_size: usize,
) -> Vec<FirstTargetRanking> {
    let result = shared_facts_and_actions(ctx, user_id, guild_id).await;
    ok_or_log("first target ranking", result)
        .map(|(facts, events)| {
            rankings::first_target_ranking_for_user(
                user_id,
                &facts,
                &events,
                action,
                leaderboard_size,
            )
        })
        .unwrap_or_default()
}

pub async fn first_target_ranking_for_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
    action: PlayerAction,
    leaderboard_min: i64,
    leaderboard_size: usize,
) -> Vec<FirstTargetRanking> {
    let result = guild_facts_and_actions(ctx, guild_id).await;
    ok_or_log("guild first target ranking", result)
        .map(|(facts, events)| {
            rankings::first_target_ranking_for_guild(
                &facts,
                &events,
                action,
                leaderboard_min,
                leaderboard_size,
            )
        })
        .unwrap_or_default()
}

pub async fn killed_by_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
) -> Vec<KilledByRanking> {
    let result = shared_facts_and_own_actions(ctx, user_id, guild_id).await;
    ok_or_log("killed by ranking", result)
        .map(|(facts, events)| rankings::killed_by_ranking_for_user(user_id, &facts, &events))
        .unwrap_or_default()
}

pub async fn killed_by_ranking_for_guild<C: Context>(
    ctx: &C,
    guild_id: u64,
    leaderboard_min: i64,
) -> Vec<KilledByRanking> {
    let result = guild_facts_and_actions(ctx, guild_id).await;
    ok_or_log("guild killed by ranking", result)
        .map(|(facts, events)| {
            rankings::killed_by_ranking_for_guild(&facts, &events, leaderboard_min)
        })
        .unwrap_or_default()
}

pub async fn action_ranking_for_user<C: Context>(
    ctx: &C,
    user_id: u64,
    guild_id: u64,
    action: PlayerAction,
    role: GameRole,
) -> Vec<ActionRanking> {
    let result = own_facts_and_actions(ctx, user_id, guild_id).await;
    ok_or_log("action ranking", result)
        .map(|(facts, events)| rankings::action_ranking(user_id, &facts, &events, action, role))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_rankings_become_empty() {
        let failed: Result<Vec<u64>, &str> = Err("connection refused");
        assert_eq!(ok_or_log("anything", failed), None);
        assert_eq!(
            ok_or_log::<_, &str>("anything", Ok(vec![3, 1])),
            Some(vec![3, 1])
        );
    }
}
