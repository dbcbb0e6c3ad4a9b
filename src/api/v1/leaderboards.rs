use crate::api::RequestContext;
use crate::api::extractors::{ApiPath, ApiQuery};
use crate::models::leaderboards::{GuildFirstTargetArgs, KilledByArgs, RoleArgs, TeammateArgs};
use crate::models::rankings::{
    FirstTargetRanking, KilledByRanking, ModeCount, PlayerRanking, TeammateOutcome,
    TeammateRanking,
};
use crate::usecases::rankings;
use axum::Json;

pub async fn wins(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(args): ApiQuery<RoleArgs>,
) -> Json<Vec<PlayerRanking>> {
    Json(rankings::win_rate_ranking_for_guild(&ctx, guild_id, args.role).await)
}

pub async fn games(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
) -> Json<Vec<ModeCount<u64>>> {
    Json(rankings::games_played_ranking_for_guild(&ctx, guild_id).await)
}

pub async fn best_teammates(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(args): ApiQuery<TeammateArgs>,
) -> Json<Vec<TeammateRanking>> {
    let ranking = rankings::teammate_ranking_for_guild(
        &ctx,
        guild_id,
        args.role,
        TeammateOutcome::Win,
        args.leaderboard_min,
    )
    .await;
    Json(ranking)
}

pub async fn worst_teammates(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(args): ApiQuery<TeammateArgs>,
) -> Json<Vec<TeammateRanking>> {
    let ranking = rankings::teammate_ranking_for_guild(
        &ctx,
        guild_id,
        args.role,
        TeammateOutcome::Loss,
        args.leaderboard_min,
    )
    .await;
    Json(ranking)
}

pub async fn first_targets(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(args): ApiQuery<GuildFirstTargetArgs>,
) -> Json<Vec<FirstTargetRanking>> {
    let ranking = rankings::first_target_ranking_for_guild(
        &ctx,
        guild_id,
        args.action,
        args.leaderboard_min,
        args.leaderboard_size,
    )
    .await;
    Json(ranking)
}

pub async fn killed_by(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(args): ApiQuery<KilledByArgs>,
) -> Json<Vec<KilledByRanking>> {
    Json(rankings::killed_by_ranking_for_guild(&ctx, guild_id, args.leaderboard_min).await)
}
