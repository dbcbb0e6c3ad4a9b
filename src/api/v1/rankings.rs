use crate::api::RequestContext;
use crate::api::extractors::{ApiPath, ApiQuery};
use crate::models::leaderboards::{ActionArgs, TeammateArgs, UserFirstTargetArgs};
use crate::models::rankings::{
    ActionRanking, FirstTargetRanking, KilledByRanking, ModeCount, OtherPlayerRanking,
    TeammateOutcome, TeammateRanking,
};
use crate::usecases::rankings;
use axum::Json;

pub async fn colors(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Json<Vec<ModeCount<i16>>> {
    Json(rankings::color_ranking_for_user(&ctx, user_id, guild_id).await)
}

pub async fn names(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Json<Vec<ModeCount<String>>> {
    Json(rankings::name_ranking_for_user(&ctx, user_id, guild_id).await)
}

pub async fn players(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Json<Vec<OtherPlayerRanking>> {
    Json(rankings::co_participant_ranking_for_user(&ctx, user_id, guild_id).await)
}

pub async fn best_teammates(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
    ApiQuery(args): ApiQuery<TeammateArgs>,
) -> Json<Vec<TeammateRanking>> {
    let ranking = rankings::teammate_ranking_for_user(
        &ctx,
        user_id,
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
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
    ApiQuery(args): ApiQuery<TeammateArgs>,
) -> Json<Vec<TeammateRanking>> {
    let ranking = rankings::teammate_ranking_for_user(
        &ctx,
        user_id,
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
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
    ApiQuery(args): ApiQuery<UserFirstTargetArgs>,
) -> Json<Vec<FirstTargetRanking>> {
    let ranking = rankings::first_target_ranking_for_user(
        &ctx,
        user_id,
        guild_id,
        args.action,
        args.leaderboard_size,
    )
    .await;
    Json(ranking)
}

pub async fn killed_by(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Json<Vec<KilledByRanking>> {
    Json(rankings::killed_by_ranking_for_user(&ctx, user_id, guild_id).await)
}

pub async fn actions(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
    ApiQuery(args): ApiQuery<ActionArgs>,
) -> Json<Vec<ActionRanking>> {
    let ranking =
        rankings::action_ranking_for_user(&ctx, user_id, guild_id, args.action, args.role).await;
    Json(ranking)
}
