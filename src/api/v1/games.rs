use crate::api::RequestContext;
use crate::api::extractors::ApiPath;
use crate::common::error::ServiceResponse;
use crate::models::leaderboards::DeleteResponse;
use crate::models::statistics::MatchStatistics;
use crate::usecases::games;
use axum::Json;

pub async fn statistics(
    ctx: RequestContext,
    ApiPath(game_id): ApiPath<i64>,
) -> ServiceResponse<MatchStatistics> {
    let statistics = games::fetch_statistics(&ctx, game_id).await?;
    Ok(Json(statistics))
}

pub async fn delete_guild_games(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
) -> ServiceResponse<DeleteResponse> {
    let deleted = games::delete_all_for_guild(&ctx, guild_id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

pub async fn delete_user_games(
    ctx: RequestContext,
    ApiPath(user_id): ApiPath<u64>,
) -> ServiceResponse<DeleteResponse> {
    let deleted = games::delete_all_for_user(&ctx, user_id).await?;
    Ok(Json(DeleteResponse { deleted }))
}
