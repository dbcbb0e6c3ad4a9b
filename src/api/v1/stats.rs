use crate::api::RequestContext;
use crate::api::extractors::ApiPath;
use crate::usecases::stats::{self, GuildStats, UserStats};
use axum::Json;

// Counts never fail; a failed query shows up as -1 in the body.

pub async fn guild_stats(
    ctx: RequestContext,
    ApiPath(guild_id): ApiPath<u64>,
) -> Json<GuildStats> {
    Json(stats::fetch_guild_stats(&ctx, guild_id).await)
}

pub async fn user_stats(
    ctx: RequestContext,
    ApiPath(user_id): ApiPath<u64>,
) -> Json<UserStats> {
    Json(stats::fetch_user_stats(&ctx, user_id, None).await)
}

pub async fn user_guild_stats(
    ctx: RequestContext,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Json<UserStats> {
    Json(stats::fetch_user_stats(&ctx, user_id, Some(guild_id)).await)
}
