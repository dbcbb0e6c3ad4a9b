pub mod game_events;
pub mod games;
pub mod users_games;
