pub mod game_events;
pub mod games;
pub mod leaderboards;
pub mod rankings;
pub mod statistics;
