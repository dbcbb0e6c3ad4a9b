use crate::entities::game_events::GameEvent;
use crate::entities::games::Game;
use crate::entities::users_games::UserGame;
use crate::models::game_events::{EventDecodeError, GameEventPayload, Phase, PlayerAction};
use crate::models::games::{GameResult, WinRole};
use chrono::{DateTime, Utc};
use hashbrown::HashSet;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum TimelineEntryKind {
    Tasks,
    Discuss,
    PlayerDeath,
    PlayerDisconnect,
    PlayerExiled,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub kind: TimelineEntryKind,
    /// Seconds since the game started.
    pub offset_secs: i64,
    /// Raw player payload for player entries, empty for phase entries.
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchStatistics {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_secs: i64,
    pub win_type: GameResult,
    pub win_role: WinRole,
    pub winner_names: Vec<String>,
    pub loser_names: Vec<String>,

    pub num_meetings: u32,
    pub num_deaths: u32,
    pub num_voted_off: u32,
    pub num_disconnects: u32,
    pub timeline: Vec<TimelineEntry>,
}

impl Default for MatchStatistics {
    fn default() -> Self {
        Self {
            start_time: DateTime::<Utc>::UNIX_EPOCH,
            end_time: DateTime::<Utc>::UNIX_EPOCH,
            duration_secs: 0,
            win_type: GameResult::Unknown,
            win_role: GameResult::Unknown.win_role(),
            winner_names: vec![],
            loser_names: vec![],
            num_meetings: 0,
            num_deaths: 0,
            num_voted_off: 0,
            num_disconnects: 0,
            timeline: vec![],
        }
    }
}

impl MatchStatistics {
    /// Folds one game's telemetry into its statistics.
    ///
    /// `events` must already be ordered by event time; nothing is re-sorted
    /// here. Fewer than two events yields an empty timeline.
    pub fn reduce(game: Option<&Game>, events: &[GameEvent], users: &[UserGame]) -> Self {
        let mut stats = Self::default();
        let mut start_secs = 0;

        if let Some(game) = game {
            start_secs = game.start_time;
            stats.start_time = from_unix_secs(game.start_time);
            stats.end_time = from_unix_secs(game.end_time);
            stats.duration_secs = game.end_time.saturating_sub(game.start_time);
            stats.win_type = GameResult::from_code(game.win_type);
            stats.win_role = stats.win_type.win_role();
        }

        for user in users {
            match user.player_won {
                true => stats.winner_names.push(user.player_name.clone()),
                false => stats.loser_names.push(user.player_name.clone()),
            }
        }

        if events.len() < 2 {
            return stats;
        }

        let mut exiled_names: HashSet<String> = HashSet::new();
        for event in events {
            let offset_secs = event.event_time.saturating_sub(start_secs);
            let payload = match GameEventPayload::from_event(event) {
                Ok(payload) => payload,
                Err(EventDecodeError::UnsupportedType(event_type)) => {
                    debug!(event_id = event.event_id, event_type, "Ignoring game event");
                    continue;
                }
                Err(e) => {
                    warn!(
                        event_id = event.event_id,
                        game_id = event.game_id,
                        "Skipping game event: {e}"
                    );
                    continue;
                }
            };

            match payload {
                GameEventPayload::PhaseState(Phase::Discuss) => {
                    stats.num_meetings += 1;
                    stats.push_phase(TimelineEntryKind::Discuss, offset_secs);
                }
                GameEventPayload::PhaseState(Phase::Tasks) => {
                    stats.push_phase(TimelineEntryKind::Tasks, offset_secs);
                }
                GameEventPayload::PhaseState(_) => {}
                GameEventPayload::PlayerAction(update) => match update.action {
                    Some(PlayerAction::Died) => {
                        stats.num_deaths += 1;
                        if !exiled_names.contains(update.name.as_str()) {
                            stats.push_player(TimelineEntryKind::PlayerDeath, offset_secs, event);
                        }
                    }
                    Some(PlayerAction::Exiled) => {
                        stats.num_voted_off += 1;
                        stats.push_player(TimelineEntryKind::PlayerExiled, offset_secs, event);
                        exiled_names.insert(update.name);
                    }
                    Some(PlayerAction::Disconnected) => {
                        stats.num_disconnects += 1;
                        stats.push_player(TimelineEntryKind::PlayerDisconnect, offset_secs, event);
                    }
                    _ => {}
                },
            }
        }

        stats
    }

    pub fn num_players(&self) -> usize {
        self.winner_names.len() + self.loser_names.len()
    }

    /// Deaths that were not the result of a vote.
    pub fn num_killed(&self) -> u32 {
        self.num_deaths.saturating_sub(self.num_voted_off)
    }

    fn push_phase(&mut self, kind: TimelineEntryKind, offset_secs: i64) {
        self.timeline.push(TimelineEntry {
            kind,
            offset_secs,
            data: String::new(),
        });
    }

    fn push_player(&mut self, kind: TimelineEntryKind, offset_secs: i64, event: &GameEvent) {
        self.timeline.push(TimelineEntry {
            kind,
            offset_secs,
            data: event.payload.clone(),
        });
    }
}

fn from_unix_secs(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
