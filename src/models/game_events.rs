use crate::entities::game_events::GameEvent;
use serde::Deserialize;

#[repr(i16)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEventType {
    Connection = 0,
    Lobby = 1,
    State = 2,
    Player = 3,
    GameOver = 4,
}

impl GameEventType {
    pub const fn code(self) -> i16 {
        self as i16
    }

    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(GameEventType::Connection),
            1 => Some(GameEventType::Lobby),
            2 => Some(GameEventType::State),
            3 => Some(GameEventType::Player),
            4 => Some(GameEventType::GameOver),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Lobby,
    Tasks,
    Discuss,
    Menu,
    GameOver,
    Unknown,
}

impl Phase {
    const LOBBY_CODE: &str = "0";
    const TASKS_CODE: &str = "1";
    const DISCUSS_CODE: &str = "2";
    const MENU_CODE: &str = "3";
    const GAME_OVER_CODE: &str = "4";

    /// Phase payloads are the decimal phase code, e.g. `"2"` for discussion.
    /// Only the exact code strings are recognized.
    pub fn from_payload(payload: &str) -> Self {
        match payload {
            Self::LOBBY_CODE => Phase::Lobby,
            Self::TASKS_CODE => Phase::Tasks,
            Self::DISCUSS_CODE => Phase::Discuss,
            Self::MENU_CODE => Phase::Menu,
            Self::GAME_OVER_CODE => Phase::GameOver,
            _ => Phase::Unknown,
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
pub enum PlayerAction {
    Joined = 0,
    Left = 1,
    Died = 2,
    ChangedColor = 3,
    ForceUpdated = 4,
    Disconnected = 5,
    Exiled = 6,
}

impl PlayerAction {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PlayerAction::Joined),
            1 => Some(PlayerAction::Left),
            2 => Some(PlayerAction::Died),
            3 => Some(PlayerAction::ChangedColor),
            4 => Some(PlayerAction::ForceUpdated),
            5 => Some(PlayerAction::Disconnected),
            6 => Some(PlayerAction::Exiled),
            _ => None,
        }
    }
}

/// Wire shape of a player-action payload as written by the capture client.
/// Missing fields take their zero value.
#[derive(Debug, Deserialize)]
struct PlayerPayload {
    #[serde(rename = "Action", alias = "action", alias = "ACTION", default)]
    action: i32,
    #[serde(rename = "Name", alias = "name", alias = "NAME", default)]
    name: String,
    #[serde(rename = "Color", alias = "color", alias = "COLOR", default)]
    color: Option<i32>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerUpdate {
    /// `None` for action codes this service does not know about.
    pub action: Option<PlayerAction>,
    pub name: String,
    pub color: Option<i32>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameEventPayload {
    PhaseState(Phase),
    PlayerAction(PlayerUpdate),
}

#[derive(Debug, thiserror::Error)]
pub enum EventDecodeError {
    #[error("unsupported event type {0}")]
    UnsupportedType(i16),
    #[error("malformed player payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl GameEventPayload {
    pub fn decode(event_type: i16, payload: &str) -> Result<Self, EventDecodeError> {
        match GameEventType::from_code(event_type) {
            Some(GameEventType::State) => Ok(GameEventPayload::PhaseState(Phase::from_payload(
                payload,
            ))),
            Some(GameEventType::Player) => {
                let player: PlayerPayload = serde_json::from_str(payload)?;
                Ok(GameEventPayload::PlayerAction(PlayerUpdate {
                    action: PlayerAction::from_code(player.action),
                    name: player.name,
                    color: player.color,
                }))
            }
            _ => Err(EventDecodeError::UnsupportedType(event_type)),
        }
    }

    pub fn from_event(event: &GameEvent) -> Result<Self, EventDecodeError> {
        Self::decode(event.event_type, &event.payload)
    }

    pub fn player_action(&self) -> Option<PlayerAction> {
        match self {
            GameEventPayload::PlayerAction(update) => update.action,
            GameEventPayload::PhaseState(_) => None,
        }
    }
}
