use serde::{Deserialize, Serialize};

#[repr(i16)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameRole {
    Crewmate = 0,
    Imposter = 1,
}

impl GameRole {
    pub const fn code(self) -> i16 {
        self as i16
    }

    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(GameRole::Crewmate),
            1 => Some(GameRole::Imposter),
            _ => None,
        }
    }
}

/// How a game ended, numbered the way the game client reports it.
#[repr(i16)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    HumansByVote = 0,
    HumansByTask = 1,
    ImpostorByVote = 2,
    ImpostorByKill = 3,
    ImpostorBySabotage = 4,
    ImpostorDisconnect = 5,
    HumansDisconnect = 6,
    Unknown = 7,
}

impl GameResult {
    const CREWMATE_WINS: [GameResult; 3] = [
        GameResult::HumansByVote,
        GameResult::HumansByTask,
        GameResult::HumansDisconnect,
    ];
    const IMPOSTER_WINS: [GameResult; 4] = [
        GameResult::ImpostorByVote,
        GameResult::ImpostorByKill,
        GameResult::ImpostorBySabotage,
        GameResult::ImpostorDisconnect,
    ];

    pub const fn from_code(code: i16) -> Self {
        match code {
            0 => GameResult::HumansByVote,
            1 => GameResult::HumansByTask,
            2 => GameResult::ImpostorByVote,
            3 => GameResult::ImpostorByKill,
            4 => GameResult::ImpostorBySabotage,
            5 => GameResult::ImpostorDisconnect,
            6 => GameResult::HumansDisconnect,
            _ => GameResult::Unknown,
        }
    }

    pub const fn code(self) -> i16 {
        self as i16
    }

    pub const fn win_role(self) -> WinRole {
        match self {
            GameResult::HumansByVote | GameResult::HumansByTask | GameResult::HumansDisconnect => {
                WinRole::Crewmate
            }
            GameResult::ImpostorByVote
            | GameResult::ImpostorByKill
            | GameResult::ImpostorBySabotage
            | GameResult::ImpostorDisconnect => WinRole::Imposter,
            GameResult::Unknown => WinRole::CrewmateByDefault,
        }
    }

    /// Raw `win_type` codes that count as a win for `role`.
    pub fn winning_role_codes(role: GameRole) -> Vec<i16> {
        let results: &[GameResult] = match role {
            GameRole::Crewmate => &Self::CREWMATE_WINS,
            GameRole::Imposter => &Self::IMPOSTER_WINS,
        };
        results.iter().map(|result| result.code()).collect()
    }
}

/// The faction credited with a game's win.
///
/// An unrecognized result is still credited to the crew, but as
/// `CrewmateByDefault` so callers can tell it apart from a real crew win.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum WinRole {
    Crewmate,
    Imposter,
    CrewmateByDefault,
}

impl WinRole {
    pub const fn role(self) -> GameRole {
        match self {
            WinRole::Crewmate | WinRole::CrewmateByDefault => GameRole::Crewmate,
            WinRole::Imposter => GameRole::Imposter,
        }
    }
}
