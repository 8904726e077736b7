//! Error codes for the lobby backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the `code` field
//! of problem-details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lobby lifecycle
    /// Action attempted in the wrong lobby phase
    InvalidStatus,

    // Lobby rule violations
    /// Profile carries more skills than the lobby allows
    TooManySkills,
    /// Fewer than two players joined
    NotEnoughPlayers,
    /// No mentor joined
    NotEnoughMentors,
    /// Promotion target already holds the Leader role
    ProfileIsAlreadyLeader,
    /// Acting profile is not a current lobby player
    NotInLobby,
    /// Acting profile is not a leader
    NotALeader,
    /// Acting profile does not hold the current turn
    NotYourTurn,
    /// Team index out of range
    InvalidTeam,
    /// Drafted player is not in the lobby
    InvalidPlayer,
    /// Acting leader owns no team
    TeamNotFound,
    /// No leader is eligible to take the next turn
    NoEligibleLeader,

    // Request validation
    /// Malformed access code path segment
    InvalidAccessCode,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// No lobby for the given access code
    LobbyNotFound,

    /// Access code already held by another lobby
    Conflict,

    // System errors
    /// Storage collaborator failed
    StorageError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Stored aggregate is inconsistent
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidStatus => "INVALID_STATUS",

            Self::TooManySkills => "TOO_MANY_SKILLS",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::NotEnoughMentors => "NOT_ENOUGH_MENTORS",
            Self::ProfileIsAlreadyLeader => "PROFILE_IS_ALREADY_LEADER",
            Self::NotInLobby => "NOT_IN_LOBBY",
            Self::NotALeader => "NOT_A_LEADER",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::InvalidTeam => "INVALID_TEAM",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::NoEligibleLeader => "NO_ELIGIBLE_LEADER",

            Self::InvalidAccessCode => "INVALID_ACCESS_CODE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::LobbyNotFound => "LOBBY_NOT_FOUND",

            Self::Conflict => "CONFLICT",

            Self::StorageError => "STORAGE_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
