//! Domain-level error type used across the aggregate, services and adapters.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert via the provided
//! `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::LobbyStatus;
use crate::errors::ErrorCode;

/// Rule violations reported by the lobby state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    TooManySkills,
    NotEnoughPlayers,
    NotEnoughMentors,
    ProfileIsAlreadyLeader,
    NotInLobby,
    NotALeader,
    NotYourTurn,
    InvalidTeam,
    InvalidPlayer,
    TeamNotFound,
    NoEligibleLeader,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Lobby,
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Storage,
    DataCorruption,
    /// Another stored lobby already holds the access code
    AccessCodeTaken,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Action attempted outside the phase that allows it
    InvalidStatus {
        expected: LobbyStatus,
        actual: LobbyStatus,
    },
    /// Identifier, turn-order or skill-ceiling violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidStatus { expected, actual } => {
                write!(f, "invalid_status: expected {expected}, lobby is {actual}")
            }
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_status(expected: LobbyStatus, actual: LobbyStatus) -> Self {
        Self::InvalidStatus { expected, actual }
    }
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The snake_case condition name callers match on.
    pub fn condition(&self) -> &'static str {
        match self {
            DomainError::InvalidStatus { .. } => "invalid_status",
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::TooManySkills => "too_many_skills",
                ValidationKind::NotEnoughPlayers => "not_enough_players",
                ValidationKind::NotEnoughMentors => "not_enough_mentors",
                ValidationKind::ProfileIsAlreadyLeader => "profile_is_already_leader",
                ValidationKind::NotInLobby => "not_in_lobby",
                ValidationKind::NotALeader => "not_a_leader",
                ValidationKind::NotYourTurn => "not_your_turn",
                ValidationKind::InvalidTeam => "invalid_team",
                ValidationKind::InvalidPlayer => "invalid_player",
                ValidationKind::TeamNotFound => "team_not_found",
                ValidationKind::NoEligibleLeader => "no_eligible_leader",
                ValidationKind::Other(_) => "validation_error",
            },
            DomainError::NotFound(NotFoundKind::Lobby, _) => "lobby_not_found",
            DomainError::Infra(InfraErrorKind::DataCorruption, _) => "data_corruption",
            DomainError::Infra(InfraErrorKind::AccessCodeTaken, _) => "access_code_taken",
            DomainError::Infra(InfraErrorKind::Storage, _) => "storage_error",
        }
    }

    /// The API error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidStatus { .. } => ErrorCode::InvalidStatus,
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::TooManySkills => ErrorCode::TooManySkills,
                ValidationKind::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
                ValidationKind::NotEnoughMentors => ErrorCode::NotEnoughMentors,
                ValidationKind::ProfileIsAlreadyLeader => ErrorCode::ProfileIsAlreadyLeader,
                ValidationKind::NotInLobby => ErrorCode::NotInLobby,
                ValidationKind::NotALeader => ErrorCode::NotALeader,
                ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
                ValidationKind::InvalidTeam => ErrorCode::InvalidTeam,
                ValidationKind::InvalidPlayer => ErrorCode::InvalidPlayer,
                ValidationKind::TeamNotFound => ErrorCode::TeamNotFound,
                ValidationKind::NoEligibleLeader => ErrorCode::NoEligibleLeader,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::NotFound(NotFoundKind::Lobby, _) => ErrorCode::LobbyNotFound,
            DomainError::Infra(InfraErrorKind::DataCorruption, _) => ErrorCode::DataCorruption,
            DomainError::Infra(InfraErrorKind::AccessCodeTaken, _) => ErrorCode::Conflict,
            DomainError::Infra(InfraErrorKind::Storage, _) => ErrorCode::StorageError,
        }
    }

    /// True when the error means "no such lobby" rather than a bad request.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_, _))
    }
}
