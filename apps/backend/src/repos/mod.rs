//! Repository traits for domain layer.

pub mod lobbies;

pub use lobbies::LobbyRepo;
