//! Adapters for external dependencies.

pub mod lobbies_memory;

pub use lobbies_memory::InMemoryLobbyRepo;
