pub mod lobbies;
pub mod lobby_cache;

pub use lobbies::LobbyService;
pub use lobby_cache::LobbyViewCache;
