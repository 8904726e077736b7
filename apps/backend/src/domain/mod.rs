//! Domain layer: the lobby aggregate and its pure helpers. No I/O, no async.

pub mod choose_control;
pub mod lobby;
pub mod priority;
pub mod profile;
pub mod team;
pub mod view;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_priority;
#[cfg(test)]
mod tests_props_priority;

// Re-exports for ergonomics
pub use choose_control::{ChooseControl, ChooseType};
pub use lobby::{Lobby, LobbyStatus};
pub use profile::{HardSkill, Profile, Role, SoftSkill, TurnKey, BEFORE_FIRST_TURN, NO_PRIORITY};
pub use team::Team;
pub use view::{ChooseControlView, LobbyView, ProfileView, TeamView};
