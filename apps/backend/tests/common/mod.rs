#![allow(dead_code)]

use std::time::Duration;

use lobby_backend::domain::{LobbyStatus, LobbyView};
use lobby_backend::services::LobbyService;

// Logging is auto-installed for every test binary that includes `mod common`
#[ctor::ctor]
fn init_logging() {
    lobby_test_support::logging::init();
}

/// Upper bound for the background team-creation task to settle.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Poll the service until the lobby reaches `status`, panicking on timeout.
pub async fn wait_for_status(
    service: &LobbyService,
    access_code: &str,
    status: LobbyStatus,
) -> LobbyView {
    let poll = async {
        loop {
            let view = service
                .get_lobby(access_code)
                .await
                .expect("lobby should exist while polling");
            if view.status == status {
                return view;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };

    tokio::time::timeout(SETTLE_TIMEOUT, poll)
        .await
        .unwrap_or_else(|_| panic!("lobby {access_code} never reached {status}"))
}
