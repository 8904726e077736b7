use std::sync::Arc;

use lobby_backend::adapters::InMemoryLobbyRepo;
use lobby_backend::config::CacheSettings;
use lobby_backend::domain::{ChooseType, HardSkill, LobbyStatus, LobbyView, Profile, SoftSkill};
use lobby_backend::errors::ErrorCode;
use lobby_backend::services::{LobbyService, LobbyViewCache};

use crate::common::wait_for_status;
use crate::support::lobby_api::{player_id, turn_id};

/// Two mentors, leaders `lg` (Leadership + GDP) and `g` (GDP), and three
/// plain players, parked in `LeaderTeamSelect`.
async fn two_team_lobby() -> (LobbyService, String, LobbyView) {
    let service = LobbyService::new(
        Arc::new(InMemoryLobbyRepo::new()),
        LobbyViewCache::new(&CacheSettings::default()),
    );
    let code = service
        .create_lobby(Profile::new_master("Ada", "ada.png"), "Draft", 1, 1)
        .await
        .unwrap()
        .access_code;

    let joins = [
        Profile::new_player("lg", "lg.png", vec![HardSkill::Gdp], vec![SoftSkill::Leadership]),
        Profile::new_player("g", "g.png", vec![HardSkill::Gdp], vec![]),
        Profile::new_player("p1", "p1.png", vec![], vec![]),
        Profile::new_player("p2", "p2.png", vec![HardSkill::Ia], vec![]),
        Profile::new_player("p3", "p3.png", vec![], vec![SoftSkill::Proactivity]),
        Profile::new_mentor("m0", "m0.png"),
        Profile::new_mentor("m1", "m1.png"),
    ];
    for profile in joins {
        service.join_lobby(&code, profile).await.unwrap();
    }

    service.start_team_creation(&code).await.unwrap();
    let view = wait_for_status(&service, &code, LobbyStatus::LeaderTeamSelect).await;
    (service, code, view)
}

#[tokio::test]
async fn leaders_pick_teams_then_draft_until_pool_is_empty() {
    let (service, code, view) = two_team_lobby().await;
    let lg = player_id(&view, "lg");
    let g = player_id(&view, "g");
    let (p1, p2, p3) = (
        player_id(&view, "p1"),
        player_id(&view, "p2"),
        player_id(&view, "p3"),
    );
    assert_eq!(turn_id(&view), lg);

    // Team selection: best-ranked leader first, each leader leaves the pool.
    let view = service.select_team(&code, &lg, 0).await.unwrap();
    assert_eq!(view.status, LobbyStatus::LeaderTeamSelect);
    assert_eq!(turn_id(&view), g);
    assert!(view.players.iter().all(|p| p.id != lg));

    let view = service.select_team(&code, &g, 1).await.unwrap();
    assert_eq!(view.status, LobbyStatus::PlayerSelect);
    let control = view.choose_control.clone().unwrap();
    assert_eq!(control.kind, ChooseType::SelectPlayer);
    assert_eq!(control.choosing_now.id, lg);
    assert_eq!(view.players.len(), 3);

    // Draft: lg, then g, then wrap around to lg.
    let view = service.select_player(&code, &lg, &p1).await.unwrap();
    assert_eq!(turn_id(&view), g);
    let view = service.select_player(&code, &g, &p2).await.unwrap();
    assert_eq!(turn_id(&view), lg);
    let view = service.select_player(&code, &lg, &p3).await.unwrap();

    assert_eq!(view.status, LobbyStatus::ReadyToStart);
    assert!(view.choose_control.is_none());
    assert!(view.players.is_empty());

    let team = |leader: &str| {
        view.teams
            .iter()
            .find(|t| t.leader.as_ref().map(|l| l.id.as_str()) == Some(leader))
            .unwrap()
    };
    let lg_team: Vec<_> = team(&lg).players.iter().map(|p| p.name.as_str()).collect();
    let g_team: Vec<_> = team(&g).players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(lg_team, ["p1", "p3"]);
    assert_eq!(g_team, ["p2"]);
    assert_eq!(team(&lg).mentor.name, "m0");
    assert_eq!(team(&g).mentor.name, "m1");

    // The finished lobby is what later reads see.
    assert_eq!(service.get_lobby(&code).await.unwrap(), view);
}

#[tokio::test]
async fn rejected_actions_leave_the_lobby_untouched() {
    let (service, code, view) = two_team_lobby().await;
    let g = player_id(&view, "g");
    let p1 = player_id(&view, "p1");
    let lg = player_id(&view, "lg");

    let err = service.select_team(&code, &g, 0).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);

    let err = service.select_team(&code, &p1, 0).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotALeader);

    let err = service.select_team(&code, &lg, 2).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTeam);

    let err = service.select_player(&code, &lg, &p1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStatus);

    assert_eq!(service.get_lobby(&code).await.unwrap(), view);
}

#[tokio::test]
async fn drafting_a_player_twice_is_rejected() {
    let (service, code, view) = two_team_lobby().await;
    let lg = player_id(&view, "lg");
    let g = player_id(&view, "g");
    let p1 = player_id(&view, "p1");

    service.select_team(&code, &lg, 0).await.unwrap();
    service.select_team(&code, &g, 1).await.unwrap();
    service.select_player(&code, &lg, &p1).await.unwrap();

    let err = service.select_player(&code, &g, &p1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPlayer);

    let err = service.select_player(&code, &g, &lg).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPlayer);
}

#[tokio::test]
async fn taking_the_last_slot_first_skips_remaining_leaders() {
    let (service, code, view) = two_team_lobby().await;
    let lg = player_id(&view, "lg");
    let g = player_id(&view, "g");

    let view = service.select_team(&code, &lg, 1).await.unwrap();
    assert_eq!(view.status, LobbyStatus::PlayerSelect);
    assert_eq!(turn_id(&view), lg);
    assert!(view.teams[0].leader.is_none());

    // `g` never got a team and stays in the pool as a draftable player.
    assert!(view.players.iter().any(|p| p.id == g));
    let view = service.select_player(&code, &lg, &g).await.unwrap();
    assert_eq!(view.teams[1].players[0].id, g);
}
