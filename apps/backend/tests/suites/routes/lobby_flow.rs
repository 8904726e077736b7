use actix_web::http::StatusCode;
use lobby_backend::domain::{ChooseType, LobbyStatus};
use lobby_backend::test_support::{create_test_app_builder, test_state};
use serde_json::json;

use crate::common::wait_for_status;
use crate::support::lobby_api::{
    create_lobby, get, join_mentor, join_player, player_id, post, post_empty, turn_id, view,
};

#[actix_web::test]
async fn full_lobby_flow_over_http() {
    let state = test_state().await.unwrap();
    let app = create_test_app_builder(state.clone())
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let created = create_lobby(&app).await;
    assert_eq!(created.status, LobbyStatus::Waiting);
    assert_eq!(created.access_code.len(), 6);
    assert_eq!(created.master.name, "Ada");
    let code = created.access_code;

    join_player(&app, &code, "p1", &[], &[]).await;
    join_player(&app, &code, "p2", &["IA"], &[]).await;
    join_mentor(&app, &code, "m1").await;
    let joined = join_player(&app, &code, "lead", &[], &["Leadership"]).await;
    assert_eq!(joined.players.len(), 3);
    assert_eq!(joined.mentors.len(), 1);

    let closed = view(
        post_empty(&app, &format!("/lobbies/{code}/close")).await,
        StatusCode::ACCEPTED,
    )
    .await;
    assert_eq!(closed.status, LobbyStatus::CreatingTeam);

    let ready = wait_for_status(state.service(), &code, LobbyStatus::LeaderTeamSelect).await;
    let lead = player_id(&ready, "lead");
    assert_eq!(turn_id(&ready), lead);

    let picked = view(
        post(
            &app,
            &format!("/lobbies/{code}/select/team"),
            json!({ "team_id": 0, "leader_id": lead }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(picked.status, LobbyStatus::PlayerSelect);
    assert_eq!(
        picked.choose_control.as_ref().unwrap().kind,
        ChooseType::SelectPlayer
    );
    assert_eq!(picked.teams[0].leader.as_ref().unwrap().id, lead);

    for name in ["p1", "p2"] {
        let pid = player_id(&picked, name);
        view(
            post(
                &app,
                &format!("/lobbies/{code}/select/player"),
                json!({ "player_id": pid, "leader_id": lead }),
            )
            .await,
            StatusCode::OK,
        )
        .await;
    }

    let done = view(get(&app, &format!("/lobbies/{code}")).await, StatusCode::OK).await;
    assert_eq!(done.status, LobbyStatus::ReadyToStart);
    assert!(done.choose_control.is_none());
    assert_eq!(done.teams[0].players.len(), 2);
}

#[actix_web::test]
async fn promotion_over_http_opens_team_selection() {
    let state = test_state().await.unwrap();
    let app = create_test_app_builder(state.clone())
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let code = create_lobby(&app).await.access_code;
    join_player(&app, &code, "p1", &[], &[]).await;
    join_player(&app, &code, "p2", &[], &[]).await;
    join_mentor(&app, &code, "m1").await;
    post_empty(&app, &format!("/lobbies/{code}/close")).await;

    let election = wait_for_status(state.service(), &code, LobbyStatus::LeaderElection).await;
    let control = election.choose_control.clone().unwrap();
    assert_eq!(control.kind, ChooseType::PromoteLeader);
    assert_eq!(control.choosing_now.id, election.master.id);

    let p1 = player_id(&election, "p1");
    let promoted = view(
        post_empty(&app, &format!("/lobbies/{code}/promote/{p1}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(promoted.status, LobbyStatus::LeaderTeamSelect);
    assert_eq!(turn_id(&promoted), p1);
}

#[actix_web::test]
async fn access_codes_are_case_insensitive() {
    let state = test_state().await.unwrap();
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let code = create_lobby(&app).await.access_code;
    let upper = code.to_ascii_uppercase();

    let fetched = view(get(&app, &format!("/lobbies/{upper}")).await, StatusCode::OK).await;
    assert_eq!(fetched.access_code, code);
}

#[actix_web::test]
async fn views_never_expose_selection_priority() {
    let state = test_state().await.unwrap();
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let code = create_lobby(&app).await.access_code;
    join_player(&app, &code, "p1", &["GDP"], &["Leadership"]).await;

    let resp = get(&app, &format!("/lobbies/{code}")).await;
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    let player = &body["players"][0];
    assert_eq!(player["role"], "Leader");
    assert_eq!(player["hard_skills"], json!(["GDP"]));
    assert!(player.get("selection_priority").is_none());
    assert!(body["choose_control"].is_null());
}
