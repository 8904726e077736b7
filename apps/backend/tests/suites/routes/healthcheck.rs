use actix_web::http::StatusCode;
use actix_web::test;
use lobby_backend::routes::health::HealthResponse;
use lobby_backend::test_support::{create_test_app_builder, test_state};

use crate::support::lobby_api::{create_lobby, get};

#[actix_web::test]
async fn health_reports_storage_and_cache() {
    let app = create_test_app_builder(test_state().await.unwrap())
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let resp = get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.storage, "ok");
    assert!(body.storage_error.is_none());
    assert_eq!(body.lobbies, 0);
    assert_eq!(body.app_version, env!("CARGO_PKG_VERSION"));

    create_lobby(&app).await;
    create_lobby(&app).await;

    let body: HealthResponse = test::read_body_json(get(&app, "/health").await).await;
    assert_eq!(body.lobbies, 2);
}
