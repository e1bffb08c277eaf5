use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use carelog::db::Store;
use carelog::server::router::{CarelogState, carelog_router};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn seeded_app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!("carelog-{tag}-{}-{}.sqlite", std::process::id(), nanos));

    let database_url = format!("sqlite:{}", temp_path.display());
    let store = Store::connect(&database_url).await.unwrap();
    store.init_schema().await.unwrap();
    store.seed().await.unwrap();

    let app = carelog_router(CarelogState::new(store));
    (app, temp_path)
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

#[tokio::test]
async fn prescriptions_list_joins_all_three_names() {
    let (app, temp_path) = seeded_app("rx-list").await;

    let resp = get(&app, "/prescriptions").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Ali"));
    assert!(body.contains("Dr. Ahsan"));
    assert!(body.contains("United Pharmacy"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn prescription_create_edit_delete_round_trip() {
    let (app, temp_path) = seeded_app("rx-roundtrip").await;

    let resp = post_form(
        &app,
        "/add_prescription",
        "user_id=6&doctor_id=2&pharmacy_id=3&prescription_date=2025-07-01",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/prescriptions"
    );
    let body = body_string(get(&app, "/prescriptions").await).await;
    assert!(body.contains("Safiullah"));
    assert!(body.contains("Rehmat Pharmacy"));
    assert!(body.contains("2025-07-01"));

    // Full-row edit moves it to a different pharmacy and date.
    let resp = post_form(
        &app,
        "/edit_prescription/6",
        "user_id=6&doctor_id=2&pharmacy_id=1&prescription_date=2025-07-15",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(get(&app, "/prescriptions").await).await;
    assert!(body.contains("2025-07-15"));
    assert!(!body.contains("2025-07-01"));

    let resp = get(&app, "/delete_prescription/6").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(get(&app, "/prescriptions").await).await;
    assert!(!body.contains("2025-07-15"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn deleting_pharmacy_cascades_through_the_routes() {
    let (app, temp_path) = seeded_app("rx-cascade").await;

    // Seed prescription 3 is the only one filed at Rehmat Pharmacy.
    let resp = get(&app, "/delete_pharmacy/3").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = body_string(get(&app, "/prescriptions").await).await;
    assert!(!body.contains("Rehmat Pharmacy"));
    assert!(!body.contains("2025-04-12"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn prescription_against_missing_pharmacy_is_400() {
    let (app, temp_path) = seeded_app("rx-fk").await;

    let resp = post_form(
        &app,
        "/add_prescription",
        "user_id=1&doctor_id=1&pharmacy_id=999&prescription_date=2025-07-01",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("\"CONSTRAINT_VIOLATION\""));

    let _ = fs::remove_file(&temp_path);
}
