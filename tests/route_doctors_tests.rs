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
async fn doctors_list_joins_specialization_names() {
    let (app, temp_path) = seeded_app("doctors-list").await;

    let resp = get(&app, "/doctors").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Dr. Ahsan"));
    assert!(body.contains("Cardiology"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn doctor_create_edit_delete_round_trip() {
    let (app, temp_path) = seeded_app("doctors-roundtrip").await;

    // Blank specialization option stores as NULL.
    let resp = post_form(
        &app,
        "/add_doctor",
        "name=Dr.+Hina&email=hina.gp%40example.com&specialization_id=",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(get(&app, "/doctors").await).await;
    assert!(body.contains("Dr. Hina"));

    // Edit assigns Dermatology (seed specialization 2).
    let resp = post_form(
        &app,
        "/edit_doctor/11",
        "name=Dr.+Hina&email=hina.gp%40example.com&specialization_id=2",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(get(&app, "/edit_doctor/11").await).await;
    assert!(body.contains(r#"<option value="2" selected>Dermatology</option>"#));

    // Delete removes the doctor from the list.
    let resp = get(&app, "/delete_doctor/11").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(get(&app, "/doctors").await).await;
    assert!(!body.contains("Dr. Hina"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn duplicate_doctor_email_maps_to_409() {
    let (app, temp_path) = seeded_app("doctors-duplicate").await;

    let resp = post_form(
        &app,
        "/add_doctor",
        "name=Impostor&email=ahsan.cardiology%40example.com&specialization_id=",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_string(resp).await;
    assert!(body.contains("doctors.email"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn deleting_specialization_keeps_doctor_with_cleared_reference() {
    let (app, temp_path) = seeded_app("doctors-set-null").await;

    let resp = get(&app, "/delete_specialization/1").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = body_string(get(&app, "/doctors").await).await;
    assert!(body.contains("Dr. Ahsan"), "Doctor must survive");
    assert!(!body.contains("Cardiology"));

    // The specialization itself is gone from its own list.
    let body = body_string(get(&app, "/specializations").await).await;
    assert!(!body.contains("Cardiology"));
    assert!(body.contains("Dermatology"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn deleting_doctor_cascades_to_appointments() {
    let (app, temp_path) = seeded_app("doctors-cascade").await;

    // Seed appointment 3 is Sania with Dr. Shahid (doctor 3).
    let resp = get(&app, "/delete_doctor/3").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = body_string(get(&app, "/appointments").await).await;
    assert!(!body.contains("2025-04-12"));

    let _ = fs::remove_file(&temp_path);
}
