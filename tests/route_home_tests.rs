use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use carelog::db::Store;
use carelog::server::router::{CarelogState, carelog_router};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!("carelog-{tag}-{}-{}.sqlite", std::process::id(), nanos));

    let database_url = format!("sqlite:{}", temp_path.display());
    let store = Store::connect(&database_url).await.unwrap();
    store.init_schema().await.unwrap();

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

#[tokio::test]
async fn home_links_every_category_and_unknown_paths_fall_through_to_404() {
    let (app, temp_path) = app("home").await;

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = std::str::from_utf8(&bytes).expect("response body was not utf-8");
    for href in [
        "/users",
        "/doctors",
        "/specializations",
        "/pharmacies",
        "/appointments",
        "/prescriptions",
    ] {
        assert!(
            body.contains(&format!(r#"<a href="{href}">"#)),
            "home must link {href}"
        );
    }

    let resp = get(&app, "/no_such_page").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Responses carry a correlation id even when the client sent none.
    let resp = get(&app, "/users").await;
    assert!(resp.headers().get("x-request-id").is_some());

    let _ = fs::remove_file(&temp_path);
}
