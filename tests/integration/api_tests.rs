//! API integration tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookstore_server::{api::create_router, config::AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(&AppConfig::default()))
}

/// Send a request and return the status with the decoded JSON body
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn seed(app: &Router) {
    for (title, author, year) in [("A", "X", 2015), ("B", "Y", 2002), ("C", "Z", 1992)] {
        let (status, _) = send(
            app,
            Method::POST,
            "/newBook",
            Some(json!({ "title": title, "author": author, "publish_year": year })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_reports_book_count() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(&app, Method::GET, "/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"], 3);
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/allBooks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("There are no books yet"));
}

#[tokio::test]
async fn test_create_and_list() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/newBook",
        Some(json!({ "title": "testTitle", "author": "testAuthor", "publish_year": 2011 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "title": "testTitle", "author": "testAuthor", "publish_year": 2011 })
    );

    let (status, body) = send(&app, Method::GET, "/allBooks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "title": "testTitle", "author": "testAuthor", "publish_year": 2011 }])
    );
}

#[tokio::test]
async fn test_create_missing_fields() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/newBook", Some(json!({ "title": "test" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_create_wrong_year() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/newBook",
        Some(json!({ "title": "testTitle", "author": "testAuthor", "publish_year": 9999 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/allBooks", None).await;
    assert_eq!(body, json!("There are no books yet"));
}

#[tokio::test]
async fn test_get_book() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(&app, Method::GET, "/book?title=B&author=Y", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "B", "author": "Y", "publish_year": 2002 }));
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(&app, Method::GET, "/book?title=B&author=X", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");
}

#[tokio::test]
async fn test_get_book_missing_author() {
    let app = app();
    seed(&app).await;
    let (status, _) = send(&app, Method::GET, "/book?title=B", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_title_only() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/updateBook",
        Some(json!({ "title": "B2", "prevBook": { "title": "B", "author": "Y" } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "B2", "author": "Y", "publish_year": 2002 }));

    let (status, body) = send(&app, Method::GET, "/book?title=B2&author=Y", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["publish_year"], 2002);

    let (_, body) = send(&app, Method::GET, "/allBooks", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_update_not_found() {
    let app = app();
    seed(&app).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/updateBook",
        Some(json!({
            "title": "testTitle",
            "author": "testAuthor",
            "publish_year": 2016,
            "prevBook": { "title": "testInput", "author": "testInput" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_wrong_year_on_missing_book() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/updateBook",
        Some(json!({ "publish_year": 9999, "prevBook": { "title": "Q", "author": "R" } })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_book() {
    let app = app();
    seed(&app).await;
    let (status, _) = send(
        &app,
        Method::DELETE,
        "/deleteBook",
        Some(json!({ "title": "A", "author": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/book?title=A&author=X", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/allBooks", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_delete_on_empty_catalog() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::DELETE,
        "/deleteBook",
        Some(json!({ "title": "Q", "author": "R" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/allBooks", None).await;
    assert_eq!(body, json!("There are no books yet"));
}

#[tokio::test]
async fn test_create_year_that_is_not_an_i32() {
    let app = app();
    for year in [json!(99999999999_i64), json!("9999"), json!(2011.5)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/newBook",
            Some(json!({ "title": "testTitle", "author": "testAuthor", "publish_year": year.clone() })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "year {}", year);
        assert_eq!(body["error"], "BadValue");
        assert_eq!(body["code"], 18);
    }

    let (_, body) = send(&app, Method::GET, "/allBooks", None).await;
    assert_eq!(body, json!("There are no books yet"));
}

#[tokio::test]
async fn test_update_year_that_is_not_an_i32() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/updateBook",
        Some(json!({ "publish_year": 99999999999_i64, "prevBook": { "title": "A", "author": "X" } })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, body) = send(&app, Method::GET, "/book?title=A&author=X", None).await;
    assert_eq!(body["publish_year"], 2015);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/newBook")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body: Value = serde_json::from_slice(&bytes).expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_delete_without_json_content_type() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(&app, Method::DELETE, "/deleteBook", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_get_book_with_unreadable_query() {
    let app = app();
    seed(&app).await;
    let (status, body) = send(&app, Method::GET, "/book?title=A&title=B&author=X", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}
