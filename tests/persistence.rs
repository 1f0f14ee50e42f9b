//! Database-backed integration tests.
//!
//! These run against the database named by `DEVHUB_TEST_DATABASE_URL`
//! and are skipped when it is unset. The database is shared between
//! tests, so every test keys its data and assertions on unique values.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

fn unique_tag() -> String {
    Uuid::new_v4().simple().to_string()
}

#[tokio::test]
async fn test_register_then_signin_round_trip() {
    let Some(app) = helpers::TestApp::with_database().await else {
        return;
    };

    let tag = unique_tag();
    let email = format!("{tag}@example.com");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": &tag,
                "email": &email,
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["result"]["username"], tag.as_str());
    assert!(response.body["result"].get("password").is_none());
    assert!(response.body["result"].get("passwordHash").is_none());

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "email": &email,
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let token = response.body["result"]["token"]
        .as_str()
        .expect("sign-in returned no token")
        .to_string();

    // The issued token must pass the gate.
    let response = app.request("GET", "/api/posts", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_duplicate_email_and_username_conflict() {
    let Some(app) = helpers::TestApp::with_database().await else {
        return;
    };

    let tag = unique_tag();
    let email = format!("{tag}@example.com");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": &tag,
                "email": &email,
                "password": "secret1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    // Same email, fresh username.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": unique_tag(),
                "email": &email,
                "password": "secret1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.assert_error_shape(), "Email already in use");

    // Same username, fresh email.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": &tag,
                "email": format!("{}@example.com", unique_tag()),
                "password": "secret1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.assert_error_shape(),
        format!("Username '{tag}' already exists")
    );
}

#[tokio::test]
async fn test_search_is_case_insensitive_literal_and_newest_first() {
    let Some(app) = helpers::TestApp::with_database().await else {
        return;
    };

    let admin = app.token_for(Uuid::new_v4(), true);
    let tag = unique_tag();

    let create = |title: String| {
        let app = &app;
        let admin = &admin;
        async move {
            let response = app
                .request(
                    "POST",
                    "/api/posts",
                    Some(serde_json::json!({
                        "title": title,
                        "content": "body",
                    })),
                    Some(admin),
                )
                .await;
            assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
            response.body["result"]["id"].as_str().unwrap().to_string()
        }
    };

    let first = create(format!("{tag} getting started")).await;
    // Uppercase in the stored title; the query below stays lowercase.
    let second = create(format!("Advanced {} topics", tag.to_uppercase())).await;
    let wildcard = create(format!("{tag}100% coverage")).await;
    create("unrelated post".to_string()).await;

    let response = app
        .request("GET", &format!("/api/posts?search={tag}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response.body["result"]
        .as_array()
        .expect("result is not an array")
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    // All three tagged posts match regardless of case, newest first.
    assert_eq!(ids, vec![wildcard.as_str(), second.as_str(), first.as_str()]);

    // `%` in the query matches literally, not as a wildcard.
    let response = app
        .request(
            "GET",
            &format!("/api/posts?search={tag}100%25"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response.body["result"]
        .as_array()
        .expect("result is not an array")
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![wildcard.as_str()]);
}

#[tokio::test]
async fn test_federated_signin_keeps_single_record() {
    let Some(app) = helpers::TestApp::with_database().await else {
        return;
    };

    let tag = unique_tag();
    let email = format!("{tag}@example.com");
    let body = serde_json::json!({
        "email": &email,
        "name": "Race Case",
    });

    let (a, b) = tokio::join!(
        app.request("POST", "/api/auth/google", Some(body.clone()), None),
        app.request("POST", "/api/auth/google", Some(body.clone()), None),
    );

    for response in [&a, &b] {
        assert!(
            response.status == StatusCode::OK || response.status == StatusCode::CREATED,
            "{:?}",
            response.body
        );
        assert!(response.body["result"]["token"].as_str().is_some());
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.db_pool)
        .await
        .expect("count query failed");
    assert_eq!(count, 1);
}
