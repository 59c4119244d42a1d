mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;

async fn save_public(app: &axum::Router, wallet: &str, storage_id: &str, is_public: bool) {
    let (status, _) = helpers::post_json(
        app,
        "/api/save-snippet-metadata",
        json!({
            "wallet_address": wallet,
            "storage_id": storage_id,
            "title": "t",
            "summary": "s.",
            "is_public": is_public
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_feed_is_newest_first_and_paged() {
    let Some(pool) = helpers::test_pool().await else {
        return;
    };
    let app = helpers::test_app(pool);
    let wallet = helpers::unique_wallet("feed");

    for i in 0..3 {
        save_public(&app, &wallet, &format!("{}-{}", wallet, i), true).await;
    }

    let (status, page) = helpers::get_json(&app, "/api/feed/public?skip=0&limit=2").await;
    assert_eq!(status, StatusCode::OK);

    let feed = page["feed"].as_array().unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(page["has_more"], true);

    let times: Vec<DateTime<Utc>> = feed
        .iter()
        .map(|item| item["timestamp"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(times[0] >= times[1]);

    let (_, page) = helpers::get_json(&app, "/api/feed/public").await;
    let feed = page["feed"].as_array().unwrap();
    assert!(feed.len() <= 20);
    assert_eq!(page["has_more"], feed.len() == 20);
}

#[tokio::test]
async fn test_feed_hides_private_and_reflects_viewer() {
    let Some(pool) = helpers::test_pool().await else {
        return;
    };
    let app = helpers::test_app(pool);
    let wallet = helpers::unique_wallet("author");
    let viewer = helpers::unique_wallet("viewer");
    let public_id = format!("{}-public", wallet);
    let private_id = format!("{}-private", wallet);

    helpers::post_json(
        &app,
        "/api/users/profile",
        json!({ "wallet_address": wallet, "username": "author" }),
    )
    .await;
    save_public(&app, &wallet, &private_id, false).await;
    save_public(&app, &wallet, &public_id, true).await;
    helpers::post_json(
        &app,
        "/api/social/like",
        json!({ "user_address": viewer, "snippet_id": public_id }),
    )
    .await;

    let (_, page) =
        helpers::get_json(&app, &format!("/api/feed/public?limit=100&viewer={}", viewer)).await;
    let feed = page["feed"].as_array().unwrap();

    assert!(feed.iter().all(|item| item["storage_id"] != private_id.as_str()));
    if let Some(item) = feed.iter().find(|item| item["storage_id"] == public_id.as_str()) {
        assert_eq!(item["username"], "author");
        assert_eq!(item["likes_count"], 1);
        assert_eq!(item["comments_count"], 0);
        assert_eq!(item["is_liked"], true);
    }
}
