mod common;

use common::{spawn_app, spawn_app_with_theme, theme_path};
use inkwell::{ProfileView, ThemeResponse, ThemeWrapper, UserResponse, UserWrapper};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn sign_out_then_sign_in_gates_the_profile() {
    let app = spawn_app("session").await;

    let profile: ProfileView = app
        .client
        .get(app.url("/profile"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(profile.signed_in);
    assert_eq!(profile.user.unwrap().name, "Alex Reader");
    assert!(profile.message.is_none());

    let session: UserWrapper<Option<UserResponse>> = app
        .client
        .post(app.url("/session/logout"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(session.user.is_none());

    let profile: ProfileView = app
        .client
        .get(app.url("/profile"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!profile.signed_in);
    assert!(profile.user.is_none());
    assert_eq!(
        profile.message.as_deref(),
        Some("Please sign in to view your profile")
    );

    let session: UserWrapper<UserResponse> = app
        .client
        .post(app.url("/session/login"))
        .json(&json!({ "email": "reader@example.com", "password": "whatever" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session.user.email, "reader@example.com");

    let current: UserWrapper<Option<UserResponse>> = app
        .client
        .get(app.url("/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current.user.map(|u| u.id), Some("1".to_owned()));
}

#[tokio::test]
async fn author_dashboard_needs_a_session() {
    let app = spawn_app("author").await;
    let body: serde_json::Value = app
        .client
        .get(app.url("/author"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["novels"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["totalChapters"], 234);

    app.client
        .post(app.url("/session/logout"))
        .send()
        .await
        .unwrap();
    let response = app.client.get(app.url("/author")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn display_mode_survives_a_restart() {
    let path = theme_path("restart");
    let app = spawn_app_with_theme(path.clone()).await;

    let current: ThemeWrapper<ThemeResponse> = app
        .client
        .get(app.url("/settings/theme"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current.settings.theme, "light");

    for mode in ["light", "dark", "sepia"] {
        let updated: ThemeWrapper<ThemeResponse> = app
            .client
            .put(app.url("/settings/theme"))
            .json(&json!({ "theme": mode }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(updated.settings.theme, mode);
    }

    let restarted = spawn_app_with_theme(app.theme_path.clone()).await;
    let current: ThemeWrapper<ThemeResponse> = restarted
        .client
        .get(restarted.url("/settings/theme"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current.settings.theme, "sepia");
    assert_eq!(current.settings.palette.background, "#fefdf8");

    let reader: serde_json::Value = restarted
        .client
        .get(restarted.url("/read/1/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reader["style"]["background"], "bg-amber-50");
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn unknown_display_mode_is_rejected() {
    let app = spawn_app("bad-theme").await;
    let response = app
        .client
        .put(app.url("/settings/theme"))
        .json(&json!({ "theme": "neon" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["body"][0], "Unknown display mode");
}
