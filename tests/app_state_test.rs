//! Shell coordination tests: startup, login, expiry and navigation races

mod common;

use std::sync::Arc;
use std::time::Duration;

use pantheon::egui_app::auth::LOGIN_PATH;
use pantheon::egui_app::progression::CHARACTERS_PATH;
use pantheon::egui_app::{AppState, AppView, RequestOptions, Route, ScreenId, ScreenRegistry};
use pantheon::shared::ProfileId;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{context, eventually, mount_characters, player, signed_in, CountingStorage, TOKEN};

fn shell(base_url: &str) -> AppState {
    AppState::new(context(base_url, Arc::new(CountingStorage::new())), ScreenRegistry::standard())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_begin_without_session_shows_login() {
    let mut state = shell("http://127.0.0.1:9");
    state.begin();
    assert_eq!(state.view, AppView::Booting);

    assert!(eventually(|| {
        state.poll();
        state.view == AppView::Auth
    })
    .await);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_lands_on_progression_screen() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": { "access_token": TOKEN },
            "profile": { "id": 7, "god": "ra" }
        })))
        .mount(&server)
        .await;
    mount_characters(&server, &ProfileId::from(7), 3).await;

    let mut state = shell(&server.uri());
    state.view = AppView::Auth;
    state.account_input = "hero".to_string();
    state.password_input = "secret".to_string();
    state.handle_login();
    assert!(state.auth_state.loading);

    assert!(eventually(|| {
        state.poll();
        state.current_screen() == Some(ScreenId::Castle)
    })
    .await);
    assert!(!state.auth_state.loading);
    assert!(state.password_input.is_empty());
    assert!(state.ctx.store.is_authenticated());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })))
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    state.view = AppView::Auth;
    state.account_input = "hero".to_string();
    state.password_input = "wrong".to_string();
    state.handle_login();

    assert!(eventually(|| {
        state.poll();
        state.auth_state.error.is_some()
    })
    .await);
    assert_eq!(state.auth_state.error.as_deref(), Some("Invalid credentials"));
    assert!(!state.auth_state.loading);
    assert_eq!(state.view, AppView::Auth);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_checks_confirmation_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    state.is_register_mode = true;
    state.account_input = "hero".to_string();
    state.password_input = "secret1".to_string();
    state.confirm_password_input = "secret2".to_string();
    state.handle_register();

    assert_eq!(state.auth_state.error.as_deref(), Some("Passwords do not match"));
    assert!(!state.auth_state.loading);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_expired_session_returns_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    signed_in(&state.ctx, player(7));
    state.navigate(Route::Screen(ScreenId::Castle));
    assert_eq!(state.current_screen(), Some(ScreenId::Castle));

    let _ = state.ctx.api.call("/api/profile", RequestOptions::get()).await;
    state.poll();

    assert_eq!(state.view, AppView::Auth);
    assert_eq!(state.host.current(), None);
    assert!(!state.ctx.store.is_authenticated());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_expired_session_is_not_overridden_by_home_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CHARACTERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::characters(3)))
        .expect(0)
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    signed_in(&state.ctx, player(7));
    state.navigate(Route::Screen(ScreenId::Settings));

    let _ = state.ctx.api.call("/api/profile", RequestOptions::get()).await;
    state.ctx.navigator.request(Route::Home);
    state.poll();

    tokio::time::sleep(Duration::from_millis(100)).await;
    state.poll();

    assert_eq!(state.view, AppView::Auth);
    assert_eq!(state.host.current(), None);
    assert!(!state.ctx.store.is_authenticated());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_home_without_session_shows_login() {
    let mut state = shell("http://127.0.0.1:9");
    signed_in(&state.ctx, player(7));
    state.navigate(Route::Screen(ScreenId::CharacterCreation));
    state.ctx.store.clear();

    state.navigate(Route::Home);

    assert_eq!(state.view, AppView::Auth);
    assert_eq!(state.host.current(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_with_expiring_character_query_ends_on_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": { "access_token": TOKEN },
            "profile": { "id": 7, "god": "ra" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CHARACTERS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    state.view = AppView::Auth;
    state.account_input = "hero".to_string();
    state.password_input = "secret".to_string();
    state.handle_login();

    assert!(eventually(|| {
        state.poll();
        !state.auth_state.loading
    })
    .await);
    tokio::time::sleep(Duration::from_millis(100)).await;
    state.poll();

    assert_eq!(state.view, AppView::Auth);
    assert_eq!(state.host.current(), None);
    assert!(!state.ctx.store.is_authenticated());
    assert!(state.ctx.store.profile().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_restored_session_expiring_during_resolution_ends_on_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CHARACTERS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    signed_in(&state.ctx, player(7));
    state.begin();

    assert!(eventually(|| {
        state.poll();
        state.view != AppView::Booting
    })
    .await);
    tokio::time::sleep(Duration::from_millis(100)).await;
    state.poll();

    assert_eq!(state.view, AppView::Auth);
    assert_eq!(state.current_screen(), None);
    assert!(!state.ctx.store.is_authenticated());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_navigation_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHARACTERS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::characters(3))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut state = shell(&server.uri());
    signed_in(&state.ctx, player(7));

    state.navigate(Route::Home);
    state.navigate(Route::Screen(ScreenId::Settings));

    tokio::time::sleep(Duration::from_millis(600)).await;
    state.poll();

    assert_eq!(state.current_screen(), Some(ScreenId::Settings));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_screen_navigation_request_is_applied() {
    let server = MockServer::start().await;
    mount_characters(&server, &ProfileId::from(7), 3).await;

    let mut state = shell(&server.uri());
    signed_in(&state.ctx, player(7));
    state.navigate(Route::Screen(ScreenId::CharacterCreation));

    state.ctx.navigator.request(Route::Home);
    assert!(eventually(|| {
        state.poll();
        state.current_screen() == Some(ScreenId::Castle)
    })
    .await);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_clears_everything() {
    let mut state = shell("http://127.0.0.1:9");
    signed_in(&state.ctx, player(7));
    state.navigate(Route::Screen(ScreenId::Castle));
    state.account_input = "hero".to_string();

    state.logout();

    assert_eq!(state.view, AppView::Auth);
    assert_eq!(state.host.current(), None);
    assert!(state.account_input.is_empty());
    assert!(state.ctx.session().is_none());
}
