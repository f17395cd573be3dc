//! Progression resolver integration tests

mod common;

use std::sync::Arc;

use pantheon::egui_app::progression;
use pantheon::egui_app::ScreenId;
use pantheon::shared::{Profile, ProfileId};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{context, mount_characters, player, signed_in, CountingStorage};

#[tokio::test]
async fn test_three_characters_route_to_castle() {
    let server = MockServer::start().await;
    mount_characters(&server, &ProfileId::from(7), 3).await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, player(7));

    assert_eq!(progression::resolve(&ctx.api, &ctx.store).await, ScreenId::Castle);
}

#[tokio::test]
async fn test_few_characters_route_to_creation() {
    let server = MockServer::start().await;
    mount_characters(&server, &ProfileId::from(7), 2).await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, player(7));

    assert_eq!(
        progression::resolve(&ctx.api, &ctx.store).await,
        ScreenId::CharacterCreation
    );
}

#[tokio::test]
async fn test_query_is_bounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("player_id", "eq.player-9"))
        .and(query_param("select", "id"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::characters(3)))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, Profile::new("player-9").with_god("freya"));

    assert_eq!(progression::resolve(&ctx.api, &ctx.store).await, ScreenId::Castle);
}

#[tokio::test]
async fn test_text_player_id_stays_inside_its_query_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("player_id", "eq.a&limit=99 #x"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::characters(1)))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, Profile::new("a&limit=99 #x").with_god("ra"));

    assert_eq!(
        progression::resolve(&ctx.api, &ctx.store).await,
        ScreenId::CharacterCreation
    );
}

#[tokio::test]
async fn test_godless_profile_skips_character_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::characters(5)))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, Profile::new(7).with_god(""));

    assert_eq!(progression::resolve(&ctx.api, &ctx.store).await, ScreenId::GodSelection);
}

#[tokio::test]
async fn test_query_failure_falls_back_to_god_selection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, player(7));

    assert_eq!(progression::resolve(&ctx.api, &ctx.store).await, ScreenId::GodSelection);
}

#[tokio::test]
async fn test_count_is_never_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::characters(1)))
        .expect(2)
        .mount(&server)
        .await;

    let ctx = context(&server.uri(), Arc::new(CountingStorage::new()));
    signed_in(&ctx, player(7));

    progression::resolve(&ctx.api, &ctx.store).await;
    progression::resolve(&ctx.api, &ctx.store).await;
}
