//! End-to-end tests: mount a view against a mocked stats endpoint and check
//! what each output format shows.

use std::time::Duration;

use serde_json::json;
use underrated_mlb::{
    commands::show::{handle_show, mount_or_interrupt, ShowParams},
    config::{ConfigFile, Overrides, Settings},
    stats::StatsClient,
    view::{render_html, render_json, render_text, FetchState, ImageSource, Page, StatsView},
    OutputFormat,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const STATS_PATH: &str = "/api/baseball-stats";

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn view_for(server: &MockServer) -> StatsView {
    let client = StatsClient::new(
        format!("{}{}", server.uri(), STATS_PATH).parse().unwrap(),
        Duration::from_secs(5),
    )
    .unwrap();
    StatsView::new(client, ImageSource::new(server.uri().parse().unwrap()))
}

/// Stats endpoint that answers only after `delay`.
async fn serve_slow(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "players": [ { "player_name": "Late" } ] }))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

async fn mounted(template: ResponseTemplate) -> (MockServer, StatsView) {
    let server = serve(template).await;
    let mut view = view_for(&server);
    view.mount().await;
    (server, view)
}

#[tokio::test]
async fn test_new_view_is_loading() {
    let server = MockServer::start().await;
    let view = view_for(&server);

    assert!(view.state().is_loading());
    assert_eq!(render_text(&view.page()), "Loading...");
}

#[tokio::test]
async fn test_empty_players_shows_no_data_message() {
    let (_server, view) = mounted(ResponseTemplate::new(200).set_body_json(json!({ "players": [] }))).await;

    assert_eq!(view.page(), Page::Empty);
    let text = render_text(&view.page());
    assert_eq!(text, "No player data available");
    assert!(!text.contains("Player name"));
}

#[tokio::test]
async fn test_single_player_card() {
    let (_server, view) = mounted(ResponseTemplate::new(200).set_body_json(json!({
        "players": [
            { "player_name": "A", "rolling_woba": 0.3456, "diff_rolling_OBA": 12.3 }
        ]
    })))
    .await;

    let text = render_text(&view.page());

    assert!(text.contains("1. Player name: A"));
    assert!(text.contains("0.346"));
    assert!(text.contains("12.300%"));
}

#[tokio::test]
async fn test_missing_woba_renders_placeholder() {
    let (_server, view) = mounted(ResponseTemplate::new(200).set_body_json(json!({
        "players": [ { "player_name": "A", "diff_rolling_OBA": 1.5 } ]
    })))
    .await;

    let text = render_text(&view.page());

    assert!(text.contains("100PA rolling wOBA: N/A"));
    assert!(text.contains("diff_rolling_OBA: 1.500%"));
}

#[tokio::test]
async fn test_http_500_renders_error_with_status() {
    let (_server, view) = mounted(ResponseTemplate::new(500)).await;

    match view.state() {
        FetchState::Error { message } => assert!(message.contains("500")),
        other => panic!("Expected error state, got {:?}", other),
    }
    assert!(render_text(&view.page()).starts_with("Error: "));
}

#[tokio::test]
async fn test_server_reported_error() {
    let (_server, view) = mounted(
        ResponseTemplate::new(200).set_body_json(json!({ "error": "rate limited" })),
    )
    .await;

    assert_eq!(
        view.state(),
        &FetchState::Error {
            message: "rate limited".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_players_field_is_invalid_format() {
    let (_server, view) =
        mounted(ResponseTemplate::new(200).set_body_json(json!({ "date": "2024-09-01" }))).await;

    match view.state() {
        FetchState::Error { message } => {
            assert!(message.contains("Invalid data format received"));
        }
        other => panic!("Expected error state, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rendering_twice_is_identical() {
    let (_server, view) = mounted(ResponseTemplate::new(200).set_body_json(json!({
        "players": [
            { "player_name": "A", "rolling_woba": 0.3456, "player_id": 12 },
            { "player_name": "B" }
        ]
    })))
    .await;

    assert_eq!(render_text(&view.page()), render_text(&view.page()));
    assert_eq!(render_html(&view.page()), render_html(&view.page()));
    assert_eq!(
        render_json(view.state()).unwrap(),
        render_json(view.state()).unwrap()
    );
}

#[tokio::test]
async fn test_mount_fetches_only_once() {
    // `expect(1)` is verified when the server drops
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({ "players": [] }))).await;
    let mut view = view_for(&server);

    view.mount().await;
    view.mount().await;

    assert_eq!(view.state(), &FetchState::Ready { players: vec![] });
}

#[tokio::test]
async fn test_cards_keep_response_order() {
    let (server, view) = mounted(ResponseTemplate::new(200).set_body_json(json!({
        "players": [
            { "player_name": "Low", "diff_rolling_OBA": 1.0, "player_id": "low" },
            { "player_name": "High", "diff_rolling_OBA": 9.0 }
        ]
    })))
    .await;

    let text = render_text(&view.page());
    let low = text.find("1. Player name: Low").unwrap();
    let high = text.find("2. Player name: High").unwrap();
    assert!(low < high);
    assert!(text.contains(&format!("{}/plots/player_low.png", server.uri())));
}

#[tokio::test]
async fn test_show_writes_html_and_hides_broken_images() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "players": [
            { "player_name": "Shown", "player_id": "ok" },
            { "player_name": "Hidden", "player_id": "gone" }
        ]
    })))
    .await;
    Mock::given(method("GET"))
        .and(path("/plots/player_ok.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 8]))
        .mount(&server)
        .await;

    let flags = Overrides {
        endpoint: Some(format!("{}{}", server.uri(), STATS_PATH).parse().unwrap()),
        image_base: Some(server.uri().parse().unwrap()),
        timeout_secs: Some(5),
    };
    let settings = Settings::resolve_with(&flags, &ConfigFile::default(), |_| None).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("players.html");

    let state = handle_show(
        &settings,
        ShowParams {
            format: OutputFormat::Html,
            check_images: true,
            output: Some(out.clone()),
        },
    )
    .await
    .unwrap();

    assert!(matches!(state, FetchState::Ready { .. }));
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("1. Player name: Shown"));
    assert!(html.contains("2. Player name: Hidden"));
    assert!(html.contains("/plots/player_ok.png"));
    assert!(!html.contains("/plots/player_gone.png"));
}

#[tokio::test]
async fn test_show_writes_error_state_as_json() {
    let server = serve(ResponseTemplate::new(503)).await;

    let flags = Overrides {
        endpoint: Some(format!("{}{}", server.uri(), STATS_PATH).parse().unwrap()),
        ..Overrides::default()
    };
    let settings = Settings::resolve_with(&flags, &ConfigFile::default(), |_| None).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("state.json");

    let state = handle_show(
        &settings,
        ShowParams {
            format: OutputFormat::Json,
            check_images: false,
            output: Some(out.clone()),
        },
    )
    .await
    .unwrap();

    assert!(state.is_error());
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["status"], "error");
    assert!(value["message"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_dropped_mount_leaves_view_loading() {
    let server = serve_slow(Duration::from_millis(300)).await;
    let mut view = view_for(&server);

    let finished = tokio::time::timeout(Duration::from_millis(50), view.mount()).await;
    assert!(finished.is_err());
    assert!(view.state().is_loading());

    // The response arriving later changes nothing, and there is no re-fetch
    tokio::time::sleep(Duration::from_millis(400)).await;
    view.mount().await;
    assert!(view.state().is_loading());
    assert_eq!(render_text(&view.page()), "Loading...");
}

#[tokio::test]
async fn test_interrupt_abandons_fetch() {
    let server = serve_slow(Duration::from_millis(300)).await;
    let mut view = view_for(&server);

    let settled = mount_or_interrupt(&mut view, async { Ok(()) }).await;

    assert!(!settled);
    assert!(view.state().is_loading());
}

#[tokio::test]
async fn test_failed_interrupt_keeps_waiting_for_fetch() {
    let server = serve_slow(Duration::from_millis(50)).await;
    let mut view = view_for(&server);

    let settled = mount_or_interrupt(&mut view, async {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "no signal handler"))
    })
    .await;

    assert!(settled);
    assert_eq!(
        view.state(),
        &FetchState::Ready {
            players: vec![underrated_mlb::PlayerStat::new("Late")]
        }
    );
}
