//! End-to-end tests of the dice endpoints over a real socket.

use dice_api::config::DiceConfig;
use dice_api::http::DiceResult;
use reqwest::StatusCode;

mod common;

async fn get_result(client: &reqwest::Client, url: &str) -> DiceResult {
    let res = client.get(url).send().await.expect("server unreachable");
    assert_eq!(res.status(), StatusCode::OK, "GET {}", url);
    assert_eq!(res.headers()["content-type"], "application/json");
    res.json().await.unwrap()
}

#[tokio::test]
async fn test_roll_defaults() {
    let server = common::start_server(DiceConfig::default()).await;
    let client = common::client();

    let result = get_result(&client, &server.url("/")).await;
    assert_eq!(result.faces, 6);
    assert!((1..=6).contains(&result.number));
}

#[tokio::test]
async fn test_roll_with_faces() {
    let server = common::start_server(DiceConfig::default()).await;
    let client = common::client();

    for _ in 0..20 {
        let result = get_result(&client, &server.url("/?faces=12")).await;
        assert_eq!(result.faces, 12);
        assert!((1..=12).contains(&result.number));
    }

    let result = get_result(&client, &server.url("/?faces=-12")).await;
    assert_eq!(result.faces, 6);
}

#[tokio::test]
async fn test_roll_invalid_faces() {
    let server = common::start_server(DiceConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/?faces=asdf")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert!(res.text().await.unwrap().contains("asdf"));
}

#[tokio::test]
async fn test_cheat() {
    let server = common::start_server(DiceConfig::default()).await;
    let client = common::client();

    let result = get_result(&client, &server.url("/cheat")).await;
    assert_eq!((result.number, result.faces), (6, 6));

    let result = get_result(&client, &server.url("/cheat?number=4")).await;
    assert_eq!((result.number, result.faces), (4, 6));

    let result = get_result(&client, &server.url("/cheat?faces=12")).await;
    assert_eq!((result.number, result.faces), (12, 12));

    let result = get_result(&client, &server.url("/cheat?faces=20&number=25")).await;
    assert_eq!((result.number, result.faces), (20, 20));

    let res = client.get(server.url("/cheat?number=asdf")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_post_not_found() {
    let server = common::start_server(DiceConfig::default()).await;
    let client = common::client();

    for path in ["/", "/cheat"] {
        let res = client.post(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["content-type"], "application/json");
        assert_eq!(res.text().await.unwrap(), r#"{"message": "not found"}"#);
    }
}

#[tokio::test]
async fn test_seeded_server_is_reproducible() {
    let mut config = DiceConfig::default();
    config.dice.seed = Some(2024);

    let first = common::start_server(config.clone()).await;
    let second = common::start_server(config).await;
    let client = common::client();

    for _ in 0..10 {
        let a = get_result(&client, &first.url("/?faces=100")).await;
        let b = get_result(&client, &second.url("/?faces=100")).await;
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let server = common::start_server(DiceConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}
