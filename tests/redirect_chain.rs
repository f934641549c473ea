//! End-to-end tests for the redirect chain over a real listener.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::LOCATION;
use reqwest::StatusCode;
use urlshort::http::RedirectMode;
use urlshort::ShortenerConfig;

mod common;

const URLS_YML: &[u8] = b"\
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
- path: /urlshort
  url: https://github.com/gophercises/urlshort/tree/master
";

fn config_with_static(paths: &[(&str, &str)]) -> ShortenerConfig {
    let mut config = ShortenerConfig::default();
    config.paths.static_paths = paths
        .iter()
        .map(|(p, u)| (p.to_string(), u.to_string()))
        .collect::<BTreeMap<_, _>>();
    config
}

#[tokio::test]
async fn test_chain_over_http() {
    let config = config_with_static(&[
        ("/urlshort-final", "https://static.example/final"),
        ("/docs", "https://static.example/docs"),
    ]);
    let server = common::start_server(config, URLS_YML).await;
    let client = common::client();

    // Duplicate YAML path: last entry wins.
    let res = client.get(server.url("/urlshort")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers()[LOCATION],
        "https://github.com/gophercises/urlshort/tree/master"
    );

    // Present in both tables: YAML wins.
    let res = client.get(server.url("/urlshort-final")).send().await.unwrap();
    assert_eq!(
        res.headers()[LOCATION],
        "https://github.com/gophercises/urlshort/tree/solution"
    );

    // Static table only.
    let res = client.get(server.url("/docs")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[LOCATION], "https://static.example/docs");

    // Neither: default handler.
    let res = client.get(server.url("/unknown")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(LOCATION).is_none());
    assert_eq!(res.text().await.unwrap(), "Hello, world!\n");

    // Case-sensitive, exact.
    let res = client.get(server.url("/URLSHORT")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = client.get(server.url("/docs/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown.trigger();
    let stopped = tokio::time::timeout(Duration::from_secs(5), server.handle).await;
    assert!(matches!(stopped, Ok(Ok(Ok(())))));
}

#[tokio::test]
async fn test_empty_table_falls_through() {
    let server = common::start_server(config_with_static(&[]), b"[]").await;
    let client = common::client();

    for path in ["/", "/urlshort", "/urlshort-godoc"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "path {path}");
        assert_eq!(res.text().await.unwrap(), "Hello, world!\n");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_body_mode_over_http() {
    let mut config = ShortenerConfig::default();
    config.redirect.mode = RedirectMode::Body;
    let server = common::start_server(config, URLS_YML).await;
    let client = common::client();

    let res = client.get(server.url("/urlshort-godoc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        "https://godoc.org/github.com/gophercises/urlshort"
    );

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_header_present() {
    let server = common::start_server(ShortenerConfig::default(), b"").await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    let res = client
        .get(server.url("/"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "trace-me");

    server.shutdown.trigger();
}
