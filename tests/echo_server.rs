//! Integration tests for the echo server, driven over loopback.

use echoprobe::RequestSnapshot;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn headers_round_trip_through_yaml() {
    let addr = common::start_echo_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/whatever?format=yaml", addr))
        .header("X-Custom-One", "alpha")
        .header("X-Custom-One", "beta")
        .header("Referer", "http://ref.example/")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/x-yaml"
    );

    let body = res.text().await.unwrap();
    let snapshot: RequestSnapshot = serde_yaml::from_str(&body).unwrap();

    assert_eq!(snapshot.host, addr.to_string());
    assert_eq!(snapshot.url, "/whatever?format=yaml");
    assert_eq!(snapshot.referer, "http://ref.example/");
    // Multi-value header preserved as an ordered list.
    assert_eq!(
        snapshot.headers.get("x-custom-one"),
        Some(&vec!["alpha".to_string(), "beta".to_string()])
    );
    // The peer address carries a port suffix.
    assert!(snapshot.ip.starts_with("127.0.0.1:"));
}

#[tokio::test]
async fn yaml_and_json_report_the_same_snapshot() {
    let addr = common::start_echo_server().await;
    let client = reqwest::Client::new();

    let yaml_body = client
        .get(format!("http://{}/same?format=yaml", addr))
        .header("X-Probe", "one")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let json_res = client
        .get(format!("http://{}/same?format=json", addr))
        .header("X-Probe", "one")
        .send()
        .await
        .unwrap();
    assert_eq!(
        json_res.headers().get("content-type").unwrap(),
        "application/json"
    );
    let json_body = json_res.text().await.unwrap();

    let from_yaml: RequestSnapshot = serde_yaml::from_str(&yaml_body).unwrap();
    let from_json: RequestSnapshot = serde_json::from_str(&json_body).unwrap();

    // The two requests differ only in their query string (and possibly the
    // ephemeral source port); everything the client sent must match.
    assert_eq!(from_yaml.host, from_json.host);
    assert_eq!(from_yaml.referer, from_json.referer);
    assert_eq!(from_yaml.headers, from_json.headers);
    assert_eq!(from_json.url, "/same?format=json");
}

#[tokio::test]
async fn unsupported_format_is_rejected_with_400() {
    let addr = common::start_echo_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/?format=xml", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.text().await.unwrap();
    assert_eq!(body, "error: unsupported format 'xml'");
    // No snapshot fields leak into the rejection body.
    assert!(!body.contains("host"));
    assert!(!body.contains("headers"));
}

#[tokio::test]
async fn format_defaults_to_yaml() {
    let addr = common::start_echo_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/x-yaml"
    );
    let body = res.text().await.unwrap();
    assert!(serde_yaml::from_str::<RequestSnapshot>(&body).is_ok());
}

#[tokio::test]
async fn any_method_and_path_are_echoed() {
    let addr = common::start_echo_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{}/deep/nested/path?format=yaml&x=1", addr))
        .body("ignored")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let snapshot: RequestSnapshot =
        serde_yaml::from_str(&res.text().await.unwrap()).unwrap();
    assert_eq!(snapshot.url, "/deep/nested/path?format=yaml&x=1");
}
