//! The anonymous login flow against a mock server: initiation, bounded
//! polling, early exit on approval and abort on fatal failures.

use nextcloud_client::auth::AuthClient;
use nextcloud_client::errors::NextcloudError;
use nextcloud_client::types::{LoginToken, Username};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod helpers;

const LOGIN_PATH: &str = "/index.php/login/v2";
const POLL_PATH: &str = "/index.php/login/v2/poll";

fn auth_client(server: &MockServer) -> AuthClient {
    AuthClient::new(
        helpers::server_url(server),
        Username::from(helpers::USERNAME),
        helpers::PASSWORD.to_string(),
    )
    .unwrap()
}

fn grant_body() -> serde_json::Value {
    json!({
        "server": "https://cloud.example.com",
        "loginName": helpers::USERNAME,
        "appPassword": "s3cr3t-app-password",
    })
}

#[tokio::test]
async fn test_initiate_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "poll": {
                "token": "tok",
                "endpoint": format!("{}{}", server.uri(), POLL_PATH),
            },
            "login": format!("{}/index.php/login/v2/flow/tok", server.uri()),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = auth_client(&server);
    let flow = client.initiate_login().await.unwrap();
    assert_eq!(flow.poll.token.as_str(), "tok");
    assert!(flow.login.contains("/login/v2/flow"));
    assert!(flow.poll.endpoint.ends_with(POLL_PATH));
}

#[tokio::test]
async fn test_initiate_login_propagates_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = auth_client(&server);
    let err = client.initiate_login().await.unwrap_err();
    assert_eq!(err.details().map(|d| d.status.as_u16()), Some(500));
}

#[tokio::test]
async fn test_poll_returns_once_authorized() {
    let server = MockServer::start().await;
    // The first two attempts see the "not yet authorized" signal, the
    // third finds the approved login.
    Mock::given(method("POST"))
        .and(path(POLL_PATH))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(POLL_PATH))
        .and(body_json(json!({"token": "tok"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = auth_client(&server);
    let grant = client
        .poll_login_with(&LoginToken::from("tok"), 10, Duration::from_millis(10))
        .await
        .unwrap();
    assert_eq!(grant.login_name.as_str(), helpers::USERNAME);
    assert_eq!(grant.app_password.as_str(), "s3cr3t-app-password");

    // Exactly three attempts: the remaining budget is not consumed.
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_poll_exhausts_its_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(POLL_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(5)
        .mount(&server)
        .await;

    let client = auth_client(&server);
    let started = Instant::now();
    let err = client
        .poll_login_with(&LoginToken::from("tok"), 5, Duration::from_millis(20))
        .await
        .unwrap_err();
    assert!(started.elapsed() >= Duration::from_millis(100));

    match err {
        NextcloudError::PollingExhausted(details) => {
            assert_eq!(details.status.as_u16(), 404);
            assert_eq!(details.message, "Invalid polling result");
            assert!(details.url.ends_with(POLL_PATH));
        }
        other => panic!("expected a polling exhaustion error, got {:?}", other),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_poll_aborts_on_fatal_failure() {
    let server = MockServer::start().await;
    // Two "not yet authorized" answers, then a 200 whose body is not the
    // grant: decoding fails and the poll must abort rather than retry.
    Mock::given(method("POST"))
        .and(path(POLL_PATH))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(POLL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let client = auth_client(&server);
    let err = client
        .poll_login_with(&LoginToken::from("tok"), 10, Duration::from_millis(10))
        .await
        .unwrap_err();
    assert!(matches!(err, NextcloudError::Transport(_)));
    assert!(!err.is_status_error());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}
