//! The anonymous "login flow v2": ask the server for a login URL, hand it
//! to a human to approve in a browser, then poll until the server hands
//! back an app password.

use crate::client::base::{BaseClient, BasicAuth};
use crate::constants::{POLL_INTERVAL, POLL_MAX_ATTEMPTS};
use crate::errors::{map_api_error, ErrorDetails, NextcloudError};
use crate::types::{AppPassword, LoginToken, ServerUrl, Username};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::OffsetDateTime;
use tracing::debug;

const LOGIN_FLOW_PATH: &str = "/index.php/login/v2";
const LOGIN_POLL_PATH: &str = "/index.php/login/v2/poll";

/// Message of the error raised when the poll budget runs out.
const INVALID_POLL_MESSAGE: &str = "Invalid polling result";

/// Where the server wants the human to go, and how to poll for the outcome.
#[derive(Debug, Deserialize)]
pub struct LoginFlow {
    pub poll: PollEndpoint,
    /// URL a human opens in a browser to approve the login.
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct PollEndpoint {
    pub token: LoginToken,
    pub endpoint: String,
}

/// Credentials granted once the login has been approved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPasswordGrant {
    pub server: String,
    pub login_name: Username,
    pub app_password: AppPassword,
}

#[derive(Serialize)]
struct PollPayload<'a> {
    token: &'a LoginToken,
}

/// Outcome of a single poll attempt.
enum Attempt {
    Ready(AppPasswordGrant),
    /// The server has not seen an approval yet.
    NotYetAuthorized,
}

/// Client for the anonymous login endpoints.
pub struct AuthClient {
    base: BaseClient,
}

impl AuthClient {
    pub fn new(
        url: ServerUrl,
        username: Username,
        password: String,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().build()?;
        let auth = BasicAuth { username, password };
        Ok(Self {
            base: BaseClient::new(client, url, Some(auth), map_api_error, map_api_error),
        })
    }

    /// Kick off a login flow. The returned token is what [Self::poll_login]
    /// waits on while a human approves the login at the returned URL.
    pub async fn initiate_login(&self) -> Result<LoginFlow, NextcloudError> {
        self.base.post(LOGIN_FLOW_PATH, &()).await
    }

    /// Poll with the default budget: 240 attempts, 300 ms apart, a little
    /// over a minute of patience.
    pub async fn poll_login(&self, token: &LoginToken) -> Result<AppPasswordGrant, NextcloudError> {
        self.poll_login_with(token, POLL_MAX_ATTEMPTS, POLL_INTERVAL)
            .await
    }

    /// Poll until approval, a fatal failure, or `max_attempts` exhausted.
    ///
    /// Waits `interval` before every attempt, so the worst case takes
    /// `max_attempts * interval` plus round-trip time. Attempts are
    /// strictly sequential. A "not yet authorized" answer from the server
    /// consumes one attempt; any transport-level failure aborts
    /// immediately. Dropping the returned future (e.g. in
    /// `tokio::select!`) cancels the poll.
    ///
    /// Fails with [NextcloudError::PollingExhausted] once the budget is
    /// spent.
    pub async fn poll_login_with(
        &self,
        token: &LoginToken,
        max_attempts: u32,
        interval: Duration,
    ) -> Result<AppPasswordGrant, NextcloudError> {
        for attempt in 1..=max_attempts {
            tokio::time::sleep(interval).await;
            match self.poll_once(token).await? {
                Attempt::Ready(grant) => {
                    debug!(attempt, "login approved");
                    return Ok(grant);
                }
                Attempt::NotYetAuthorized => debug!(attempt, "login not yet approved"),
            }
        }
        Err(NextcloudError::PollingExhausted(ErrorDetails {
            status: StatusCode::NOT_FOUND,
            message: INVALID_POLL_MESSAGE.to_string(),
            url: self.base.url_for(LOGIN_POLL_PATH),
            timestamp: OffsetDateTime::now_utc(),
            body: None,
        }))
    }

    async fn poll_once(&self, token: &LoginToken) -> Result<Attempt, NextcloudError> {
        match self.base.post(LOGIN_POLL_PATH, &PollPayload { token }).await {
            Ok(grant) => Ok(Attempt::Ready(grant)),
            Err(e) if e.is_status_error() => Ok(Attempt::NotYetAuthorized),
            Err(fatal) => Err(fatal),
        }
    }
}
