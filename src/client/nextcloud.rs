use crate::client::base::{BaseClient, BasicAuth};
use crate::client::bookmark::BookmarkClient;
use crate::client::deck::{map_deck_error, DeckClient};
use crate::client::general::GeneralClient;
use crate::client::notes::NotesClient;
use crate::constants::DEFAULT_REQUEST_TIMEOUT;
use crate::errors::{map_api_error, ErrorMapper};
use crate::types::{ServerUrl, Username};
use std::time::Duration;

/// One Nextcloud connection, with a client per supported app family.
/// All four share the credential tuple and the connection pool.
pub struct NextcloudClient {
    pub bookmark: BookmarkClient,
    pub deck: DeckClient,
    pub notes: NotesClient,
    pub general: GeneralClient,
}

impl NextcloudClient {
    /// Connect with the default configuration.
    pub fn new(
        url: ServerUrl,
        username: Username,
        password: String,
    ) -> Result<Self, reqwest::Error> {
        Self::builder(url, username, password).build()
    }

    /// Start building a client, to override defaults such as the request
    /// timeout.
    pub fn builder(url: ServerUrl, username: Username, password: String) -> NextcloudClientBuilder {
        NextcloudClientBuilder {
            url,
            username,
            password,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Builder for [NextcloudClient].
pub struct NextcloudClientBuilder {
    url: ServerUrl,
    username: Username,
    password: String,
    timeout: Duration,
}

impl NextcloudClientBuilder {
    /// Upper bound on the duration of each HTTP request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<NextcloudClient, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().build()?;
        let auth = BasicAuth {
            username: self.username,
            password: self.password,
        };
        let base = |map_error: ErrorMapper, map_ocs_error: ErrorMapper| {
            BaseClient::new(
                client.clone(),
                self.url.clone(),
                Some(auth.clone()),
                map_error,
                map_ocs_error,
            )
            .with_timeout(self.timeout)
        };
        Ok(NextcloudClient {
            bookmark: BookmarkClient::with_base(base(map_api_error, map_api_error)),
            deck: DeckClient::with_base(base(map_deck_error, map_deck_error)),
            notes: NotesClient::with_base(base(map_api_error, map_api_error)),
            general: GeneralClient::with_base(base(map_api_error, map_api_error)),
        })
    }
}
