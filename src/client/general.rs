use crate::client::base::{BaseClient, BasicAuth};
use crate::errors::{map_api_error, NextcloudError};
use crate::models::general::{AutocompleteResult, NextcloudInstance, UserInfo};
use crate::models::ocs::OcsEnvelope;
use crate::types::{ServerUrl, Username};

/// Client for the core OCS endpoints: instance capabilities, user profiles
/// and the sharee autocomplete.
pub struct GeneralClient {
    base: BaseClient,
}

impl GeneralClient {
    /// Create a standalone general client.
    pub fn new(
        url: ServerUrl,
        username: Username,
        password: String,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().build()?;
        let auth = BasicAuth { username, password };
        Ok(Self::with_base(BaseClient::new(
            client,
            url,
            Some(auth),
            map_api_error,
            map_api_error,
        )))
    }

    pub(crate) fn with_base(base: BaseClient) -> Self {
        Self { base }
    }

    /// Version and capability advertisement of the server.
    pub async fn get_capabilities(&self) -> Result<NextcloudInstance, NextcloudError> {
        let env: OcsEnvelope<NextcloudInstance> = self.base.ocs_get(CAPABILITIES_PATH).await?;
        Ok(env.ocs.data)
    }

    pub async fn get_user_info(&self, user: &Username) -> Result<UserInfo, NextcloudError> {
        let env: OcsEnvelope<UserInfo> = self.base.ocs_get(&user_info_path(user)).await?;
        Ok(env.ocs.data)
    }

    /// Search user names for sharing, as the share dialog does.
    pub async fn query_usernames(
        &self,
        search: &str,
    ) -> Result<Vec<AutocompleteResult>, NextcloudError> {
        let env: OcsEnvelope<Vec<AutocompleteResult>> = self
            .base
            .ocs_get_query(AUTOCOMPLETE_PATH, &[("search", search)])
            .await?;
        Ok(env.ocs.data)
    }
}

// ==================== paths ====================

const CAPABILITIES_PATH: &str = "/ocs/v2.php/cloud/capabilities";
const AUTOCOMPLETE_PATH: &str = "/ocs/v2.php/core/autocomplete/get";

fn user_info_path(user: &Username) -> String {
    format!("/ocs/v2.php/cloud/users/{}", user)
}
