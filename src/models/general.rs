//! Data shapes of the core OCS endpoints: instance capabilities, user
//! profiles and the sharee autocomplete.

use crate::types::Username;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct NextcloudInstance {
    pub version: Version,
    pub capabilities: Capabilities,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub string: String,
    pub edition: String,
    #[serde(rename = "extendedSupport")]
    pub extended_support: bool,
}

/// Capability advertisements vary by installed apps; only theming is
/// modeled, the rest stays raw.
#[derive(Debug, Clone, Deserialize)]
pub struct Capabilities {
    pub theming: Theming,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Theming {
    pub name: String,
    pub url: String,
    pub slogan: String,
    pub color: String,
    pub color_text: String,
    pub color_element: String,
    pub color_element_bright: String,
    pub color_element_dark: String,
    pub logo: String,
    pub background: String,
    pub background_text: String,
    pub background_plain: bool,
    pub background_default: bool,
    pub logoheader: String,
    pub favicon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserQuota {
    pub free: i64,
    pub used: i64,
    pub total: i64,
    pub relative: f64,
    /// Negative values encode "unlimited".
    pub quota: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendCapabilities {
    pub set_display_name: bool,
    pub set_password: bool,
}

/// Full profile of one user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub enabled: bool,
    pub id: Username,
    pub last_login: i64,
    pub backend: String,
    pub subadmin: Vec<String>,
    pub quota: UserQuota,
    pub manager: String,
    pub avatar_scope: String,
    pub email: Option<String>,
    pub email_scope: String,
    #[serde(rename = "additional_mail")]
    pub additional_mail: Vec<String>,
    #[serde(rename = "additional_mailScope")]
    pub additional_mail_scope: Vec<String>,
    pub displayname: String,
    #[serde(rename = "display_name")]
    pub display_name: String,
    pub displayname_scope: String,
    pub phone: String,
    pub phone_scope: String,
    pub address: String,
    pub address_scope: String,
    pub website: String,
    pub website_scope: String,
    pub twitter: String,
    pub twitter_scope: String,
    pub fediverse: String,
    pub fediverse_scope: String,
    pub organisation: String,
    pub organisation_scope: String,
    pub role: String,
    pub role_scope: String,
    pub headline: String,
    pub headline_scope: String,
    pub biography: String,
    pub biography_scope: String,
    #[serde(rename = "profile_enabled")]
    pub profile_enabled: String,
    #[serde(rename = "profile_enabledScope")]
    pub profile_enabled_scope: String,
    pub groups: Vec<String>,
    pub language: String,
    pub locale: String,
    #[serde(rename = "notify_email")]
    pub notify_email: Option<String>,
    pub backend_capabilities: BackendCapabilities,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStatus {
    /// E.g. `online` or `offline`.
    pub status: String,
    pub message: Option<String>,
    pub icon: Option<String>,
    /// Unix timestamp at which the status clears itself.
    #[serde(rename = "clearAt")]
    pub clear_at: Option<i64>,
}

/// One hit of the sharee autocomplete.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResult {
    pub id: Username,
    pub label: String,
    /// E.g. `icon-user`.
    pub icon: String,
    /// Backend the hit came from, e.g. `users`.
    pub source: String,
    pub status: UserStatus,
    pub subline: String,
    pub share_with_display_name_unique: String,
}
