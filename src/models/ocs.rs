//! The OCS wrapper shape shared by Nextcloud's core APIs.

use serde::Deserialize;

/// Outermost wrapper of every OCS response.
#[derive(Debug, Deserialize)]
pub struct OcsEnvelope<T> {
    pub ocs: OcsBody<T>,
}

#[derive(Debug, Deserialize)]
pub struct OcsBody<T> {
    pub meta: OcsMeta,
    pub data: T,
}

/// Status metadata accompanying every OCS payload.
#[derive(Debug, Deserialize)]
pub struct OcsMeta {
    pub status: String,
    pub statuscode: u16,
    pub message: Option<String>,
    pub totalitems: Option<String>,
    pub itemsperpage: Option<String>,
}
