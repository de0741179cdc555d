use crate::client::base::{BaseClient, BasicAuth};
use crate::errors::{map_api_error, NextcloudError};
use crate::models::notes::{Note, NotePayload, NotesSearchParams, NotesSettings, NotesSettingsPayload};
use crate::types::{NoteId, ServerUrl, Username};

/// Client for the [notes app](https://github.com/nextcloud/notes) REST API.
pub struct NotesClient {
    base: BaseClient,
}

impl NotesClient {
    /// Create a standalone notes client.
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

    pub async fn query_notes(
        &self,
        params: &NotesSearchParams,
    ) -> Result<Vec<Note>, NextcloudError> {
        self.base.get_query(&notes_path(), params).await
    }

    pub async fn get_note(&self, note: NoteId) -> Result<Note, NextcloudError> {
        self.base.get(&note_by_id(note)).await
    }

    pub async fn create_note(&self, payload: &NotePayload) -> Result<Note, NextcloudError> {
        self.base.post(&notes_path(), payload).await
    }

    pub async fn update_note(
        &self,
        note: NoteId,
        payload: &NotePayload,
    ) -> Result<Note, NextcloudError> {
        self.base.put(&note_by_id(note), payload).await
    }

    pub async fn delete_note(&self, note: NoteId) -> Result<(), NextcloudError> {
        self.base.delete_empty(&note_by_id(note)).await
    }

    pub async fn get_settings(&self) -> Result<NotesSettings, NextcloudError> {
        self.base.get(&settings_path()).await
    }

    pub async fn update_settings(
        &self,
        payload: &NotesSettingsPayload,
    ) -> Result<NotesSettings, NextcloudError> {
        self.base.put(&settings_path(), payload).await
    }
}

// ==================== paths ====================

const NOTES_PREFIX: &str = "/index.php/apps/notes/api/v1";

fn notes_path() -> String {
    format!("{}/notes", NOTES_PREFIX)
}

fn note_by_id(note: NoteId) -> String {
    format!("{}/notes/{}", NOTES_PREFIX, note.0)
}

fn settings_path() -> String {
    format!("{}/settings", NOTES_PREFIX)
}
