//! Data shapes of the notes app.

use crate::types::NoteId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Changes whenever any attribute of the note changes.
    pub etag: String,
    /// `true` when the note was shared with us without edit permission.
    pub readonly: bool,
    /// Markdown text.
    pub content: String,
    /// Also used as the filename of the note's file.
    pub title: String,
    /// Empty string means uncategorized; `/` separates sub-categories.
    pub category: String,
    pub favorite: bool,
    /// Unix timestamp of the last modification.
    pub modified: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesSettings {
    /// Folder where note files are stored, relative to the user folder.
    pub notes_path: String,
    /// File suffix for newly created notes, e.g. `.txt` or `.md`.
    pub file_suffix: String,
}

/// Query parameters for [crate::NotesClient::query_notes].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesSearchParams {
    /// Only notes of this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Comma-separated attributes to leave out of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Notes modified after this Unix timestamp come back id-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prune_before: Option<i64>,
    /// Chunked transfer: number of full notes per chunk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    /// Cursor from the previous chunk's `X-Notes-Chunk-Cursor` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_cursor: Option<String>,
}

/// Request body for creating or updating a note.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesSettingsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_suffix: Option<String>,
}
