//! Data shapes of the deck app.

use crate::types::{AclRuleId, AttachmentId, BoardId, CardId, CommentId, LabelId, StackId, Username};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==================== models ====================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckUser {
    pub primary_key: String,
    pub uid: Username,
    pub displayname: String,
}

/// Access levels the current user holds on a board.
#[derive(Debug, Copy, Clone, Deserialize)]
pub struct Permissions {
    #[serde(rename = "PERMISSION_READ")]
    pub read: bool,
    #[serde(rename = "PERMISSION_EDIT")]
    pub edit: bool,
    #[serde(rename = "PERMISSION_MANAGE")]
    pub manage: bool,
    #[serde(rename = "PERMISSION_SHARE")]
    pub share: bool,
}

/// Due-date notification setting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyDue {
    Off,
    On,
}

/// User-level deck settings, served through OCS.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckSettings {
    #[serde(rename = "notify-due")]
    pub notify_due: NotifyDue,
    /// Whether due dates show up in the calendar app.
    pub calendar: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub title: String,
    /// Hex color code, e.g. `31CC7C`.
    pub color: String,
    pub board_id: BoardId,
    pub card_id: Option<CardId>,
    pub id: LabelId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub title: String,
    pub owner: DeckUser,
    pub color: String,
    pub archived: bool,
    pub labels: Vec<Label>,
    pub acl: Vec<String>,
    pub permissions: Permissions,
    pub users: Vec<String>,
    /// Number of users the board is shared with.
    pub shared: u32,
    /// `0` while the board is alive.
    pub deleted_at: i64,
    pub id: BoardId,
    pub last_modified: i64,
    pub settings: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub title: String,
    pub board_id: BoardId,
    pub deleted_at: i64,
    pub last_modified: i64,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub order: u32,
    pub id: StackId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub description: Option<String>,
    pub stack_id: StackId,
    #[serde(rename = "type")]
    pub card_type: String,
    pub last_modified: i64,
    pub created_at: i64,
    pub labels: Option<Vec<String>>,
    pub assigned_users: Option<Vec<String>>,
    pub attachments: Option<Vec<Value>>,
    pub attachment_count: Option<u32>,
    pub owner: String,
    pub order: u32,
    pub archived: bool,
    /// Due date in ISO 8601 format.
    pub duedate: Option<String>,
    pub deleted_at: i64,
    pub comments_unread: u32,
    pub id: CardId,
    /// `1` when the card is overdue.
    pub overdue: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub card_id: CardId,
    #[serde(rename = "type")]
    pub attachment_type: String,
    /// Filename or path of the attachment.
    pub data: String,
    pub last_modified: i64,
    pub created_at: i64,
    pub created_by: Username,
    pub deleted_at: i64,
    pub extended_data: AttachmentData,
    pub id: AttachmentId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentData {
    pub filesize: u64,
    pub mimetype: String,
    pub info: AttachmentFileInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentFileInfo {
    pub dirname: String,
    pub basename: String,
    pub extension: String,
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclRule {
    pub participant: DeckUser,
    /// `0`: user, `1`: group, `7`: circle.
    #[serde(rename = "type")]
    pub participant_type: u8,
    pub board_id: BoardId,
    pub permission_edit: bool,
    pub permission_share: bool,
    pub permission_manage: bool,
    pub owner: bool,
    pub id: AclRuleId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUser {
    pub id: u64,
    pub participant: DeckUser,
    pub card_id: CardId,
}

/// A comment on a card, served through OCS.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub object_id: CardId,
    pub message: String,
    pub actor_id: Username,
    pub actor_type: String,
    pub actor_display_name: String,
    pub creation_date_time: String,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub mention_id: String,
    pub mention_type: String,
    pub mention_display_name: String,
}

// ==================== request bodies ====================

#[derive(Debug, Clone, Serialize)]
pub struct CreateBoard {
    pub title: String,
    /// Hex color code, e.g. `31CC7C`.
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBoard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAclRule {
    /// `0`: user, `1`: group, `7`: circle.
    #[serde(rename = "type")]
    pub participant_type: u8,
    /// The uid of the participant.
    pub participant: String,
    pub permission_edit: bool,
    pub permission_share: bool,
    pub permission_manage: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAclRule {
    pub permission_edit: bool,
    pub permission_share: bool,
    pub permission_manage: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateStack {
    pub title: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCard {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date in ISO 8601 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duedate: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCard {
    pub title: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duedate: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderCard {
    pub order: u32,
    pub stack_id: StackId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateLabel {
    pub title: String,
    /// Hex color code, e.g. `31CC7C`.
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub message: String,
    /// Comment to reply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}
