use crate::client::base::{BaseClient, BasicAuth};
use crate::errors::{ErrorDetails, NextcloudError};
use crate::models::deck::{
    AclRule, AssignedUser, Attachment, Board, Card, Comment, CreateAclRule, CreateBoard,
    CreateCard, CreateComment, CreateLabel, CreateStack, DeckSettings, Label, ReorderCard, Stack,
    UpdateAclRule, UpdateBoard, UpdateCard, UpdateLabel, UpdateStack,
};
use crate::models::ocs::OcsEnvelope;
use crate::types::{
    AclRuleId, AttachmentId, BoardId, CardId, CommentId, LabelId, ServerUrl, StackId, Username,
};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

/// Client for the [deck app](https://github.com/nextcloud/deck) REST and
/// OCS APIs: boards, stacks, cards, labels, attachments and comments.
pub struct DeckClient {
    base: BaseClient,
}

/// Deck error responses carry a human-readable `message`; lift it out of
/// the body so callers see it without digging.
pub(crate) fn map_deck_error(mut details: ErrorDetails) -> NextcloudError {
    if let Some(message) = details
        .body
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
    {
        details.message = message.to_string();
    }
    NextcloudError::Deck(details)
}

#[derive(Serialize)]
struct LabelAssignment {
    #[serde(rename = "labelId")]
    label_id: LabelId,
}

#[derive(Serialize)]
struct UserAssignment<'a> {
    #[serde(rename = "userId")]
    user_id: &'a Username,
}

#[derive(Serialize)]
struct ConfigValue<'a> {
    value: &'a str,
}

impl DeckClient {
    /// Create a standalone deck client.
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
            map_deck_error,
            map_deck_error,
        )))
    }

    pub(crate) fn with_base(base: BaseClient) -> Self {
        Self { base }
    }

    // ==================== boards ====================

    /// All boards visible to the user. `details` asks the server to embed
    /// labels, ACL and full user lists.
    pub async fn get_boards(&self, details: bool) -> Result<Vec<Board>, NextcloudError> {
        self.base
            .get_query(&boards_path(), &[("details", details)])
            .await
    }

    pub async fn create_board(&self, payload: &CreateBoard) -> Result<Board, NextcloudError> {
        self.base.post(&boards_path(), payload).await
    }

    pub async fn get_board(&self, board: BoardId) -> Result<Board, NextcloudError> {
        self.base.get(&board_by_id(board)).await
    }

    pub async fn update_board(
        &self,
        board: BoardId,
        payload: &UpdateBoard,
    ) -> Result<Board, NextcloudError> {
        self.base.put(&board_by_id(board), payload).await
    }

    pub async fn delete_board(&self, board: BoardId) -> Result<(), NextcloudError> {
        self.base.delete_empty(&board_by_id(board)).await
    }

    /// Bring back a deleted board.
    pub async fn undo_delete_board(&self, board: BoardId) -> Result<(), NextcloudError> {
        self.base.post_empty(&board_undo_delete(board), &()).await
    }

    pub async fn create_share(
        &self,
        board: BoardId,
        payload: &CreateAclRule,
    ) -> Result<AclRule, NextcloudError> {
        self.base.post(&board_acl(board), payload).await
    }

    pub async fn update_share(
        &self,
        board: BoardId,
        rule: AclRuleId,
        payload: &UpdateAclRule,
    ) -> Result<AclRule, NextcloudError> {
        self.base.put(&board_acl_by_id(board, rule), payload).await
    }

    pub async fn delete_share(&self, board: BoardId, rule: AclRuleId) -> Result<(), NextcloudError> {
        self.base.delete_empty(&board_acl_by_id(board, rule)).await
    }

    // ==================== stacks ====================

    pub async fn get_stacks(&self, board: BoardId) -> Result<Vec<Stack>, NextcloudError> {
        self.base.get(&stacks_path(board)).await
    }

    pub async fn get_archived_stacks(&self, board: BoardId) -> Result<Vec<Stack>, NextcloudError> {
        self.base.get(&stacks_archived(board)).await
    }

    pub async fn create_stack(
        &self,
        board: BoardId,
        payload: &CreateStack,
    ) -> Result<Stack, NextcloudError> {
        self.base.post(&stacks_path(board), payload).await
    }

    pub async fn get_stack(&self, board: BoardId, stack: StackId) -> Result<Stack, NextcloudError> {
        self.base.get(&stack_by_id(board, stack)).await
    }

    pub async fn update_stack(
        &self,
        board: BoardId,
        stack: StackId,
        payload: &UpdateStack,
    ) -> Result<Stack, NextcloudError> {
        self.base.put(&stack_by_id(board, stack), payload).await
    }

    pub async fn delete_stack(&self, board: BoardId, stack: StackId) -> Result<(), NextcloudError> {
        self.base.delete_empty(&stack_by_id(board, stack)).await
    }

    // ==================== cards ====================

    pub async fn create_card(
        &self,
        board: BoardId,
        stack: StackId,
        payload: &CreateCard,
    ) -> Result<Card, NextcloudError> {
        self.base.post(&cards_path(board, stack), payload).await
    }

    pub async fn get_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
    ) -> Result<Card, NextcloudError> {
        self.base.get(&card_by_id(board, stack, card)).await
    }

    pub async fn update_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        payload: &UpdateCard,
    ) -> Result<Card, NextcloudError> {
        self.base.put(&card_by_id(board, stack, card), payload).await
    }

    pub async fn delete_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
    ) -> Result<(), NextcloudError> {
        self.base.delete_empty(&card_by_id(board, stack, card)).await
    }

    pub async fn assign_label_to_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        label: LabelId,
    ) -> Result<(), NextcloudError> {
        self.base
            .put_empty(
                &card_assign_label(board, stack, card),
                &LabelAssignment { label_id: label },
            )
            .await
    }

    pub async fn remove_label_from_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        label: LabelId,
    ) -> Result<(), NextcloudError> {
        self.base
            .put_empty(
                &card_remove_label(board, stack, card),
                &LabelAssignment { label_id: label },
            )
            .await
    }

    pub async fn assign_user_to_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        user: &Username,
    ) -> Result<AssignedUser, NextcloudError> {
        self.base
            .put(
                &card_assign_user(board, stack, card),
                &UserAssignment { user_id: user },
            )
            .await
    }

    pub async fn remove_user_from_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        user: &Username,
    ) -> Result<(), NextcloudError> {
        self.base
            .put_empty(
                &card_unassign_user(board, stack, card),
                &UserAssignment { user_id: user },
            )
            .await
    }

    /// Move a card within its stack or to another stack.
    pub async fn reorder_card(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        payload: &ReorderCard,
    ) -> Result<(), NextcloudError> {
        self.base
            .put_empty(&card_reorder(board, stack, card), payload)
            .await
    }

    // ==================== labels ====================

    pub async fn get_label(&self, board: BoardId, label: LabelId) -> Result<Label, NextcloudError> {
        self.base.get(&label_by_id(board, label)).await
    }

    pub async fn create_label(
        &self,
        board: BoardId,
        payload: &CreateLabel,
    ) -> Result<Label, NextcloudError> {
        self.base.post(&labels_path(board), payload).await
    }

    pub async fn update_label(
        &self,
        board: BoardId,
        label: LabelId,
        payload: &UpdateLabel,
    ) -> Result<Label, NextcloudError> {
        self.base.put(&label_by_id(board, label), payload).await
    }

    pub async fn delete_label(&self, board: BoardId, label: LabelId) -> Result<(), NextcloudError> {
        self.base.delete_empty(&label_by_id(board, label)).await
    }

    // ==================== attachments ====================

    pub async fn get_card_attachments(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
    ) -> Result<Vec<Attachment>, NextcloudError> {
        self.base.get(&card_attachments(board, stack, card)).await
    }

    pub async fn get_card_attachment(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        attachment: AttachmentId,
    ) -> Result<Attachment, NextcloudError> {
        self.base
            .get(&card_attachment_by_id(board, stack, card, attachment))
            .await
    }

    /// Attach a file to a card. The deck API takes attachment uploads as
    /// multipart form data.
    pub async fn upload_card_attachment(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<(), NextcloudError> {
        let form = attachment_form(filename, content);
        self.base
            .post_form(&card_attachments(board, stack, card), form)
            .await
    }

    /// Replace the file behind an existing attachment.
    pub async fn update_card_attachment(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        attachment: AttachmentId,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<(), NextcloudError> {
        let form = attachment_form(filename, content);
        self.base
            .put_form(&card_attachment_by_id(board, stack, card, attachment), form)
            .await
    }

    pub async fn delete_card_attachment(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        attachment: AttachmentId,
    ) -> Result<(), NextcloudError> {
        self.base
            .delete_empty(&card_attachment_by_id(board, stack, card, attachment))
            .await
    }

    pub async fn restore_card_attachment(
        &self,
        board: BoardId,
        stack: StackId,
        card: CardId,
        attachment: AttachmentId,
    ) -> Result<(), NextcloudError> {
        self.base
            .put_empty(
                &card_attachment_restore(board, stack, card, attachment),
                &(),
            )
            .await
    }

    // ==================== OCS: config and comments ====================

    /// User-level deck settings.
    pub async fn get_config(&self) -> Result<DeckSettings, NextcloudError> {
        let env: OcsEnvelope<DeckSettings> = self.base.ocs_get(OCS_CONFIG_PATH).await?;
        Ok(env.ocs.data)
    }

    /// Set one config key, e.g. `calendar` to `"true"`.
    pub async fn set_config_value(&self, key: &str, value: &str) -> Result<(), NextcloudError> {
        self.base
            .ocs_post_empty(&ocs_config_key(key), &ConfigValue { value })
            .await
    }

    pub async fn get_card_comments(&self, card: CardId) -> Result<Vec<Comment>, NextcloudError> {
        let env: OcsEnvelope<Vec<Comment>> = self.base.ocs_get(&ocs_card_comments(card)).await?;
        Ok(env.ocs.data)
    }

    pub async fn create_card_comment(
        &self,
        card: CardId,
        payload: &CreateComment,
    ) -> Result<Comment, NextcloudError> {
        let env: OcsEnvelope<Comment> = self
            .base
            .ocs_post(&ocs_card_comments(card), payload)
            .await?;
        Ok(env.ocs.data)
    }

    pub async fn update_card_comment(
        &self,
        card: CardId,
        comment: CommentId,
        payload: &CreateComment,
    ) -> Result<Comment, NextcloudError> {
        let env: OcsEnvelope<Comment> = self
            .base
            .ocs_put(&ocs_card_comment_by_id(card, comment), payload)
            .await?;
        Ok(env.ocs.data)
    }

    pub async fn delete_card_comment(
        &self,
        card: CardId,
        comment: CommentId,
    ) -> Result<(), NextcloudError> {
        self.base
            .ocs_delete_empty(&ocs_card_comment_by_id(card, comment))
            .await
    }
}

// ==================== paths ====================

const DECK_PREFIX: &str = "/index.php/apps/deck/api/v1.0";
const OCS_DECK_PREFIX: &str = "/ocs/v2.php/apps/deck/api/v1.0";
const OCS_CONFIG_PATH: &str = "/ocs/v2.php/apps/deck/api/v1.0/config";

fn boards_path() -> String {
    format!("{}/boards", DECK_PREFIX)
}

fn board_by_id(board: BoardId) -> String {
    format!("{}/boards/{}", DECK_PREFIX, board.0)
}

fn board_undo_delete(board: BoardId) -> String {
    format!("{}/boards/{}/undo_delete", DECK_PREFIX, board.0)
}

fn board_acl(board: BoardId) -> String {
    format!("{}/boards/{}/acl", DECK_PREFIX, board.0)
}

fn board_acl_by_id(board: BoardId, rule: AclRuleId) -> String {
    format!("{}/boards/{}/acl/{}", DECK_PREFIX, board.0, rule.0)
}

fn stacks_path(board: BoardId) -> String {
    format!("{}/boards/{}/stacks", DECK_PREFIX, board.0)
}

fn stacks_archived(board: BoardId) -> String {
    format!("{}/boards/{}/stacks/archived", DECK_PREFIX, board.0)
}

fn stack_by_id(board: BoardId, stack: StackId) -> String {
    format!("{}/boards/{}/stacks/{}", DECK_PREFIX, board.0, stack.0)
}

fn cards_path(board: BoardId, stack: StackId) -> String {
    format!(
        "{}/boards/{}/stacks/{}/cards",
        DECK_PREFIX, board.0, stack.0
    )
}

fn card_by_id(board: BoardId, stack: StackId, card: CardId) -> String {
    format!(
        "{}/boards/{}/stacks/{}/cards/{}",
        DECK_PREFIX, board.0, stack.0, card.0
    )
}

fn card_assign_label(board: BoardId, stack: StackId, card: CardId) -> String {
    format!("{}/assignLabel", card_by_id(board, stack, card))
}

fn card_remove_label(board: BoardId, stack: StackId, card: CardId) -> String {
    format!("{}/removeLabel", card_by_id(board, stack, card))
}

fn card_assign_user(board: BoardId, stack: StackId, card: CardId) -> String {
    format!("{}/assignUser", card_by_id(board, stack, card))
}

fn card_unassign_user(board: BoardId, stack: StackId, card: CardId) -> String {
    format!("{}/unassignUser", card_by_id(board, stack, card))
}

fn card_reorder(board: BoardId, stack: StackId, card: CardId) -> String {
    format!("{}/reorder", card_by_id(board, stack, card))
}

fn card_attachments(board: BoardId, stack: StackId, card: CardId) -> String {
    format!("{}/attachments", card_by_id(board, stack, card))
}

fn card_attachment_by_id(
    board: BoardId,
    stack: StackId,
    card: CardId,
    attachment: AttachmentId,
) -> String {
    format!(
        "{}/attachments/{}",
        card_by_id(board, stack, card),
        attachment.0
    )
}

fn card_attachment_restore(
    board: BoardId,
    stack: StackId,
    card: CardId,
    attachment: AttachmentId,
) -> String {
    format!(
        "{}/attachments/{}/restore",
        card_by_id(board, stack, card),
        attachment.0
    )
}

fn labels_path(board: BoardId) -> String {
    format!("{}/boards/{}/labels", DECK_PREFIX, board.0)
}

fn label_by_id(board: BoardId, label: LabelId) -> String {
    format!("{}/boards/{}/labels/{}", DECK_PREFIX, board.0, label.0)
}

fn ocs_config_key(key: &str) -> String {
    format!("{}/config/{}", OCS_DECK_PREFIX, key)
}

fn ocs_card_comments(card: CardId) -> String {
    format!("{}/cards/{}/comments", OCS_DECK_PREFIX, card.0)
}

fn ocs_card_comment_by_id(card: CardId, comment: CommentId) -> String {
    format!("{}/cards/{}/comments/{}", OCS_DECK_PREFIX, card.0, comment.0)
}

fn attachment_form(filename: &str, content: Vec<u8>) -> Form {
    Form::new().text("type", "file").part(
        "file",
        Part::bytes(content).file_name(filename.to_string()),
    )
}
