//! Data shapes of the bookmarks app.
//!
//! The bookmarks API wraps single results as `{status, item}`, collections
//! as `{status, data}` and bare acknowledgements as `{status}`; the client
//! unwraps exactly one of those layers per endpoint.

use crate::types::{BookmarkId, FolderId, ShareId, Username};
use serde::{Deserialize, Serialize};

// ==================== envelopes ====================

/// Outcome marker the bookmarks app attaches to every response.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkStatus {
    Success,
    Error,
}

#[derive(Debug, Deserialize)]
pub struct ItemEnvelope<T> {
    pub status: BookmarkStatus,
    pub item: T,
}

#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub status: BookmarkStatus,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub status: BookmarkStatus,
}

// ==================== models ====================

/// A bookmark as stored by the bookmarks app.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    /// Bookmarked link. Can be an HTTP, FTP, file or javascript link.
    pub url: String,
    pub target: String,
    pub title: String,
    pub description: String,
    /// Unix timestamp of creation.
    pub added: i64,
    pub user_id: Username,
    pub tags: Vec<String>,
    pub folders: Vec<FolderId>,
    pub click_count: u32,
    /// Whether the bookmarked URL was reachable when last checked.
    pub available: bool,
    pub html_content: Option<String>,
    pub text_content: Option<String>,
    /// Nextcloud file id of the archived copy, for non-HTML targets.
    pub archived_file: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkFolder {
    pub id: FolderId,
    pub title: String,
    /// `0` marks a top-level folder.
    pub parent_folder_id: FolderId,
    pub user_id: Username,
    pub user_display_name: String,
}

/// One node of the folder hierarchy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTreeNode {
    pub id: FolderId,
    pub title: String,
    pub parent_folder_id: FolderId,
    pub children: Vec<FolderTreeNode>,
}

/// One entry of a folder listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FolderContentItem {
    Bookmark {
        id: BookmarkId,
        title: String,
        url: String,
    },
    Folder {
        id: FolderId,
        title: String,
        #[serde(rename = "userId")]
        user_id: Username,
    },
}

/// Child ordering node used by the folder `childorder` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OrderNode {
    Bookmark {
        id: BookmarkId,
    },
    Folder {
        id: FolderId,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<OrderNode>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderShare {
    pub id: ShareId,
    pub folder_id: FolderId,
    /// Who the folder is shared with.
    pub participant: String,
    /// `0` for a single user, `1` for a group.
    #[serde(rename = "type")]
    pub participant_type: u8,
    pub can_write: bool,
    pub can_share: bool,
}

// ==================== request bodies ====================

/// Request body for creating a bookmark. Tags need not exist beforehand;
/// they are created on the fly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBookmark {
    pub url: String,
    /// Defaults to the title of the page behind `url` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Folders to file the bookmark under; the root folder when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<FolderId>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBookmark {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<FolderId>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolder {
    pub title: String,
    /// Use `FolderId(-1)` for the root folder.
    pub parent_folder: FolderId,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder: Option<FolderId>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderShare {
    pub participant: String,
    /// `0` for a single user, `1` for a group.
    #[serde(rename = "type")]
    pub participant_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_write: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_share: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderShare {
    pub can_write: bool,
    pub can_share: bool,
}

// ==================== queries ====================

/// Sort column for bookmark queries.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SortBy {
    Url,
    Title,
    Description,
    Public,
    LastModified,
    ClickCount,
}

impl SortBy {
    fn as_str(self) -> &'static str {
        match self {
            SortBy::Url => "url",
            SortBy::Title => "title",
            SortBy::Description => "description",
            SortBy::Public => "public",
            SortBy::LastModified => "lastmodified",
            SortBy::ClickCount => "clickcount",
        }
    }
}

/// Whether all search terms must match, or any one suffices.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Conjunction {
    And,
    Or,
}

/// Query parameters for [crate::BookmarkClient::query_bookmarks].
///
/// Array-valued parameters go over the wire as repeated `key[]` pairs,
/// which is why this is converted by hand instead of deriving [Serialize].
#[derive(Debug, Clone, Default)]
pub struct BookmarkSearchParams {
    /// Only return bookmarks carrying these tags.
    pub tags: Vec<String>,
    pub page: Option<u32>,
    /// Bookmarks per page, 10 by default.
    pub limit: Option<u32>,
    pub sort_by: Option<SortBy>,
    /// Words to look for in url, title, description and tags.
    pub search: Vec<String>,
    pub conjunction: Option<Conjunction>,
    /// Restrict to direct children of this folder.
    pub folder: Option<FolderId>,
    /// Test whether this exact URL is bookmarked.
    pub url: Option<String>,
    /// Only dead links.
    pub unavailable: Option<bool>,
    /// Only bookmarks with an archived copy.
    pub archived: Option<bool>,
    /// Only bookmarks without tags.
    pub untagged: Option<bool>,
    /// Only bookmarks filed under more than one folder.
    pub duplicated: Option<bool>,
}

impl BookmarkSearchParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for tag in &self.tags {
            pairs.push(("tags[]", tag.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortby", sort_by.as_str().to_string()));
        }
        for word in &self.search {
            pairs.push(("search[]", word.clone()));
        }
        if let Some(conjunction) = self.conjunction {
            let value = match conjunction {
                Conjunction::And => "and",
                Conjunction::Or => "or",
            };
            pairs.push(("conjunction", value.to_string()));
        }
        if let Some(folder) = self.folder {
            pairs.push(("folder", folder.0.to_string()));
        }
        if let Some(url) = &self.url {
            pairs.push(("url", url.clone()));
        }
        if let Some(unavailable) = self.unavailable {
            pairs.push(("unavailable", unavailable.to_string()));
        }
        if let Some(archived) = self.archived {
            pairs.push(("archived", archived.to_string()));
        }
        if let Some(untagged) = self.untagged {
            pairs.push(("untagged", untagged.to_string()));
        }
        if let Some(duplicated) = self.duplicated {
            pairs.push(("duplicated", duplicated.to_string()));
        }
        pairs
    }
}

/// Query parameters for [crate::BookmarkClient::get_folder_tree].
#[derive(Debug, Clone, Default, Serialize)]
pub struct FolderSearchParams {
    /// Folder whose subtree to return; the root folder by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<FolderId>,
    /// Maximum subtree depth; all layers when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_params_repeat_the_key() {
        let params = BookmarkSearchParams {
            tags: vec!["rust".to_string(), "http".to_string()],
            limit: Some(5),
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("tags[]", "rust".to_string()),
                ("tags[]", "http".to_string()),
                ("limit", "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_node_wire_format() {
        let order = OrderNode::Folder {
            id: FolderId(3),
            children: vec![OrderNode::Bookmark { id: BookmarkId(9) }],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "folder",
                "id": 3,
                "children": [{"type": "bookmark", "id": 9}],
            })
        );
    }
}
