use crate::client::base::{BaseClient, BasicAuth};
use crate::errors::{map_api_error, NextcloudError};
use crate::models::bookmark::{
    Bookmark, BookmarkFolder, BookmarkSearchParams, BookmarkStatus, CreateBookmark, CreateFolder,
    CreateFolderShare, DataEnvelope, FolderContentItem, FolderSearchParams, FolderShare,
    FolderTreeNode, ItemEnvelope, OrderNode, StatusEnvelope, UpdateBookmark, UpdateFolder,
    UpdateFolderShare,
};
use crate::types::{BookmarkId, FolderId, ServerUrl, ShareId, Username};
use bytes::Bytes;
use serde::Serialize;

/// Client for the [bookmarks app](https://github.com/nextcloud/bookmarks)
/// REST API: bookmarks, tags, folders, folder shares and the client lock.
pub struct BookmarkClient {
    base: BaseClient,
}

#[derive(Serialize)]
struct ClickedUrl<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TagRename<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ChildOrder<'a> {
    data: &'a [OrderNode],
}

impl BookmarkClient {
    /// Create a standalone bookmarks client.
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

    // ==================== bookmarks ====================

    /// Search bookmarks. `BookmarkSearchParams::default()` returns the
    /// first page of everything.
    pub async fn query_bookmarks(
        &self,
        params: &BookmarkSearchParams,
    ) -> Result<Vec<Bookmark>, NextcloudError> {
        let env: DataEnvelope<Vec<Bookmark>> = self
            .base
            .get_query(&bookmark_path(), &params.query_pairs())
            .await?;
        Ok(env.data)
    }

    pub async fn create_bookmark(
        &self,
        payload: &CreateBookmark,
    ) -> Result<Bookmark, NextcloudError> {
        let env: ItemEnvelope<Bookmark> = self.base.post(&bookmark_path(), payload).await?;
        Ok(env.item)
    }

    pub async fn get_bookmark(&self, bookmark: BookmarkId) -> Result<Bookmark, NextcloudError> {
        let env: ItemEnvelope<Bookmark> = self.base.get(&bookmark_by_id(bookmark)).await?;
        Ok(env.item)
    }

    pub async fn update_bookmark(
        &self,
        bookmark: BookmarkId,
        payload: &UpdateBookmark,
    ) -> Result<Bookmark, NextcloudError> {
        let env: ItemEnvelope<Bookmark> = self.base.put(&bookmark_by_id(bookmark), payload).await?;
        Ok(env.item)
    }

    pub async fn delete_bookmark(
        &self,
        bookmark: BookmarkId,
    ) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.delete(&bookmark_by_id(bookmark)).await?;
        Ok(env.status)
    }

    /// Screenshot of the bookmarked page, as raw image bytes.
    pub async fn get_bookmark_image(&self, bookmark: BookmarkId) -> Result<Bytes, NextcloudError> {
        self.base.get_blob(&bookmark_image(bookmark)).await
    }

    /// Favicon of the bookmarked page, as raw image bytes.
    pub async fn get_bookmark_favicon(
        &self,
        bookmark: BookmarkId,
    ) -> Result<Bytes, NextcloudError> {
        self.base.get_blob(&bookmark_favicon(bookmark)).await
    }

    /// Count a click on the bookmark with the given URL.
    pub async fn click_bookmark(&self, url: &str) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self
            .base
            .post(&bookmark_click_path(), &ClickedUrl { url })
            .await?;
        Ok(env.status)
    }

    // ==================== tags ====================

    pub async fn get_tags(&self) -> Result<Vec<String>, NextcloudError> {
        self.base.get(&tag_path()).await
    }

    pub async fn rename_tag(
        &self,
        tag: &str,
        new_name: &str,
    ) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self
            .base
            .put(&tag_by_name(tag), &TagRename { name: new_name })
            .await?;
        Ok(env.status)
    }

    pub async fn delete_tag(&self, tag: &str) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.delete(&tag_by_name(tag)).await?;
        Ok(env.status)
    }

    // ==================== folders ====================

    pub async fn get_folder_tree(
        &self,
        params: &FolderSearchParams,
    ) -> Result<Vec<FolderTreeNode>, NextcloudError> {
        let env: DataEnvelope<Vec<FolderTreeNode>> =
            self.base.get_query(&folder_path(), params).await?;
        Ok(env.data)
    }

    pub async fn create_folder(
        &self,
        payload: &CreateFolder,
    ) -> Result<BookmarkFolder, NextcloudError> {
        let env: ItemEnvelope<BookmarkFolder> = self.base.post(&folder_path(), payload).await?;
        Ok(env.item)
    }

    pub async fn get_folder(&self, folder: FolderId) -> Result<BookmarkFolder, NextcloudError> {
        let env: ItemEnvelope<BookmarkFolder> = self.base.get(&folder_by_id(folder)).await?;
        Ok(env.item)
    }

    pub async fn update_folder(
        &self,
        folder: FolderId,
        payload: &UpdateFolder,
    ) -> Result<BookmarkFolder, NextcloudError> {
        let env: ItemEnvelope<BookmarkFolder> =
            self.base.put(&folder_by_id(folder), payload).await?;
        Ok(env.item)
    }

    pub async fn delete_folder(&self, folder: FolderId) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.delete(&folder_by_id(folder)).await?;
        Ok(env.status)
    }

    /// Hash of the folder's contents, for cheap change detection.
    /// `fields` selects which bookmark attributes enter the hash.
    pub async fn hash_folder(
        &self,
        folder: FolderId,
        fields: &[String],
    ) -> Result<String, NextcloudError> {
        let query: Vec<(&str, &str)> = fields.iter().map(|f| ("fields[]", f.as_str())).collect();
        let env: DataEnvelope<String> = self
            .base
            .get_query(&folder_hash(folder), &query)
            .await?;
        Ok(env.data)
    }

    pub async fn add_bookmark_to_folder(
        &self,
        folder: FolderId,
        bookmark: BookmarkId,
    ) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self
            .base
            .post(&folder_bookmark(folder, bookmark), &())
            .await?;
        Ok(env.status)
    }

    pub async fn remove_bookmark_from_folder(
        &self,
        folder: FolderId,
        bookmark: BookmarkId,
    ) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.delete(&folder_bookmark(folder, bookmark)).await?;
        Ok(env.status)
    }

    pub async fn get_folder_content_order(
        &self,
        folder: FolderId,
    ) -> Result<Vec<OrderNode>, NextcloudError> {
        let env: DataEnvelope<Vec<OrderNode>> =
            self.base.get(&folder_child_order(folder)).await?;
        Ok(env.data)
    }

    pub async fn set_folder_content_order(
        &self,
        folder: FolderId,
        order: &[OrderNode],
    ) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self
            .base
            .patch(&folder_child_order(folder), &ChildOrder { data: order })
            .await?;
        Ok(env.status)
    }

    /// Direct children of a folder, `layers` levels deep.
    pub async fn get_folder_content(
        &self,
        folder: FolderId,
        layers: u32,
    ) -> Result<Vec<FolderContentItem>, NextcloudError> {
        let env: DataEnvelope<Vec<FolderContentItem>> = self
            .base
            .get_query(&folder_content(folder), &[("layers", layers)])
            .await?;
        Ok(env.data)
    }

    pub async fn get_folder_content_count(&self, folder: FolderId) -> Result<u64, NextcloudError> {
        let env: ItemEnvelope<u64> = self.base.get(&folder_content_count(folder)).await?;
        Ok(env.item)
    }

    // ==================== shares ====================

    pub async fn create_folder_share(
        &self,
        folder: FolderId,
        payload: &CreateFolderShare,
    ) -> Result<FolderShare, NextcloudError> {
        let env: ItemEnvelope<FolderShare> = self.base.post(&folder_share(folder), payload).await?;
        Ok(env.item)
    }

    pub async fn get_share(&self, share: ShareId) -> Result<FolderShare, NextcloudError> {
        let env: ItemEnvelope<FolderShare> = self.base.get(&share_by_id(share)).await?;
        Ok(env.item)
    }

    pub async fn get_folder_shares(
        &self,
        folder: FolderId,
    ) -> Result<Vec<FolderShare>, NextcloudError> {
        let env: DataEnvelope<Vec<FolderShare>> = self.base.get(&folder_share(folder)).await?;
        Ok(env.data)
    }

    pub async fn update_folder_share(
        &self,
        share: ShareId,
        payload: &UpdateFolderShare,
    ) -> Result<FolderShare, NextcloudError> {
        let env: ItemEnvelope<FolderShare> = self.base.put(&share_by_id(share), payload).await?;
        Ok(env.item)
    }

    pub async fn delete_folder_share(
        &self,
        share: ShareId,
    ) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.delete(&share_by_id(share)).await?;
        Ok(env.status)
    }

    // ==================== client lock ====================

    /// Take the sync lock, telling other clients to hold off.
    pub async fn acquire_client_lock(&self) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.post(&lock_path(), &()).await?;
        Ok(env.status)
    }

    pub async fn release_client_lock(&self) -> Result<BookmarkStatus, NextcloudError> {
        let env: StatusEnvelope = self.base.delete(&lock_path()).await?;
        Ok(env.status)
    }
}

// ==================== paths ====================

const BOOKMARK_PREFIX: &str = "/index.php/apps/bookmarks/public/rest/v2";

fn bookmark_path() -> String {
    format!("{}/bookmark", BOOKMARK_PREFIX)
}

fn bookmark_by_id(bookmark: BookmarkId) -> String {
    format!("{}/bookmark/{}", BOOKMARK_PREFIX, bookmark.0)
}

fn bookmark_image(bookmark: BookmarkId) -> String {
    format!("{}/bookmark/{}/image", BOOKMARK_PREFIX, bookmark.0)
}

fn bookmark_favicon(bookmark: BookmarkId) -> String {
    format!("{}/bookmark/{}/favicon", BOOKMARK_PREFIX, bookmark.0)
}

fn bookmark_click_path() -> String {
    format!("{}/bookmark/click", BOOKMARK_PREFIX)
}

fn tag_path() -> String {
    format!("{}/tag", BOOKMARK_PREFIX)
}

fn tag_by_name(tag: &str) -> String {
    format!("{}/tag/{}", BOOKMARK_PREFIX, tag)
}

fn folder_path() -> String {
    format!("{}/folder", BOOKMARK_PREFIX)
}

fn folder_by_id(folder: FolderId) -> String {
    format!("{}/folder/{}", BOOKMARK_PREFIX, folder.0)
}

fn folder_hash(folder: FolderId) -> String {
    format!("{}/folder/{}/hash", BOOKMARK_PREFIX, folder.0)
}

fn folder_bookmark(folder: FolderId, bookmark: BookmarkId) -> String {
    format!(
        "{}/folder/{}/bookmarks/{}",
        BOOKMARK_PREFIX, folder.0, bookmark.0
    )
}

fn folder_child_order(folder: FolderId) -> String {
    format!("{}/folder/{}/childorder", BOOKMARK_PREFIX, folder.0)
}

fn folder_content(folder: FolderId) -> String {
    format!("{}/folder/{}/children", BOOKMARK_PREFIX, folder.0)
}

fn folder_content_count(folder: FolderId) -> String {
    format!("{}/folder/{}/count", BOOKMARK_PREFIX, folder.0)
}

fn folder_share(folder: FolderId) -> String {
    format!("{}/folder/{}/shares", BOOKMARK_PREFIX, folder.0)
}

fn share_by_id(share: ShareId) -> String {
    format!("{}/share/{}", BOOKMARK_PREFIX, share.0)
}

fn lock_path() -> String {
    format!("{}/lock", BOOKMARK_PREFIX)
}
