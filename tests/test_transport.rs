//! Request/response plumbing against a mock server: auth header injection,
//! envelope unwrapping, blob passthrough and error mapping.

use nextcloud_client::errors::NextcloudError;
use nextcloud_client::models::bookmark::{BookmarkStatus, CreateBookmark};
use nextcloud_client::types::{BoardId, BookmarkId, NoteId};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod helpers;
use helpers::client_for;

fn bookmark_json(id: u64, url: &str, title: &str, description: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": url,
        "target": url,
        "title": title,
        "description": description,
        "added": 1700000000,
        "userId": helpers::USERNAME,
        "tags": [],
        "folders": [-1],
        "clickCount": 0,
        "available": true,
        "htmlContent": null,
        "textContent": null,
        "archivedFile": null,
    })
}

#[tokio::test]
async fn test_requests_carry_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php/apps/notes/api/v1/notes"))
        .and(header("authorization", helpers::BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let notes = client
        .notes
        .query_notes(&Default::default())
        .await
        .unwrap();
    assert!(notes.is_empty());
}

#[tokio::test]
async fn test_error_carries_observed_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/index.php/apps/bookmarks/public/rest/v2/bookmark/42",
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"status": "error"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .bookmark
        .get_bookmark(BookmarkId(42))
        .await
        .unwrap_err();
    match err {
        NextcloudError::Api(details) => {
            assert_eq!(details.status.as_u16(), 404);
            assert!(details.url.ends_with("/bookmark/42"));
            assert_eq!(details.body, Some(json!({"status": "error"})));
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bookmark_create_then_get_round_trip() {
    let server = MockServer::start().await;
    let url = "https://spagl-media.de/";
    let title = "spagl_media";
    let description = "This is a description";
    Mock::given(method("POST"))
        .and(path("/index.php/apps/bookmarks/public/rest/v2/bookmark"))
        .and(body_json(json!({
            "url": url,
            "title": title,
            "description": description,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "item": bookmark_json(182, url, title, description),
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/index.php/apps/bookmarks/public/rest/v2/bookmark/182",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "item": bookmark_json(182, url, title, description),
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .bookmark
        .create_bookmark(&CreateBookmark {
            url: url.to_string(),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, BookmarkId(182));

    let fetched = client.bookmark.get_bookmark(created.id).await.unwrap();
    assert_eq!(fetched.url, url);
    assert_eq!(fetched.title, title);
    assert_eq!(fetched.description, description);
}

#[tokio::test]
async fn test_query_bookmarks_repeats_array_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php/apps/bookmarks/public/rest/v2/bookmark"))
        .and(query_param("tags[]", "rust"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": [bookmark_json(7, "https://example.org/", "example", "")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = nextcloud_client::models::bookmark::BookmarkSearchParams {
        tags: vec!["rust".to_string()],
        limit: Some(5),
        ..Default::default()
    };
    let bookmarks = client.bookmark.query_bookmarks(&params).await.unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].id, BookmarkId(7));
}

#[tokio::test]
async fn test_delete_unwraps_status_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(
            "/index.php/apps/bookmarks/public/rest/v2/bookmark/182",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client
        .bookmark
        .delete_bookmark(BookmarkId(182))
        .await
        .unwrap();
    assert_eq!(status, BookmarkStatus::Success);
}

#[tokio::test]
async fn test_blob_passthrough() {
    let server = MockServer::start().await;
    let payload: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";
    Mock::given(method("GET"))
        .and(path(
            "/index.php/apps/bookmarks/public/rest/v2/bookmark/181/favicon",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload.to_vec(), "image/png"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let favicon = client
        .bookmark
        .get_bookmark_favicon(BookmarkId(181))
        .await
        .unwrap();
    assert_eq!(favicon.as_ref(), payload);
}

#[tokio::test]
async fn test_ocs_envelope_unwrap() {
    let server = MockServer::start().await;
    let theming = json!({
        "name": "Nextcloud",
        "url": "https://nextcloud.com",
        "slogan": "a safe home for all your data",
        "color": "#0082c9",
        "color_text": "#ffffff",
        "color_element": "#0082c9",
        "color_element_bright": "#0082c9",
        "color_element_dark": "#0082c9",
        "logo": "https://cloud.example.com/core/img/logo/logo.svg",
        "background": "https://cloud.example.com/core/img/app-background.jpg",
        "background_text": "#ffffff",
        "background_plain": false,
        "background_default": true,
        "logoheader": "https://cloud.example.com/core/img/logo/logo.svg",
        "favicon": "https://cloud.example.com/core/img/favicon.ico",
    });
    Mock::given(method("GET"))
        .and(path("/ocs/v2.php/cloud/capabilities"))
        .and(header("OCS-APIRequest", "true"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ocs": {
                "meta": {"status": "ok", "statuscode": 200, "message": "OK"},
                "data": {
                    "version": {
                        "major": 28,
                        "minor": 0,
                        "micro": 1,
                        "string": "28.0.1",
                        "edition": "",
                        "extendedSupport": false,
                    },
                    "capabilities": {
                        "theming": theming,
                        "files": {"bigfilechunking": true},
                    },
                },
            },
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let instance = client.general.get_capabilities().await.unwrap();
    assert_eq!(instance.version.major, 28);
    assert_eq!(instance.version.string, "28.0.1");
    assert_eq!(instance.capabilities.theming.name, "Nextcloud");
    assert!(instance.capabilities.extra.contains_key("files"));
}

#[tokio::test]
async fn test_deck_error_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php/apps/deck/api/v1.0/boards/9"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": 403,
            "message": "Operation not permitted",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.deck.get_board(BoardId(9)).await.unwrap_err();
    match err {
        NextcloudError::Deck(details) => {
            assert_eq!(details.status.as_u16(), 403);
            assert_eq!(details.message, "Operation not permitted");
        }
        other => panic!("expected a deck error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_notes_decode_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php/apps/notes/api/v1/notes/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "etag": "abc123",
            "readonly": false,
            "content": "# groceries",
            "title": "groceries",
            "category": "",
            "favorite": false,
            "modified": 1700000000,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let note = client.notes.get_note(NoteId(12)).await.unwrap();
    assert_eq!(note.id, NoteId(12));
    assert_eq!(note.title, "groceries");
    assert!(!note.readonly);
}
