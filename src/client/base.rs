use crate::constants::DEFAULT_REQUEST_TIMEOUT;
use crate::errors::{check, ErrorMapper, NextcloudError};
use crate::types::{ServerUrl, Username};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Marker header Nextcloud requires on OCS requests.
const OCS_API_REQUEST: &str = "OCS-APIRequest";

/// Username and password sent as HTTP basic auth.
#[derive(Debug, Clone)]
pub(crate) struct BasicAuth {
    pub username: Username,
    pub password: String,
}

/// Request plumbing shared by every resource client: URL composition,
/// credential injection, decoding, and error mapping. Stateless between
/// calls; cheap to clone (the connection pool inside `reqwest::Client` is
/// shared).
#[derive(Debug, Clone)]
pub(crate) struct BaseClient {
    client: reqwest::Client,
    base_url: ServerUrl,
    auth: Option<BasicAuth>,
    timeout: Duration,
    map_error: ErrorMapper,
    map_ocs_error: ErrorMapper,
}

impl BaseClient {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: ServerUrl,
        auth: Option<BasicAuth>,
        map_error: ErrorMapper,
        map_ocs_error: ErrorMapper,
    ) -> Self {
        Self {
            client,
            base_url,
            auth,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            map_error,
            map_ocs_error,
        }
    }

    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with credentials and timeout, but no content negotiation.
    fn bare_request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, self.url_for(path))
            .timeout(self.timeout);
        if let Some(auth) = &self.auth {
            req = req.basic_auth(&auth.username, Some(&auth.password));
        }
        req
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.bare_request(method, path)
            .header(CONTENT_TYPE, "application/json")
    }

    fn ocs_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.bare_request(method, path)
            .header(CONTENT_TYPE, "application/json;charset=utf-8")
            .header(ACCEPT, "application/json")
            .header(OCS_API_REQUEST, "true")
    }

    async fn dispatch(
        &self,
        req: RequestBuilder,
        map_error: ErrorMapper,
    ) -> Result<Response, NextcloudError> {
        let res = req.send().await?;
        debug!(url = %res.url(), status = %res.status(), "received response");
        check(res, map_error).await
    }

    async fn decode_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        map_error: ErrorMapper,
    ) -> Result<T, NextcloudError> {
        let res = self.dispatch(req, map_error).await?;
        Ok(res.json().await?)
    }

    async fn discard(
        &self,
        req: RequestBuilder,
        map_error: ErrorMapper,
    ) -> Result<(), NextcloudError> {
        self.dispatch(req, map_error).await?;
        Ok(())
    }

    // ==================== plain REST verbs ====================

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, NextcloudError> {
        self.decode_json(self.request(Method::GET, path), self.map_error)
            .await
    }

    pub(crate) async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, NextcloudError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(self.request(Method::GET, path).query(query), self.map_error)
            .await
    }

    /// GET returning the raw response body, no JSON decoding.
    pub(crate) async fn get_blob(&self, path: &str) -> Result<Bytes, NextcloudError> {
        let res = self
            .dispatch(self.request(Method::GET, path), self.map_error)
            .await?;
        Ok(res.bytes().await?)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, NextcloudError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(self.request(Method::POST, path).json(body), self.map_error)
            .await
    }

    /// POST for endpoints whose response body carries nothing of interest.
    pub(crate) async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), NextcloudError> {
        self.discard(self.request(Method::POST, path).json(body), self.map_error)
            .await
    }

    pub(crate) async fn post_form(&self, path: &str, form: Form) -> Result<(), NextcloudError> {
        self.discard(
            self.bare_request(Method::POST, path).multipart(form),
            self.map_error,
        )
        .await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, NextcloudError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(self.request(Method::PUT, path).json(body), self.map_error)
            .await
    }

    pub(crate) async fn put_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), NextcloudError> {
        self.discard(self.request(Method::PUT, path).json(body), self.map_error)
            .await
    }

    pub(crate) async fn put_form(&self, path: &str, form: Form) -> Result<(), NextcloudError> {
        self.discard(
            self.bare_request(Method::PUT, path).multipart(form),
            self.map_error,
        )
        .await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, NextcloudError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(
            self.request(Method::PATCH, path).json(body),
            self.map_error,
        )
        .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, NextcloudError> {
        self.decode_json(self.request(Method::DELETE, path), self.map_error)
            .await
    }

    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), NextcloudError> {
        self.discard(self.request(Method::DELETE, path), self.map_error)
            .await
    }

    // ==================== OCS verbs ====================

    pub(crate) async fn ocs_get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, NextcloudError> {
        self.decode_json(self.ocs_request(Method::GET, path), self.map_ocs_error)
            .await
    }

    pub(crate) async fn ocs_get_query<Q, T>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, NextcloudError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(
            self.ocs_request(Method::GET, path).query(query),
            self.map_ocs_error,
        )
        .await
    }

    pub(crate) async fn ocs_post<B, T>(&self, path: &str, body: &B) -> Result<T, NextcloudError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(
            self.ocs_request(Method::POST, path).json(body),
            self.map_ocs_error,
        )
        .await
    }

    pub(crate) async fn ocs_post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), NextcloudError> {
        self.discard(
            self.ocs_request(Method::POST, path).json(body),
            self.map_ocs_error,
        )
        .await
    }

    pub(crate) async fn ocs_put<B, T>(&self, path: &str, body: &B) -> Result<T, NextcloudError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.decode_json(
            self.ocs_request(Method::PUT, path).json(body),
            self.map_ocs_error,
        )
        .await
    }

    pub(crate) async fn ocs_delete_empty(&self, path: &str) -> Result<(), NextcloudError> {
        self.discard(self.ocs_request(Method::DELETE, path), self.map_ocs_error)
            .await
    }
}
