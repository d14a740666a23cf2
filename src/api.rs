//! Products API Client
//!
//! HTTP bindings to the remote products service.

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Article, ArticleId, ArticlePayload};

/// Operations the article view needs from the products service.
///
/// Futures run on the browser event loop, so they are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ArticleApi {
    /// `GET /api/products/all`
    async fn fetch_all(&self) -> Result<Vec<Article>, ApiError>;

    /// `POST /api/products/save-prod`. Succeeds whenever the response body is
    /// JSON, whatever the status.
    async fn create(&self, payload: &ArticlePayload) -> Result<Value, ApiError>;

    /// `PUT /api/products/{id}`
    async fn update(&self, id: &ArticleId, payload: &ArticlePayload) -> Result<(), ApiError>;

    /// `DELETE /api/products/{id}`
    async fn delete(&self, id: &ArticleId) -> Result<(), ApiError>;
}

/// `ArticleApi` over `fetch` via gloo-net.
#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    config: ApiConfig,
}

impl HttpArticleApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

// ========================
// Response Handling
// ========================

/// 2xx or `Rejected`.
fn ensure_success(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Rejected { status })
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The list must come back 2xx with an array of articles.
fn decode_list(status: u16, body: &str) -> Result<Vec<Article>, ApiError> {
    ensure_success(status)?;
    decode(body)
}

/// Any JSON body counts as saved; the status is only logged.
fn decode_created(status: u16, body: &str) -> Result<Value, ApiError> {
    log::debug!("[CREATE] save-prod answered with status {}", status);
    decode(body)
}

impl ArticleApi for HttpArticleApi {
    async fn fetch_all(&self) -> Result<Vec<Article>, ApiError> {
        let resp = Request::get(&self.config.list_url()).send().await?;
        let status = resp.status();
        decode_list(status, &resp.text().await?)
    }

    async fn create(&self, payload: &ArticlePayload) -> Result<Value, ApiError> {
        // json() also sets Content-Type: application/json
        let resp = Request::post(&self.config.create_url())
            .json(payload)?
            .send()
            .await?;
        let status = resp.status();
        decode_created(status, &resp.text().await?)
    }

    async fn update(&self, id: &ArticleId, payload: &ArticlePayload) -> Result<(), ApiError> {
        let resp = Request::put(&self.config.article_url(id))
            .json(payload)?
            .send()
            .await?;
        ensure_success(resp.status())
    }

    async fn delete(&self, id: &ArticleId) -> Result<(), ApiError> {
        let resp = Request::delete(&self.config.article_url(id)).send().await?;
        ensure_success(resp.status())
    }
}
