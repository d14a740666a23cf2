//! API Configuration
//!
//! Base URL of the products service and the endpoint paths under it.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::ArticleId;

/// Products service used when `ABM_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "https://apiproducts-r8d0.onrender.com";

/// Characters escaped when an id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Compile-time configuration: `ABM_API_URL` or the default service.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ABM_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self) -> String {
        format!("{}/api/products/all", self.base_url)
    }

    pub fn create_url(&self) -> String {
        format!("{}/api/products/save-prod", self.base_url)
    }

    /// Target of both update and delete.
    pub fn article_url(&self, id: &ArticleId) -> String {
        let id = id.to_string();
        format!("{}/api/products/{}", self.base_url, utf8_percent_encode(&id, PATH_SEGMENT))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::new("http://localhost:8080/");

        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.list_url(), "http://localhost:8080/api/products/all");
        assert_eq!(config.create_url(), "http://localhost:8080/api/products/save-prod");
        assert_eq!(config.article_url(&ArticleId::Number(1)), "http://localhost:8080/api/products/1");
    }

    #[test]
    fn test_article_url_escapes_text_ids() {
        let config = ApiConfig::new("http://api");
        let id = ArticleId::Text("a/b c".to_string());
        assert_eq!(config.article_url(&id), "http://api/api/products/a%2Fb%20c");
    }
}
