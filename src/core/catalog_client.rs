use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

use crate::error::catalog::CatalogError;
use crate::http::log_middleware::LogMiddleware;
use crate::model::course::Course;

const DEFAULT_USER_AGENT: &str = concat!("course_browser/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for the catalog JSON and the listing pages.
#[derive(Clone)]
pub struct CatalogClient {
    client: ClientWithMiddleware,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/html;q=0.9"));

        let client = Client::builder().default_headers(headers).build()?;
        let client = ClientBuilder::new(client).with(LogMiddleware).build();
        Ok(CatalogClient { client })
    }

    /// GET the catalog JSON. Any non-success status is an error.
    pub async fn fetch_courses(&self, url: &Url) -> Result<Vec<Course>, CatalogError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::new(&format!("HTTP error! status: {}", status)));
        }
        let courses: Vec<Course> = response.json().await?;
        Ok(courses)
    }

    /// GET an HTML page. `Ok(None)` for any status other than 200.
    pub async fn fetch_page(&self, url: &Url) -> Result<Option<String>, CatalogError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Failed to fetch {}: {}", url, status);
            return Ok(None);
        }
        let text = response.text().await?;
        Ok(Some(text))
    }
}
