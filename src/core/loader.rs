use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::core::catalog_client::CatalogClient;
use crate::error::catalog::CatalogError;
use crate::model::course::Course;

/// Where the catalog JSON lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(Url),
    File(PathBuf),
}

impl DataSource {
    /// Absolute http(s) URLs are fetched as-is. Anything else is a path, joined
    /// onto `base` when one is given and read from disk otherwise.
    pub fn resolve(location: &str, base: Option<&Url>) -> Result<Self, CatalogError> {
        if let Ok(url) = Url::parse(location) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(DataSource::Url(url));
            }
        }
        match base {
            Some(base) => Ok(DataSource::Url(base.join(location)?)),
            None => Ok(DataSource::File(PathBuf::from(location))),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub async fn try_load(client: &CatalogClient, source: &DataSource) -> Result<Vec<Course>, CatalogError> {
    match source {
        DataSource::Url(url) => client.fetch_courses(url).await,
        DataSource::File(path) => {
            let text = tokio::fs::read_to_string(path).await?;
            let courses: Vec<Course> = serde_json::from_str(&text)?;
            Ok(courses)
        }
    }
}

/// Load the catalog once. Failures are logged and yield an empty catalog, so
/// the page degrades to "no courses found".
pub async fn load(client: &CatalogClient, source: &DataSource) -> Vec<Course> {
    match try_load(client, source).await {
        Ok(courses) => {
            log::info!("loaded {} courses from {}", courses.len(), source);
            courses
        }
        Err(err) => {
            log::error!("Error fetching courses from {}: {}", source, err);
            Vec::new()
        }
    }
}
