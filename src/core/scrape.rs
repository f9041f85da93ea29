use std::path::Path;

use futures::future::join_all;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::core::catalog_client::CatalogClient;
use crate::core::html_parser::parse_course_table;
use crate::error::catalog::CatalogError;
use crate::model::course::Course;

/// URL of listing page `page`, i.e. `<base>?page=<n>`.
pub fn page_url(base: &Url, page: u32) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().clear().append_pair("page", &page.to_string());
    url
}

async fn scrape_page(client: &CatalogClient, base: &Url, page: u32) -> Vec<Course> {
    let url = page_url(base, page);
    log::info!("Fetching page {}...", page);

    let html = match client.fetch_page(&url).await {
        Ok(Some(html)) => html,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("Failed to fetch data from page {}: {}", page, err);
            return Vec::new();
        }
    };

    match parse_course_table(&html, &url) {
        Ok(Some(courses)) => courses,
        Ok(None) => {
            log::warn!("Course table not found on page {}!", page);
            Vec::new()
        }
        Err(err) => {
            log::warn!("Could not parse page {}: {}", page, err);
            Vec::new()
        }
    }
}

/// Scrape pages `0..pages`. Pages are fetched concurrently; records keep page order.
pub async fn scrape_all_pages(client: &CatalogClient, base: &Url, pages: u32) -> Vec<Course> {
    let results = join_all((0..pages).map(|page| scrape_page(client, base, page))).await;
    results.into_iter().flatten().collect()
}

pub async fn save_courses(path: &Path, courses: &[Course]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let json = serde_json::to_string_pretty(courses)?;
    let mut file = File::create(path).await?;
    file.write_all(json.as_bytes()).await?;
    file.flush().await?;
    log::info!("Data saved to {}", path.display());
    Ok(())
}
