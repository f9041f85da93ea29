use std::path::PathBuf;

use url::Url;

use crate::core::loader::DataSource;
use crate::core::options::OptionsScope;
use crate::error::catalog::CatalogError;
use crate::model::criteria::{InstructorMatch, SearchScope};

pub mod consts {
    pub const DATA_PATH: &str = "data/form_data.json";
    pub const OUTPUT_PATH: &str = "catalog.html";
    pub const SCRAPE_BASE_URL: &str = "https://www.hks.harvard.edu/courses";
    pub const SCRAPE_PAGES: u32 = 5;
    pub const SCRAPE_OUTPUT: &str = "courses.json";
    pub const PROMPT: &str = "courses> ";
}

/// Everything the browser can be tuned with. The CLI fills this in; the
/// defaults reproduce the stock page.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path or URL of the catalog JSON.
    pub data: String,
    /// When set, a relative `data` is fetched from here instead of read from disk.
    pub base_url: Option<Url>,
    /// Page template; the bundled one when unset.
    pub template: Option<PathBuf>,
    pub output: PathBuf,
    pub options_scope: OptionsScope,
    pub search_scope: SearchScope,
    pub instructor_match: InstructorMatch,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: consts::DATA_PATH.to_string(),
            base_url: None,
            template: None,
            output: PathBuf::from(consts::OUTPUT_PATH),
            options_scope: OptionsScope::Full,
            search_scope: SearchScope::NumberAndTitle,
            instructor_match: InstructorMatch::Exact,
        }
    }
}

impl Config {
    pub fn data_source(&self) -> Result<DataSource, CatalogError> {
        DataSource::resolve(&self.data, self.base_url.as_ref())
    }

    /// The template text, falling back to the bundled page if the file can't be read.
    pub async fn load_template(&self) -> String {
        let Some(path) = &self.template else {
            return crate::render::html::DEFAULT_TEMPLATE.to_string();
        };
        match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(err) => {
                log::error!("Could not read template {}: {}; using the bundled page", path.display(), err);
                crate::render::html::DEFAULT_TEMPLATE.to_string()
            }
        }
    }
}
