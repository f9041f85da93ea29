use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::catalog::CatalogError;
use crate::model::course::Course;

pub const DEFAULT_SCHOOL: &str = "HKS";

/// Turn the first `<table>` of a listing page into course records.
///
/// Returns `Ok(None)` when the page has no table. The header row is skipped,
/// as is any row with fewer than three cells.
pub fn parse_course_table(html: &str, listing: &Url) -> Result<Option<Vec<Course>>, CatalogError> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(None);
    };

    let mut courses = Vec::new();
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < 3 {
            continue;
        }

        let course_number = cell_text(&cells[0]).trim().to_string();
        let course_title = cell_text(&cells[1]).trim().to_string();
        let instructors = cell_text(&cells[2])
            .split('\n')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        let link = course_link(listing, &course_number);

        courses.push(Course {
            course_number,
            course_title,
            instructors,
            semester: Some(String::new()),
            topic: Some(String::new()),
            school: Some(DEFAULT_SCHOOL.to_string()),
            stem: false,
            cross_register: true,
            stem_group_a: false,
            stem_group_b: false,
            link: Some(link),
        });
    }
    Ok(Some(courses))
}

/// `<listing>/<number>` with each space turned into `-`, lowercased.
pub fn course_link(listing: &Url, course_number: &str) -> String {
    let slug = course_number.replace(' ', "-").to_lowercase();
    let mut url = listing.clone();
    url.set_query(None);
    url.set_fragment(None);
    format!("{}/{}", url.as_str().trim_end_matches('/'), slug)
}

fn selector(css: &str) -> Result<Selector, CatalogError> {
    Selector::parse(css).map_err(|err| CatalogError::new(&format!("bad selector {}: {:?}", css, err)))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<Vec<_>>().join("")
}
