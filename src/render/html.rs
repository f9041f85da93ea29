use chrono::{DateTime, Local};
use regex::Regex;

use crate::core::view::{TableView, ViewModel, NO_RESULTS};
use crate::core::options::Dropdown;
use crate::model::criteria::{CrossRegisterFilter, StemFilter};

pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/index.html");

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// New contents of the table body: one `<tr>` per course, or the single
/// placeholder row.
pub fn render_rows(table: &TableView) -> String {
    let rows = match table {
        TableView::Empty => {
            return format!("<tr><td colspan=\"3\">{}</td></tr>", NO_RESULTS);
        }
        TableView::Rows(rows) => rows,
    };

    let mut out = String::new();
    for row in rows {
        let number = match &row.link {
            Some(link) => format!(
                "<a href=\"{}\">{}</a>",
                escape_html(link),
                escape_html(&row.course_number)
            ),
            None => escape_html(&row.course_number),
        };
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            number,
            escape_html(&row.course_title),
            escape_html(&row.instructors)
        ));
    }
    out
}

/// `<option>` list with a leading "all" entry of empty value.
pub fn render_options(dropdown: &Dropdown, all_label: &str) -> String {
    let choices: Vec<(&str, &str, bool)> = dropdown
        .options
        .iter()
        .map(|o| (o.value.as_str(), o.value.as_str(), o.selected))
        .collect();
    render_choices(all_label, &choices)
}

fn render_choices(all_label: &str, choices: &[(&str, &str, bool)]) -> String {
    let any_selected = choices.iter().any(|(_, _, selected)| *selected);
    let mut out = format!(
        "<option value=\"\"{}>{}</option>",
        if any_selected { "" } else { " selected" },
        escape_html(all_label)
    );
    for (value, label, selected) in choices {
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(value),
            if *selected { " selected" } else { "" },
            escape_html(label)
        ));
    }
    out
}

fn stem_choices(current: Option<StemFilter>) -> String {
    let choices = [
        ("group-a", "STEM Group A", current == Some(StemFilter::GroupA)),
        ("group-b", "STEM Group B", current == Some(StemFilter::GroupB)),
        ("none", "No STEM group", current == Some(StemFilter::NoneGroup)),
    ];
    render_choices("Any STEM group", &choices)
}

fn cross_register_choices(current: CrossRegisterFilter) -> String {
    let choices = [
        ("yes", "Cross-registration open", current == CrossRegisterFilter::Yes),
        ("no", "Not cross-registrable", current == CrossRegisterFilter::No),
    ];
    render_choices("Any cross-registration", &choices)
}

/// Replace what sits between the opening and closing tag of the first `tag`
/// element with the given `id`. `None` when there is no such element.
pub fn replace_element_contents(document: &str, tag: &str, id: &str, contents: &str) -> Option<String> {
    let open = Regex::new(&format!(
        r#"(?is)<{}\b[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(tag),
        regex::escape(id)
    ))
    .ok()?;
    let close = Regex::new(&format!(r"(?i)</{}\s*>", regex::escape(tag))).ok()?;

    let open_match = open.find(document)?;
    let close_match = close.find(&document[open_match.end()..])?;
    let close_start = open_match.end() + close_match.start();

    let mut out = String::with_capacity(document.len() + contents.len());
    out.push_str(&document[..open_match.end()]);
    out.push_str(contents);
    out.push_str(&document[close_start..]);
    Some(out)
}

fn replace_or_log(document: String, tag: &str, id: &str, contents: &str) -> String {
    match replace_element_contents(&document, tag, id, contents) {
        Some(updated) => updated,
        None => {
            log::debug!("no <{} id=\"{}\"> in page, skipped", tag, id);
            document
        }
    }
}

/// Write the view into `template`: table body, dropdowns, filter selects and
/// the footer. Without a `course-table` body the template comes back as-is.
pub fn render_page(template: &str, view: &ViewModel, generated_at: DateTime<Local>) -> String {
    let Some(page) = replace_element_contents(template, "tbody", "course-table", &render_rows(&view.table)) else {
        log::error!("Table body with ID \"course-table\" not found in page.");
        return template.to_string();
    };

    let page = replace_or_log(page, "select", "instructor", &render_options(&view.instructors, "All instructors"));
    let page = replace_or_log(page, "select", "topic", &render_options(&view.topics, "All topics"));
    let page = replace_or_log(page, "select", "semester", &render_options(&view.semesters, "All semesters"));
    let page = replace_or_log(page, "select", "dropdown", &stem_choices(view.criteria.stem_filter));
    let page = replace_or_log(
        page,
        "select",
        "cross-register-toggle",
        &cross_register_choices(view.criteria.cross_register),
    );
    let page = replace_or_log(
        page,
        "span",
        "course-count",
        &format!("Showing {} of {} courses.", view.shown, view.total),
    );
    replace_or_log(
        page,
        "span",
        "generated-at",
        &format!("Generated {}.", generated_at.format("%Y-%m-%d %H:%M")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::rebuild_dropdown;
    use crate::core::view::{compute_view, AppState, RowView};
    use crate::core::options::OptionsScope;
    use crate::model::course::Course;
    use crate::model::criteria::Criteria;

    #[test]
    fn empty_table_is_one_placeholder_row() {
        let html = render_rows(&TableView::Empty);
        assert_eq!(html, "<tr><td colspan=\"3\">No courses found</td></tr>");
        assert_eq!(html.matches("<tr>").count(), 1);
    }

    #[test]
    fn linked_number_and_escaped_text() {
        let table = TableView::Rows(vec![RowView {
            course_number: "API-101".to_string(),
            link: Some("https://example.edu/a?x=1&y=2".to_string()),
            course_title: "Markets <Advanced>".to_string(),
            instructors: "TBD".to_string(),
        }]);
        let html = render_rows(&table);

        assert!(html.contains("<a href=\"https://example.edu/a?x=1&amp;y=2\">API-101</a>"));
        assert!(html.contains("<td>Markets &lt;Advanced&gt;</td>"));
        assert!(html.contains("<td>TBD</td>"));
    }

    #[test]
    fn options_mark_preserved_selection() {
        let dropdown = rebuild_dropdown(vec!["Amy".into(), "Zed".into()], Some("Zed"));
        let html = render_options(&dropdown, "All instructors");

        assert!(html.starts_with("<option value=\"\">All instructors</option>"));
        assert!(html.contains("<option value=\"Zed\" selected>Zed</option>"));
        assert!(html.contains("<option value=\"Amy\">Amy</option>"));
    }

    #[test]
    fn replaces_only_the_target_element() {
        let doc = r#"<tbody id="other"><tr></tr></tbody><tbody class="x" id="course-table"><tr>old</tr></tbody>"#;
        let out = replace_element_contents(doc, "tbody", "course-table", "<tr>new</tr>").unwrap();
        assert_eq!(
            out,
            r#"<tbody id="other"><tr></tr></tbody><tbody class="x" id="course-table"><tr>new</tr></tbody>"#
        );
        assert!(replace_element_contents(doc, "tbody", "missing", "").is_none());
    }

    #[test]
    fn page_without_table_body_is_left_alone() {
        let view = compute_view(&AppState::default(), &Criteria::default(), OptionsScope::Full);
        let template = "<html><body><select id=\"instructor\"></select></body></html>";
        assert_eq!(render_page(template, &view, Local::now()), template);
    }

    #[test]
    fn full_page_render_fills_every_element() {
        let courses = vec![Course::new("CS50", "Intro").with_instructors(&["A. Smith"])];
        let view = compute_view(&AppState::new(courses), &Criteria::default(), OptionsScope::Full);
        let page = render_page(DEFAULT_TEMPLATE, &view, Local::now());

        assert!(page.contains("<td>CS50</td><td>Intro</td><td>A. Smith</td>"));
        assert!(page.contains("<option value=\"A. Smith\">A. Smith</option>"));
        assert!(page.contains("Showing 1 of 1 courses."));
        assert!(page.contains("<option value=\"group-a\">STEM Group A</option>"));
    }

    #[test]
    fn data_id_attribute_is_not_the_element_id() {
        let doc = r#"<tbody data-id="course-table"></tbody><tbody id="course-table"></tbody>"#;
        let out = replace_element_contents(doc, "tbody", "course-table", "<tr>new</tr>").unwrap();
        assert_eq!(
            out,
            r#"<tbody data-id="course-table"></tbody><tbody id="course-table"><tr>new</tr></tbody>"#
        );
    }
}
