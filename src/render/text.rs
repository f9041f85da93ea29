use crate::core::options::Dropdown;
use crate::core::view::{TableView, NO_RESULTS};

const HEADERS: [&str; 3] = ["Course Number", "Course Title", "Instructors"];

/// The table as aligned plain text for the terminal.
pub fn render_text(table: &TableView) -> String {
    let rows: Vec<[&str; 3]> = match table {
        TableView::Empty => return format!("{}\n", NO_RESULTS),
        TableView::Rows(rows) => rows
            .iter()
            .map(|r| [r.course_number.as_str(), r.course_title.as_str(), r.instructors.as_str()])
            .collect(),
    };

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// One option per line, the selected one starred.
pub fn render_option_list(dropdown: &Dropdown) -> String {
    if dropdown.options.is_empty() {
        return "(no options)\n".to_string();
    }
    let mut out = String::new();
    for option in &dropdown.options {
        let marker = if option.selected { "*" } else { " " };
        out.push_str(&format!("{} {}\n", marker, option.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::rebuild_dropdown;
    use crate::core::view::RowView;

    #[test]
    fn empty_table_prints_placeholder() {
        assert_eq!(render_text(&TableView::Empty), "No courses found\n");
    }

    #[test]
    fn columns_are_aligned() {
        let table = TableView::Rows(vec![RowView {
            course_number: "CS50".to_string(),
            link: None,
            course_title: "Introduction to Computer Science".to_string(),
            instructors: "A. Smith".to_string(),
        }]);
        let text = render_text(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Course Number | Course Title"));
        assert!(lines[2].starts_with("CS50          | Introduction to Computer Science | A. Smith"));
    }

    #[test]
    fn option_list_stars_selection() {
        let dropdown = rebuild_dropdown(vec!["Amy".into(), "Zed".into()], Some("Amy"));
        assert_eq!(render_option_list(&dropdown), "* Amy\n  Zed\n");
    }
}
