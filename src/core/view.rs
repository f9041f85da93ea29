use serde::Serialize;

use crate::core::filter::filter;
use crate::core::options::{
    derive_options, rebuild_dropdown, rebuild_dropdown_containing, Dropdown, OptionField, OptionsScope,
};
use crate::model::course::Course;
use crate::model::criteria::{selection, Criteria, InstructorMatch};

/// Shown in the instructors column when a course lists nobody.
pub const NO_INSTRUCTORS: &str = "TBD";
/// Text of the single placeholder row of an empty table.
pub const NO_RESULTS: &str = "No courses found";

/// The loaded catalog. Written once at load time, read by every view.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    courses: Vec<Course>,
}

impl AppState {
    pub fn new(courses: Vec<Course>) -> Self {
        AppState { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct RowView {
    pub course_number: String,
    pub link: Option<String>,
    pub course_title: String,
    pub instructors: String,
}

impl From<&Course> for RowView {
    fn from(course: &Course) -> Self {
        let names: Vec<&str> = course
            .instructors
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        let instructors = if names.is_empty() {
            NO_INSTRUCTORS.to_string()
        } else {
            names.join(", ")
        };
        RowView {
            course_number: course.course_number.clone(),
            link: course.link_url().map(str::to_string),
            course_title: course.course_title.clone(),
            instructors,
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub enum TableView {
    /// Rendered as the single "no results" row.
    Empty,
    Rows(Vec<RowView>),
}

impl TableView {
    pub fn from_courses(courses: &[Course]) -> Self {
        if courses.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(courses.iter().map(RowView::from).collect())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TableView::Empty => 0,
            TableView::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub table: TableView,
    pub instructors: Dropdown,
    pub topics: Dropdown,
    pub semesters: Dropdown,
    /// The criteria actually applied, after dropping selections that are no
    /// longer offered by their dropdown.
    pub criteria: Criteria,
    pub shown: usize,
    pub total: usize,
}

/// Filter the catalog and rebuild every dropdown for one render.
pub fn compute_view(state: &AppState, criteria: &Criteria, scope: OptionsScope) -> ViewModel {
    let all = state.courses();
    let mut effective = criteria.clone();

    // Each pass can only clear selections, so this settles within a few rounds.
    loop {
        let filtered = filter(all, &effective);
        let source = match scope {
            OptionsScope::Full => all,
            OptionsScope::Filtered => filtered.as_slice(),
        };

        let instructors = match effective.instructor_match {
            InstructorMatch::Exact => dropdown_for(source, OptionField::Instructor, &effective.selected_instructor),
            InstructorMatch::Substring => rebuild_dropdown_containing(
                derive_options(source, OptionField::Instructor),
                selection(&effective.selected_instructor),
            ),
        };
        let topics = dropdown_for(source, OptionField::Topic, &effective.selected_topic);
        let semesters = dropdown_for(source, OptionField::Semester, &effective.selected_semester);

        let mut settled = effective.clone();
        settled.selected_instructor = match effective.instructor_match {
            InstructorMatch::Exact => instructors.selected().map(str::to_string),
            // keep the typed fragment; the option only shows that it still matches
            InstructorMatch::Substring => instructors
                .selected()
                .and_then(|_| selection(&effective.selected_instructor))
                .map(str::to_string),
        };
        settled.selected_topic = topics.selected().map(str::to_string);
        settled.selected_semester = semesters.selected().map(str::to_string);

        if settled == normalized(&effective) {
            return ViewModel {
                table: TableView::from_courses(&filtered),
                instructors,
                topics,
                semesters,
                criteria: settled,
                shown: filtered.len(),
                total: all.len(),
            };
        }
        log::debug!("selection no longer offered, re-filtering with {:?}", settled);
        effective = settled;
    }
}

fn dropdown_for(source: &[Course], field: OptionField, previous: &Option<String>) -> Dropdown {
    rebuild_dropdown(derive_options(source, field), selection(previous))
}

// `Some("")` and `None` both mean "all".
fn normalized(criteria: &Criteria) -> Criteria {
    let mut out = criteria.clone();
    out.selected_instructor = selection(&criteria.selected_instructor).map(str::to_string);
    out.selected_topic = selection(&criteria.selected_topic).map(str::to_string);
    out.selected_semester = selection(&criteria.selected_semester).map(str::to_string);
    out
}
