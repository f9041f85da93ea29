use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StemFilter {
    GroupA,
    GroupB,
    /// Neither STEM flag set.
    #[value(name = "none")]
    NoneGroup,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CrossRegisterFilter {
    #[default]
    Any,
    Yes,
    No,
}

/// Which fields the free-text search looks at.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchScope {
    #[default]
    NumberAndTitle,
    IncludeInstructors,
}

/// How a selected instructor is compared against a course's instructor list.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InstructorMatch {
    /// Exact membership.
    #[default]
    Exact,
    /// Case-insensitive substring of any instructor.
    Substring,
}

/// The active filter settings. Every field is optional on its own; an unset
/// or empty one matches everything.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search_text: String,
    pub selected_topic: Option<String>,
    pub selected_semester: Option<String>,
    pub selected_instructor: Option<String>,
    pub stem_filter: Option<StemFilter>,
    pub cross_register: CrossRegisterFilter,
    pub search_scope: SearchScope,
    pub instructor_match: InstructorMatch,
}

impl Criteria {
    /// True when no criterion would narrow the collection.
    pub fn is_unset(&self) -> bool {
        self.search_text.is_empty()
            && selection(&self.selected_topic).is_none()
            && selection(&self.selected_semester).is_none()
            && selection(&self.selected_instructor).is_none()
            && self.stem_filter.is_none()
            && self.cross_register == CrossRegisterFilter::Any
    }

    /// Drop every selection but keep the matching modes.
    pub fn reset(&mut self) {
        *self = Criteria {
            search_scope: self.search_scope,
            instructor_match: self.instructor_match,
            ..Default::default()
        };
    }
}

/// A dropdown value of `""` is the "all" option, same as no selection.
pub fn selection(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
