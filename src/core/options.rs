use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::course::Course;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OptionField {
    Instructor,
    Topic,
    Semester,
}

impl OptionField {
    /// The id of the `<select>` element fed by this field.
    pub fn element_id(self) -> &'static str {
        match self {
            OptionField::Instructor => "instructor",
            OptionField::Topic => "topic",
            OptionField::Semester => "semester",
        }
    }
}

/// Whether dropdowns list every value or only those left after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OptionsScope {
    #[default]
    Full,
    Filtered,
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    pub options: Vec<DropdownOption>,
}

impl Dropdown {
    pub fn selected(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.value.as_str())
    }
}

/// Unique non-empty values of `field`, sorted ascending.
pub fn derive_options(courses: &[Course], field: OptionField) -> Vec<String> {
    let mut set: BTreeSet<&str> = BTreeSet::new();
    for course in courses {
        match field {
            OptionField::Instructor => {
                set.extend(course.instructors.iter().map(String::as_str));
            }
            OptionField::Topic => set.extend(course.topic_label()),
            OptionField::Semester => set.extend(course.semester_label()),
        }
    }
    set.into_iter()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a dropdown from freshly derived options. The previous selection stays
/// selected only if it is still one of the options.
pub fn rebuild_dropdown(options: Vec<String>, previous: Option<&str>) -> Dropdown {
    let options = options
        .into_iter()
        .map(|value| {
            let selected = previous == Some(value.as_str());
            DropdownOption { value, selected }
        })
        .collect();
    Dropdown { options }
}

/// Like [`rebuild_dropdown`], but a partial name counts as offered: the first
/// option containing it (case-insensitively) is marked selected.
pub fn rebuild_dropdown_containing(options: Vec<String>, previous: Option<&str>) -> Dropdown {
    let wanted = previous.map(str::to_lowercase);
    let mut found = false;
    let options = options
        .into_iter()
        .map(|value| {
            let selected = !found
                && wanted
                    .as_deref()
                    .is_some_and(|w| value.to_lowercase().contains(w));
            found |= selected;
            DropdownOption { value, selected }
        })
        .collect();
    Dropdown { options }
}
