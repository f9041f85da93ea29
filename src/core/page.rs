use std::collections::BTreeSet;

use scraper::{Html, Selector};

/// The page elements the browser wires up, by element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Control {
    Search,
    SearchButton,
    Topic,
    Semester,
    Instructor,
    Stem,
    CrossRegister,
    Table,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::Search,
        Control::SearchButton,
        Control::Topic,
        Control::Semester,
        Control::Instructor,
        Control::Stem,
        Control::CrossRegister,
        Control::Table,
    ];

    /// Accepted ids, first one preferred. The STEM filter is either a
    /// checkbox or a dropdown depending on the page.
    pub fn element_ids(self) -> &'static [&'static str] {
        match self {
            Control::Search => &["search"],
            Control::SearchButton => &["search-btn"],
            Control::Topic => &["topic"],
            Control::Semester => &["semester"],
            Control::Instructor => &["instructor"],
            Control::Stem => &["dropdown", "stem-toggle"],
            Control::CrossRegister => &["cross-register-toggle"],
            Control::Table => &["course-table"],
        }
    }
}

/// Which controls a page template actually has.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageBindings {
    bound: BTreeSet<Control>,
}

impl PageBindings {
    /// Look up every control in `template`. Missing ones are logged; their
    /// feature stays disabled.
    pub fn detect(template: &str) -> Self {
        let document = Html::parse_document(template);
        let mut bound = BTreeSet::new();

        for control in Control::ALL {
            let found = control.element_ids().iter().any(|id| {
                Selector::parse(&format!("#{}", id))
                    .map(|selector| document.select(&selector).next().is_some())
                    .unwrap_or(false)
            });
            if found {
                bound.insert(control);
            } else {
                log::error!(
                    "Element with ID \"{}\" not found in page; {:?} is disabled.",
                    control.element_ids()[0],
                    control
                );
            }
        }
        PageBindings { bound }
    }

    /// Every control bound, for callers without a page.
    pub fn all() -> Self {
        PageBindings {
            bound: Control::ALL.into_iter().collect(),
        }
    }

    pub fn is_bound(&self, control: Control) -> bool {
        self.bound.contains(&control)
    }
}
