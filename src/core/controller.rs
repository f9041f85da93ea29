use crate::core::command::Command;
use crate::core::options::{Dropdown, OptionField, OptionsScope};
use crate::core::page::PageBindings;
use crate::core::view::{compute_view, AppState, ViewModel};
use crate::model::criteria::Criteria;

/// What the caller should do after a command.
#[derive(Debug)]
pub enum Dispatch<'a> {
    /// Filters changed; re-render this view.
    Rendered(&'a ViewModel),
    Show(&'a ViewModel),
    Options(&'a Dropdown),
    Write(&'a ViewModel),
    Help,
    Quit,
    /// The control behind the command is not on the page.
    Ignored,
}

/// Owns the catalog and the current filter state, and turns each command
/// into a fresh view.
pub struct Controller {
    state: AppState,
    criteria: Criteria,
    scope: OptionsScope,
    bindings: PageBindings,
    view: ViewModel,
}

impl Controller {
    pub fn new(state: AppState, criteria: Criteria, scope: OptionsScope, bindings: PageBindings) -> Self {
        let view = compute_view(&state, &criteria, scope);
        let criteria = view.criteria.clone();
        Controller {
            state,
            criteria,
            scope,
            bindings,
            view,
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn dispatch(&mut self, command: Command) -> Dispatch<'_> {
        if let Some(control) = command.control() {
            if !self.bindings.is_bound(control) {
                log::warn!("{:?} is not on the page, ignoring {:?}", control, command);
                return Dispatch::Ignored;
            }
        }

        match command {
            Command::Search(text) => self.criteria.search_text = text.to_lowercase(),
            Command::SearchButton => {}
            Command::Topic(topic) => self.criteria.selected_topic = topic,
            Command::Semester(semester) => self.criteria.selected_semester = semester,
            Command::Instructor(instructor) => self.criteria.selected_instructor = instructor,
            Command::Stem(stem) => self.criteria.stem_filter = stem,
            Command::CrossRegister(cross) => self.criteria.cross_register = cross,
            Command::Clear => self.criteria.reset(),
            Command::Options(field) => return Dispatch::Options(self.dropdown(field)),
            Command::Show => return Dispatch::Show(&self.view),
            Command::Write => return Dispatch::Write(&self.view),
            Command::Help => return Dispatch::Help,
            Command::Quit => return Dispatch::Quit,
        }

        self.refresh();
        Dispatch::Rendered(&self.view)
    }

    fn refresh(&mut self) {
        self.view = compute_view(&self.state, &self.criteria, self.scope);
        if self.view.criteria != self.criteria {
            log::info!("selection no longer available, reset to all");
        }
        self.criteria = self.view.criteria.clone();
        log::debug!("showing {} of {} courses", self.view.shown, self.view.total);
    }

    fn dropdown(&self, field: OptionField) -> &Dropdown {
        match field {
            OptionField::Instructor => &self.view.instructors,
            OptionField::Topic => &self.view.topics,
            OptionField::Semester => &self.view.semesters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::Course;
    use crate::model::criteria::{InstructorMatch, StemFilter};

    fn controller(bindings: PageBindings) -> Controller {
        let mut cs50 = Course::new("CS50", "Intro").with_instructors(&["A. Smith"]);
        cs50.stem_group_a = true;
        let mut econ10 = Course::new("ECON10", "Principles").with_instructors(&["B. Lee"]);
        econ10.cross_register = true;
        Controller::new(
            AppState::new(vec![cs50, econ10]),
            Criteria::default(),
            OptionsScope::Full,
            bindings,
        )
    }

    #[test]
    fn filter_commands_rerender() {
        let mut controller = controller(PageBindings::all());
        match controller.dispatch(Command::Stem(Some(StemFilter::GroupA))) {
            Dispatch::Rendered(view) => assert_eq!(view.shown, 1),
            other => panic!("unexpected {:?}", other),
        }
        match controller.dispatch(Command::Clear) {
            Dispatch::Rendered(view) => assert_eq!(view.shown, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn search_text_is_stored_lowercased() {
        let mut controller = controller(PageBindings::all());
        controller.dispatch(Command::Search("ECON".to_string()));
        assert_eq!(controller.criteria().search_text, "econ");
        assert_eq!(controller.view().shown, 1);
    }

    #[test]
    fn unknown_instructor_resets_to_all() {
        let mut controller = controller(PageBindings::all());
        controller.dispatch(Command::Instructor(Some("Nobody".to_string())));
        assert_eq!(controller.criteria().selected_instructor, None);
        assert_eq!(controller.view().shown, 2);
    }

    #[test]
    fn unbound_controls_are_ignored() {
        let bindings = PageBindings::detect(r#"<tbody id="course-table"></tbody>"#);
        let mut controller = controller(bindings);

        assert!(matches!(
            controller.dispatch(Command::Stem(Some(StemFilter::GroupA))),
            Dispatch::Ignored
        ));
        assert_eq!(controller.view().shown, 2);
        assert!(matches!(controller.dispatch(Command::Show), Dispatch::Show(_)));
    }

    #[test]
    fn options_come_from_current_view() {
        let mut controller = controller(PageBindings::all());
        controller.dispatch(Command::Instructor(Some("B. Lee".to_string())));
        match controller.dispatch(Command::Options(OptionField::Instructor)) {
            Dispatch::Options(dropdown) => assert_eq!(dropdown.selected(), Some("B. Lee")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn partial_instructor_filters_in_substring_mode() {
        let plain = controller(PageBindings::all());
        let criteria = Criteria {
            instructor_match: InstructorMatch::Substring,
            ..Default::default()
        };
        let mut controller = Controller::new(plain.state, criteria, OptionsScope::Full, PageBindings::all());

        match controller.dispatch(Command::Instructor(Some("lee".to_string()))) {
            Dispatch::Rendered(view) => assert_eq!(view.shown, 1),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(controller.criteria().selected_instructor.as_deref(), Some("lee"));
    }
}
