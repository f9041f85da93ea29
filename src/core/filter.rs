use crate::model::course::Course;
use crate::model::criteria::{
    selection, CrossRegisterFilter, Criteria, InstructorMatch, SearchScope, StemFilter,
};

/// Keep the courses matching every active criterion, in input order.
pub fn filter(all: &[Course], criteria: &Criteria) -> Vec<Course> {
    let query = criteria.search_text.to_lowercase();
    all.iter()
        .filter(|course| matches(course, criteria, &query))
        .cloned()
        .collect()
}

/// `query` is the lowercased search text.
fn matches(course: &Course, criteria: &Criteria, query: &str) -> bool {
    matches_search(course, query, criteria.search_scope)
        && matches_label(course.topic.as_deref(), &criteria.selected_topic)
        && matches_label(course.semester.as_deref(), &criteria.selected_semester)
        && matches_instructor(course, &criteria.selected_instructor, criteria.instructor_match)
        && matches_stem(course, criteria.stem_filter)
        && matches_cross_register(course, criteria.cross_register)
}

fn matches_search(course: &Course, query: &str, scope: SearchScope) -> bool {
    if query.is_empty() {
        return true;
    }
    let hit = course.course_number.to_lowercase().contains(query)
        || course.course_title.to_lowercase().contains(query);
    match scope {
        SearchScope::NumberAndTitle => hit,
        SearchScope::IncludeInstructors => {
            hit || course
                .instructors
                .iter()
                .any(|name| name.to_lowercase().contains(query))
        }
    }
}

fn matches_label(label: Option<&str>, selected: &Option<String>) -> bool {
    match selection(selected) {
        None => true,
        Some(wanted) => label == Some(wanted),
    }
}

fn matches_instructor(course: &Course, selected: &Option<String>, mode: InstructorMatch) -> bool {
    let Some(wanted) = selection(selected) else {
        return true;
    };
    match mode {
        InstructorMatch::Exact => course.instructors.iter().any(|name| name == wanted),
        InstructorMatch::Substring => {
            let wanted = wanted.to_lowercase();
            course
                .instructors
                .iter()
                .any(|name| name.to_lowercase().contains(&wanted))
        }
    }
}

fn matches_stem(course: &Course, stem: Option<StemFilter>) -> bool {
    match stem {
        None => true,
        Some(StemFilter::GroupA) => course.stem_group_a,
        Some(StemFilter::GroupB) => course.stem_group_b,
        Some(StemFilter::NoneGroup) => !course.stem_group_a && !course.stem_group_b,
    }
}

fn matches_cross_register(course: &Course, cross: CrossRegisterFilter) -> bool {
    match cross {
        CrossRegisterFilter::Any => true,
        CrossRegisterFilter::Yes => course.cross_register,
        CrossRegisterFilter::No => !course.cross_register,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Course> {
        let mut cs50 = Course::new("CS50", "Intro").with_instructors(&["A. Smith"]);
        cs50.stem_group_a = true;
        cs50.topic = Some("Computing".to_string());
        let mut econ10 = Course::new("ECON10", "Principles").with_instructors(&["B. Lee"]);
        econ10.cross_register = true;
        econ10.topic = Some("Economics".to_string());
        econ10.semester = Some("Spring".to_string());
        vec![cs50, econ10]
    }

    fn numbers(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.course_number.as_str()).collect()
    }

    #[test]
    fn group_a_keeps_only_flagged_course() {
        let criteria = Criteria {
            stem_filter: Some(StemFilter::GroupA),
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &criteria)), ["CS50"]);
    }

    #[test]
    fn selected_instructor_is_exact_member() {
        let criteria = Criteria {
            selected_instructor: Some("B. Lee".to_string()),
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &criteria)), ["ECON10"]);

        let partial = Criteria {
            selected_instructor: Some("lee".to_string()),
            ..Default::default()
        };
        assert!(filter(&sample(), &partial).is_empty());
    }

    #[test]
    fn substring_mode_matches_partial_instructor_names() {
        let criteria = Criteria {
            selected_instructor: Some("lee".to_string()),
            instructor_match: InstructorMatch::Substring,
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &criteria)), ["ECON10"]);
    }

    #[test]
    fn search_is_case_insensitive_on_number_and_title() {
        let by_number = Criteria {
            search_text: "cs5".to_string(),
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &by_number)), ["CS50"]);

        let by_title = Criteria {
            search_text: "PRINC".to_string(),
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &by_title)), ["ECON10"]);
    }

    #[test]
    fn instructor_names_only_searched_when_scope_includes_them() {
        let mut criteria = Criteria {
            search_text: "smith".to_string(),
            ..Default::default()
        };
        assert!(filter(&sample(), &criteria).is_empty());

        criteria.search_scope = SearchScope::IncludeInstructors;
        assert_eq!(numbers(&filter(&sample(), &criteria)), ["CS50"]);
    }

    #[test]
    fn none_group_requires_both_flags_clear() {
        let mut courses = sample();
        courses[1].stem_group_b = true;
        courses.push(Course::new("HIST1", "Past"));
        let criteria = Criteria {
            stem_filter: Some(StemFilter::NoneGroup),
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&courses, &criteria)), ["HIST1"]);
    }

    #[test]
    fn cross_register_yes_and_no_split_the_collection() {
        let yes = Criteria {
            cross_register: CrossRegisterFilter::Yes,
            ..Default::default()
        };
        let no = Criteria {
            cross_register: CrossRegisterFilter::No,
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &yes)), ["ECON10"]);
        assert_eq!(numbers(&filter(&sample(), &no)), ["CS50"]);
    }

    #[test]
    fn topic_and_semester_compare_exactly() {
        let topic = Criteria {
            selected_topic: Some("Computing".to_string()),
            ..Default::default()
        };
        assert_eq!(numbers(&filter(&sample(), &topic)), ["CS50"]);

        let semester = Criteria {
            selected_semester: Some("spring".to_string()),
            ..Default::default()
        };
        assert!(filter(&sample(), &semester).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let criteria = Criteria {
            search_text: "intro".to_string(),
            cross_register: CrossRegisterFilter::Yes,
            ..Default::default()
        };
        assert!(filter(&sample(), &criteria).is_empty());
    }

    #[test]
    fn course_without_instructors_never_matches_a_selected_instructor() {
        let courses = vec![Course::new("GOV9", "Untaught")];
        let criteria = Criteria {
            selected_instructor: Some("B. Lee".to_string()),
            instructor_match: InstructorMatch::Substring,
            ..Default::default()
        };
        assert!(filter(&courses, &criteria).is_empty());
    }
}
