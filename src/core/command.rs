use crate::core::options::OptionField;
use crate::core::page::Control;
use crate::error::catalog::CatalogError;
use crate::model::criteria::{CrossRegisterFilter, StemFilter};

pub const HELP: &str = "\
commands:
  search [text]            filter by course number or title (empty clears)
  topic [label]            select a topic (empty selects all)
  semester [label]         select a semester (empty selects all)
  instructor [name]        select an instructor (empty selects all)
  stem a|b|none|any        STEM group filter
  cross yes|no|any         cross-registration filter
  go                       re-run the search
  clear                    reset every filter
  options instructor|topic|semester
                           list the current dropdown options
  show                     print the current table
  write                    write the page to the output file
  help                     this text
  quit                     leave";

/// One user interaction with the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    SearchButton,
    Topic(Option<String>),
    Semester(Option<String>),
    Instructor(Option<String>),
    Stem(Option<StemFilter>),
    CrossRegister(CrossRegisterFilter),
    Clear,
    Options(OptionField),
    Show,
    Write,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CatalogError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let label = || (!rest.is_empty()).then(|| rest.to_string());

        let command = match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "go" => Command::SearchButton,
            "topic" => Command::Topic(label()),
            "semester" => Command::Semester(label()),
            "instructor" => Command::Instructor(label()),
            "stem" => Command::Stem(match rest.to_ascii_lowercase().as_str() {
                "a" | "group-a" => Some(StemFilter::GroupA),
                "b" | "group-b" => Some(StemFilter::GroupB),
                "none" => Some(StemFilter::NoneGroup),
                "any" | "" => None,
                other => return Err(CatalogError::new(&format!("unknown STEM filter: {}", other))),
            }),
            "cross" => Command::CrossRegister(match rest.to_ascii_lowercase().as_str() {
                "yes" | "y" => CrossRegisterFilter::Yes,
                "no" | "n" => CrossRegisterFilter::No,
                "any" | "" => CrossRegisterFilter::Any,
                other => {
                    return Err(CatalogError::new(&format!("unknown cross-register filter: {}", other)));
                }
            }),
            "clear" => Command::Clear,
            "options" => Command::Options(match rest.to_ascii_lowercase().as_str() {
                "instructor" | "instructors" => OptionField::Instructor,
                "topic" | "topics" => OptionField::Topic,
                "semester" | "semesters" => OptionField::Semester,
                other => return Err(CatalogError::new(&format!("unknown dropdown: {}", other))),
            }),
            "show" => Command::Show,
            "write" => Command::Write,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => return Err(CatalogError::new("empty command")),
            other => return Err(CatalogError::new(&format!("unknown command: {}", other))),
        };
        Ok(command)
    }

    /// The page control this command comes from, if it changes a filter.
    pub fn control(&self) -> Option<Control> {
        match self {
            Command::Search(_) => Some(Control::Search),
            Command::SearchButton => Some(Control::SearchButton),
            Command::Topic(_) => Some(Control::Topic),
            Command::Semester(_) => Some(Control::Semester),
            Command::Instructor(_) => Some(Control::Instructor),
            Command::Stem(_) => Some(Control::Stem),
            Command::CrossRegister(_) => Some(Control::CrossRegister),
            _ => None,
        }
    }
}
