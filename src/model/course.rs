use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry, as found in `form_data.json`.
///
/// Nothing is validated: absent or `null` fields fall back to their empty
/// value so that a sloppy record narrows to "no match" instead of failing the
/// whole load.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Course {
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stem: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stem_group_a: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stem_group_b: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cross_register: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Course {
    pub fn new(course_number: &str, course_title: &str) -> Self {
        Course {
            course_number: course_number.to_string(),
            course_title: course_title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_instructors(mut self, instructors: &[&str]) -> Self {
        self.instructors = instructors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn topic_label(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    pub fn semester_label(&self) -> Option<&str> {
        self.semester.as_deref().filter(|s| !s.is_empty())
    }

    pub fn link_url(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
