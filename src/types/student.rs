use super::{CourseId, Department, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student with course demands and IEP designations. `inclusion` and
/// `separate_class` are sets of *department* tags, not course ids — see
/// DESIGN.md for the canonical-model decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub grade: String,
    pub required_courses: Vec<CourseId>,
    #[serde(default)]
    pub elective_courses: Vec<CourseId>,
    #[serde(default)]
    pub inclusion: HashSet<Department>,
    #[serde(default)]
    pub separate_class: HashSet<Department>,
}

impl Student {
    pub fn all_requested_courses(&self) -> impl Iterator<Item = &CourseId> {
        self.required_courses.iter().chain(self.elective_courses.iter())
    }

    pub fn wants_course(&self, course_id: &CourseId) -> bool {
        self.required_courses.contains(course_id) || self.elective_courses.contains(course_id)
    }

    /// Scarcity/IEP weight used to break ties among tickets of equal priority
    /// (§4.5 point 3).
    pub fn priority(&self) -> u32 {
        self.inclusion.len() as u32 + 5 * self.separate_class.len() as u32
    }

    /// A `separate-class` designation in the Special-Ed department doubles as
    /// the SPED-seminar demand marker.
    pub fn needs_sped_seminar(&self) -> bool {
        self.separate_class.contains(&Department::SpecialEd)
    }
}
