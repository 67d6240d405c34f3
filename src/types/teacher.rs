use super::{Department, TeacherId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A teacher with a unique id, a certification set, and a section cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub certifications: HashSet<Department>,
    #[serde(default = "default_max_sections")]
    pub max_sections: u8,
}

fn default_max_sections() -> u8 {
    5
}

impl Teacher {
    pub fn has_cert(&self, department: Department) -> bool {
        self.certifications.contains(&department)
    }

    /// `:lbs1` in source terms — eligible to co-teach inclusion sections and to
    /// primary-teach separate-class / SPED-seminar sections.
    pub fn has_lbs1(&self) -> bool {
        self.has_cert(Department::SpecialEd)
    }
}
