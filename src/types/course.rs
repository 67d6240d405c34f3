use super::{CourseId, Department, RoomType};
use serde::{Deserialize, Serialize};

/// A course offering. `required_endorsement` of `None` marks a course (lunch)
/// that needs no certified teacher at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub required_endorsement: Option<Department>,
    /// The kind of room this course defaults into when a new section is created.
    #[serde(default)]
    pub required_space: RoomType,
    #[serde(default = "default_min_section_size")]
    pub min_section_size: u32,
    #[serde(default = "default_max_section_size")]
    pub max_section_size: u32,
}

fn default_min_section_size() -> u32 {
    20
}

fn default_max_section_size() -> u32 {
    30
}

impl Default for RoomType {
    fn default() -> Self {
        RoomType::Standard
    }
}

pub const LUNCH_COURSE_ID: &str = "lunch";
pub const SPED_SEMINAR_COURSE_ID: &str = "sped-seminar";

impl Course {
    pub fn department(&self) -> Option<Department> {
        self.required_endorsement
    }

    pub fn is_lunch(&self) -> bool {
        self.id.0 == LUNCH_COURSE_ID
    }

    pub fn is_sped_seminar(&self) -> bool {
        self.id.0 == SPED_SEMINAR_COURSE_ID
    }

    /// The sentinel lunch course, materialized by the engine during seeding, not
    /// supplied by the caller's catalog.
    pub fn lunch() -> Self {
        Self {
            id: CourseId(LUNCH_COURSE_ID.to_string()),
            name: "Lunch".to_string(),
            required_endorsement: None,
            required_space: RoomType::Cafeteria,
            min_section_size: 0,
            max_section_size: 360,
        }
    }

    /// The sentinel SPED-seminar course, materialized by the engine during
    /// seeding, not supplied by the caller's catalog.
    pub fn sped_seminar() -> Self {
        Self {
            id: CourseId(SPED_SEMINAR_COURSE_ID.to_string()),
            name: "SPED Seminar".to_string(),
            required_endorsement: Some(Department::SpecialEd),
            required_space: RoomType::Sped,
            min_section_size: 0,
            max_section_size: 15,
        }
    }
}
