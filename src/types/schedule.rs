use super::{CourseId, Environment, Period, Section, SectionId, StudentId, TeacherId, LUNCH_COURSE_ID};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A required course the Placement Engine could not seat for a student, with
/// the reason the attach-or-create step failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingRequirement {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub generated_at: String,
    pub algorithm_version: String,
    pub seed: u64,
    pub solve_time_ms: u64,
}

impl Default for ScheduleMetadata {
    fn default() -> Self {
        Self {
            generated_at: String::new(),
            algorithm_version: String::new(),
            seed: 0,
            solve_time_ms: 0,
        }
    }
}

/// The schedule under construction: a flat list of sections plus the residual
/// unmet-demand list. Auxiliary views (§4.3) are recomputed on demand rather
/// than cached, since the run is single-threaded and each view is a cheap
/// linear scan at this scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub sections: Vec<Section>,
    pub missing: Vec<MissingRequirement>,
    pub metadata: ScheduleMetadata,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            missing: Vec::new(),
            metadata: ScheduleMetadata {
                generated_at: chrono::Utc::now().to_rfc3339(),
                algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
                seed: 0,
                solve_time_ms: 0,
            },
        }
    }

    pub fn sections_of_course(&self, course_id: &CourseId) -> Vec<&Section> {
        self.sections.iter().filter(|s| &s.course_id == course_id).collect()
    }

    pub fn sections_of_course_with_space(&self, course_id: &CourseId) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| &s.course_id == course_id && s.has_space())
            .collect()
    }

    pub fn teacher_sections(&self, teacher_id: &TeacherId) -> Vec<&Section> {
        self.sections.iter().filter(|s| s.teaches(teacher_id)).collect()
    }

    pub fn student_sections(&self, student_id: &StudentId) -> Vec<&Section> {
        self.sections.iter().filter(|s| s.has_student(student_id)).collect()
    }

    /// Distinct gen-ed courses a teacher primary-teaches. The §3-inv5 prep cap
    /// binds general-education teaching only: separate-class and SPED-seminar
    /// sections are excluded, which is how the LBS1 relaxation in §9(c) is
    /// realized for a teacher who primary-teaches those. Co-teaching (never a
    /// primary assignment) already can't count, regardless.
    pub fn teacher_preps(&self, teacher_id: &TeacherId) -> HashSet<CourseId> {
        self.sections
            .iter()
            .filter(|s| s.teacher_id.as_ref() == Some(teacher_id))
            .filter(|s| s.environment == Environment::GenEd)
            .map(|s| s.course_id.clone())
            .collect()
    }

    pub fn teacher_free_periods(&self, teacher_id: &TeacherId) -> HashSet<Period> {
        let occupied: HashSet<Period> = self.teacher_sections(teacher_id).iter().map(|s| s.period).collect();
        Period::non_overlapping_with(&occupied)
    }

    pub fn student_free_periods(&self, student_id: &StudentId) -> HashSet<Period> {
        let occupied: HashSet<Period> = self.student_sections(student_id).iter().map(|s| s.period).collect();
        Period::non_overlapping_with(&occupied)
    }

    pub fn lunch_count(&self, student_id: &StudentId) -> usize {
        self.student_sections(student_id)
            .iter()
            .filter(|s| s.course_id.0 == LUNCH_COURSE_ID)
            .count()
    }

    pub fn get_section(&self, section_id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == section_id)
    }

    pub fn get_section_mut(&mut self, section_id: &SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| &s.id == section_id)
    }

    pub fn total_assignments(&self) -> usize {
        self.sections.iter().map(|s| s.enrollment()).sum()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
