use super::{CourseId, Period, RoomId, SectionId, StudentId, TeacherId};
use serde::{Deserialize, Serialize};

/// The instructional setting a section runs under. An inclusion section always
/// carries a co-teacher; a separate-class section's primary teacher must hold
/// the Special-Ed endorsement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    GenEd,
    Inclusion,
    SeparateClass,
}

/// One class instance: a course meeting at a period, in a room, under one or
/// two teachers, with a roster of enrolled students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub course_id: CourseId,
    pub period: Period,
    pub room_id: RoomId,
    /// `None` only for the seeded lunch sections, which need no instructor.
    pub teacher_id: Option<TeacherId>,
    pub co_teacher_id: Option<TeacherId>,
    pub environment: Environment,
    pub max_size: u32,
    pub roster: Vec<StudentId>,
}

impl Section {
    pub fn new(
        id: SectionId,
        course_id: CourseId,
        period: Period,
        room_id: RoomId,
        teacher_id: Option<TeacherId>,
        max_size: u32,
    ) -> Self {
        Self {
            id,
            course_id,
            period,
            room_id,
            teacher_id,
            co_teacher_id: None,
            environment: Environment::GenEd,
            max_size,
            roster: Vec::new(),
        }
    }

    pub fn enrollment(&self) -> usize {
        self.roster.len()
    }

    pub fn has_space(&self) -> bool {
        self.roster.len() < self.max_size as usize
    }

    pub fn has_student(&self, student_id: &StudentId) -> bool {
        self.roster.contains(student_id)
    }

    pub fn enroll(&mut self, student_id: StudentId) {
        if !self.has_student(&student_id) {
            self.roster.push(student_id);
        }
    }

    pub fn unenroll(&mut self, student_id: &StudentId) {
        self.roster.retain(|s| s != student_id);
    }

    pub fn teaches(&self, teacher_id: &TeacherId) -> bool {
        self.teacher_id.as_ref() == Some(teacher_id) || self.co_teacher_id.as_ref() == Some(teacher_id)
    }
}
