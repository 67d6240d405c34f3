use crate::error::Result;
use crate::types::{Course, CourseId, Department, Room, ScheduleInput, Student, Teacher};
use std::collections::{HashMap, HashSet};

/// Validation result with collected errors and warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validates all input data before the engine is allowed to start (§7
/// fail-fast input validation).
pub fn validate_input(input: &ScheduleInput) -> Result<ValidationResult> {
    let mut result = ValidationResult::default();

    let course_ids: HashSet<&CourseId> = input.courses.iter().map(|c| &c.id).collect();

    check_duplicate_ids(&input.students, &mut result);
    check_duplicate_teacher_ids(&input.teachers, &mut result);
    check_duplicate_course_ids(&input.courses, &mut result);
    check_duplicate_room_ids(&input.rooms, &mut result);

    for student in &input.students {
        for course_id in student.all_requested_courses() {
            if !course_ids.contains(course_id) {
                result.add_error(format!(
                    "Student '{}' references unknown course '{}'",
                    student.id, course_id
                ));
            }
        }
    }

    // Not a fail-fast condition (§7): a course with no certified teacher
    // yields unmet demand at placement time, not a refused run (see B3).
    let teachers_by_department = build_teachers_by_department(&input.teachers);
    for course in &input.courses {
        if let Some(dept) = course.required_endorsement {
            if !teachers_by_department.contains_key(&dept) {
                result.add_warning(format!(
                    "Course '{}' requires {} endorsement, held by no teacher",
                    course.id, dept
                ));
            }
        }
    }

    let max_room_capacity = input
        .rooms
        .iter()
        .map(|r| r.capacity())
        .max()
        .unwrap_or(0);
    for course in &input.courses {
        if course.max_section_size > max_room_capacity {
            result.add_warning(format!(
                "Course '{}' max section size ({}) exceeds largest room capacity ({})",
                course.id, course.max_section_size, max_room_capacity
            ));
        }
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!(
            "Validation failed with {} errors:\n{}",
            result.errors.len(),
            result.errors.join("\n")
        ));
    }

    Ok(result)
}

fn check_duplicate_ids(students: &[Student], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for student in students {
        if !seen.insert(&student.id) {
            result.add_error(format!("Duplicate student ID: '{}'", student.id));
        }
    }
}

fn check_duplicate_teacher_ids(teachers: &[Teacher], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for teacher in teachers {
        if !seen.insert(&teacher.id) {
            result.add_error(format!("Duplicate teacher ID: '{}'", teacher.id));
        }
    }
}

fn check_duplicate_course_ids(courses: &[Course], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for course in courses {
        if !seen.insert(&course.id) {
            result.add_error(format!("Duplicate course ID: '{}'", course.id));
        }
    }
}

fn check_duplicate_room_ids(rooms: &[Room], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for room in rooms {
        if !seen.insert(&room.id) {
            result.add_error(format!("Duplicate room ID: '{}'", room.id));
        }
    }
}

/// Builds a map from endorsement to the teachers holding it.
pub fn build_teachers_by_department(teachers: &[Teacher]) -> HashMap<Department, Vec<&Teacher>> {
    let mut map: HashMap<Department, Vec<&Teacher>> = HashMap::new();
    for teacher in teachers {
        for &dept in &teacher.certifications {
            map.entry(dept).or_default().push(teacher);
        }
    }
    map
}
