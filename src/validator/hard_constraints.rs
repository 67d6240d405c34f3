use crate::types::{Course, CourseId, Environment, Schedule, Teacher, TeacherId};
use crate::validator::{Severity, Violation};
use std::collections::{HashMap, HashSet};

/// Invariant 1: roster never exceeds a section's effective max size.
pub fn check_roster_capacity(schedule: &Schedule) -> Vec<Violation> {
    schedule
        .sections
        .iter()
        .filter(|s| s.enrollment() > s.max_size as usize)
        .map(|s| Violation {
            constraint: "RosterCapacity".to_string(),
            message: format!(
                "Section '{}' over capacity: {} enrolled, max {}",
                s.id,
                s.enrollment(),
                s.max_size
            ),
            severity: Severity::Error,
        })
        .collect()
}

/// Invariant 2: no student sits in two overlapping-period sections.
pub fn check_student_period_conflicts(schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<&str, Vec<crate::types::Period>> = HashMap::new();

    for section in &schedule.sections {
        for student_id in &section.roster {
            let periods = seen.entry(&student_id.0).or_default();
            if periods.iter().any(|&p| p.overlaps(section.period)) {
                violations.push(Violation {
                    constraint: "NoStudentPeriodOverlap".to_string(),
                    message: format!(
                        "Student '{}' double-booked at {} via section '{}'",
                        student_id, section.period, section.id
                    ),
                    severity: Severity::Error,
                });
            }
            periods.push(section.period);
        }
    }

    violations
}

/// Invariant 3: no teacher (primary or co-) teaches two overlapping sections.
pub fn check_teacher_period_conflicts(schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<&str, Vec<crate::types::Period>> = HashMap::new();

    for section in &schedule.sections {
        for teacher_id in section.teacher_id.iter().chain(section.co_teacher_id.iter()) {
            let periods = seen.entry(&teacher_id.0).or_default();
            if periods.iter().any(|&p| p.overlaps(section.period)) {
                violations.push(Violation {
                    constraint: "NoTeacherPeriodOverlap".to_string(),
                    message: format!(
                        "Teacher '{}' double-booked at {} via section '{}'",
                        teacher_id, section.period, section.id
                    ),
                    severity: Severity::Error,
                });
            }
            periods.push(section.period);
        }
    }

    violations
}

/// Invariant 4: a teacher's section count never exceeds their cap.
pub fn check_teacher_section_cap(schedule: &Schedule, teachers: &[Teacher]) -> Vec<Violation> {
    teachers
        .iter()
        .filter_map(|t| {
            let count = schedule.teacher_sections(&t.id).len();
            if count > t.max_sections as usize {
                Some(Violation {
                    constraint: "TeacherSectionCap".to_string(),
                    message: format!(
                        "Teacher '{}' teaches {} sections, cap is {}",
                        t.id, count, t.max_sections
                    ),
                    severity: Severity::Error,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Invariant 5: a gen-ed teacher's distinct primary preps stay within the cap.
pub fn check_teacher_preps(schedule: &Schedule, teachers: &[Teacher], max_preps: usize) -> Vec<Violation> {
    teachers
        .iter()
        .filter_map(|t| {
            let preps = schedule.teacher_preps(&t.id).len();
            if preps > max_preps {
                Some(Violation {
                    constraint: "TeacherPrepCap".to_string(),
                    message: format!(
                        "Teacher '{}' has {} distinct preps, cap is {}",
                        t.id, preps, max_preps
                    ),
                    severity: Severity::Error,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Invariant 6: a section's primary teacher holds the course's required
/// endorsement, and any co-teacher holds LBS1.
pub fn check_teacher_certifications(
    schedule: &Schedule,
    teachers: &[Teacher],
    courses: &[Course],
) -> Vec<Violation> {
    let teacher_map: HashMap<&TeacherId, &Teacher> = teachers.iter().map(|t| (&t.id, t)).collect();
    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let course = match course_map.get(&section.course_id) {
            Some(c) => c,
            None => continue,
        };

        if let (Some(dept), Some(teacher_id)) = (course.required_endorsement, &section.teacher_id) {
            let certified = teacher_map.get(teacher_id).map(|t| t.has_cert(dept)).unwrap_or(false);
            if !certified {
                violations.push(Violation {
                    constraint: "TeacherCertification".to_string(),
                    message: format!(
                        "Section '{}' teacher '{}' lacks {} endorsement",
                        section.id, teacher_id, dept
                    ),
                    severity: Severity::Error,
                });
            }
        }

        if let Some(co_teacher_id) = &section.co_teacher_id {
            let has_lbs1 = teacher_map.get(co_teacher_id).map(|t| t.has_lbs1()).unwrap_or(false);
            if !has_lbs1 {
                violations.push(Violation {
                    constraint: "CoTeacherLbs1".to_string(),
                    message: format!(
                        "Section '{}' co-teacher '{}' lacks LBS1 endorsement",
                        section.id, co_teacher_id
                    ),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}

/// Invariant 7: every student has exactly one lunch section.
pub fn check_lunch_assignment(schedule: &Schedule, students: &[crate::types::Student]) -> Vec<Violation> {
    students
        .iter()
        .filter_map(|s| {
            let count = schedule.lunch_count(&s.id);
            if count != 1 {
                Some(Violation {
                    constraint: "ExactlyOneLunch".to_string(),
                    message: format!("Student '{}' has {} lunch sections, expected 1", s.id, count),
                    severity: Severity::Warning,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Invariant 8: a non-empty inclusion section always has a co-teacher set.
pub fn check_inclusion_co_teacher(schedule: &Schedule) -> Vec<Violation> {
    schedule
        .sections
        .iter()
        .filter(|s| s.environment == Environment::Inclusion && !s.roster.is_empty())
        .filter(|s| s.co_teacher_id.is_none())
        .map(|s| Violation {
            constraint: "InclusionRequiresCoTeacher".to_string(),
            message: format!("Inclusion section '{}' has students but no co-teacher", s.id),
            severity: Severity::Error,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Period, RoomId, Section, SectionId, StudentId};

    #[test]
    fn detects_student_period_overlap() {
        let mut a = Section::new(
            SectionId("a".into()),
            CourseId("math".into()),
            Period::First,
            RoomId("r1".into()),
            None,
            30,
        );
        a.enroll(StudentId("s1".into()));
        let mut b = Section::new(
            SectionId("b".into()),
            CourseId("eng".into()),
            Period::Second,
            RoomId("r2".into()),
            None,
            30,
        );
        b.enroll(StudentId("s1".into()));

        let schedule = Schedule {
            sections: vec![a, b],
            missing: vec![],
            metadata: Default::default(),
        };

        let violations = check_student_period_conflicts(&schedule);
        assert!(!violations.is_empty());
    }

    #[test]
    fn no_violation_for_non_overlapping_periods() {
        let mut a = Section::new(
            SectionId("a".into()),
            CourseId("math".into()),
            Period::First,
            RoomId("r1".into()),
            None,
            30,
        );
        a.enroll(StudentId("s1".into()));
        let mut b = Section::new(
            SectionId("b".into()),
            CourseId("eng".into()),
            Period::Third,
            RoomId("r2".into()),
            None,
            30,
        );
        b.enroll(StudentId("s1".into()));

        let schedule = Schedule {
            sections: vec![a, b],
            missing: vec![],
            metadata: Default::default(),
        };

        assert!(check_student_period_conflicts(&schedule).is_empty());
    }
}
