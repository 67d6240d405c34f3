mod hard_constraints;

pub use hard_constraints::*;

use crate::types::{Schedule, ScheduleInput};

/// Result of validating a schedule against the §3 invariants.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub statistics: ScheduleStatistics,
}

/// A constraint violation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Aggregate counts about a schedule, independent of whether it validates.
#[derive(Debug, Clone)]
pub struct ScheduleStatistics {
    pub total_sections: usize,
    pub total_students: usize,
    pub total_assignments: usize,
    pub missing_requirements: usize,
    pub avg_section_fill_rate: f64,
}

/// Validates a complete schedule against every numbered invariant in §3.
pub fn validate_schedule(schedule: &Schedule, input: &ScheduleInput) -> ValidationReport {
    let mut violations = Vec::new();

    violations.extend(check_roster_capacity(schedule));
    violations.extend(check_student_period_conflicts(schedule));
    violations.extend(check_teacher_period_conflicts(schedule));
    violations.extend(check_teacher_section_cap(schedule, &input.teachers));
    violations.extend(check_teacher_preps(schedule, &input.teachers, input.config.max_preps));
    violations.extend(check_teacher_certifications(schedule, &input.teachers, &input.courses));
    violations.extend(check_lunch_assignment(schedule, &input.students));
    violations.extend(check_inclusion_co_teacher(schedule));

    let statistics = calculate_statistics(schedule, input);

    ValidationReport {
        is_valid: violations.iter().all(|v| v.severity != Severity::Error),
        violations,
        statistics,
    }
}

fn calculate_statistics(schedule: &Schedule, input: &ScheduleInput) -> ScheduleStatistics {
    let total_sections = schedule.sections.len();
    let total_students = input.students.len();
    let total_assignments = schedule.total_assignments();
    let missing_requirements = schedule.missing.len();

    let avg_section_fill_rate = if total_sections > 0 {
        schedule
            .sections
            .iter()
            .map(|s| s.enrollment() as f64 / s.max_size.max(1) as f64)
            .sum::<f64>()
            / total_sections as f64
            * 100.0
    } else {
        0.0
    };

    ScheduleStatistics {
        total_sections,
        total_students,
        total_assignments,
        missing_requirements,
        avg_section_fill_rate,
    }
}
