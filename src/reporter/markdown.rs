use crate::types::{CourseId, Schedule, ScheduleInput};
use crate::validator::ValidationReport;
use std::collections::HashMap;

/// Generates a markdown report of the schedule.
pub fn generate_markdown_report(
    schedule: &Schedule,
    input: &ScheduleInput,
    validation: &ValidationReport,
) -> String {
    let mut lines = vec![
        "# Schedule Report".to_string(),
        String::new(),
        format!("Generated: {}", schedule.metadata.generated_at),
        format!("Algorithm: v{}", schedule.metadata.algorithm_version),
        format!("Seed: {}", schedule.metadata.seed),
        format!("Solve time: {}ms", schedule.metadata.solve_time_ms),
        String::new(),
    ];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Total Sections | {} |", validation.statistics.total_sections));
    lines.push(format!("| Total Students | {} |", validation.statistics.total_students));
    lines.push(format!("| Total Assignments | {} |", validation.statistics.total_assignments));
    lines.push(format!(
        "| Missing Requirements | {} |",
        validation.statistics.missing_requirements
    ));
    lines.push(format!(
        "| Avg Fill Rate | {:.1}% |",
        validation.statistics.avg_section_fill_rate
    ));
    lines.push(String::new());

    if validation.is_valid {
        lines.push("## Validation: ✅ PASSED\n".to_string());
    } else {
        lines.push("## Validation: ❌ FAILED\n".to_string());
        for violation in &validation.violations {
            lines.push(format!("- **{}**: {}", violation.constraint, violation.message));
        }
        lines.push(String::new());
    }

    lines.push("## Course Sections\n".to_string());

    let course_map: HashMap<&CourseId, &str> = input
        .courses
        .iter()
        .map(|c| (&c.id, c.name.as_str()))
        .collect();

    let mut by_course: HashMap<&CourseId, Vec<&crate::types::Section>> = HashMap::new();
    for section in &schedule.sections {
        by_course.entry(&section.course_id).or_default().push(section);
    }

    let mut course_ids: Vec<_> = by_course.keys().collect();
    course_ids.sort_by_key(|c| course_map.get(*c).copied().unwrap_or(""));

    for course_id in course_ids {
        let course_name = course_map.get(course_id).unwrap_or(&"Unknown");
        let sections = &by_course[course_id];

        lines.push(format!("### {}\n", course_name));
        lines.push("| Section | Period | Room | Teacher | Co-Teacher | Enrolled |".to_string());
        lines.push("|---------|--------|------|---------|------------|----------|".to_string());

        for section in sections {
            let teacher = section
                .teacher_id
                .as_ref()
                .and_then(|tid| input.teachers.iter().find(|t| &t.id == tid))
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "TBD".to_string());

            let co_teacher = section
                .co_teacher_id
                .as_ref()
                .and_then(|tid| input.teachers.iter().find(|t| &t.id == tid))
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "-".to_string());

            lines.push(format!(
                "| {} | {} | {} | {} | {} | {}/{} |",
                section.id,
                section.period,
                section.room_id,
                teacher,
                co_teacher,
                section.enrollment(),
                section.max_size
            ));
        }
        lines.push(String::new());
    }

    if !schedule.missing.is_empty() {
        lines.push("## Missing Requirements\n".to_string());
        lines.push("| Student | Course | Reason |".to_string());
        lines.push("|---------|--------|--------|".to_string());

        for m in &schedule.missing {
            let course_name = course_map.get(&m.course_id).unwrap_or(&"Unknown");
            lines.push(format!("| {} | {} | {} |", m.student_id, course_name, m.reason));
        }
    }

    lines.join("\n")
}
