use crate::types::{CourseId, Schedule, ScheduleInput};
use crate::validator::ValidationReport;
use colored::Colorize;
use std::collections::HashMap;

/// Generates the plain-text report described in §6: faculty roster, every
/// section, per-student schedules, missing requirements, and lunch anomalies.
pub fn generate_text_report(
    schedule: &Schedule,
    input: &ScheduleInput,
    validation: &ValidationReport,
) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push("               SCHEDULE REPORT".to_string());
    lines.push("═".repeat(60));
    lines.push(String::new());

    lines.push(format!("Generated: {}", schedule.metadata.generated_at));
    lines.push(format!("Seed: {}", schedule.metadata.seed));
    lines.push(format!("Solve Time: {}ms", schedule.metadata.solve_time_ms));
    lines.push(String::new());

    lines.push("─".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  Sections:      {}", validation.statistics.total_sections));
    lines.push(format!("  Students:      {}", validation.statistics.total_students));
    lines.push(format!("  Assignments:   {}", validation.statistics.total_assignments));
    lines.push(format!(
        "  Missing reqs:  {}",
        validation.statistics.missing_requirements
    ));
    lines.push(format!(
        "  Fill Rate:     {:.1}%",
        validation.statistics.avg_section_fill_rate
    ));
    lines.push(String::new());

    lines.push("─".repeat(40));
    if validation.is_valid {
        lines.push("VALIDATION: PASSED".green().to_string());
    } else {
        lines.push("VALIDATION: FAILED".red().to_string());
        for v in &validation.violations {
            lines.push(format!("  ! {}: {}", v.constraint, v.message));
        }
    }
    lines.push("─".repeat(40));
    lines.push(String::new());

    lines.push("FACULTY ROSTER".to_string());
    lines.push("─".repeat(40));
    for teacher in &input.teachers {
        let certs: Vec<String> = teacher.certifications.iter().map(|d| d.to_string()).collect();
        let section_count = schedule.teacher_sections(&teacher.id).len();
        lines.push(format!(
            "  {} ({}) — certs: [{}] — {} sections",
            teacher.name,
            teacher.id,
            certs.join(", "),
            section_count
        ));
    }
    lines.push(String::new());

    let course_map: HashMap<&CourseId, &str> = input
        .courses
        .iter()
        .map(|c| (&c.id, c.name.as_str()))
        .collect();

    let mut by_course: HashMap<&CourseId, Vec<&crate::types::Section>> = HashMap::new();
    for section in &schedule.sections {
        by_course.entry(&section.course_id).or_default().push(section);
    }

    lines.push("COURSE SECTIONS".to_string());
    lines.push("─".repeat(40));

    for (course_id, sections) in &by_course {
        let name = course_map.get(course_id).unwrap_or(&"Unknown");
        let total_enrolled: usize = sections.iter().map(|s| s.enrollment()).sum();
        let total_capacity: u32 = sections.iter().map(|s| s.max_size).sum();

        lines.push(format!(
            "\n{} ({} sections, {}/{} students)",
            name.bold(),
            sections.len(),
            total_enrolled,
            total_capacity
        ));

        for section in sections {
            let teacher = section
                .teacher_id
                .as_ref()
                .and_then(|tid| input.teachers.iter().find(|t| &t.id == tid))
                .map(|t| t.name.as_str())
                .unwrap_or("TBD");

            let fill_pct = (section.enrollment() as f64 / section.max_size.max(1) as f64) * 100.0;
            let fill_indicator = if fill_pct >= 90.0 {
                "●".red()
            } else if fill_pct >= 70.0 {
                "●".yellow()
            } else {
                "●".green()
            };

            lines.push(format!(
                "  {} {} | {} | {:?} | {} | {}/{} {}",
                fill_indicator,
                section.id,
                section.period,
                section.environment,
                teacher,
                section.enrollment(),
                section.max_size,
                format!("({:.0}%)", fill_pct).dimmed()
            ));
        }
    }
    lines.push(String::new());

    lines.push("STUDENT SCHEDULES".to_string());
    lines.push("─".repeat(40));
    for student in &input.students {
        let sections = schedule.student_sections(&student.id);
        let course_names: Vec<String> = sections
            .iter()
            .map(|s| course_map.get(&s.course_id).copied().unwrap_or("Unknown").to_string())
            .collect();
        lines.push(format!("  {} ({}): {}", student.name, student.id, course_names.join(", ")));
    }
    lines.push(String::new());

    if !schedule.missing.is_empty() {
        lines.push("MISSING REQUIREMENTS".to_string());
        lines.push("─".repeat(40));
        for m in &schedule.missing {
            let course_name = course_map.get(&m.course_id).unwrap_or(&"Unknown");
            lines.push(format!("  {} — {} ({})", m.student_id, course_name, m.reason));
        }
        lines.push(String::new());
    }

    let anomalies: Vec<&crate::types::Student> = input
        .students
        .iter()
        .filter(|s| schedule.lunch_count(&s.id) != 1)
        .collect();
    if !anomalies.is_empty() {
        lines.push("LUNCH ANOMALIES".to_string());
        lines.push("─".repeat(40));
        for student in anomalies {
            lines.push(format!(
                "  {} has {} lunch sections",
                student.id,
                schedule.lunch_count(&student.id)
            ));
        }
        lines.push(String::new());
    }

    lines.push("═".repeat(60));
    lines.join("\n")
}

/// Prints a quick pass/fail summary to stdout.
pub fn print_summary(schedule: &Schedule, validation: &ValidationReport) {
    println!();
    if validation.is_valid {
        println!("{}", "✓ Schedule generated successfully".green().bold());
    } else {
        println!("{}", "✗ Schedule has validation errors".red().bold());
    }
    println!();
    println!("  Sections:    {}", validation.statistics.total_sections);
    println!("  Assignments: {}", validation.statistics.total_assignments);
    println!("  Missing:     {}", validation.statistics.missing_requirements);
    println!("  Time:        {}ms", schedule.metadata.solve_time_ms);
    println!();
}
