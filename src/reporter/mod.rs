mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::Result;
use crate::types::{CourseId, Schedule, ScheduleInput, StudentId};
use crate::validator::ValidationReport;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Generates all requested reports and writes them to an output directory.
pub fn generate_reports(
    schedule: &Schedule,
    input: &ScheduleInput,
    validation: &ValidationReport,
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(schedule)?;
                fs::write(output_dir.join("schedule.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(schedule, input, validation);
                fs::write(output_dir.join("schedule.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(schedule, input, validation);
                fs::write(output_dir.join("schedule.txt"), txt)?;
            }
        }
    }

    Ok(())
}

/// Per-student missing required courses (§6 `missing_requirements`).
pub fn missing_requirements(schedule: &Schedule) -> HashMap<StudentId, HashSet<CourseId>> {
    schedule
        .missing
        .iter()
        .map(|m| (m.student_id.clone(), m.course_id.clone()))
        .into_group_map()
        .into_iter()
        .map(|(student_id, course_ids)| (student_id, course_ids.into_iter().collect()))
        .collect()
}

/// Students whose lunch-section count differs from exactly one (§6 `anomalies`).
pub fn anomalies(schedule: &Schedule, students: &[crate::types::Student]) -> HashMap<StudentId, usize> {
    students
        .iter()
        .map(|s| (s.id.clone(), schedule.lunch_count(&s.id)))
        .filter(|(_, count)| *count != 1)
        .collect()
}

/// Bucket counts of students by how many requirements they are missing
/// (0, 1, 2, 3, more than 3) — part of the §4.8 Reporter summary.
pub fn missing_requirement_buckets(schedule: &Schedule, students: &[crate::types::Student]) -> [usize; 5] {
    let missing = missing_requirements(schedule);
    let mut buckets = [0usize; 5];
    for student in students {
        let count = missing.get(&student.id).map(|s| s.len()).unwrap_or(0);
        let idx = count.min(4);
        buckets[idx] += 1;
    }
    buckets
}

/// Generates a single student's individual schedule as readable text.
pub fn generate_student_schedule(
    schedule: &Schedule,
    input: &ScheduleInput,
    student_id: &StudentId,
) -> Option<String> {
    let student = input.students.iter().find(|s| &s.id == student_id)?;

    let mut lines = vec![
        format!("# Schedule for {} ({})", student.name, student.id),
        format!("Grade: {}\n", student.grade),
    ];

    let enrolled = schedule.student_sections(student_id);

    if enrolled.is_empty() {
        lines.push("No courses enrolled.".to_string());
    } else {
        lines.push("## Sections\n".to_string());
        for section in &enrolled {
            let course = input
                .courses
                .iter()
                .find(|c| c.id == section.course_id)
                .map(|c| c.name.as_str())
                .unwrap_or("Unknown");

            let teacher = section
                .teacher_id
                .as_ref()
                .and_then(|tid| input.teachers.iter().find(|t| &t.id == tid))
                .map(|t| t.name.as_str())
                .unwrap_or("TBD");

            lines.push(format!(
                "**{}**: {} ({}) - Room {}",
                section.period, course, teacher, section.room_id
            ));
        }
    }

    let missing: Vec<&crate::types::MissingRequirement> = schedule
        .missing
        .iter()
        .filter(|m| &m.student_id == student_id)
        .collect();

    if !missing.is_empty() {
        lines.push("\n## Missing Requirements\n".to_string());
        for m in missing {
            let course_name = input
                .courses
                .iter()
                .find(|c| c.id == m.course_id)
                .map(|c| c.name.as_str())
                .unwrap_or("Unknown");
            lines.push(format!("- {} ({}): {}", course_name, m.course_id, m.reason));
        }
    }

    Some(lines.join("\n"))
}

/// Generates a single teacher's schedule as readable text.
pub fn generate_teacher_schedule(
    schedule: &Schedule,
    input: &ScheduleInput,
    teacher_id: &crate::types::TeacherId,
) -> Option<String> {
    let teacher = input.teachers.iter().find(|t| &t.id == teacher_id)?;

    let mut lines = vec![format!("# Schedule for {} ({})", teacher.name, teacher.id), String::new()];

    let sections = schedule.teacher_sections(teacher_id);

    if sections.is_empty() {
        lines.push("No sections assigned.".to_string());
    } else {
        lines.push(format!("## Teaching {} sections\n", sections.len()));

        for section in sections {
            let course = input
                .courses
                .iter()
                .find(|c| c.id == section.course_id)
                .map(|c| c.name.as_str())
                .unwrap_or("Unknown");

            lines.push(format!(
                "- **{}** ({}): {} - Room {} ({} students)",
                course,
                section.id,
                section.period,
                section.room_id,
                section.enrollment()
            ));
        }
    }

    Some(lines.join("\n"))
}
