use crate::types::{Course, CourseId, Student, StudentId};
use std::cmp::Reverse;
use std::collections::HashMap;

/// A single registration demand: one student wanting one course.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub elective: bool,
    pub inclusion: bool,
    pub separate_class: bool,
    pub priority: i64,
}

/// `section-count-estimate(c)` (§4.5 step 1): how many sections a course will
/// plausibly need given its ticket volume and the default capacity of its
/// required room type.
fn section_count_estimate(ticket_count: usize, default_cap: u32) -> i64 {
    1 + (ticket_count as i64) / (default_cap.max(1) as i64)
}

fn ticket_priority(base: i64, inclusion: bool, separate_class: bool, elective: bool) -> i64 {
    let mut x = base;
    if inclusion {
        x = (x + 2) * 2;
    }
    if separate_class {
        x = (x + 2) * 3;
    }
    if elective {
        x -= 1;
    }
    x
}

/// Builds and globally sorts the demand set per §4.5. Required-only by default
/// (§9 open question b) — electives are not built into tickets at all.
pub fn build_tickets(students: &[Student], courses: &[Course]) -> Vec<Ticket> {
    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();

    let mut counts: HashMap<CourseId, usize> = HashMap::new();
    for student in students {
        for course_id in &student.required_courses {
            *counts.entry(course_id.clone()).or_insert(0) += 1;
        }
    }

    let estimates: HashMap<&CourseId, i64> = counts
        .iter()
        .map(|(cid, &count)| {
            let cap = course_map.get(cid).map(|c| c.required_space.default_capacity()).unwrap_or(30);
            (cid, section_count_estimate(count, cap))
        })
        .collect();

    let s_max = estimates.values().copied().max().unwrap_or(0);

    let mut tickets = Vec::new();
    for student in students {
        for course_id in &student.required_courses {
            let course = match course_map.get(course_id) {
                Some(c) => c,
                None => continue,
            };
            let dept = course.department();
            let inclusion = dept.map(|d| student.inclusion.contains(&d)).unwrap_or(false);
            let separate_class = dept.map(|d| student.separate_class.contains(&d)).unwrap_or(false);
            let base = s_max - estimates.get(course_id).copied().unwrap_or(1);
            let priority = ticket_priority(base, inclusion, separate_class, false);

            tickets.push(Ticket {
                student_id: student.id.clone(),
                course_id: course_id.clone(),
                elective: false,
                inclusion,
                separate_class,
                priority,
            });
        }
    }

    let student_priority: HashMap<&StudentId, u32> =
        students.iter().map(|s| (&s.id, s.priority())).collect();

    // Ties broken by descending student priority, then ascending student-id and
    // course-id — a property of identity, not insertion position, so shuffling
    // input order cannot change the result (§8 D2).
    tickets.sort_by_key(|t| {
        (
            Reverse(t.priority),
            Reverse(student_priority.get(&t.student_id).copied().unwrap_or(0)),
            t.student_id.0.clone(),
            t.course_id.0.clone(),
        )
    });

    tickets
}
