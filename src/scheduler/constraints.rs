use crate::types::{Course, Period, Schedule, Teacher};

/// `teacher-can-take-gened` (§4.4): free period, certified, under section cap,
/// and taking this course would not push distinct preps past `max_preps`.
pub fn teacher_can_take_gened(
    schedule: &Schedule,
    teacher: &Teacher,
    course: &Course,
    period: Period,
    max_preps: usize,
) -> bool {
    if schedule.teacher_sections(&teacher.id).len() >= teacher.max_sections as usize {
        return false;
    }
    match course.required_endorsement {
        Some(dept) if !teacher.has_cert(dept) => return false,
        _ => {}
    }
    if !schedule.teacher_free_periods(&teacher.id).contains(&period) {
        return false;
    }
    let mut preps = schedule.teacher_preps(&teacher.id);
    preps.insert(course.id.clone());
    preps.len() <= max_preps
}

/// `teacher-can-take-sped` (§4.4): drops the cert check (LBS1 is checked by the
/// caller) and the prep-cap check, per the co-teaching relaxation in §9(c).
pub fn teacher_can_take_sped(schedule: &Schedule, teacher: &Teacher, period: Period) -> bool {
    if schedule.teacher_sections(&teacher.id).len() >= teacher.max_sections as usize {
        return false;
    }
    schedule.teacher_free_periods(&teacher.id).contains(&period)
}
