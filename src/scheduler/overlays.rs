use super::constraints::teacher_can_take_sped;
use crate::types::{Course, Environment, Period, Room, RoomId, Schedule, Section, SectionId, Student, Teacher};
use std::collections::HashSet;

/// Seeds the four lunch sections and four SPED-seminar sections, one at each
/// half-block, before placement begins (§4.7). These are the schedule's only
/// sections with no demand-driven origin.
pub fn seed_sections(rooms: &[Room]) -> Vec<Section> {
    let lunch_course = Course::lunch();
    let seminar_course = Course::sped_seminar();

    let lunch_room = rooms
        .iter()
        .find(|r| r.room_type == lunch_course.required_space)
        .map(|r| r.id.clone())
        .unwrap_or_else(|| RoomId("lunch-default".to_string()));
    let seminar_room = rooms
        .iter()
        .find(|r| r.room_type == seminar_course.required_space)
        .map(|r| r.id.clone())
        .unwrap_or_else(|| RoomId("sped-seminar-default".to_string()));

    let mut sections = Vec::new();
    for period in Period::HALF_BLOCKS {
        sections.push(Section::new(
            SectionId(format!("lunch-{}", period)),
            lunch_course.id.clone(),
            period,
            lunch_room.clone(),
            None,
            lunch_course.max_section_size,
        ));
        let mut seminar_section = Section::new(
            SectionId(format!("sped-seminar-{}", period)),
            seminar_course.id.clone(),
            period,
            seminar_room.clone(),
            None,
            seminar_course.max_section_size,
        );
        // LBS1-primary-taught like a separate-class section, so it is excluded
        // from the gen-ed prep cap the same way (§3 inv5's LBS1 relaxation).
        seminar_section.environment = Environment::SeparateClass;
        sections.push(seminar_section);
    }
    sections
}

/// Assigns an LBS1 co-teacher to any seeded SPED-seminar section still
/// missing one, preferring whoever is busiest (mirrors the inclusion
/// co-teacher rule in §4.7).
pub fn assign_seminar_co_teachers(schedule: &mut Schedule, teachers: &[Teacher]) {
    let seminar_section_ids: Vec<SectionId> = schedule
        .sections
        .iter()
        .filter(|s| s.course_id.0 == crate::types::SPED_SEMINAR_COURSE_ID && s.teacher_id.is_none())
        .map(|s| s.id.clone())
        .collect();

    for section_id in seminar_section_ids {
        let period = match schedule.get_section(&section_id) {
            Some(s) => s.period,
            None => continue,
        };
        let teacher = teachers
            .iter()
            .filter(|t| t.has_lbs1())
            .filter(|t| teacher_can_take_sped(schedule, t, period))
            .max_by_key(|t| schedule.teacher_sections(&t.id).len());

        if let Some(teacher) = teacher {
            let teacher_id = teacher.id.clone();
            if let Some(section) = schedule.get_section_mut(&section_id) {
                section.teacher_id = Some(teacher_id);
            }
        }
    }
}

/// Enforces exactly one lunch section per student (§4.7). Run once after a
/// student's required courses have all been placed, not per-registration.
/// Students for whom no compatible lunch section has space are left without
/// one; the reporter surfaces this as an anomaly rather than a hard failure.
pub fn enforce_lunch(schedule: &mut Schedule, student: &Student) -> bool {
    if schedule.lunch_count(&student.id) >= 1 {
        return true;
    }

    let free = schedule.student_free_periods(&student.id);
    let mut candidates: Vec<SectionId> = schedule
        .sections
        .iter()
        .filter(|s| s.course_id.0 == crate::types::LUNCH_COURSE_ID)
        .filter(|s| s.has_space())
        .filter(|s| free.contains(&s.period))
        .map(|s| s.id.clone())
        .collect();
    candidates.sort();

    match candidates.into_iter().next() {
        Some(section_id) => {
            if let Some(section) = schedule.get_section_mut(&section_id) {
                section.enroll(student.id.clone());
            }
            true
        }
        None => false,
    }
}

/// Registers a student into the appropriate SPED-seminar section, if the
/// student's IEP requires one and a half-block is free.
pub fn enforce_sped_seminar(schedule: &mut Schedule, student: &Student) -> bool {
    if !student.needs_sped_seminar() {
        return true;
    }
    if schedule
        .student_sections(&student.id)
        .iter()
        .any(|s| s.course_id.0 == crate::types::SPED_SEMINAR_COURSE_ID)
    {
        return true;
    }

    let free: HashSet<Period> = schedule.student_free_periods(&student.id);
    let mut candidates: Vec<SectionId> = schedule
        .sections
        .iter()
        .filter(|s| s.course_id.0 == crate::types::SPED_SEMINAR_COURSE_ID)
        .filter(|s| s.has_space())
        .filter(|s| free.contains(&s.period))
        .map(|s| s.id.clone())
        .collect();
    candidates.sort();

    match candidates.into_iter().next() {
        Some(section_id) => {
            if let Some(section) = schedule.get_section_mut(&section_id) {
                section.enroll(student.id.clone());
            }
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomType;

    #[test]
    fn seeds_four_lunch_and_four_seminar_sections() {
        let rooms = vec![
            Room { id: RoomId("cafeteria".into()), room_type: RoomType::Cafeteria, capacity_override: None },
            Room { id: RoomId("sped-room".into()), room_type: RoomType::Sped, capacity_override: None },
        ];
        let sections = seed_sections(&rooms);
        assert_eq!(sections.len(), 8);
        assert_eq!(sections.iter().filter(|s| s.course_id.0 == "lunch").count(), 4);
        assert_eq!(sections.iter().filter(|s| s.course_id.0 == "sped-seminar").count(), 4);
    }
}
