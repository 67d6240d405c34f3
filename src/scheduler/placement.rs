use super::constraints::{teacher_can_take_gened, teacher_can_take_sped};
use super::prioritizer::Ticket;
use super::room_assigner::default_room_for;
use crate::types::{
    Course, CourseId, Department, Environment, Period, RoomId, Schedule, Section, SectionId,
    Student, StudentId, Teacher, TeacherId,
};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Chooses where a new section for `course` should meet, given the student's
/// free periods. Science/Art prefer the earliest free period; Math/World
/// Language prefer the latest; everything else is resolved uniformly at
/// random by the run's seeded PRNG (§4.6 step 5, §9 open question d).
fn choose_period_for_new_section(
    department: Option<Department>,
    free_periods: &HashSet<Period>,
    rng: &mut impl Rng,
) -> Option<Period> {
    match department {
        Some(Department::Science) | Some(Department::Art) => free_periods.iter().copied().min(),
        Some(Department::Math) | Some(Department::WorldLanguage) => {
            free_periods.iter().copied().max()
        }
        _ => free_periods.iter().copied().choose(rng),
    }
}

/// Picks the gen-ed teacher to take a new section, preferring whoever is
/// already carrying the most sections (§4.6 step 5: "fill busy teachers
/// first").
fn choose_gened_teacher<'a>(
    schedule: &Schedule,
    teachers: &'a [Teacher],
    course: &Course,
    period: Period,
    max_preps: usize,
) -> Option<&'a Teacher> {
    teachers
        .iter()
        .filter(|t| teacher_can_take_gened(schedule, t, course, period, max_preps))
        .max_by_key(|t| schedule.teacher_sections(&t.id).len())
}

fn choose_sped_teacher<'a>(
    schedule: &Schedule,
    teachers: &'a [Teacher],
    period: Period,
    exclude: Option<&TeacherId>,
) -> Option<&'a Teacher> {
    teachers
        .iter()
        .filter(|t| t.has_lbs1())
        .filter(|t| exclude.map(|ex| &t.id != ex).unwrap_or(true))
        .filter(|t| teacher_can_take_sped(schedule, t, period))
        .max_by_key(|t| schedule.teacher_sections(&t.id).len())
}

fn next_section_id(schedule: &Schedule, course_id: &CourseId) -> SectionId {
    let existing = schedule.sections_of_course(course_id).len();
    SectionId(format!("{}-{}", course_id.0, existing + 1))
}

/// Attempts to seat `student` into an existing section of `course` at a period
/// the student is free for. Returns the section id if successful.
fn attach_to_existing(
    schedule: &mut Schedule,
    student: &Student,
    course_id: &CourseId,
    restrict_environment: Option<Environment>,
) -> Option<SectionId> {
    let free = schedule.student_free_periods(&student.id);

    let mut candidates: Vec<&Section> = schedule
        .sections_of_course_with_space(course_id)
        .into_iter()
        .filter(|s| free.contains(&s.period))
        .filter(|s| restrict_environment.map(|e| s.environment == e).unwrap_or(true))
        .collect();
    candidates.sort_by_key(|s| (s.period, s.enrollment()));

    let section_id = candidates.first().map(|s| s.id.clone())?;
    schedule.get_section_mut(&section_id)?.enroll(student.id.clone());
    Some(section_id)
}

/// Creates a brand-new gen-ed section for `course`, seats `student`, and
/// returns its id. Fails (returning `None`) if no certified teacher has room.
fn create_gened_section(
    schedule: &mut Schedule,
    student: &Student,
    course: &Course,
    teachers: &[Teacher],
    rooms: &[crate::types::Room],
    max_preps: usize,
    rng: &mut impl Rng,
) -> Option<SectionId> {
    let free = schedule.student_free_periods(&student.id);
    let period = choose_period_for_new_section(course.department(), &free, rng)?;

    let teacher = choose_gened_teacher(schedule, teachers, course, period, max_preps)?;
    let teacher_id = teacher.id.clone();

    let room_id = default_room_for(rooms, course.required_space)
        .map(|r| r.id)
        .unwrap_or_else(|| RoomId(format!("{}-default", course.id.0)));

    let section_id = next_section_id(schedule, &course.id);
    let max_size = course.max_section_size.min(
        rooms
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| r.capacity())
            .unwrap_or(course.max_section_size),
    );

    let mut section = Section::new(section_id.clone(), course.id.clone(), period, room_id, Some(teacher_id), max_size);
    section.enroll(student.id.clone());
    schedule.sections.push(section);
    Some(section_id)
}

/// Places a single ticket's demand for `student` per §4.6. Returns whether
/// the demand was satisfied; on failure the caller records a missing
/// requirement.
fn place_gened(
    schedule: &mut Schedule,
    student: &Student,
    course: &Course,
    teachers: &[Teacher],
    rooms: &[crate::types::Room],
    max_preps: usize,
    rng: &mut impl Rng,
) -> bool {
    if attach_to_existing(schedule, student, &course.id, None).is_some() {
        return true;
    }
    create_gened_section(schedule, student, course, teachers, rooms, max_preps, rng).is_some()
}

/// Inclusion variant (§4.6 step 6): try an existing inclusion section first,
/// else place gen-ed then promote the section and assign a co-teacher. If no
/// co-teacher is available, the promotion is rolled back: the section reverts
/// to gen-ed and the student is removed, leaving the demand unmet.
fn place_inclusion(
    schedule: &mut Schedule,
    student: &Student,
    course: &Course,
    teachers: &[Teacher],
    rooms: &[crate::types::Room],
    max_preps: usize,
    rng: &mut impl Rng,
) -> bool {
    if attach_to_existing(schedule, student, &course.id, Some(Environment::Inclusion)).is_some() {
        return true;
    }

    let section_id = match attach_to_existing(schedule, student, &course.id, None) {
        Some(id) => id,
        None => match create_gened_section(schedule, student, course, teachers, rooms, max_preps, rng) {
            Some(id) => id,
            None => return false,
        },
    };

    let already_inclusion = schedule
        .get_section(&section_id)
        .map(|s| s.environment == Environment::Inclusion)
        .unwrap_or(false);
    if already_inclusion {
        return true;
    }

    let period = schedule.get_section(&section_id).map(|s| s.period);
    let primary = schedule.get_section(&section_id).and_then(|s| s.teacher_id.clone());
    let co_teacher = match period {
        Some(p) => choose_sped_teacher(schedule, teachers, p, primary.as_ref()),
        None => None,
    };

    match co_teacher {
        Some(co) => {
            let co_id = co.id.clone();
            if let Some(section) = schedule.get_section_mut(&section_id) {
                section.environment = Environment::Inclusion;
                section.co_teacher_id = Some(co_id);
            }
            true
        }
        None => {
            if let Some(section) = schedule.get_section_mut(&section_id) {
                section.unenroll(&student.id);
            }
            false
        }
    }
}

/// Separate-class variant (§4.6 step 7): same shape as inclusion, but the
/// primary teacher must hold LBS1 and the section's environment becomes
/// `SeparateClass`. There is no rollback path here because the primary
/// teacher selection already requires LBS1 up front.
fn place_separate_class(
    schedule: &mut Schedule,
    student: &Student,
    course: &Course,
    teachers: &[Teacher],
    rooms: &[crate::types::Room],
    rng: &mut impl Rng,
) -> bool {
    if attach_to_existing(schedule, student, &course.id, Some(Environment::SeparateClass)).is_some() {
        return true;
    }

    let free = schedule.student_free_periods(&student.id);
    let period = match choose_period_for_new_section(course.department(), &free, rng) {
        Some(p) => p,
        None => return false,
    };

    let teacher = match choose_sped_teacher(schedule, teachers, period, None) {
        Some(t) => t.clone(),
        None => return false,
    };

    let room_id = default_room_for(rooms, course.required_space)
        .map(|r| r.id)
        .unwrap_or_else(|| RoomId(format!("{}-default", course.id.0)));
    let max_size = course.max_section_size.min(
        rooms
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| r.capacity())
            .unwrap_or(course.max_section_size),
    );

    let section_id = next_section_id(schedule, &course.id);
    let mut section = Section::new(section_id, course.id.clone(), period, room_id, Some(teacher.id.clone()), max_size);
    section.environment = Environment::SeparateClass;
    section.enroll(student.id.clone());
    schedule.sections.push(section);
    true
}

/// Runs the Placement Engine over a pre-sorted ticket queue, mutating
/// `schedule` in place. Unmet demand is recorded in `schedule.missing`.
pub fn place_tickets(
    schedule: &mut Schedule,
    tickets: &[Ticket],
    students: &HashMap<&StudentId, &Student>,
    courses: &HashMap<&CourseId, &Course>,
    teachers: &[Teacher],
    rooms: &[crate::types::Room],
    max_preps: usize,
    rng: &mut impl Rng,
) {
    for ticket in tickets {
        let student = match students.get(&ticket.student_id) {
            Some(s) => *s,
            None => continue,
        };
        let course = match courses.get(&ticket.course_id) {
            Some(c) => *c,
            None => continue,
        };

        if schedule
            .student_sections(&student.id)
            .iter()
            .any(|s| &s.course_id == &course.id)
        {
            continue;
        }

        let placed = if ticket.separate_class {
            place_separate_class(schedule, student, course, teachers, rooms, rng)
        } else if ticket.inclusion {
            place_inclusion(schedule, student, course, teachers, rooms, max_preps, rng)
        } else {
            place_gened(schedule, student, course, teachers, rooms, max_preps, rng)
        };

        if !placed {
            schedule.missing.push(crate::types::MissingRequirement {
                student_id: student.id.clone(),
                course_id: course.id.clone(),
                reason: "no compatible section or qualified teacher available".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Room, RoomType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet as Set;

    fn course(id: &str, dept: Option<Department>) -> Course {
        Course {
            id: CourseId(id.to_string()),
            name: id.to_string(),
            required_endorsement: dept,
            required_space: RoomType::Standard,
            min_section_size: 1,
            max_section_size: 30,
        }
    }

    fn teacher(id: &str, certs: &[Department]) -> Teacher {
        Teacher {
            id: TeacherId(id.to_string()),
            name: id.to_string(),
            certifications: certs.iter().copied().collect(),
            max_sections: 5,
        }
    }

    fn student(id: &str, required: &[&str]) -> Student {
        Student {
            id: StudentId(id.to_string()),
            name: id.to_string(),
            grade: "9".to_string(),
            required_courses: required.iter().map(|c| CourseId(c.to_string())).collect(),
            elective_courses: vec![],
            inclusion: Set::new(),
            separate_class: Set::new(),
        }
    }

    #[test]
    fn creates_a_new_section_when_none_exists() {
        let mut schedule = Schedule::new();
        let c = course("math", Some(Department::Math));
        let t = teacher("t1", &[Department::Math]);
        let s = student("s1", &["math"]);
        let rooms = vec![Room { id: RoomId("r1".into()), room_type: RoomType::Standard, capacity_override: None }];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let placed = place_gened(&mut schedule, &s, &c, &[t], &rooms, 2, &mut rng);
        assert!(placed);
        assert_eq!(schedule.sections.len(), 1);
        assert_eq!(schedule.sections[0].roster, vec![StudentId("s1".into())]);
    }

    #[test]
    fn fails_without_a_certified_teacher() {
        let mut schedule = Schedule::new();
        let c = course("math", Some(Department::Math));
        let t = teacher("t1", &[Department::English]);
        let s = student("s1", &["math"]);
        let rooms = vec![Room { id: RoomId("r1".into()), room_type: RoomType::Standard, capacity_override: None }];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let placed = place_gened(&mut schedule, &s, &c, &[t], &rooms, 2, &mut rng);
        assert!(!placed);
        assert!(schedule.sections.is_empty());
    }
}
