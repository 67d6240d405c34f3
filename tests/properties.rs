//! Property tests over the §3 invariants and §8 testable properties: random
//! but valid catalogs/rosters/faculties are generated, the engine is run over
//! them, and every invariant is checked on the resulting schedule.

use proptest::prelude::*;
use school_scheduler::scheduler::generate_schedule;
use school_scheduler::types::{
    Course, CourseId, Department, Environment, Room, RoomId, RoomType, Student, StudentId,
    Teacher, TeacherId, ScheduleConfig, ScheduleInput,
};
use std::collections::HashSet;

const DEPARTMENTS: [Department; 4] = [
    Department::Math,
    Department::English,
    Department::Science,
    Department::SocialScience,
];

fn fixed_courses() -> Vec<Course> {
    DEPARTMENTS
        .iter()
        .enumerate()
        .map(|(i, &dept)| Course {
            id: CourseId(format!("course-{}", i)),
            name: format!("Course {}", i),
            required_endorsement: Some(dept),
            required_space: RoomType::Standard,
            min_section_size: 1,
            max_section_size: 10,
        })
        .collect()
}

fn fixed_rooms() -> Vec<Room> {
    vec![
        Room { id: RoomId("standard-0".into()), room_type: RoomType::Standard, capacity_override: None },
        Room { id: RoomId("standard-1".into()), room_type: RoomType::Standard, capacity_override: None },
        Room { id: RoomId("cafeteria".into()), room_type: RoomType::Cafeteria, capacity_override: None },
        Room { id: RoomId("sped-0".into()), room_type: RoomType::Sped, capacity_override: None },
    ]
}

/// A teacher's random attributes, with the id assigned afterwards by
/// position so that two distinct vector entries can never collide.
fn teacher_profile_strategy() -> impl Strategy<Value = (Vec<Department>, bool, u8)> {
    (
        prop::collection::vec(prop::sample::select(DEPARTMENTS.to_vec()), 0..=2),
        any::<bool>(),
        1u8..=4,
    )
}

fn teacher_from_profile(index: usize, (certs, lbs1, max_sections): (Vec<Department>, bool, u8)) -> Teacher {
    let mut certifications: HashSet<Department> = certs.into_iter().collect();
    if lbs1 {
        certifications.insert(Department::SpecialEd);
    }
    Teacher {
        id: TeacherId(format!("teacher-{}", index)),
        name: format!("Teacher {}", index),
        certifications,
        max_sections,
    }
}

/// A student's random attributes, with the id assigned afterwards by
/// position for the same reason as `teacher_profile_strategy`.
fn student_profile_strategy(num_courses: usize) -> impl Strategy<Value = (Vec<bool>, Department, u8)> {
    (
        prop::collection::vec(any::<bool>(), num_courses),
        prop::sample::select(DEPARTMENTS.to_vec()),
        0u8..=2,
    )
}

fn student_from_profile(
    index: usize,
    course_ids: &[CourseId],
    (wants, iep_dept, iep_kind): (Vec<bool>, Department, u8),
) -> Student {
    let required_courses: Vec<CourseId> = course_ids
        .iter()
        .zip(wants.iter())
        .filter(|(_, &w)| w)
        .map(|(c, _)| c.clone())
        .collect();

    let mut inclusion = HashSet::new();
    let mut separate_class = HashSet::new();
    match iep_kind {
        1 => {
            inclusion.insert(iep_dept);
        }
        2 => {
            separate_class.insert(iep_dept);
        }
        _ => {}
    }

    Student {
        id: StudentId(format!("student-{}", index)),
        name: format!("Student {}", index),
        grade: "10".to_string(),
        required_courses,
        elective_courses: vec![],
        inclusion,
        separate_class,
    }
}

fn schedule_input_strategy() -> impl Strategy<Value = ScheduleInput> {
    let courses = fixed_courses();
    let rooms = fixed_rooms();
    let course_ids: Vec<CourseId> = courses.iter().map(|c| c.id.clone()).collect();
    let num_courses = course_ids.len();

    let teachers_strategy = prop::collection::vec(teacher_profile_strategy(), 1..=5)
        .prop_map(|profiles| {
            profiles
                .into_iter()
                .enumerate()
                .map(|(i, profile)| teacher_from_profile(i, profile))
                .collect::<Vec<_>>()
        });

    let students_strategy = prop::collection::vec(student_profile_strategy(num_courses), 0..=10);

    (teachers_strategy, students_strategy, any::<u64>()).prop_map(move |(teachers, profiles, seed)| {
        let students = profiles
            .into_iter()
            .enumerate()
            .map(|(i, profile)| student_from_profile(i, &course_ids, profile))
            .collect();

        ScheduleInput {
            students,
            teachers,
            courses: courses.clone(),
            rooms: rooms.clone(),
            config: ScheduleConfig {
                seed,
                ..ScheduleConfig::default()
            },
        }
    })
}

proptest! {
    /// P1/P2: no student or teacher sits in two sections with overlapping
    /// periods, regardless of how the catalog, faculty, or roster shake out.
    #[test]
    fn no_overlapping_periods_for_students_or_teachers(input in schedule_input_strategy()) {
        let schedule = generate_schedule(&input, true).unwrap();

        for student in &input.students {
            let sections = schedule.student_sections(&student.id);
            for (i, a) in sections.iter().enumerate() {
                for b in sections.iter().skip(i + 1) {
                    prop_assert!(!a.period.overlaps(b.period));
                }
            }
        }

        for teacher in &input.teachers {
            let sections = schedule.teacher_sections(&teacher.id);
            for (i, a) in sections.iter().enumerate() {
                for b in sections.iter().skip(i + 1) {
                    prop_assert!(!a.period.overlaps(b.period));
                }
            }
        }
    }

    /// P3: roster size never exceeds a section's effective max size.
    #[test]
    fn roster_never_exceeds_max_size(input in schedule_input_strategy()) {
        let schedule = generate_schedule(&input, true).unwrap();
        for section in &schedule.sections {
            prop_assert!(section.roster.len() <= section.max_size as usize);
        }
    }

    /// P4: a teacher's assigned section count never exceeds their cap.
    #[test]
    fn teacher_section_count_within_cap(input in schedule_input_strategy()) {
        let schedule = generate_schedule(&input, true).unwrap();
        for teacher in &input.teachers {
            let count = schedule.teacher_sections(&teacher.id).len();
            prop_assert!(count <= teacher.max_sections as usize);
        }
    }

    /// P5: a gen-ed teacher's distinct primary preps stay within the cap.
    /// `teacher_preps` only counts gen-ed primary sections, so this holds for
    /// every teacher regardless of any separate-class/seminar primary load an
    /// LBS1 teacher also carries (§3 inv5's LBS1 relaxation, §9(c)).
    #[test]
    fn gened_teacher_preps_within_cap(input in schedule_input_strategy()) {
        let schedule = generate_schedule(&input, true).unwrap();
        for teacher in &input.teachers {
            let preps = schedule.teacher_preps(&teacher.id).len();
            prop_assert!(preps <= input.config.max_preps);
        }
    }

    /// P6: every inclusion-environment section with students has an LBS1
    /// co-teacher.
    #[test]
    fn inclusion_sections_have_lbs1_co_teacher(input in schedule_input_strategy()) {
        let schedule = generate_schedule(&input, true).unwrap();
        let teacher_map: std::collections::HashMap<_, _> =
            input.teachers.iter().map(|t| (&t.id, t)).collect();

        for section in &schedule.sections {
            if section.environment == Environment::Inclusion && !section.roster.is_empty() {
                let co = section.co_teacher_id.as_ref();
                prop_assert!(co.is_some());
                let has_lbs1 = co.and_then(|id| teacher_map.get(id)).map(|t| t.has_lbs1()).unwrap_or(false);
                prop_assert!(has_lbs1);
            }
        }
    }

    /// D1: running the same input and seed twice produces byte-identical
    /// schedules (section set, periods, teachers, and rosters).
    #[test]
    fn determinism_across_repeated_runs(input in schedule_input_strategy()) {
        let mut first = generate_schedule(&input, true).unwrap().sections;
        let mut second = generate_schedule(&input, true).unwrap().sections;
        first.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        second.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        prop_assert_eq!(first, second);
    }
}

/// B1: with no students, the schedule contains exactly the 8 seeded sections.
#[test]
fn empty_student_body_yields_only_seeded_sections() {
    let input = ScheduleInput {
        students: vec![],
        teachers: vec![Teacher {
            id: TeacherId("lbs1-0".into()),
            name: "LBS1".into(),
            certifications: HashSet::from([Department::SpecialEd]),
            max_sections: 5,
        }],
        courses: fixed_courses(),
        rooms: fixed_rooms(),
        config: ScheduleConfig::default(),
    };

    let schedule = generate_schedule(&input, true).unwrap();
    assert_eq!(schedule.sections.len(), 8);
    assert_eq!(
        schedule.sections.iter().filter(|s| s.course_id.0 == "lunch").count(),
        4
    );
    assert_eq!(
        schedule.sections.iter().filter(|s| s.course_id.0 == "sped-seminar").count(),
        4
    );
}

/// B3: a student requesting a course with no certified teacher in the faculty
/// gets only that course marked missing.
#[test]
fn unteachable_course_is_reported_missing_others_placed() {
    let courses = fixed_courses();
    // Last course requires SocialScience, which no teacher below holds.
    let unteachable = courses.last().unwrap().id.clone();

    let teachers = vec![
        Teacher {
            id: TeacherId("t-math".into()),
            name: "Math Teacher".into(),
            certifications: HashSet::from([Department::Math]),
            max_sections: 5,
        },
        Teacher {
            id: TeacherId("t-eng".into()),
            name: "English Teacher".into(),
            certifications: HashSet::from([Department::English]),
            max_sections: 5,
        },
        Teacher {
            id: TeacherId("t-sci".into()),
            name: "Science Teacher".into(),
            certifications: HashSet::from([Department::Science]),
            max_sections: 5,
        },
    ];

    let student = Student {
        id: StudentId("s1".into()),
        name: "Student One".into(),
        grade: "10".into(),
        required_courses: courses.iter().map(|c| c.id.clone()).collect(),
        elective_courses: vec![],
        inclusion: HashSet::new(),
        separate_class: HashSet::new(),
    };

    let input = ScheduleInput {
        students: vec![student],
        teachers,
        courses,
        rooms: fixed_rooms(),
        config: ScheduleConfig::default(),
    };

    let schedule = generate_schedule(&input, true).unwrap();
    assert_eq!(schedule.missing.len(), 1);
    assert_eq!(schedule.missing[0].course_id, unteachable);
}
