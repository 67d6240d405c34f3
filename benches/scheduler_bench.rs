use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use school_scheduler::scheduler::generate_schedule;
use school_scheduler::types::{
    Course, CourseId, Department, Room, RoomId, RoomType, Student, StudentId, Teacher, TeacherId,
    ScheduleConfig, ScheduleInput,
};
use std::collections::HashSet;

fn build_input(num_students: usize) -> ScheduleInput {
    let departments = [
        Department::Math,
        Department::English,
        Department::Science,
        Department::SocialScience,
    ];

    let courses: Vec<Course> = departments
        .iter()
        .enumerate()
        .map(|(i, &dept)| Course {
            id: CourseId(format!("course-{}", i)),
            name: format!("Course {}", i),
            required_endorsement: Some(dept),
            required_space: RoomType::Standard,
            min_section_size: 15,
            max_section_size: 28,
        })
        .collect();

    let teachers: Vec<Teacher> = departments
        .iter()
        .enumerate()
        .flat_map(|(i, &dept)| {
            (0..3).map(move |n| Teacher {
                id: TeacherId(format!("teacher-{}-{}", i, n)),
                name: format!("Teacher {}-{}", i, n),
                certifications: HashSet::from([dept]),
                max_sections: 5,
            })
        })
        .chain(std::iter::once(Teacher {
            id: TeacherId("lbs1-0".to_string()),
            name: "LBS1 Teacher".to_string(),
            certifications: HashSet::from([Department::SpecialEd]),
            max_sections: 5,
        }))
        .collect();

    let rooms = vec![
        Room { id: RoomId("standard-0".into()), room_type: RoomType::Standard, capacity_override: None },
        Room { id: RoomId("standard-1".into()), room_type: RoomType::Standard, capacity_override: None },
        Room { id: RoomId("standard-2".into()), room_type: RoomType::Standard, capacity_override: None },
        Room { id: RoomId("cafeteria".into()), room_type: RoomType::Cafeteria, capacity_override: None },
        Room { id: RoomId("sped-0".into()), room_type: RoomType::Sped, capacity_override: None },
    ];

    let students: Vec<Student> = (0..num_students)
        .map(|i| Student {
            id: StudentId(format!("student-{}", i)),
            name: format!("Student {}", i),
            grade: "10".to_string(),
            required_courses: courses.iter().map(|c| c.id.clone()).collect(),
            elective_courses: vec![],
            inclusion: if i % 10 == 0 { HashSet::from([Department::Math]) } else { HashSet::new() },
            separate_class: HashSet::new(),
        })
        .collect();

    ScheduleInput {
        students,
        teachers,
        courses,
        rooms,
        config: ScheduleConfig::default(),
    }
}

fn bench_generate_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_schedule");

    for &size in &[50usize, 200, 500] {
        let input = build_input(size);
        group.bench_with_input(BenchmarkId::new("students", size), &input, |b, input| {
            b.iter(|| black_box(generate_schedule(black_box(input), true).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_schedule);
criterion_main!(benches);
