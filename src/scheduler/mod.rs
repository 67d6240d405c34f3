mod constraints;
mod overlays;
mod placement;
mod prioritizer;
mod room_assigner;

pub use constraints::*;
pub use overlays::*;
pub use placement::*;
pub use prioritizer::*;
pub use room_assigner::*;

use crate::error::Result;
use crate::types::{CourseId, Schedule, ScheduleInput, StudentId};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::time::Instant;

fn progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}

/// Builds an empty schedule seeded with the four lunch and four SPED-seminar
/// sections, matching the Engine API's `make_schedule` (§6).
pub fn make_schedule(input: &ScheduleInput) -> Schedule {
    let mut schedule = Schedule::new();
    schedule.sections = seed_sections(&input.rooms);
    assign_seminar_co_teachers(&mut schedule, &input.teachers);
    schedule
}

/// Runs the greedy placement pipeline over an already-seeded schedule,
/// matching the Engine API's `run` (§6): prioritize, place, overlay lunch.
pub fn run(schedule: Schedule, input: &ScheduleInput) -> Schedule {
    let mut schedule = schedule;
    let tickets = build_tickets(&input.students, &input.courses);

    let students: HashMap<&StudentId, &crate::types::Student> =
        input.students.iter().map(|s| (&s.id, s)).collect();
    let courses: HashMap<&CourseId, &crate::types::Course> =
        input.courses.iter().map(|c| (&c.id, c)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(input.config.seed);

    place_tickets(
        &mut schedule,
        &tickets,
        &students,
        &courses,
        &input.teachers,
        &input.rooms,
        input.config.max_preps,
        &mut rng,
    );

    for student in &input.students {
        enforce_sped_seminar(&mut schedule, student);
        enforce_lunch(&mut schedule, student);
    }

    schedule
}

/// Main entry point for schedule generation: seed, prioritize, place, overlay,
/// with phase-by-phase progress reporting.
pub fn generate_schedule(input: &ScheduleInput, quiet: bool) -> Result<Schedule> {
    let start_time = Instant::now();
    let progress = progress_bar(quiet);

    progress.set_message("Seeding lunch and SPED-seminar sections...");
    progress.set_position(10);
    let schedule = make_schedule(input);

    progress.set_message("Prioritizing student demand...");
    progress.set_position(30);

    progress.set_message("Placing students into sections...");
    progress.set_position(50);
    let mut schedule = run(schedule, input);
    schedule.metadata.seed = input.config.seed;

    progress.set_message("Enforcing lunch assignments...");
    progress.set_position(90);

    progress.set_message("Complete!");
    progress.set_position(100);
    progress.finish_with_message("Schedule generated successfully");

    schedule.metadata.solve_time_ms = start_time.elapsed().as_millis() as u64;
    Ok(schedule)
}
