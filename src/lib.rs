//! High-school master scheduler.
//!
//! Builds a full course schedule from a student/teacher/course/room catalog
//! by deterministic greedy placement, not a SAT/ILP solve.
//!
//! # Algorithm Overview
//!
//! 1. **Seed**: materialize the four lunch sections and four SPED-seminar
//!    sections, one at each half-block.
//! 2. **Prioritize**: turn every student's required courses into tickets and
//!    sort them by projected scarcity and IEP status.
//! 3. **Place**: walk the ticket queue, attaching students to existing
//!    sections where a free period lines up or creating a new section when
//!    none does; inclusion and separate-class demand additionally drives
//!    co-teacher assignment.
//! 4. **Overlay**: enforce exactly one lunch section (and, where needed, one
//!    SPED-seminar section) per student.
//!
//! Same inputs and seed always produce a byte-identical schedule.
//!
//! # Example
//!
//! ```no_run
//! use school_scheduler::parser::load_input_from_dir;
//! use school_scheduler::scheduler::generate_schedule;
//! use school_scheduler::validator::validate_schedule;
//! use std::path::Path;
//!
//! let input = load_input_from_dir(Path::new("./data/demo")).unwrap();
//! let schedule = generate_schedule(&input, false).unwrap();
//! let report = validate_schedule(&schedule, &input);
//! println!("Violations: {}", report.violations.len());
//! ```

pub mod error;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod types;
pub mod validator;

pub use error::{Result, SchedulerError};
