use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use school_scheduler::parser::{load_input_from_dir, validate_input};
use school_scheduler::reporter::{
    generate_reports, generate_student_schedule, generate_teacher_schedule, print_summary,
    OutputFormat,
};
use school_scheduler::scheduler::generate_schedule;
use school_scheduler::types::{StudentId, TeacherId};
use school_scheduler::validator::validate_schedule;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "school-scheduler")]
#[command(about = "Deterministic greedy high-school master scheduler")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run demo with sample data
    Demo {
        /// PRNG seed for the placement engine
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Generate a schedule from input data
    Schedule {
        /// Directory containing input JSON files
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for schedule files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress progress output, print JSON summary only
        #[arg(short, long)]
        quiet: bool,

        /// PRNG seed for the placement engine; overrides config.toml if set
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate an existing schedule against §3 invariants
    Validate {
        /// Path to schedule.json file
        #[arg(short, long)]
        schedule: PathBuf,

        /// Directory containing input data for validation
        #[arg(short, long)]
        data: PathBuf,

        /// Show detailed validation results
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate reports from a schedule
    Report {
        /// Path to schedule.json file
        #[arg(short, long)]
        schedule: PathBuf,

        /// Directory containing input data
        #[arg(short, long)]
        data: PathBuf,

        /// Output format: json, markdown, or text
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Generate schedule for specific student ID
        #[arg(long)]
        student: Option<String>,

        /// Generate schedule for specific teacher ID
        #[arg(long)]
        teacher: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed } => run_demo(seed),
        Commands::Schedule {
            data,
            output,
            format,
            quiet,
            seed,
        } => run_schedule(&data, &output, &format, quiet, seed),
        Commands::Validate { schedule, data, verbose } => run_validate(&schedule, &data, verbose),
        Commands::Report {
            schedule,
            data,
            format,
            student,
            teacher,
        } => run_report(&schedule, &data, &format, student, teacher),
    }
}

fn run_demo(seed: u64) -> Result<()> {
    println!("{}", "School Scheduler Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let demo_path = PathBuf::from("demos/demo");
    let output_path = PathBuf::from("output");

    if !demo_path.join("students.json").exists() {
        println!("{}", "Demo data not found. Creating sample data...".yellow());
        create_demo_data(&demo_path)?;
    }

    println!("Loading demo data from: {}", demo_path.display());

    let mut input = load_input_from_dir(&demo_path).context("Failed to load demo data")?;
    input.config.seed = seed;

    println!(
        "Loaded {} students, {} teachers, {} courses, {} rooms",
        input.students.len(),
        input.teachers.len(),
        input.courses.len(),
        input.rooms.len()
    );

    println!("\nGenerating schedule...\n");
    let schedule = generate_schedule(&input, false)?;
    let validation = validate_schedule(&schedule, &input);

    print_summary(&schedule, &validation);

    generate_reports(
        &schedule,
        &input,
        &validation,
        &output_path,
        &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
    )?;

    println!("Reports written to: {}", output_path.display().to_string().green());

    Ok(())
}

fn run_schedule(data: &PathBuf, output: &PathBuf, format: &str, quiet: bool, seed: Option<u64>) -> Result<()> {
    let mut input = load_input_from_dir(data).context("Failed to load input data")?;
    if let Some(seed) = seed {
        input.config.seed = seed;
    }

    if !quiet {
        validate_input(&input)?;
        println!(
            "Loaded {} students, {} teachers, {} courses, {} rooms",
            input.students.len(),
            input.teachers.len(),
            input.courses.len(),
            input.rooms.len()
        );
    }

    let schedule = generate_schedule(&input, quiet)?;
    let validation = validate_schedule(&schedule, &input);

    let formats = parse_formats(format);
    generate_reports(&schedule, &input, &validation, output, &formats)?;

    if quiet {
        let summary = school_scheduler::reporter::generate_json_summary(&schedule)?;
        println!("{}", summary);
    } else {
        print_summary(&schedule, &validation);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_validate(schedule_path: &PathBuf, data: &PathBuf, verbose: bool) -> Result<()> {
    let input = load_input_from_dir(data)?;

    let schedule_json = std::fs::read_to_string(schedule_path)?;
    let schedule: school_scheduler::types::Schedule = serde_json::from_str(&schedule_json)?;

    let validation = validate_schedule(&schedule, &input);

    if validation.is_valid {
        println!("{}", "✓ Schedule is valid".green().bold());
    } else {
        println!("{}", "✗ Schedule has violations".red().bold());
        for v in &validation.violations {
            println!("  - {}: {}", v.constraint.red(), v.message);
        }
    }

    if verbose {
        println!("\n{}", "Statistics:".bold());
        println!("  Sections: {}", validation.statistics.total_sections);
        println!("  Assignments: {}", validation.statistics.total_assignments);
        println!("  Missing requirements: {}", validation.statistics.missing_requirements);
        println!("  Avg fill rate: {:.1}%", validation.statistics.avg_section_fill_rate);
    }

    Ok(())
}

fn run_report(
    schedule_path: &PathBuf,
    data: &PathBuf,
    _format: &str,
    student: Option<String>,
    teacher: Option<String>,
) -> Result<()> {
    let input = load_input_from_dir(data)?;

    let schedule_json = std::fs::read_to_string(schedule_path)?;
    let schedule: school_scheduler::types::Schedule = serde_json::from_str(&schedule_json)?;

    if let Some(student_id) = student {
        let id = StudentId(student_id);
        match generate_student_schedule(&schedule, &input, &id) {
            Some(report) => println!("{}", report),
            None => println!("Student not found"),
        }
    } else if let Some(teacher_id) = teacher {
        let id = TeacherId(teacher_id);
        match generate_teacher_schedule(&schedule, &input, &id) {
            Some(report) => println!("{}", report),
            None => println!("Teacher not found"),
        }
    } else {
        let validation = validate_schedule(&schedule, &input);
        print_summary(&schedule, &validation);
    }

    Ok(())
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

/// Writes a small fixed demo catalog. This is intentionally minimal — the
/// scheduling engine is the thing under test, not the fixture generator.
fn create_demo_data(path: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let students = serde_json::json!([
        {"id": "s001", "name": "Alice Johnson", "grade": "10", "required_courses": ["math10", "eng10", "sci10"]},
        {"id": "s002", "name": "Bob Smith", "grade": "10", "required_courses": ["math10", "eng10", "sci10"]},
        {"id": "s003", "name": "Carol Davis", "grade": "10", "required_courses": ["math10", "eng10", "sci10"], "inclusion": ["Science"]},
        {"id": "s004", "name": "David Wilson", "grade": "11", "required_courses": ["math11", "eng11"]},
        {"id": "s005", "name": "Eve Brown", "grade": "11", "required_courses": ["math11", "eng11"]},
        {"id": "s006", "name": "Frank Miller", "grade": "12", "required_courses": ["math12", "gov"], "separate_class": ["Math"]},
        {"id": "s007", "name": "Grace Lee", "grade": "12", "required_courses": ["math12", "gov"]},
        {"id": "s008", "name": "Henry Taylor", "grade": "9", "required_courses": ["eng10"]}
    ]);
    std::fs::write(path.join("students.json"), serde_json::to_string_pretty(&students)?)?;

    let teachers = serde_json::json!([
        {"id": "t001", "name": "Ms. Anderson", "certifications": ["Math"], "max_sections": 4},
        {"id": "t002", "name": "Mr. Baker", "certifications": ["English"], "max_sections": 4},
        {"id": "t003", "name": "Dr. Clark", "certifications": ["Science"], "max_sections": 3},
        {"id": "t004", "name": "Ms. Davis", "certifications": ["SocialScience"], "max_sections": 2},
        {"id": "t005", "name": "Ms. Ortiz", "certifications": ["Math", "SpecialEd"], "max_sections": 4}
    ]);
    std::fs::write(path.join("teachers.json"), serde_json::to_string_pretty(&teachers)?)?;

    let courses = serde_json::json!([
        {"id": "math10", "name": "Algebra 2", "required_endorsement": "Math", "required_space": "standard", "min_section_size": 15, "max_section_size": 28},
        {"id": "math11", "name": "Pre-Calculus", "required_endorsement": "Math", "required_space": "standard", "min_section_size": 15, "max_section_size": 28},
        {"id": "math12", "name": "Calculus", "required_endorsement": "Math", "required_space": "standard", "min_section_size": 10, "max_section_size": 28},
        {"id": "eng10", "name": "English 10", "required_endorsement": "English", "required_space": "standard", "min_section_size": 15, "max_section_size": 28},
        {"id": "eng11", "name": "English 11", "required_endorsement": "English", "required_space": "standard", "min_section_size": 15, "max_section_size": 28},
        {"id": "sci10", "name": "Biology", "required_endorsement": "Science", "required_space": "lab", "min_section_size": 12, "max_section_size": 24},
        {"id": "gov", "name": "Government", "required_endorsement": "SocialScience", "required_space": "standard", "min_section_size": 10, "max_section_size": 28}
    ]);
    std::fs::write(path.join("courses.json"), serde_json::to_string_pretty(&courses)?)?;

    let rooms = serde_json::json!([
        {"id": "101", "room_type": "standard"},
        {"id": "102", "room_type": "standard"},
        {"id": "103", "room_type": "standard"},
        {"id": "201", "room_type": "lab"},
        {"id": "301", "room_type": "sped"},
        {"id": "cafeteria", "room_type": "cafeteria"}
    ]);
    std::fs::write(path.join("rooms.json"), serde_json::to_string_pretty(&rooms)?)?;

    println!("{}", "Demo data created successfully!".green());
    Ok(())
}
