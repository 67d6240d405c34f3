use thiserror::Error;

/// Domain-specific errors for the scheduler. Everything above
/// `InvariantViolation` is a fail-fast input problem (§7): the engine refuses
/// to start. `InvariantViolation` is reserved for a programming bug —
/// ordinary control flow never raises it.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse TOML in '{file}': {message}")]
    TomlParse { file: String, message: String },

    #[error("Student '{student_id}' references unknown course '{course_id}'")]
    UnknownCourse { student_id: String, course_id: String },

    #[error("Course '{course_id}' references unknown endorsement")]
    UnknownEndorsement { course_id: String },

    #[error("Section '{section_id}' references unknown teacher '{teacher_id}'")]
    UnknownTeacher { section_id: String, teacher_id: String },

    #[error("Duplicate ID found: {id_type} '{id}'")]
    DuplicateId { id_type: String, id: String },

    #[error("Schedule invariant violated: {0}")]
    InvariantViolation(String),
}

/// Use anyhow::Result at application boundaries
pub type Result<T> = anyhow::Result<T>;
