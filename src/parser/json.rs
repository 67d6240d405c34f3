use crate::error::{Result, SchedulerError};
use crate::types::{Course, Room, ScheduleConfig, ScheduleInput, Student, Teacher};
use std::fs;
use std::path::Path;

/// Loads all input data from a directory (fail-fast on validation errors, §7).
pub fn load_input_from_dir(dir: &Path) -> Result<ScheduleInput> {
    let students = load_students(&dir.join("students.json"))?;
    let teachers = load_teachers(&dir.join("teachers.json"))?;
    let courses = load_courses(&dir.join("courses.json"))?;
    let rooms = load_rooms(&dir.join("rooms.json"))?;
    let config = load_config_or_default(&dir.join("config.toml"))?;

    let input = ScheduleInput {
        students,
        teachers,
        courses,
        rooms,
        config,
    };

    super::validate_input(&input)?;
    Ok(input)
}

/// Loads students from a JSON file.
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    load_json_file(path)
}

/// Loads teachers from a JSON file.
pub fn load_teachers(path: &Path) -> Result<Vec<Teacher>> {
    load_json_file(path)
}

/// Loads courses from a JSON file.
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    load_json_file(path)
}

/// Loads rooms from a JSON file.
pub fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    load_json_file(path)
}

/// Loads run config from a TOML file, or falls back to defaults if absent.
pub fn load_config_or_default(path: &Path) -> Result<ScheduleConfig> {
    if !path.exists() {
        return Ok(ScheduleConfig::default());
    }

    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| {
        SchedulerError::TomlParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SchedulerError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}
