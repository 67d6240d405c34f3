use super::{Course, Room, Student, Teacher};
use serde::{Deserialize, Serialize};

/// Run-level knobs, loaded from `config.toml` or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// PRNG seed for the uniformly-random placement path (§4.6 step 5) and any
    /// other tie-break that needs one.
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_min_section_size")]
    pub default_min_section_size: u32,
    #[serde(default = "default_max_section_size")]
    pub default_max_section_size: u32,
    #[serde(default = "default_teacher_max_sections")]
    pub default_teacher_max_sections: u8,
    /// Cap on distinct preps for a gen-ed teacher (§3 invariant 5).
    #[serde(default = "default_max_preps")]
    pub max_preps: usize,
}

fn default_min_section_size() -> u32 {
    20
}

fn default_max_section_size() -> u32 {
    30
}

fn default_teacher_max_sections() -> u8 {
    5
}

fn default_max_preps() -> usize {
    2
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            default_min_section_size: default_min_section_size(),
            default_max_section_size: default_max_section_size(),
            default_teacher_max_sections: default_teacher_max_sections(),
            max_preps: default_max_preps(),
        }
    }
}

/// All input data bundled together, mirroring the engine's abstract
/// `(catalog, students, faculty, rooms)` inputs (§6).
#[derive(Debug)]
pub struct ScheduleInput {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub rooms: Vec<Room>,
    pub config: ScheduleConfig,
}
