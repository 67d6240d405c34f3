use serde::{Deserialize, Serialize};

/// Fixed endorsement vocabulary a teacher may hold and a course may require.
/// `SpecialEd` doubles as the LBS1 credential referenced throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    English,
    Math,
    SocialScience,
    WorldLanguage,
    Science,
    Cte,
    Rotc,
    Art,
    PhysEd,
    SpecialEd,
}

impl Department {
    pub const ALL: [Department; 10] = [
        Department::English,
        Department::Math,
        Department::SocialScience,
        Department::WorldLanguage,
        Department::Science,
        Department::Cte,
        Department::Rotc,
        Department::Art,
        Department::PhysEd,
        Department::SpecialEd,
    ];
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Department::English => "English",
            Department::Math => "Math",
            Department::SocialScience => "Social Science",
            Department::WorldLanguage => "World Language",
            Department::Science => "Science",
            Department::Cte => "CTE",
            Department::Rotc => "ROTC",
            Department::Art => "Art",
            Department::PhysEd => "Physical Education",
            Department::SpecialEd => "Special Education",
        };
        write!(f, "{}", label)
    }
}
