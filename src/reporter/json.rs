use crate::error::Result;
use crate::types::Schedule;

/// Generates a JSON dump of the complete schedule.
pub fn generate_json_report(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// Summary statistics as JSON, without the full section/roster detail.
#[derive(serde::Serialize)]
pub struct JsonSummary {
    pub total_sections: usize,
    pub total_assignments: usize,
    pub missing_requirements: usize,
    pub solve_time_ms: u64,
}

pub fn generate_json_summary(schedule: &Schedule) -> Result<String> {
    let summary = JsonSummary {
        total_sections: schedule.sections.len(),
        total_assignments: schedule.total_assignments(),
        missing_requirements: schedule.missing.len(),
        solve_time_ms: schedule.metadata.solve_time_ms,
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
