use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod reporting;
pub mod survey;
pub mod typescript_gen;

pub use typescript_gen::{generate_typescript_definitions, EXPORTED_TYPES};

pub use reporting::{
    ChartData, ChartDataset, DailyCount, DashboardResponse, ProvinceDashboardResponse,
    SectionAverage,
};
pub use survey::{
    AssessmentListResponse, AssessmentSummary, Household, HouseholdProfile, Question,
    QuestionSection, QuestionType,
};

// Shared models for the assessment server and its dashboard front end

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServerStatus {
    pub status: String,
    pub version: String,
    #[ts(type = "number")]
    pub uptime: u64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
