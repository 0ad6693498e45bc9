use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Mean rating of one section across all answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionAverage {
    pub section: String,
    pub average: f64,
}

/// Number of assessments submitted on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyCount {
    pub date: String,
    #[ts(type = "number")]
    pub count: i64,
}

/// One bar series, shaped the way Chart.js expects it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardResponse {
    pub section_averages: Vec<SectionAverage>,
    pub assessments_over_time: Vec<DailyCount>,
    pub province_breakdown: ChartData,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProvinceDashboardResponse {
    pub province: String,
    pub municipality_breakdown: ChartData,
}
