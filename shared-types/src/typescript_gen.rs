/// Every type served by the JSON endpoints, in declaration order
pub const EXPORTED_TYPES: &[&str] = &[
    "QuestionType",
    "Question",
    "QuestionSection",
    "HouseholdProfile",
    "Household",
    "AssessmentSummary",
    "AssessmentListResponse",
    "SectionAverage",
    "DailyCount",
    "ChartDataset",
    "ChartData",
    "DashboardResponse",
    "ProvinceDashboardResponse",
    "ServerStatus",
    "ErrorResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;
    use ts_rs::TS;

    let result = match name {
        "QuestionType" => QuestionType::export_to_string()?,
        "Question" => Question::export_to_string()?,
        "QuestionSection" => QuestionSection::export_to_string()?,
        "HouseholdProfile" => HouseholdProfile::export_to_string()?,
        "Household" => Household::export_to_string()?,
        "AssessmentSummary" => AssessmentSummary::export_to_string()?,
        "AssessmentListResponse" => AssessmentListResponse::export_to_string()?,

        "SectionAverage" => SectionAverage::export_to_string()?,
        "DailyCount" => DailyCount::export_to_string()?,
        "ChartDataset" => ChartDataset::export_to_string()?,
        "ChartData" => ChartData::export_to_string()?,
        "DashboardResponse" => DashboardResponse::export_to_string()?,
        "ProvinceDashboardResponse" => ProvinceDashboardResponse::export_to_string()?,

        "ServerStatus" => ServerStatus::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}
