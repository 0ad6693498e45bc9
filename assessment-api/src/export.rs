use crate::error::{AppError, AppResult};
use crate::storage::{Database, ExportRow};
use shared_types::Question;
use tracing::info;

pub const FIXED_COLUMNS: [&str; 4] = ["Assessment ID", "Household Name", "Household ID", "Date Taken"];

/// Serializes the wide assessment table: the fixed identity columns followed by one
/// column per question, in the order given.
pub fn write_csv(questions: &[Question], rows: &[ExportRow]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let header = FIXED_COLUMNS
        .iter()
        .copied()
        .chain(questions.iter().map(|q| q.text.as_str()));
    writer.write_record(header)?;

    for row in rows {
        let mut record = Vec::with_capacity(FIXED_COLUMNS.len() + questions.len());
        record.push(row.assessment_id.to_string());
        record.push(row.household_name.clone().unwrap_or_default());
        record.push(row.household_id.clone());
        record.push(row.date_taken.clone());
        record.extend(
            questions
                .iter()
                .map(|q| row.answers.get(&q.id).cloned().unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush CSV buffer: {e}")))
}

/// Builds the full report from the database
pub fn assessments_report(db: &Database) -> AppResult<Vec<u8>> {
    let questions = db.list_questions()?;
    let rows = db.export_rows()?;
    let bytes = write_csv(&questions, &rows)?;
    info!(
        rows = rows.len(),
        columns = FIXED_COLUMNS.len() + questions.len(),
        "Generated assessments report"
    );
    Ok(bytes)
}
