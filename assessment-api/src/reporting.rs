use crate::error::AppResult;
use crate::storage::Database;
use rusqlite::params;
use sha2::{Digest, Sha256};
use shared_types::{
    ChartData, ChartDataset, DailyCount, DashboardResponse, ProvinceDashboardResponse,
    SectionAverage,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Mean rating for one (group, section) cell, before reshaping
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedAverage {
    pub group: String,
    pub section: String,
    pub average: Option<f64>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Deterministic series colors derived from the section name: `(background, border)`
pub fn section_color(section: &str) -> (String, String) {
    let digest = Sha256::digest(section.as_bytes());
    let (r, g, b) = (digest[0], digest[1], digest[2]);
    (
        format!("rgba({r}, {g}, {b}, 0.5)"),
        format!("rgba({r}, {g}, {b}, 1)"),
    )
}

/// Pivots grouped averages into one dataset per section over sorted group labels.
/// Cells with no row are filled with 0.
pub fn build_grouped_chart(rows: &[GroupedAverage]) -> ChartData {
    let mut labels = BTreeSet::new();
    let mut cells: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();

    for row in rows {
        if row.group.is_empty() || row.section.is_empty() {
            continue;
        }
        labels.insert(row.group.as_str());
        cells
            .entry(row.section.as_str())
            .or_default()
            .insert(row.group.as_str(), round2(row.average.unwrap_or(0.0)));
    }

    let datasets = cells
        .into_iter()
        .map(|(section, values)| {
            let (background_color, border_color) = section_color(section);
            ChartDataset {
                label: section.to_string(),
                data: labels
                    .iter()
                    .map(|label| values.get(label).copied().unwrap_or(0.0))
                    .collect(),
                background_color,
                border_color,
                border_width: 1,
            }
        })
        .collect();

    ChartData {
        labels: labels.into_iter().map(str::to_string).collect(),
        datasets,
    }
}

/// Average rating per section, narrative questions excluded
pub fn section_averages(db: &Database) -> AppResult<Vec<SectionAverage>> {
    let conn = db.lock()?;
    let mut stmt = conn.prepare(
        "SELECT q.section, AVG(CAST(a.value AS REAL))
         FROM answers a
         JOIN questions q ON q.id = a.question_id
         WHERE q.question_type = 'rating'
         GROUP BY q.section
         ORDER BY q.section ASC",
    )?;

    let averages = stmt
        .query_map([], |row| {
            let average: Option<f64> = row.get(1)?;
            Ok(SectionAverage {
                section: row.get(0)?,
                average: round2(average.unwrap_or(0.0)),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(averages)
}

pub fn assessments_per_day(db: &Database) -> AppResult<Vec<DailyCount>> {
    let conn = db.lock()?;
    let mut stmt = conn.prepare(
        "SELECT DATE(date_taken) AS day, COUNT(id)
         FROM assessments
         GROUP BY day
         ORDER BY day ASC",
    )?;

    let counts = stmt
        .query_map([], |row| {
            Ok(DailyCount {
                date: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(counts)
}

fn grouped_averages(
    db: &Database,
    group_column: &str,
    province: Option<&str>,
) -> AppResult<Vec<GroupedAverage>> {
    let conn = db.lock()?;
    let sql = format!(
        "SELECT h.{group_column}, q.section, AVG(CAST(a.value AS REAL))
         FROM answers a
         JOIN questions q ON q.id = a.question_id
         JOIN assessments s ON s.id = a.assessment_id
         JOIN households h ON h.id = s.household_id
         WHERE q.question_type = 'rating'
           AND h.{group_column} IS NOT NULL AND h.{group_column} <> ''
           AND (?1 IS NULL OR h.province = ?1)
         GROUP BY h.{group_column}, q.section"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![province], |row| {
            Ok(GroupedAverage {
                group: row.get(0)?,
                section: row.get(1)?,
                average: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

pub fn province_breakdown(db: &Database) -> AppResult<ChartData> {
    let rows = grouped_averages(db, "province", None)?;
    Ok(build_grouped_chart(&rows))
}

/// Per-municipality breakdown within one province; an unknown province yields an empty chart
pub fn municipality_breakdown(db: &Database, province: &str) -> AppResult<ChartData> {
    let rows = grouped_averages(db, "municipality", Some(province))?;
    Ok(build_grouped_chart(&rows))
}

pub fn dashboard(db: &Database) -> AppResult<DashboardResponse> {
    let response = DashboardResponse {
        section_averages: section_averages(db)?,
        assessments_over_time: assessments_per_day(db)?,
        province_breakdown: province_breakdown(db)?,
    };
    debug!(
        sections = response.section_averages.len(),
        days = response.assessments_over_time.len(),
        provinces = response.province_breakdown.labels.len(),
        "Dashboard aggregated"
    );
    Ok(response)
}

pub fn province_dashboard(db: &Database, province: &str) -> AppResult<ProvinceDashboardResponse> {
    Ok(ProvinceDashboardResponse {
        province: province.to_string(),
        municipality_breakdown: municipality_breakdown(db, province)?,
    })
}
