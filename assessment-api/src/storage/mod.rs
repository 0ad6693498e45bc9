pub mod schema;

use crate::error::{AppError, AppResult};
use crate::seed::SeedQuestion;
use crate::submission::Submission;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use shared_types::{AssessmentSummary, Household, HouseholdProfile, Question, QuestionType};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Timestamp layout used for `assessments.date_taken`, compatible with SQLite's `DATE()`
pub const DATE_TAKEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of persisting one submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub household_row_id: i64,
    pub household_created: bool,
    pub assessment_id: i64,
    pub answers_recorded: usize,
}

/// One assessment flattened for export, answers keyed by question id
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub assessment_id: i64,
    pub household_name: Option<String>,
    pub household_id: String,
    pub date_taken: String,
    pub answers: HashMap<i64, String>,
}

pub struct Database {
    connection: Mutex<Connection>,
}

impl Database {
    pub fn open(db_path: &Path) -> AppResult<Self> {
        // Ensure the database directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::init(Connection::open(db_path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(mut conn: Connection) -> AppResult<Self> {
        // Enable foreign key constraints (SQLite3 has them disabled by default)
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        schema::run_migrations(&mut conn)?;

        Ok(Database {
            connection: Mutex::new(conn),
        })
    }

    pub(crate) fn lock(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))
    }

    /// Drops every table and reruns the migrations from scratch
    pub fn reset_schema(&self) -> AppResult<()> {
        let mut conn = self.lock()?;
        schema::drop_all(&conn)?;
        schema::run_migrations(&mut conn)?;
        info!("Schema dropped and recreated");
        Ok(())
    }

    pub fn insert_questions(&self, catalog: &[SeedQuestion]) -> AppResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO questions (section, question_type, text, display_order)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (order, question) in catalog.iter().enumerate() {
                stmt.execute(params![
                    question.section,
                    question.question_type.as_str(),
                    question.text,
                    order as i64
                ])?;
            }
        }
        tx.commit()?;
        Ok(catalog.len())
    }

    pub fn list_questions(&self) -> AppResult<Vec<Question>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, section, question_type, text, display_order
             FROM questions
             ORDER BY display_order ASC, id ASC",
        )?;

        let questions = stmt
            .query_map([], |row| {
                let type_str: String = row.get(2)?;
                let question_type = type_str.parse::<QuestionType>().map_err(|_| {
                    rusqlite::Error::InvalidColumnType(
                        2,
                        type_str.clone(),
                        rusqlite::types::Type::Text,
                    )
                })?;

                Ok(Question {
                    id: row.get(0)?,
                    section: row.get(1)?,
                    question_type,
                    text: row.get(3)?,
                    order: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }

    pub fn find_household(&self, household_id: &str) -> AppResult<Option<Household>> {
        let conn = self.lock()?;
        let household = conn
            .query_row(
                "SELECT id, household_code, name, gender, relationship_to_grantee, province,
                        municipality, barangay, parent_group_name, contact_number
                 FROM households WHERE household_code = ?1",
                params![household_id],
                |row| {
                    Ok(Household {
                        id: row.get(0)?,
                        household_id: row.get(1)?,
                        profile: HouseholdProfile {
                            name: row.get(2)?,
                            gender: row.get(3)?,
                            relationship_to_grantee: row.get(4)?,
                            province: row.get(5)?,
                            municipality: row.get(6)?,
                            barangay: row.get(7)?,
                            parent_group_name: row.get(8)?,
                            contact_number: row.get(9)?,
                        },
                    })
                },
            )
            .optional()?;

        Ok(household)
    }

    /// Persists one submission atomically.
    ///
    /// The household is matched by its household ID and created from the submitted
    /// profile only if it does not exist yet. A new assessment is always created. Any
    /// failure, such as an answer pointing at an unknown question, rolls back everything.
    pub fn record_submission(
        &self,
        submission: &Submission,
        taken_at: NaiveDateTime,
    ) -> AppResult<SubmissionReceipt> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM households WHERE household_code = ?1",
                params![submission.household_id],
                |row| row.get(0),
            )
            .optional()?;

        let (household_row_id, household_created) = match existing {
            Some(id) => (id, false),
            None => {
                let profile = &submission.profile;
                tx.execute(
                    "INSERT INTO households
                        (household_code, name, gender, relationship_to_grantee, province,
                         municipality, barangay, parent_group_name, contact_number)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        submission.household_id,
                        profile.name,
                        profile.gender,
                        profile.relationship_to_grantee,
                        profile.province,
                        profile.municipality,
                        profile.barangay,
                        profile.parent_group_name,
                        profile.contact_number,
                    ],
                )?;
                (tx.last_insert_rowid(), true)
            }
        };

        tx.execute(
            "INSERT INTO assessments (household_id, date_taken) VALUES (?1, ?2)",
            params![
                household_row_id,
                taken_at.format(DATE_TAKEN_FORMAT).to_string()
            ],
        )?;
        let assessment_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO answers (assessment_id, question_id, value) VALUES (?1, ?2, ?3)",
            )?;
            for answer in &submission.answers {
                stmt.execute(params![assessment_id, answer.question_id, answer.value])?;
            }
        }

        tx.commit()?;
        debug!(assessment_id, household_row_id, "Submission committed");

        Ok(SubmissionReceipt {
            household_row_id,
            household_created,
            assessment_id,
            answers_recorded: submission.answers.len(),
        })
    }

    /// Assessments with their household, newest first
    pub fn list_assessments(&self) -> AppResult<Vec<AssessmentSummary>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT a.id, h.household_code, h.name, h.province, h.municipality, h.barangay,
                    a.date_taken,
                    (SELECT COUNT(*) FROM answers WHERE answers.assessment_id = a.id)
             FROM assessments a
             JOIN households h ON h.id = a.household_id
             ORDER BY a.date_taken DESC, a.id DESC",
        )?;

        let assessments = stmt
            .query_map([], |row| {
                Ok(AssessmentSummary {
                    id: row.get(0)?,
                    household_id: row.get(1)?,
                    household_name: row.get(2)?,
                    province: row.get(3)?,
                    municipality: row.get(4)?,
                    barangay: row.get(5)?,
                    date_taken: row.get(6)?,
                    answer_count: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(assessments)
    }

    /// Every assessment in id order with its answers, for the CSV report
    pub fn export_rows(&self) -> AppResult<Vec<ExportRow>> {
        let conn = self.lock()?;

        let mut rows = conn
            .prepare(
                "SELECT a.id, h.name, h.household_code, a.date_taken
                 FROM assessments a
                 JOIN households h ON h.id = a.household_id
                 ORDER BY a.id ASC",
            )?
            .query_map([], |row| {
                Ok(ExportRow {
                    assessment_id: row.get(0)?,
                    household_name: row.get(1)?,
                    household_id: row.get(2)?,
                    date_taken: row.get(3)?,
                    answers: HashMap::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let index: HashMap<i64, usize> = rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.assessment_id, position))
            .collect();

        let mut stmt = conn.prepare(
            "SELECT assessment_id, question_id, value
             FROM answers
             ORDER BY id ASC",
        )?;
        let answers = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;

        for answer in answers {
            let (assessment_id, question_id, value) = answer?;
            if let (Some(&position), Some(value)) = (index.get(&assessment_id), value) {
                rows[position].answers.insert(question_id, value);
            }
        }

        Ok(rows)
    }

    pub fn count_questions(&self) -> AppResult<i64> {
        self.count("questions")
    }

    pub fn count_assessments(&self) -> AppResult<i64> {
        self.count("assessments")
    }

    pub fn count_answers(&self) -> AppResult<i64> {
        self.count("answers")
    }

    pub fn count_households(&self) -> AppResult<i64> {
        self.count("households")
    }

    fn count(&self, table: &str) -> AppResult<i64> {
        let conn = self.lock()?;
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}
