use crate::error::{AppError, AppResult};
use shared_types::HouseholdProfile;
use std::collections::HashSet;
use tracing::warn;

/// Form fields carrying an answer are named `q-<question id>`
pub const QUESTION_FIELD_PREFIX: &str = "q-";

pub const HOUSEHOLD_ID_FIELD: &str = "household_id";

pub const MISSING_HOUSEHOLD_ID: &str = "Household ID is required.";

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerInput {
    pub question_id: i64,
    pub value: String,
}

/// A validated questionnaire submission, ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub household_id: String,
    pub profile: HouseholdProfile,
    pub answers: Vec<AnswerInput>,
}

impl Submission {
    /// Builds a submission from raw form fields in the order they were posted.
    ///
    /// Fails only when the household ID is missing or blank. Blank answers are dropped
    /// here so they never reach the database. When a field is repeated only its first
    /// occurrence counts, so each question yields at most one answer.
    pub fn from_fields<I, K, V>(fields: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut household_id = None;
        let mut profile = HouseholdProfile::default();
        let mut answers = Vec::new();
        let mut seen_questions = HashSet::new();
        let mut seen_fields = HashSet::new();

        for (key, value) in fields {
            let key = key.as_ref();
            let value = value.as_ref().trim();

            if let Some(raw_id) = key.strip_prefix(QUESTION_FIELD_PREFIX) {
                let Ok(question_id) = raw_id.parse::<i64>() else {
                    warn!(field = key, "Ignoring question field without a numeric id");
                    continue;
                };
                if !seen_questions.insert(question_id) {
                    warn!(question_id, "Ignoring repeated answer field");
                    continue;
                }
                if !value.is_empty() {
                    answers.push(AnswerInput {
                        question_id,
                        value: value.to_string(),
                    });
                }
                continue;
            }

            let slot = match key {
                HOUSEHOLD_ID_FIELD => &mut household_id,
                "name" => &mut profile.name,
                "gender" => &mut profile.gender,
                "relationship_to_grantee" => &mut profile.relationship_to_grantee,
                "province" => &mut profile.province,
                "municipality" => &mut profile.municipality,
                "barangay" => &mut profile.barangay,
                "parent_group_name" => &mut profile.parent_group_name,
                "contact_number" => &mut profile.contact_number,
                _ => continue,
            };
            if seen_fields.insert(key.to_string()) {
                *slot = non_blank(value);
            }
        }

        let household_id = household_id
            .ok_or_else(|| AppError::InvalidRequest(MISSING_HOUSEHOLD_ID.to_string()))?;

        Ok(Self {
            household_id,
            profile,
            answers,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_household_id_is_rejected() {
        let err = Submission::from_fields([("name", "Dela Cruz"), ("q-1", "4")]).unwrap_err();
        match err {
            AppError::InvalidRequest(message) => assert_eq!(message, MISSING_HOUSEHOLD_ID),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_household_id_is_rejected() {
        let result = Submission::from_fields([("household_id", "   ")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_and_answers_are_collected() {
        let submission = Submission::from_fields([
            ("household_id", " HH-001 "),
            ("name", "Maria Santos"),
            ("province", "Iloilo"),
            ("gender", ""),
            ("q-3", "5"),
            ("q-7", "Para sa edukasyon ng mga bata"),
        ])
        .unwrap();

        assert_eq!(submission.household_id, "HH-001");
        assert_eq!(submission.profile.name.as_deref(), Some("Maria Santos"));
        assert_eq!(submission.profile.province.as_deref(), Some("Iloilo"));
        assert_eq!(submission.profile.gender, None);
        assert_eq!(
            submission.answers,
            vec![
                AnswerInput {
                    question_id: 3,
                    value: "5".to_string()
                },
                AnswerInput {
                    question_id: 7,
                    value: "Para sa edukasyon ng mga bata".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_blank_answers_are_dropped() {
        let submission =
            Submission::from_fields([("household_id", "HH-1"), ("q-1", ""), ("q-2", "  ")])
                .unwrap();
        assert!(submission.answers.is_empty());
    }

    #[test]
    fn test_malformed_question_keys_are_ignored() {
        let submission = Submission::from_fields([
            ("household_id", "HH-1"),
            ("q-abc", "3"),
            ("q-", "3"),
            ("question-4", "3"),
            ("q-4", "2"),
        ])
        .unwrap();

        assert_eq!(submission.answers.len(), 1);
        assert_eq!(submission.answers[0].question_id, 4);
    }

    #[test]
    fn test_repeated_question_keeps_first_value() {
        let submission = Submission::from_fields([
            ("household_id", "HH-1"),
            ("q-1", "5"),
            ("q-1", "1"),
            ("q-2", ""),
            ("q-2", "3"),
        ])
        .unwrap();

        assert_eq!(
            submission.answers,
            vec![AnswerInput {
                question_id: 1,
                value: "5".to_string()
            }]
        );
    }

    #[test]
    fn test_repeated_profile_fields_keep_first_value() {
        let submission = Submission::from_fields([
            ("household_id", "HH-2"),
            ("household_id", ""),
            ("name", "Ana"),
            ("name", "Bea"),
        ])
        .unwrap();

        assert_eq!(submission.household_id, "HH-2");
        assert_eq!(submission.profile.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_blank_first_household_id_is_not_replaced() {
        let result = Submission::from_fields([("household_id", ""), ("household_id", "HH-3")]);
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}
