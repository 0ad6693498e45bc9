use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// How a question is answered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QuestionType {
    /// Numeric score, averaged in reports
    Rating,
    /// Free text, exported but never aggregated
    Narrative,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Rating => "rating",
            QuestionType::Narrative => "narrative",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(QuestionType::Rating),
            "narrative" => Ok(QuestionType::Narrative),
            other => Err(format!("Unknown question type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[ts(type = "number")]
    pub id: i64,
    pub section: String,
    pub question_type: QuestionType,
    pub text: String,
    #[ts(type = "number")]
    pub order: i64,
}

impl Question {
    pub fn is_rating(&self) -> bool {
        self.question_type == QuestionType::Rating
    }
}

/// Questions of one section, in display order
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionSection {
    pub section: String,
    pub questions: Vec<Question>,
}

impl QuestionSection {
    /// Splits an ordered question list into consecutive runs sharing a section label
    pub fn group(questions: Vec<Question>) -> Vec<Self> {
        let mut sections: Vec<Self> = Vec::new();
        for question in questions {
            match sections.last_mut() {
                Some(last) if last.section == question.section => last.questions.push(question),
                _ => sections.push(Self {
                    section: question.section.clone(),
                    questions: vec![question],
                }),
            }
        }
        sections
    }

    pub fn has_ratings(&self) -> bool {
        self.questions.iter().any(Question::is_rating)
    }
}

/// Descriptive fields captured the first time a household is assessed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HouseholdProfile {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub relationship_to_grantee: Option<String>,
    pub province: Option<String>,
    pub municipality: Option<String>,
    pub barangay: Option<String>,
    pub parent_group_name: Option<String>,
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Household {
    #[ts(type = "number")]
    pub id: i64,
    pub household_id: String,
    pub profile: HouseholdProfile,
}

/// One line of the results listing
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    #[ts(type = "number")]
    pub id: i64,
    pub household_id: String,
    pub household_name: Option<String>,
    pub province: Option<String>,
    pub municipality: Option<String>,
    pub barangay: Option<String>,
    pub date_taken: String,
    #[ts(type = "number")]
    pub answer_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentListResponse {
    pub assessments: Vec<AssessmentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, section: &str, question_type: QuestionType) -> Question {
        Question {
            id,
            section: section.to_string(),
            question_type,
            text: format!("Question {id}"),
            order: id,
        }
    }

    #[test]
    fn test_group_keeps_display_order() {
        let sections = QuestionSection::group(vec![
            question(1, "EDUKASYON", QuestionType::Rating),
            question(2, "EDUKASYON", QuestionType::Rating),
            question(3, "PAGSISIYASAT - EDUKASYON", QuestionType::Narrative),
            question(4, "KALUSUGAN", QuestionType::Rating),
        ]);

        let labels: Vec<_> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(labels, vec!["EDUKASYON", "PAGSISIYASAT - EDUKASYON", "KALUSUGAN"]);
        assert_eq!(sections[0].questions.len(), 2);
        assert!(sections[0].has_ratings());
        assert!(!sections[1].has_ratings());
    }

    #[test]
    fn test_question_type_round_trips_through_str() {
        assert_eq!("rating".parse::<QuestionType>().unwrap(), QuestionType::Rating);
        assert_eq!(
            "narrative".parse::<QuestionType>().unwrap(),
            QuestionType::Narrative
        );
        assert_eq!(QuestionType::Narrative.to_string(), "narrative");
    }

    #[test]
    fn test_unknown_question_type_is_rejected() {
        let err = "likert".parse::<QuestionType>().unwrap_err();
        assert!(err.contains("likert"));
    }

    #[test]
    fn test_question_type_serializes_lowercase() {
        let json = serde_json::to_string(&QuestionType::Rating).unwrap();
        assert_eq!(json, "\"rating\"");
    }
}
