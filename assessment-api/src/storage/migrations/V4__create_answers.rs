/// Create the answers table linking assessments to questions
pub fn migration() -> String {
    r#"
CREATE TABLE answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    assessment_id INTEGER NOT NULL,
    question_id INTEGER NOT NULL,
    value TEXT,
    FOREIGN KEY (assessment_id) REFERENCES assessments (id) ON DELETE CASCADE,
    FOREIGN KEY (question_id) REFERENCES questions (id)
);

CREATE INDEX idx_answers_assessment
    ON answers(assessment_id);

CREATE INDEX idx_answers_question
    ON answers(question_id);
"#
    .to_string()
}
