/// Create the questions table holding the seeded questionnaire
pub fn migration() -> String {
    r#"
CREATE TABLE questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    section TEXT NOT NULL,
    question_type TEXT NOT NULL CHECK (question_type IN ('rating', 'narrative')),
    text TEXT NOT NULL,
    display_order INTEGER NOT NULL
);

CREATE INDEX idx_questions_order
    ON questions(display_order);
"#
    .to_string()
}
