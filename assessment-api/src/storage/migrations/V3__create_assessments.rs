/// Create the assessments table, one row per form submission
pub fn migration() -> String {
    r#"
CREATE TABLE assessments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    household_id INTEGER NOT NULL,
    date_taken TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (household_id) REFERENCES households (id) ON DELETE CASCADE
);

CREATE INDEX idx_assessments_household
    ON assessments(household_id);
"#
    .to_string()
}
