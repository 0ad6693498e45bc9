/// Create the households table, one row per surveyed household
pub fn migration() -> String {
    r#"
CREATE TABLE households (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    household_code TEXT NOT NULL UNIQUE,
    name TEXT,
    gender TEXT,
    relationship_to_grantee TEXT,
    province TEXT,
    municipality TEXT,
    barangay TEXT,
    parent_group_name TEXT,
    contact_number TEXT
);

CREATE INDEX idx_households_province
    ON households(province, municipality);
"#
    .to_string()
}
