use refinery::embed_migrations;

// Embed migrations from the migrations directory
embed_migrations!("src/storage/migrations");

/// Tables created by the embedded migrations, children before parents
pub const TABLES: [&str; 4] = ["answers", "assessments", "questions", "households"];

/// Run the schema migrations on a database connection
///
/// Migrations already recorded in `refinery_schema_history` are skipped, so this is
/// safe to call on every start.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn).map(|_| ())
}

/// Drop every survey table together with the migration history
pub fn drop_all(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    let mut sql = String::new();
    for table in TABLES {
        sql.push_str(&format!("DROP TABLE IF EXISTS {table};\n"));
    }
    sql.push_str("DROP TABLE IF EXISTS refinery_schema_history;\n");
    conn.execute_batch(&sql)
}
