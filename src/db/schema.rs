use rusqlite::Connection;

/// Initialize the database schema.
///
/// Uniqueness of owner names, company names, and one company per owner is
/// enforced here so concurrent check-then-insert races still end in a
/// constraint violation rather than a duplicate row.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        -- Owners (accounts; never deleted through the API)
        CREATE TABLE IF NOT EXISTS owners (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        -- Companies (at most one per owner)
        CREATE TABLE IF NOT EXISTS companies (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            owner_id TEXT NOT NULL UNIQUE REFERENCES owners(id) ON UPDATE CASCADE,
            created_at INTEGER NOT NULL
        );

        -- Employees (removed together with their company)
        CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            company_id TEXT NOT NULL REFERENCES companies(id) ON UPDATE CASCADE ON DELETE CASCADE,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_employees_company ON employees(company_id);
        CREATE INDEX IF NOT EXISTS idx_employees_company_name ON employees(company_id, name);
        "#,
    )?;
    Ok(())
}

/// Drop every table, children first. Used by `--reset` before `init_db`.
pub fn reset_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS employees;
        DROP TABLE IF EXISTS companies;
        DROP TABLE IF EXISTS owners;
        "#,
    )
}
