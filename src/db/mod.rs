mod from_row;
mod schema;
pub mod queries;

pub use schema::{init_db, reset_db};

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Application state holding the store handle.
#[derive(Clone)]
pub struct AppState {
    /// Main database pool (owners, companies, employees)
    pub db: DbPool,
}

/// Enables foreign key enforcement on every pooled connection.
pub fn connection_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    let manager = connection_manager(SqliteConnectionManager::file(database_path));
    Pool::builder().max_size(10).build(manager)
}
