use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use tender_search::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A throwaway SQLite database with the catalogue schema applied.
///
/// The database file lives in a temp directory that is removed when the
/// fixture is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: tempfile::TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(name).display().to_string();
        let pool = establish_connection_pool(&database_url).expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        let conn = &mut *conn;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
