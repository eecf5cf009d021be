//! Helpers for integration tests.

use seminar_offers::db::{DbPool, establish_connection_pool, run_pending_migrations};

/// Temporary database used in integration tests.
pub struct TestDb {
    db_name: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(db_name: &str) -> Self {
        std::fs::remove_file(db_name).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(db_name).expect("Failed to establish SQLite connection.");
        run_pending_migrations(&pool).expect("Migrations failed");

        Self {
            db_name: db_name.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.db_name).ok();
        std::fs::remove_file(format!("{}-shm", &self.db_name)).ok();
        std::fs::remove_file(format!("{}-wal", &self.db_name)).ok();
    }
}
