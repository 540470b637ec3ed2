/// CRUD and relational-integrity tests for all models.
///
/// These talk to a real Postgres via DATABASE_URL and skip gracefully when
/// no database is reachable or SKIP_DB_TESTS is set.
pub mod crud_tests;
