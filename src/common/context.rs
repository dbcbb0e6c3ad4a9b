use sqlx::{MySql, Pool};

/// Anything that can hand out the database pool.
pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<MySql>;
}
