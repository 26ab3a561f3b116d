/// Name of the unique constraint PostgreSQL creates for `urls.short_key`.
pub const SHORT_KEY_CONSTRAINT: &str = "urls_short_key_key";

pub fn is_unique_violation_on_key(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_KEY_CONSTRAINT))
}
