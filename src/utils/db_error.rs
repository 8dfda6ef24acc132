//! Classification helpers for driver errors.

/// Returns true when `e` is a unique-constraint violation on the `url.alias` column.
///
/// SQLite reports the failing column in the message (`UNIQUE constraint failed:
/// url.alias`) rather than through a named constraint.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    match db_err.constraint() {
        Some(constraint) => constraint.contains("alias"),
        None => db_err.message().contains("url.alias"),
    }
}
