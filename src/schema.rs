use crate::error::{ArchiveError, Result};
use rusqlite::Connection;

pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS metadata (
          name TEXT,
          value TEXT
        )",
        (),
    )
    .map_err(|source| ArchiveError::Schema {
        table: "metadata",
        source,
    })?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS tiles (
          zoom_level INTEGER,
          tile_column INTEGER,
          tile_row INTEGER,
          tile_data BLOB
        )",
        (),
    )
    .map_err(|source| ArchiveError::Schema {
        table: "tiles",
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(conn: &Connection, table: &str) -> Vec<(String, String)> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .unwrap();

        stmt.query_map((), |row| Ok((row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn creates_both_tables() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();

        assert_eq!(
            columns(&conn, "metadata"),
            vec![
                ("name".into(), "TEXT".into()),
                ("value".into(), "TEXT".into())
            ]
        );

        assert_eq!(
            columns(&conn, "tiles"),
            vec![
                ("zoom_level".into(), "INTEGER".into()),
                ("tile_column".into(), "INTEGER".into()),
                ("tile_row".into(), "INTEGER".into()),
                ("tile_data".into(), "BLOB".into())
            ]
        );
    }

    #[test]
    fn is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
    }

    #[test]
    fn adds_no_indexes() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index'",
                (),
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 0);
    }

    #[test]
    fn fails_on_query_only_connection() {
        let conn = Connection::open_in_memory().unwrap();

        conn.pragma_update(None, "query_only", true).unwrap();

        let err = create_schema(&conn).unwrap_err();

        assert!(matches!(
            err,
            ArchiveError::Schema {
                table: "metadata",
                ..
            }
        ));
    }
}
