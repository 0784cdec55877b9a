use crate::{
    error::{ArchiveError, Result},
    options::ArchiveOptions,
};
use log::debug;
use rusqlite::{Connection, Statement};

pub const ARCHIVE_VERSION: &str = "1.1";

pub const ARCHIVE_TYPE: &str = "overlay";

pub fn write_metadata(
    conn: &Connection,
    name: &str,
    description: &str,
    options: &ArchiveOptions,
) -> Result<()> {
    let mut stmt = conn
        .prepare("INSERT INTO metadata (name, value) VALUES (?1, ?2)")
        .map_err(|source| ArchiveError::MetadataWrite { key: "name", source })?;

    insert(&mut stmt, "name", name)?;

    insert(&mut stmt, "type", ARCHIVE_TYPE)?;

    insert(&mut stmt, "version", ARCHIVE_VERSION)?;

    insert(&mut stmt, "description", description)?;

    insert(&mut stmt, "format", options.format.as_str())?;

    if let Some(min_zoom) = options.min_zoom {
        insert(&mut stmt, "minzoom", &min_zoom.to_string())?;
    }

    if let Some(max_zoom) = options.max_zoom {
        insert(&mut stmt, "maxzoom", &max_zoom.to_string())?;
    }

    Ok(())
}

fn insert(stmt: &mut Statement, key: &'static str, value: &str) -> Result<()> {
    debug!("metadata {key} = {value}");

    // execute resets the statement, the next row binds fresh
    stmt.execute((key, value))
        .map_err(|source| ArchiveError::MetadataWrite { key, source })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::TileFormat, schema::create_schema};

    fn rows(conn: &Connection) -> Vec<(String, String)> {
        let mut stmt = conn
            .prepare("SELECT name, value FROM metadata ORDER BY rowid")
            .unwrap();

        stmt.query_map((), |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn writes_fixed_keys_in_order() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();

        write_metadata(&conn, "myset", "test set", &ArchiveOptions::default()).unwrap();

        assert_eq!(
            rows(&conn),
            pairs(&[
                ("name", "myset"),
                ("type", "overlay"),
                ("version", ARCHIVE_VERSION),
                ("description", "test set"),
                ("format", "png"),
            ])
        );
    }

    #[test]
    fn empty_description_is_kept() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();

        write_metadata(&conn, "x", "", &ArchiveOptions::default()).unwrap();

        assert!(rows(&conn).contains(&("description".into(), String::new())));
    }

    #[test]
    fn zoom_bounds_appended_when_known() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();

        let options = ArchiveOptions {
            format: TileFormat::Jpeg,
            min_zoom: Some(3),
            max_zoom: Some(15),
            ..Default::default()
        };

        write_metadata(&conn, "myset", "d", &options).unwrap();

        let rows = rows(&conn);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[4], ("format".into(), "jpg".into()));
        assert_eq!(rows[5], ("minzoom".into(), "3".into()));
        assert_eq!(rows[6], ("maxzoom".into(), "15".into()));
    }

    #[test]
    fn only_known_bound_is_written() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();

        let options = ArchiveOptions {
            max_zoom: Some(9),
            ..Default::default()
        };

        write_metadata(&conn, "myset", "d", &options).unwrap();

        let keys: Vec<_> = rows(&conn).into_iter().map(|(k, _)| k).collect();

        assert!(!keys.contains(&"minzoom".to_string()));
        assert_eq!(keys.last().map(String::as_str), Some("maxzoom"));
    }

    #[test]
    fn fails_without_table() {
        let conn = Connection::open_in_memory().unwrap();

        let err = write_metadata(&conn, "myset", "d", &ArchiveOptions::default()).unwrap_err();

        assert!(matches!(err, ArchiveError::MetadataWrite { .. }));
    }
}
