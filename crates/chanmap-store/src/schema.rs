//! The subset of the tuner's `channels` table this crate reads and writes.
//!
//! Real databases carry many more columns; only these five are touched.
//! The DDL is used to build fixture databases.

use chanmap_core::Channel;
use rusqlite::{params, Connection};

use crate::error::Result;

/// Create the `channels` table.
pub fn create_channels_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE channels (
            _id INTEGER PRIMARY KEY,    -- stable channel id
            type TEXT,                  -- tuner/transport, e.g. TYPE_DVB_S2
            service_type TEXT,          -- SERVICE_TYPE_AUDIO_VIDEO, SERVICE_TYPE_AUDIO, ...
            display_number TEXT,        -- rank, stored as text
            display_name TEXT           -- not unique
        );
        "#,
    )?;
    Ok(())
}

/// Insert one channel row.
pub fn insert_channel(conn: &Connection, channel: &Channel) -> Result<()> {
    conn.execute(
        "INSERT INTO channels (_id, type, service_type, display_number, display_name)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            channel.id.0,
            channel.tuner_type,
            channel.service_type.as_str(),
            channel.display_number,
            channel.name,
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_creates_channels_table() {
        let conn = Connection::open_in_memory().unwrap();
        create_channels_table(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(tables, vec!["channels".to_string()]);
    }

    #[test]
    fn test_schema_not_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_channels_table(&conn).unwrap();
        assert!(create_channels_table(&conn).is_err());
    }
}
