//! SQLite implementation of the ChannelStore trait.
//!
//! This is the real backend: the tuner's `tv.db` opened in place with
//! rusqlite. The file must already exist; it is never created.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags};
use tracing::{debug, warn};

use chanmap_core::{Channel, ChannelId, RankAssignment, ServiceType};

use crate::error::{Result, StoreError};
use crate::traits::ChannelStore;

const SELECT_CHANNELS: &str = "SELECT _id, type, service_type, display_number, display_name
     FROM channels
     WHERE type = ?1
     ORDER BY display_number ASC, _id ASC";

const UPDATE_RANK: &str = "UPDATE channels SET display_number = ?1 WHERE _id = ?2";

/// SQLite-based channel store.
///
/// Owns a single connection for the whole run.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing channel database for reading and writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened channel database");
        Ok(Self { conn })
    }

    /// Open an in-memory database with an empty `channels` table.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::schema::create_channels_table(&conn)?;
        Ok(Self { conn })
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// Helper to convert a row to Channel
fn row_to_channel(row: &rusqlite::Row<'_>) -> rusqlite::Result<Channel> {
    let service_type = text_column(row, "service_type")?;
    Ok(Channel {
        id: ChannelId(row.get("_id")?),
        tuner_type: text_column(row, "type")?,
        service_type: ServiceType::from_store(&service_type),
        display_number: text_column(row, "display_number")?,
        name: text_column(row, "display_name")?,
    })
}

// Text columns may hold integers or NULL in databases written by the tuner.
fn text_column(row: &rusqlite::Row<'_>, name: &str) -> rusqlite::Result<String> {
    Ok(match row.get_ref(name)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    })
}

impl ChannelStore for SqliteStore {
    fn channels(&self, tuner_type: &str) -> Result<Vec<Channel>> {
        let mut stmt = self.conn.prepare(SELECT_CHANNELS)?;
        let channels = stmt
            .query_map(params![tuner_type], row_to_channel)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(tuner_type, count = channels.len(), "loaded channels");
        Ok(channels)
    }

    fn apply(&mut self, assignment: &RankAssignment) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut changed = 0;

        {
            let mut stmt = tx.prepare(UPDATE_RANK)?;
            for (rank, id) in assignment.iter() {
                let rows = stmt
                    .execute(params![rank.to_string(), id.0])
                    .map_err(|source| StoreError::Update { id, rank, source })?;
                if rows == 0 {
                    warn!(%id, %rank, "no channel row with this id");
                }
                debug!(%id, %rank, "updated display number");
                changed += rows;
            }
        }

        tx.commit()?;
        Ok(changed)
    }

    fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| StoreError::Close(e))
    }
}
