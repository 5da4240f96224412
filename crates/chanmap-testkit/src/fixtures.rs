//! Test fixtures and helpers.
//!
//! A [`ChannelListFixture`] is a temporary directory laid out like a tuner
//! export: `tv.db` with a `channels` table, a `chanLst.bin` that embeds the
//! database fingerprint, and a `list.json` desired order next to them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tempfile::TempDir;

use chanmap_core::{Channel, ChannelId, Checksum, OrderEntry, ServiceType};
use chanmap_store::schema::{create_channels_table, insert_channel};

/// Leading bytes of the fixture sidecar. Only there so the fingerprint is
/// not at offset zero.
pub const SIDECAR_HEADER: &[u8] = b"CHLST\x01\x00\x2d";

/// Bytes after the fingerprint.
const SIDECAR_TRAILER_LEN: usize = 24;

/// An audio+video satellite channel.
pub fn satellite(id: i64, name: &str, display_number: &str) -> Channel {
    channel(id, name, display_number, ServiceType::AudioVideo)
}

/// An audio-only satellite channel.
pub fn radio(id: i64, name: &str, display_number: &str) -> Channel {
    channel(id, name, display_number, ServiceType::Audio)
}

/// A satellite channel of any service type.
pub fn channel(id: i64, name: &str, display_number: &str, service_type: ServiceType) -> Channel {
    Channel {
        id: ChannelId(id),
        tuner_type: "TYPE_DVB_S2".to_string(),
        service_type,
        display_number: display_number.to_string(),
        name: name.to_string(),
    }
}

/// Sidecar content embedding `fingerprint` once, after a short header.
pub fn sidecar_with(fingerprint: Checksum) -> Vec<u8> {
    let mut content = SIDECAR_HEADER.to_vec();
    content.extend_from_slice(&fingerprint.swapped_bytes());
    content.extend(std::iter::repeat(0x20).take(SIDECAR_TRAILER_LEN));
    content
}

/// A channel list directory on disk.
pub struct ChannelListFixture {
    dir: TempDir,
}

impl ChannelListFixture {
    pub fn builder() -> ChannelListFixtureBuilder {
        ChannelListFixtureBuilder::default()
    }

    /// The channel list directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn database_path(&self) -> PathBuf {
        self.dir().join("tv.db")
    }

    pub fn sidecar_path(&self) -> PathBuf {
        self.dir().join("chanLst.bin")
    }

    pub fn order_path(&self) -> PathBuf {
        self.dir().join("list.json")
    }

    /// Current fingerprint of `tv.db`.
    pub fn database_checksum(&self) -> Checksum {
        Checksum::compute(&fs::read(self.database_path()).expect("read tv.db"))
    }

    pub fn sidecar(&self) -> Vec<u8> {
        fs::read(self.sidecar_path()).expect("read chanLst.bin")
    }

    /// `_id` to `display_number` for every row, any tuner type.
    pub fn display_numbers(&self) -> BTreeMap<i64, String> {
        let conn = Connection::open_with_flags(self.database_path(), OpenFlags::SQLITE_OPEN_READ_ONLY)
            .expect("open tv.db");
        let mut stmt = conn
            .prepare("SELECT _id, display_number FROM channels")
            .expect("prepare");
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .expect("query");
        rows.collect::<rusqlite::Result<BTreeMap<i64, String>>>()
            .expect("rows")
    }
}

/// Builder for [`ChannelListFixture`].
#[derive(Default)]
pub struct ChannelListFixtureBuilder {
    channels: Vec<Channel>,
    order: Vec<OrderEntry>,
    raw_order: Option<Vec<u8>>,
    without_sidecar: bool,
}

impl ChannelListFixtureBuilder {
    pub fn channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Add one desired-order record.
    pub fn order(mut self, name: &str, order: i64) -> Self {
        self.order.push(OrderEntry {
            name: name.to_string(),
            order,
        });
        self
    }

    /// Write `bytes` as `list.json` instead of the collected records.
    pub fn raw_order(mut self, bytes: &[u8]) -> Self {
        self.raw_order = Some(bytes.to_vec());
        self
    }

    /// Leave `chanLst.bin` out.
    pub fn without_sidecar(mut self) -> Self {
        self.without_sidecar = true;
        self
    }

    pub fn build(self) -> ChannelListFixture {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fixture = ChannelListFixture { dir };

        {
            let conn = Connection::open(fixture.database_path()).expect("create tv.db");
            create_channels_table(&conn).expect("create channels table");
            for channel in &self.channels {
                insert_channel(&conn, channel).expect("insert channel");
            }
        }

        if !self.without_sidecar {
            let fingerprint = fixture.database_checksum();
            fs::write(fixture.sidecar_path(), sidecar_with(fingerprint)).expect("write sidecar");
        }

        let order = match self.raw_order {
            Some(raw) => raw,
            None => serde_json::to_vec_pretty(&self.order).expect("encode order"),
        };
        fs::write(fixture.order_path(), order).expect("write list.json");

        fixture
    }
}
