//! SQLite-backed message store
//!
//! A fresh connection is opened for every operation, so nothing is
//! shared between requests except the database file. The busy timeout
//! makes concurrent first-time provisioning wait on the file lock instead
//! of failing with `SQLITE_BUSY`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection};

use super::errors::{StoreError, StoreResult};
use super::{MessageStore, COLUMN_WIDTH, MESSAGES_TABLE};
use crate::contact::ValidMessage;
use crate::observability::{log_event_with_fields, Event};

/// Default time a statement waits on a locked database
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// `id` is a random v4 UUID rendered as lowercase text, generated by the
/// column default so the store (not the caller) assigns it.
fn create_messages_table() -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS "{table}" (
    id TEXT PRIMARY KEY NOT NULL DEFAULT (lower(
        hex(randomblob(4)) || '-' ||
        hex(randomblob(2)) || '-' ||
        '4' || substr(hex(randomblob(2)), 2) || '-' ||
        substr('89ab', 1 + (random() & 3), 1) || substr(hex(randomblob(2)), 2) || '-' ||
        hex(randomblob(6))
    )),
    name VARCHAR({width}),
    email VARCHAR({width}),
    message VARCHAR({width}),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP NOT NULL
);
"#,
        table = MESSAGES_TABLE,
        width = COLUMN_WIDTH,
    )
}

const INSERT_MESSAGE: &str =
    r#"INSERT INTO "messages" (name, email, message) VALUES (?1, ?2, ?3)"#;

/// Message store writing to the `messages` table of one SQLite file
#[derive(Debug, Clone)]
pub struct SqliteMessageStore {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteMessageStore {
    /// Store backed by the database file at `path`. The file is created on
    /// first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }
}

impl MessageStore for SqliteMessageStore {
    fn provision(&self) -> StoreResult<()> {
        let result = self
            .connect()
            .and_then(|conn| conn.execute_batch(&create_messages_table()))
            .map_err(|e| StoreError::provisioning(MESSAGES_TABLE, e));

        match &result {
            Ok(()) => log_event_with_fields(Event::SchemaProvisioned, &[("table", MESSAGES_TABLE)]),
            Err(e) => log_failure(Event::ProvisioningFailed, e),
        }
        result
    }

    fn write(&self, message: &ValidMessage) -> StoreResult<()> {
        let result = self
            .connect()
            .and_then(|conn| {
                conn.execute(
                    INSERT_MESSAGE,
                    params![message.name(), message.email(), message.message()],
                )
            })
            .map(|_| ())
            .map_err(|e| StoreError::write(MESSAGES_TABLE, e));

        match &result {
            Ok(()) => log_event_with_fields(Event::MessageStored, &[("table", MESSAGES_TABLE)]),
            Err(e) => log_failure(Event::WriteFailed, e),
        }
        result
    }
}

fn log_failure(event: Event, error: &StoreError) {
    let reason = error.to_string();
    log_event_with_fields(
        event,
        &[
            ("code", error.code()),
            ("error", reason.as_str()),
            ("table", MESSAGES_TABLE),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{RawSubmission, Validator};
    use tempfile::TempDir;

    fn setup() -> (TempDir, SqliteMessageStore) {
        let tmp = TempDir::new().unwrap();
        let store = SqliteMessageStore::new(tmp.path().join("deejay.db"));
        (tmp, store)
    }

    fn valid(name: &str) -> ValidMessage {
        Validator::default()
            .validate(&RawSubmission::new(name, "ada@example.com", "x".repeat(20)))
            .unwrap()
    }

    #[test]
    fn test_provision_creates_table() {
        let (_tmp, store) = setup();
        store.provision().unwrap();

        let conn = Connection::open(store.path()).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'messages'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_write_without_provision_fails() {
        let (_tmp, store) = setup();
        let err = store.write(&valid("Ada")).unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn test_generated_ids_look_like_v4_uuids() {
        let (_tmp, store) = setup();
        store.provision().unwrap();
        store.write(&valid("Ada")).unwrap();
        store.write(&valid("Grace")).unwrap();

        let conn = Connection::open(store.path()).unwrap();
        let mut stmt = conn.prepare(r#"SELECT id FROM "messages""#).unwrap();
        let ids: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        for id in ids {
            let parsed = uuid::Uuid::parse_str(&id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
            assert_eq!(id, id.to_lowercase());
        }
    }

    #[test]
    fn test_unopenable_path_is_provisioning_failure() {
        let tmp = TempDir::new().unwrap();
        let store = SqliteMessageStore::new(tmp.path().join("missing").join("deejay.db"));
        assert!(matches!(
            store.provision(),
            Err(StoreError::ProvisioningFailed { .. })
        ));
    }

    #[test]
    fn test_text_columns_use_declared_width() {
        let (_tmp, store) = setup();
        store.provision().unwrap();

        let conn = Connection::open(store.path()).unwrap();
        let mut stmt = conn
            .prepare("SELECT name, type FROM pragma_table_info('messages') WHERE type LIKE 'VARCHAR%'")
            .unwrap();
        let columns: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let expected = format!("VARCHAR({})", COLUMN_WIDTH);
        assert_eq!(columns.len(), 3);
        for (name, declared) in columns {
            assert_eq!(declared, expected, "column {name}");
        }
    }
}
