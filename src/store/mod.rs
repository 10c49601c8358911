//! # Message Store
//!
//! Schema provisioning and row writing for contact messages.
//!
//! Backends:
//! - [`SqliteMessageStore`]: the `messages` table in a SQLite file
//! - [`InMemoryMessageStore`]: a vector behind a lock, for tests

pub mod errors;
pub mod memory;
pub mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use memory::{InMemoryMessageStore, StoredMessage};
pub use sqlite::SqliteMessageStore;

use crate::contact::ValidMessage;

/// Name of the destination table
pub const MESSAGES_TABLE: &str = "messages";

/// Declared width of the text columns.
///
/// Narrower than the default maximum message length (500). Kept as-is;
/// see DESIGN.md.
pub const COLUMN_WIDTH: usize = 250;

/// Storage for validated contact messages.
///
/// `provision` must be idempotent and safe to call concurrently: a second
/// "create if absent" is a no-op, never an error. `write` inserts exactly
/// one row and lets the store assign `id` and `created_at`.
pub trait MessageStore: Send + Sync {
    /// Ensure the destination table exists
    fn provision(&self) -> StoreResult<()>;

    /// Insert one validated message
    fn write(&self, message: &ValidMessage) -> StoreResult<()>;
}
