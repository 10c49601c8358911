//! In-memory message store for testing

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::{MessageStore, MESSAGES_TABLE};
use crate::contact::ValidMessage;

/// A row as the store holds it, with store-assigned columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory store. Writes before `provision` fail, the way an insert
/// into a missing table would.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    provisioned: AtomicBool,
    provision_calls: AtomicUsize,
    fail_provision: AtomicBool,
    fail_write: AtomicBool,
    rows: RwLock<Vec<StoredMessage>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `provision` call fail
    pub fn fail_provisioning(&self) {
        self.fail_provision.store(true, Ordering::SeqCst);
    }

    /// Make every following `write` call fail
    pub fn fail_writes(&self) {
        self.fail_write.store(true, Ordering::SeqCst);
    }

    /// How many times `provision` was called, successful or not
    pub fn provision_calls(&self) -> usize {
        self.provision_calls.load(Ordering::SeqCst)
    }

    pub fn is_provisioned(&self) -> bool {
        self.provisioned.load(Ordering::SeqCst)
    }

    /// Copy of every stored row, oldest first
    pub fn rows(&self) -> StoreResult<Vec<StoredMessage>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))?;
        Ok(rows.clone())
    }
}

impl MessageStore for InMemoryMessageStore {
    fn provision(&self) -> StoreResult<()> {
        self.provision_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_provision.load(Ordering::SeqCst) {
            return Err(StoreError::provisioning(MESSAGES_TABLE, "permission denied"));
        }
        self.provisioned.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn write(&self, message: &ValidMessage) -> StoreResult<()> {
        if self.fail_write.load(Ordering::SeqCst) {
            return Err(StoreError::write(MESSAGES_TABLE, "connection reset"));
        }
        if !self.is_provisioned() {
            return Err(StoreError::write(
                MESSAGES_TABLE,
                format!("no such table: {}", MESSAGES_TABLE),
            ));
        }

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))?;
        rows.push(StoredMessage {
            id: Uuid::new_v4(),
            name: message.name().to_string(),
            email: message.email().to_string(),
            message: message.message().to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }
}
