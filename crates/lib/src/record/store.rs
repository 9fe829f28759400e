//! File-backed record store for one owner.
//!
//! The store loads the owner's file once and keeps the sequence in memory.
//! Every mutation rewrites the complete file from that sequence; if the write
//! fails the in-memory sequence is restored, so memory and disk agree after
//! every call that returns.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use super::{
    codec,
    errors::RecordError,
    types::{ApplicationRecord, Mode, Owner, RecordId},
};
use crate::{Result, persistence};

/// Count of records per mode. Modes without records have no entry.
pub type ModeSummary = BTreeMap<Mode, usize>;

/// A record together with its session-scoped id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: RecordId,
    pub record: ApplicationRecord,
}

/// Ordered application records of a single owner, backed by one CSV file.
#[derive(Debug)]
pub struct RecordStore {
    owner: Owner,
    path: PathBuf,
    entries: Vec<StoredRecord>,
    next_id: u64,
}

impl RecordStore {
    /// Loads the record file of `owner` from `data_dir`.
    ///
    /// A missing file is an empty sequence; nothing is written until the
    /// first mutation.
    pub fn open(data_dir: impl AsRef<Path>, owner: Owner) -> Result<Self> {
        let path = data_dir.as_ref().join(owner.file_name());
        let mut store = Self {
            owner,
            path,
            entries: Vec::new(),
            next_id: 1,
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-reads the backing file, replacing the in-memory sequence.
    ///
    /// Reloaded records get fresh ids; ids handed out earlier no longer
    /// resolve.
    pub fn reload(&mut self) -> Result<()> {
        let records = match persistence::read_optional(&self.path)? {
            Some(bytes) => codec::decode(&bytes)?,
            None => Vec::new(),
        };
        tracing::debug!(
            owner = %self.owner,
            path = %self.path.display(),
            records = records.len(),
            "loaded records"
        );

        let entries = records
            .into_iter()
            .map(|record| StoredRecord {
                id: self.allocate_id(),
                record,
            })
            .collect();
        self.entries = entries;
        Ok(())
    }

    /// The owner this store belongs to.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records with their ids, in display order.
    pub fn entries(&self) -> &[StoredRecord] {
        &self.entries
    }

    /// Records in display order.
    pub fn records(&self) -> impl Iterator<Item = &ApplicationRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// The record at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&StoredRecord> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Current 1-based position of the record with `id`.
    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id).map(|i| i + 1)
    }

    /// Appends a record and persists the full sequence.
    ///
    /// # Errors
    /// [`RecordError::InvalidRecord`] if company or role is blank.
    pub fn append(&mut self, record: ApplicationRecord) -> Result<RecordId> {
        record.validate()?;

        let id = self.allocate_id();
        self.entries.push(StoredRecord { id, record });
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }

        tracing::debug!(owner = %self.owner, %id, records = self.entries.len(), "record appended");
        Ok(id)
    }

    /// Removes the record at a 1-based position and persists.
    ///
    /// Later records move up by one position.
    ///
    /// # Errors
    /// [`RecordError::OutOfRange`] unless `1 <= position <= len`.
    pub fn delete_at(&mut self, position: usize) -> Result<StoredRecord> {
        let len = self.entries.len();
        if position == 0 || position > len {
            return Err(RecordError::OutOfRange { position, len }.into());
        }

        let index = position - 1;
        let removed = self.entries.remove(index);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            return Err(e);
        }

        tracing::debug!(
            owner = %self.owner,
            position,
            id = %removed.id,
            records = self.entries.len(),
            "record deleted"
        );
        Ok(removed)
    }

    /// Removes the record with `id` and persists.
    ///
    /// # Errors
    /// [`RecordError::UnknownRecord`] if no held record has that id.
    pub fn delete(&mut self, id: RecordId) -> Result<StoredRecord> {
        let position = self
            .position_of(id)
            .ok_or(RecordError::UnknownRecord { id })?;
        self.delete_at(position)
    }

    /// Serializes the sequence exactly as it is persisted.
    pub fn export(&self) -> Result<Vec<u8>> {
        codec::encode(self.records())
    }

    /// Counts records per mode.
    pub fn summarize_by_mode(&self) -> ModeSummary {
        let mut summary = ModeSummary::new();
        for record in self.records() {
            *summary.entry(record.mode).or_insert(0) += 1;
        }
        summary
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    fn persist(&self) -> Result<()> {
        let bytes = self.export()?;
        persistence::write_atomic(&self.path, &bytes)?;
        tracing::debug!(
            owner = %self.owner,
            path = %self.path.display(),
            records = self.entries.len(),
            "records persisted"
        );
        Ok(())
    }
}
