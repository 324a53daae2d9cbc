//! Named snapshots of engine state, newest first.

use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::persistence::{SaveData, SaveError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub data: SaveData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotStore {
    snapshots: Vec<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `name` and return the new snapshot's id.
    pub fn save(&mut self, name: impl Into<String>, data: SaveData) -> Uuid {
        let snapshot = Snapshot {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            data,
        };
        let id = snapshot.id;
        self.snapshots.insert(0, snapshot);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&Snapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    /// Returns false if no snapshot has `id`.
    pub fn rename(&mut self, id: Uuid, name: impl Into<String>) -> bool {
        match self.snapshots.iter_mut().find(|s| s.id == id) {
            Some(snapshot) => {
                snapshot.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: Uuid) -> Option<Snapshot> {
        let index = self.snapshots.iter().position(|s| s.id == id)?;
        Some(self.snapshots.remove(index))
    }

    /// All snapshots, newest first.
    pub fn list(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self, SaveError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Default name offered when saving, e.g. "Snapshot 2031-04-02 17:05".
pub fn default_snapshot_name(now: DateTime<Utc>) -> String {
    format!("Snapshot {}", now.format("%Y-%m-%d %H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::SAVE_VERSION;
    use chrono::TimeZone;
    use rados_logic::simulation::EventLog;
    use rados_logic::weights::WeightsConfig;

    fn data(year: i64) -> SaveData {
        SaveData {
            version: SAVE_VERSION,
            dataset: Vec::new(),
            weights: WeightsConfig::default(),
            year,
            capital: 1_000_000.0,
            acquired: Default::default(),
            event_log: EventLog::new(100),
            rankings_timestamp: None,
            view: Default::default(),
        }
    }

    #[test]
    fn test_newest_first() {
        let mut store = SnapshotStore::new();
        let first = store.save("first", data(2800));
        let second = store.save("second", data(2805));
        let ids: Vec<Uuid> = store.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, [second, first]);
        assert_eq!(store.get(first).map(|s| s.data.year), Some(2800));
    }

    #[test]
    fn test_rename_and_delete() {
        let mut store = SnapshotStore::new();
        let id = store.save("draft", data(2800));
        assert!(store.rename(id, "final"));
        assert_eq!(store.get(id).unwrap().name, "final");
        assert!(!store.rename(Uuid::new_v4(), "nobody"));

        assert!(store.delete(id).is_some());
        assert!(store.delete(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_roundtrip() {
        let mut store = SnapshotStore::new();
        store.save("a", data(2800));
        store.save("b", data(2810));
        let mut buffer = Vec::new();
        store.write_to(&mut buffer).unwrap();
        let loaded = SnapshotStore::read_from(&buffer[..]).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_default_name() {
        let now = Utc.with_ymd_and_hms(2031, 4, 2, 17, 5, 9).unwrap();
        assert_eq!(default_snapshot_name(now), "Snapshot 2031-04-02 17:05");
    }
}
