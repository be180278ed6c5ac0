//! Persistence seam for saved machines.
//!
//! The engine never talks to storage itself. Front ends hand records to a
//! [`MachineStore`]; [`MemoryStore`] backs tests and embedded use.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::MhrError;
use crate::machine::MachineRecord;
use crate::MhrResult;

pub trait MachineStore {
    /// Save a record, returning its id. A record that already carries an id
    /// replaces the stored copy.
    fn save_machine(&mut self, record: MachineRecord) -> MhrResult<String>;

    fn get_all_machines(&self) -> MhrResult<Vec<MachineRecord>>;

    fn delete_machine(&mut self, id: &str) -> MhrResult<()>;
}

/// In-process store keyed by generated ids (`machine-1`, `machine-2`, ...).
#[derive(Debug, Default)]
pub struct MemoryStore {
    machines: BTreeMap<String, MachineRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Next generated id not already held by a caller-supplied id.
    fn fresh_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let candidate = format!("machine-{}", self.next_id);
            if !self.machines.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

impl MachineStore for MemoryStore {
    fn save_machine(&mut self, mut record: MachineRecord) -> MhrResult<String> {
        let id = match record.id.clone() {
            Some(id) if !id.trim().is_empty() => id,
            _ => self.fresh_id(),
        };
        record.id = Some(id.clone());
        debug!(id = %id, "machine saved");
        self.machines.insert(id.clone(), record);
        Ok(id)
    }

    fn get_all_machines(&self) -> MhrResult<Vec<MachineRecord>> {
        Ok(self.machines.values().cloned().collect())
    }

    fn delete_machine(&mut self, id: &str) -> MhrResult<()> {
        self.machines
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| MhrError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_assigns_ids() {
        let mut store = MemoryStore::new();
        let a = store.save_machine(MachineRecord::named("Lathe")).unwrap();
        let b = store.save_machine(MachineRecord::named("Mill")).unwrap();
        assert_eq!(a, "machine-1");
        assert_eq!(b, "machine-2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_with_id_replaces() {
        let mut store = MemoryStore::new();
        let id = store.save_machine(MachineRecord::named("Lathe")).unwrap();
        let mut updated = MachineRecord::named("Lathe Mk2");
        updated.id = Some(id.clone());
        assert_eq!(store.save_machine(updated).unwrap(), id);
        let all = store.get_all_machines().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_deref(), Some("Lathe Mk2"));
    }

    #[test]
    fn test_generated_id_skips_ids_in_use() {
        let mut store = MemoryStore::new();
        let mut imported = MachineRecord::named("Lathe");
        imported.id = Some("machine-1".to_string());
        store.save_machine(imported).unwrap();

        let id = store.save_machine(MachineRecord::named("Mill")).unwrap();
        assert_eq!(id, "machine-2");
        assert_eq!(store.len(), 2);
        let names: Vec<Option<String>> = store
            .get_all_machines()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec![Some("Lathe".to_string()), Some("Mill".to_string())]);
    }

    #[test]
    fn test_delete_machine() {
        let mut store = MemoryStore::new();
        let id = store.save_machine(MachineRecord::named("Lathe")).unwrap();
        store.delete_machine(&id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_machine() {
        let mut store = MemoryStore::new();
        let err = store.delete_machine("machine-9").unwrap_err();
        assert!(matches!(err, MhrError::NotFound(ref id) if id == "machine-9"));
    }
}
