use super::backend::StorageBackend;
use crate::error::{RekordError, Result};
use crate::model::Record;
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since rekord is single-threaded.
/// Records sit in a `Vec` so insertion order comes for free.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<Vec<Record>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RekordError::Backend("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn put(&self, record: &Record) -> Result<()> {
        self.check_writable()?;
        let mut records = self.records.borrow_mut();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Record>> {
        let records = self.records.borrow();
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.borrow().clone())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        self.check_writable()?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    fn delete_all(&self) -> Result<usize> {
        self.check_writable()?;
        let mut records = self.records.borrow_mut();
        let removed = records.len();
        records.clear();
        Ok(removed)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.borrow().len())
    }
}
