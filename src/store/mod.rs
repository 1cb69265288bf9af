// src/store/mod.rs
//! Persistence substrate — a synchronous, string-keyed, string-valued map
//!
//! The vault treats implementations as dumb key-value stores: no
//! transactions, no atomicity across records.
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use crate::error::StoreResult;

pub trait KeyValueStore {
    /// `Ok(None)` when the record does not exist
    fn get_item(&self, name: &str) -> StoreResult<Option<String>>;

    /// Insert or overwrite a record
    fn set_item(&self, name: &str, value: &str) -> StoreResult<()>;

    /// Delete a record; deleting a missing record is not an error
    fn remove_item(&self, name: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, name: &str) -> StoreResult<Option<String>> {
        (**self).get_item(name)
    }

    fn set_item(&self, name: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(name, value)
    }

    fn remove_item(&self, name: &str) -> StoreResult<()> {
        (**self).remove_item(name)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, name: &str) -> StoreResult<Option<String>> {
        (**self).get_item(name)
    }

    fn set_item(&self, name: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(name, value)
    }

    fn remove_item(&self, name: &str) -> StoreResult<()> {
        (**self).remove_item(name)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, name: &str) -> StoreResult<Option<String>> {
        (**self).get_item(name)
    }

    fn set_item(&self, name: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(name, value)
    }

    fn remove_item(&self, name: &str) -> StoreResult<()> {
        (**self).remove_item(name)
    }
}
