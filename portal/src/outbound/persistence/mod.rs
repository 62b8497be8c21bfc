//! Persistence adapters for the complaint collection.
//!
//! Both adapters store the collection as one serialized record:
//! - `JsonFileComplaintRepository` writes `<key>.json` atomically.
//! - `InMemoryComplaintRepository` keeps the text in a process-local slot.

mod atomic_io;
mod in_memory;
mod json_file_repository;

pub use in_memory::InMemoryComplaintRepository;
pub use json_file_repository::{
    DEFAULT_STORE_KEY, JsonFileComplaintRepository, StoreKey, StoreKeyError,
};
