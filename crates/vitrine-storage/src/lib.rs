//! Durable key-value storage collaborator for Vitrine.
//!
//! The stores persist through the narrow string contract in
//! [`KeyValueStore`]; [`StoreJsonExt`] layers typed JSON access on top.
//! Two implementations ship with the crate: [`MemoryStore`] for tests
//! and in-process use, and [`FileStore`] for one-file-per-key durable
//! storage on disk.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StoreJsonExt};
