pub mod kv;
pub mod persistence;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use persistence::Persistence;
