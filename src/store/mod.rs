//! Contact storage
//!
//! - [`ContactStore`]: the ordered in-memory collection
//! - [`BlobStore`]: key-value persistence medium (file or memory)
//! - snapshot load/save between the two

mod blob;
mod contact_store;
mod snapshot;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use contact_store::ContactStore;
pub use snapshot::{load_snapshot, save_snapshot, LoadReport, PersistenceError};
