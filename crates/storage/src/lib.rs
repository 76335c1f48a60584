//! Storage seam for the Docket engine.
//!
//! The engine is synchronous and pure except for one suspend point: reading
//! or writing a single form's data through the `DocumentStore` trait. The
//! store is assumed eventually consistent, last-write-wins, with exactly one
//! active editor per packet; timeout and retry policy belong to the caller.
//! Store errors always propagate, never get swallowed.

pub mod error;
pub mod memory;
pub mod traits;
pub mod vault;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use traits::DocumentStore;
pub use vault::VaultRecord;
