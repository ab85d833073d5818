//! Storage traits for pluggable store implementations

// Re-export the storage traits from the types crate
pub use shopmock_types::storage::{
	BasketStorage, CatalogStorage, CustomerStorage, OrderStorage, Storage, StorageError,
	StorageResult,
};
