mod object_store_storage;

pub use object_store_storage::ObjectStoreStorage;
