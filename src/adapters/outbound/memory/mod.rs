/// In-memory data source with the built-in fixture
mod in_memory_store;

pub use in_memory_store::InMemoryStore;
