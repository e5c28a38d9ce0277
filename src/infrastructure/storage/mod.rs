//! Document storage implementations

mod counter;
mod file_system;
mod in_memory;

pub use counter::StoreCharacterCounter;
pub use file_system::FileSystemDocumentStore;
pub use in_memory::InMemoryDocumentStore;
