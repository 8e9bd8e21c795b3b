mod error;
mod memory;
mod turso;

pub use error::StorageError;
pub use memory::DialogueMemoryStorage;
pub use turso::TursoClient;
