pub mod codec;
pub mod index;
pub mod snippet;
pub mod storage;

pub use index::build_index;
pub use snippet::{Snippet, UNCATEGORIZED};
pub use storage::{SnippetStore, StoreError};
