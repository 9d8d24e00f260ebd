//! JSON codec for the snippet document.
//!
//! The on-disk shape is a single object mapping snippet title to the snippet
//! record, pretty-printed for hand inspection:
//!
//! ```json
//! {
//!   "Quicksort": {
//!     "title": "Quicksort",
//!     "language": "rust",
//!     "tags": "sort,algo",
//!     "code": "fn sort() {}",
//!     "category": "Algorithms",
//!     "createdAt": 1724900000000
//!   }
//! }
//! ```

use std::collections::HashMap;

use crate::models::Snippet;
use crate::models::storage::StoreError;

/// Serializes the full title -> snippet map to a pretty-printed JSON document.
pub fn encode(snippets: &HashMap<String, Snippet>) -> Result<String, StoreError> {
    serde_json::to_string_pretty(snippets).map_err(StoreError::Encode)
}

/// Parses a JSON document back into the title -> snippet map.
///
/// Unknown fields are ignored. `language`, `tags`, `category` and `createdAt`
/// may be absent and default to empty/zero; `title` and `code` are required.
pub fn decode(document: &str) -> Result<HashMap<String, Snippet>, StoreError> {
    serde_json::from_str(document).map_err(StoreError::Decode)
}
