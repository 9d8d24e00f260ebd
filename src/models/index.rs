use std::collections::BTreeMap;

use crate::models::SnippetStore;

/// Groups snippet titles by their effective category.
///
/// The result is a pure view over the store, rebuilt on every call and
/// discarded by the caller once rendered. Categories and the titles within
/// each category come back sorted so that successive builds over the same
/// store render identically.
pub fn build_index(store: &SnippetStore) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for snippet in store.snippets().values() {
        index
            .entry(snippet.effective_category().to_string())
            .or_default()
            .push(snippet.title.clone());
    }

    for titles in index.values_mut() {
        titles.sort();
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Snippet, UNCATEGORIZED, storage::DEFAULT_STORE_FILE};
    use tempfile::tempdir;

    fn store_with(snippets: &[(&str, &str)]) -> (tempfile::TempDir, SnippetStore) {
        let dir = tempdir().unwrap();
        let mut store = SnippetStore::load(dir.path().join(DEFAULT_STORE_FILE)).unwrap();
        for (title, category) in snippets {
            store
                .add(Snippet::new(*title, "", "", "code", *category))
                .unwrap();
        }
        (dir, store)
    }

    #[test]
    fn empty_store_yields_empty_index() {
        let (_dir, store) = store_with(&[]);
        assert!(build_index(&store).is_empty());
    }

    #[test]
    fn groups_titles_by_category_with_fallback() {
        let (_dir, store) = store_with(&[("A", "Web"), ("B", ""), ("C", "Web")]);
        let index = build_index(&store);

        assert_eq!(index.len(), 2);
        assert_eq!(index["Web"], vec!["A".to_string(), "C".to_string()]);
        assert_eq!(index[UNCATEGORIZED], vec!["B".to_string()]);
    }

    #[test]
    fn every_title_lands_in_exactly_one_bucket() {
        let (_dir, store) = store_with(&[("A", "Web"), ("B", ""), ("C", "Db"), ("D", "Web")]);
        let index = build_index(&store);

        let mut all: Vec<&String> = index.values().flatten().collect();
        all.sort();
        assert_eq!(all.len(), store.len());
        all.dedup();
        assert_eq!(all.len(), store.len());
    }

    #[test]
    fn index_ordering_is_deterministic() {
        let (_dir, store) = store_with(&[("zeta", "B"), ("alpha", "B"), ("mid", "A")]);
        let index = build_index(&store);

        let categories: Vec<&String> = index.keys().collect();
        assert_eq!(categories, ["A", "B"]);
        assert_eq!(index["B"], vec!["alpha".to_string(), "zeta".to_string()]);
    }
}
