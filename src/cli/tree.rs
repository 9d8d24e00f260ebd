use colored::Colorize;

use crate::models::{SnippetStore, build_index};

/// Displays the store as a category tree, one folder per category with the
/// snippet titles as leaves.
pub fn display_tree(store: &SnippetStore) {
    if store.is_empty() {
        println!("{}  No snippets stored yet.", "┃".bright_magenta());
        println!(
            "{}  Use {} to create one.",
            "┃".bright_magenta(),
            "snipvault add <TITLE>".bright_white()
        );
        return;
    }

    let index = build_index(store);

    for (category, titles) in &index {
        println!(
            "{}  {} {}",
            "┃".bright_magenta(),
            "󰉋".bright_blue(),
            category.bold()
        );

        let count = titles.len();
        for (idx, title) in titles.iter().enumerate() {
            let connector = if idx == count - 1 {
                "└── "
            } else {
                "├── "
            };

            let Some(snippet) = store.get(title) else {
                continue;
            };

            let language = if snippet.language.is_empty() {
                "text".to_string()
            } else {
                snippet.language.clone()
            };

            println!(
                "{}  {}{} {} {}",
                "┃".bright_magenta(),
                connector,
                snippet.title.bright_white(),
                format!("[{language}]").bright_black(),
                format!("{} lines", snippet.line_count()).bright_black().italic()
            );
        }
    }

    println!(
        "{}  {} snippets in {} categories",
        "┃".bright_magenta(),
        store.len().to_string().bright_yellow(),
        index.len().to_string().bright_yellow()
    );
}
