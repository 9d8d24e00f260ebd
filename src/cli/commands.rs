use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::models::{Snippet, SnippetStore, storage::DEFAULT_STORE_FILE};

/// Shows a snippet by title. Exact match first, then case-insensitive,
/// then partial, so `show quick` finds "Quicksort".
pub fn show_snippet(name: &str) -> Result<()> {
    let store = SnippetStore::load_or_default(DEFAULT_STORE_FILE);

    let title = match resolve_title(&store, name) {
        Some(title) => title,
        None => {
            println!(
                "{}  No snippet found with title: {}",
                "┃".bright_magenta(),
                name
            );
            list_titles(&store);
            return Ok(());
        }
    };

    let snippet = store
        .get(&title)
        .context("resolved title vanished from the store")?;

    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "SNIPPET".bright_green().bold(),
        snippet.title.bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Category".bright_blue(),
        snippet.effective_category()
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Language".bright_yellow(),
        if snippet.language.is_empty() {
            "(none)"
        } else {
            snippet.language.as_str()
        }
    );
    if !snippet.tags.is_empty() {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Tags".bright_cyan(),
            snippet.tags
        );
    }
    println!("{}", "─".repeat(60).bright_magenta());

    // Same header the original viewer rendered above the code.
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        format!("// Language: {}", snippet.language).bright_black()
    );
    println!("{}", "┃".bright_magenta());
    for line in snippet.code.lines() {
        println!("{}  {}", "┃".bright_magenta(), line);
    }

    Ok(())
}

/// Creates a snippet from the command line, reading the code body from
/// stdin until EOF.
pub fn add_snippet(args: &[String]) -> Result<()> {
    let mut title = String::new();
    let mut language = String::new();
    let mut tags = String::new();
    let mut category = String::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" | "-l" => {
                language = iter.next().context("--lang requires a value")?.clone();
            }
            "--tags" | "-t" => {
                tags = iter.next().context("--tags requires a value")?.clone();
            }
            "--category" | "-c" => {
                category = iter.next().context("--category requires a value")?.clone();
            }
            other if title.is_empty() => title = other.to_string(),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }

    if title.is_empty() {
        println!("{}  Error: Missing snippet title", "┃".bright_magenta());
        println!(
            "{}  Usage: snipvault add <TITLE> [--lang L] [--tags T] [--category C]",
            "┃".bright_magenta()
        );
        return Ok(());
    }

    if io::stdin().is_terminal() {
        println!(
            "{}  Enter the snippet code, end with {}:",
            "┃".bright_magenta(),
            "Ctrl-D".bright_white()
        );
    }
    let mut code = String::new();
    io::stdin()
        .read_to_string(&mut code)
        .context("failed to read snippet code from stdin")?;

    let mut store = SnippetStore::load_or_default(DEFAULT_STORE_FILE);
    let replaced = store.get(&title).is_some();
    store
        .add(Snippet::new(title.clone(), language, tags, code, category))
        .context("failed to store the snippet")?;

    let verb = if replaced { "Replaced" } else { "Added" };
    println!(
        "{}  {} snippet {}",
        "┃".bright_magenta(),
        verb.bright_green(),
        title.bright_white().bold()
    );

    Ok(())
}

/// Deletes a snippet by its exact title.
pub fn delete_snippet(title: &str) -> Result<()> {
    let mut store = SnippetStore::load_or_default(DEFAULT_STORE_FILE);

    let removed = store
        .delete_by_title(title)
        .context("failed to persist the store after deletion")?;

    if removed {
        println!(
            "{}  {} snippet {}",
            "┃".bright_magenta(),
            "Deleted".bright_green(),
            title.bright_white().bold()
        );
    } else {
        println!(
            "{}  No snippet found with title: {}",
            "┃".bright_magenta(),
            title
        );
        list_titles(&store);
    }

    Ok(())
}

/// Exports the whole store to an arbitrary path. Failure here is the one
/// storage error the user must always see.
pub fn export_snippets(path: &str) -> Result<()> {
    let store = SnippetStore::load_or_default(DEFAULT_STORE_FILE);

    match store.export_to(path) {
        Ok(()) => {
            println!(
                "{}  Exported {} snippets to {}",
                "┃".bright_magenta(),
                store.len().to_string().bright_yellow(),
                path.bright_white().bold()
            );
            Ok(())
        }
        Err(err) => {
            println!(
                "{}  {} {}",
                "┃".bright_magenta(),
                "Export failed:".bright_red().bold(),
                err
            );
            Err(err.into())
        }
    }
}

/// Resolves user input to a stored title: exact, then case-insensitive,
/// then substring match.
fn resolve_title(store: &SnippetStore, name: &str) -> Option<String> {
    if store.get(name).is_some() {
        return Some(name.to_string());
    }

    let lowered = name.to_lowercase();
    let titles = store.snippets().keys();

    if let Some(title) = titles.clone().find(|t| t.to_lowercase() == lowered) {
        return Some(title.clone());
    }

    let mut partial: Vec<&String> = titles
        .filter(|t| t.to_lowercase().contains(&lowered))
        .collect();
    partial.sort();
    partial.first().map(|t| (*t).clone())
}

/// Lists up to ten stored titles to help the user after a failed lookup.
fn list_titles(store: &SnippetStore) {
    if store.is_empty() {
        return;
    }

    println!("{}  Available snippets:", "┃".bright_magenta());

    let mut titles: Vec<&String> = store.snippets().keys().collect();
    titles.sort();

    for (idx, title) in titles.iter().enumerate().take(10) {
        println!(
            "{}  {}. {}",
            "┃".bright_magenta(),
            (idx + 1).to_string().yellow(),
            title.bright_white()
        );
    }

    if titles.len() > 10 {
        println!(
            "{}  ... and {} more",
            "┃".bright_magenta(),
            titles.len() - 10
        );
    }
}
