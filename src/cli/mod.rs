//! Command-line interface for snipvault.
//!
//! This is the collaborating front end over the snippet store: it validates
//! input, invokes the store, and re-renders the category tree after each
//! mutation. All snippet data lives in the models layer.

pub mod commands;
pub mod tree;

use anyhow::Result;
use colored::Colorize;

use crate::models::{SnippetStore, storage::DEFAULT_STORE_FILE};

/// Default filename offered for exports, matching the name the save dialog
/// of old suggested.
const DEFAULT_EXPORT_FILE: &str = "snippets_export.json";

/// Executes CLI commands based on the provided arguments.
pub fn execute_cli(args: &[String]) -> Result<()> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    match args[0].as_str() {
        "list" | "ls" => {
            let store = SnippetStore::load_or_default(DEFAULT_STORE_FILE);
            tree::display_tree(&store);
        }
        "show" | "view" | "cat" => {
            if args.len() < 2 {
                println!("{}  Error: Missing snippet title", "┃".bright_magenta());
                println!("{}  Usage: snipvault show <TITLE>", "┃".bright_magenta());
                return Ok(());
            }

            commands::show_snippet(&args[1])?;
        }
        "add" | "new" => {
            commands::add_snippet(&args[1..])?;
        }
        "delete" | "rm" => {
            if args.len() < 2 {
                println!("{}  Error: Missing snippet title", "┃".bright_magenta());
                println!("{}  Usage: snipvault delete <TITLE>", "┃".bright_magenta());
                return Ok(());
            }

            commands::delete_snippet(&args[1])?;

            // Show the refreshed tree so the user sees the new state.
            let store = SnippetStore::load_or_default(DEFAULT_STORE_FILE);
            tree::display_tree(&store);
        }
        "export" => {
            let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_EXPORT_FILE);
            commands::export_snippets(path)?;
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);
            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands.
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SNIPVAULT - CODE SNIPPET MANAGER".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  snipvault [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());
    println!(
        "{}  {:<34} {}",
        "┃".bright_magenta(),
        "list, ls".bright_white(),
        "List all snippets grouped by category"
    );
    println!(
        "{}  {:<34} {}",
        "┃".bright_magenta(),
        "show, view <TITLE>".bright_white(),
        "Display a snippet (partial title works)"
    );
    println!(
        "{}  {:<34} {}",
        "┃".bright_magenta(),
        "add <TITLE> [--lang] [--category]".bright_white(),
        "Add a snippet, code read from stdin"
    );
    println!(
        "{}  {:<34} {}",
        "┃".bright_magenta(),
        "delete, rm <TITLE>".bright_white(),
        "Delete a snippet by its exact title"
    );
    println!(
        "{}  {:<34} {}",
        "┃".bright_magenta(),
        "export [PATH]".bright_white(),
        "Export all snippets as JSON"
    );
    println!(
        "{}  {:<34} {}",
        "┃".bright_magenta(),
        "help".bright_white(),
        "Display this help message"
    );

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Snippets persist in {} next to where you run the command",
        "┃".bright_magenta(),
        DEFAULT_STORE_FILE.bright_white()
    );
}
