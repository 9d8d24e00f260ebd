//! snipvault - Code Snippet Manager
//!
//! A terminal tool for cataloging reusable code fragments. Snippets carry a
//! title, language, tags and a category, persist in a single JSON document,
//! and can be browsed as a category tree or exported anywhere.

use std::env;
use std::error::Error;

mod cli;
mod models;

fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    cli::execute_cli(&args)?;

    Ok(())
}
