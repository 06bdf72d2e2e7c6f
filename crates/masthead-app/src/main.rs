//! # Masthead - Authors, magazines and the articles between them
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: InMemoryMagazineRepository (adapter)           │
//! │    ├── Creates: InMemoryArticleRepository (adapter)            │
//! │    ├── Creates: Newsroom (domain service)                      │
//! │    └── Runs: The reference scenario and prints a report        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod report;

use clap::Parser;
use masthead_adapter::{in_memory_newsroom, InMemoryNewsroom};
use masthead_domain::Author;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "masthead")]
#[command(about = "Masthead - authors, magazines and the articles between them")]
#[command(version)]
struct Cli {
    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Log registry activity (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut newsroom = in_memory_newsroom();
    let authors = seed(&mut newsroom)?;

    info!(
        magazines = newsroom.magazines()?.len(),
        articles = newsroom.articles()?.len(),
        "registries populated"
    );

    let report = report::build(&newsroom, &authors)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

/// Populate the registries with the reference scenario
fn seed(newsroom: &mut InMemoryNewsroom) -> anyhow::Result<Vec<Author>> {
    let mut carry = Author::new("Carry Bradshaw")?;
    let nathaniel = Author::new("Nathaniel Hawthorne")?;
    let giorgio = Author::new("Giorgio Faletti")?;

    let vogue = newsroom.create_magazine("Vogue", "Fashion")?;
    let ad = newsroom.create_magazine("AD", "Architecture")?;

    newsroom.add_article(&carry, &vogue, "How to wear a tutu with style")?;
    newsroom.add_article(&carry, &vogue, "Dating life in NYC")?;
    newsroom.add_article(&carry, &ad, "2023 Eccentric Design Trends")?;
    newsroom.add_article(&carry, &vogue, "How to be single and happy")?;
    newsroom.add_article(&nathaniel, &vogue, "The Scarlet Letter, revisited")?;

    // Rejected writes leave the registries untouched
    if let Err(err) = newsroom.create_magazine("A", "X") {
        warn!(error = %err, "skipped invalid magazine");
    }
    if let Err(err) = carry.set_name("ActuallyTopher") {
        warn!(error = %err, "kept author name");
    }

    Ok(vec![carry, nathaniel, giorgio])
}
