//! blockforge: inspect, migrate and edit page documents.
//!
//! Usage:
//!   blockforge list
//!   blockforge new features.section
//!   blockforge migrate page.json --publish
//!   blockforge set page.json <block-id> 'features[0].title' '"Fast"' --write

use std::path::PathBuf;

use anyhow::Result;
use blockforge_catalog::standard_registry_with;
use blockforge_cli::{
    get_value, list_rows, load_page, migrate_document, new_block, save_page, set_value,
};
use blockforge_registry::RegistryConfig;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "blockforge")]
#[command(about = "Inspect, migrate and edit blockforge page documents")]
struct Args {
    /// Registry config file (TOML)
    #[arg(short, long, default_value = "blockforge.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered block types
    List,
    /// Print a fresh instance of a block type
    New { block_type: String },
    /// Bring every block in a page up to its current version
    Migrate {
        page: PathBuf,
        /// Emit the published form (no builder metadata)
        #[arg(long)]
        publish: bool,
        /// Rewrite the page file instead of printing
        #[arg(long, conflicts_with = "publish")]
        write: bool,
    },
    /// Print the value at a prop path
    Get {
        page: PathBuf,
        block_id: String,
        path: String,
    },
    /// Set the value at a prop path
    Set {
        page: PathBuf,
        block_id: String,
        path: String,
        /// JSON value; anything that fails to parse is taken as a string
        value: String,
        /// Rewrite the page file instead of printing
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = RegistryConfig::load_from(&args.config);
    let registry = standard_registry_with(&config)?;
    debug!("Registry has {} block type(s)", registry.len());

    match args.command {
        Command::List => {
            for row in list_rows(&registry) {
                println!("{row}");
            }
        }
        Command::New { block_type } => print_json(&new_block(&registry, &block_type)?)?,
        Command::Migrate { page, publish, write } => {
            let migrated = migrate_document(&registry, load_page(&page)?);
            if write {
                save_page(&page, &migrated)?;
            } else if publish {
                print_json(&migrated.into_published())?;
            } else {
                print_json(&migrated)?;
            }
        }
        Command::Get { page, block_id, path } => {
            let doc = load_page(&page)?;
            print_json(get_value(&doc, &block_id, &path)?)?;
        }
        Command::Set {
            page,
            block_id,
            path,
            value,
            write,
        } => {
            let mut doc = load_page(&page)?;
            set_value(&registry, &mut doc, &block_id, &path, &value)?;
            if write {
                save_page(&page, &doc)?;
            } else {
                print_json(&doc)?;
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
