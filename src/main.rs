//! Capstone CLI - menu-driven task, student and inventory tools

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use capstone::config::{self, CapstoneConfig, INVENTORY_DB_ENV};
use capstone::inventory::InventoryMenu;
use capstone::menu::{self, Menu};
use capstone::students::StudentMenu;
use capstone::tasks::TaskMenu;
use capstone::{InventoryStore, Prompter, StudentDatabase, TaskManager};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "capstone")]
#[command(version)]
#[command(about = "Task manager, student records and inventory, each behind a text menu")]
#[command(long_about = r#"
Three interactive record-keeping tools:
  • tasks      - task list saved to a JSON file
  • students   - in-memory student records with sorting and top-N
  • inventory  - products and suppliers in SQLite

Example usage:
  capstone tasks --file ~/tasks.json
  capstone inventory --database data/inventory.db
  INVENTORY_DB_PATH=/tmp/inv.db capstone inventory
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to ./capstone.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tasks saved to a JSON file
    Tasks {
        /// Path to the tasks file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Manage student records in memory
    Students,

    /// Manage products and suppliers in a SQLite database
    Inventory {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Write a default capstone.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let cfg = config::load_config(Some(&config_path))
        .with_context(|| format!("failed to load {}", config_path.display()))?
        .unwrap_or_default();

    match cli.command {
        Commands::Tasks { file } => {
            let path = cfg.resolve_tasks_file(file);
            config::ensure_parent_dir(&path)?;
            tracing::debug!("Using tasks file {}", path.display());
            run_menu(TaskMenu::new(TaskManager::open(path)))
        }

        Commands::Students => run_menu(StudentMenu::new(StudentDatabase::new())),

        Commands::Inventory { database } => {
            let path = cfg.resolve_inventory_database(database, std::env::var(INVENTORY_DB_ENV).ok());
            config::ensure_parent_dir(&path)?;
            let store = InventoryStore::open(&path)
                .with_context(|| format!("failed to open inventory database {}", path.display()))?;
            run_menu(InventoryMenu::new(store))
        }

        Commands::Init { force } => {
            config::write_config(&config_path, &CapstoneConfig::with_defaults(), force)?;
            println!("✓ Wrote {}", config_path.display());
            Ok(())
        }
    }
}

fn run_menu(mut menu: impl Menu) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    menu::run(&mut menu, &mut prompter)?;
    Ok(())
}
