mod categories;
mod export;
mod leads;
mod search;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use placeleads_core::LeadStatus;
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;
use crate::store::LeadStore;

#[derive(Debug, Parser)]
#[command(name = "placeleads")]
#[command(about = "Find local business leads and track outreach")]
struct Cli {
    /// Lead store file. Overrides PLACELEADS_STORE_PATH.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for businesses and replace the working set with the results
    Search(SearchArgs),
    /// Show the working set
    List,
    /// Set the CRM status of a lead
    Status {
        /// Row number as shown by `list`
        row: usize,
        /// One of: pending, contacted, follow-up, scheduled, dead
        status: LeadStatus,
    },
    /// Replace the notes of a lead
    Note {
        /// Row number as shown by `list`
        row: usize,
        text: String,
    },
    /// Export the working set to CSV with clickable links
    Export {
        #[arg(long, short, default_value = "leads.csv")]
        output: PathBuf,
    },
    /// Suggest business categories matching a query
    Categories { query: Option<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = placeleads_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = LeadStore::new(cli.store.unwrap_or_else(|| config.store_path.clone()));

    let Some(command) = cli.command else {
        println!("placeleads ready; see --help for commands");
        return Ok(());
    };

    if let Commands::Categories { query } = &command {
        categories::run_categories(query.as_deref().unwrap_or_default());
        return Ok(());
    }

    let mut working_set = store.load()?;
    tracing::debug!(
        env = %config.env,
        store = %store.path().display(),
        leads = working_set.len(),
        "working set loaded"
    );

    match command {
        Commands::Search(args) => {
            search::run_search_command(&config, &store, &mut working_set, &args).await?;
        }
        Commands::List => leads::run_list(&working_set),
        Commands::Status { row, status } => {
            leads::run_set_status(&store, &mut working_set, row, status)?;
        }
        Commands::Note { row, text } => {
            leads::run_set_note(&store, &mut working_set, row, &text)?;
        }
        Commands::Export { output } => leads::run_export(&working_set, &output)?,
        // Handled above without touching the store.
        Commands::Categories { .. } => {}
    }

    Ok(())
}
