use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listclone_core::record::SelectedRow;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "listclone")]
#[command(about = "Console host for the list clone command set", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/listclone/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a view update and print the resulting command visibility
    Visibility {
        /// Title of the list the view is showing
        #[arg(long)]
        list: String,
        /// Number of selected rows
        #[arg(long, default_value_t = 0)]
        selected: usize,
    },
    /// Execute a command against the current selection
    Execute {
        /// Command identifier, e.g. ITEM_COPY
        command: String,
        /// Title of the list the view is showing
        #[arg(long)]
        list: String,
        /// Site URL (overrides the config file)
        #[arg(long)]
        site: Option<String>,
        /// Selected row as comma separated NAME=VALUE pairs, e.g. ID=7,Title=Foo
        #[arg(long = "row", value_parser = commands::parse_row)]
        rows: Vec<SelectedRow>,
    },
    /// Print the effective configuration
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Visibility { list, selected } => commands::visibility(config, list, selected)?,
        Commands::Execute {
            command,
            list,
            site,
            rows,
        } => commands::execute(config, command, list, site, rows).await?,
        Commands::Config => commands::show_config(&config)?,
    }

    Ok(())
}
