//! Command-line configuration for the `sales-dashboard` binary.
//!
//! The data directory comes from `--data-dir`, then `SALES_DASHBOARD_DATA_DIR`,
//! then the platform data directory.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use shared::{SaleStatus, TimeRange};
use std::path::PathBuf;

use crate::domain::history::{HistoryFilter, StatusFilter};

pub const DATA_DIR_ENV: &str = "SALES_DASHBOARD_DATA_DIR";
const APP_DIR_NAME: &str = "sales-dashboard";

/// Track sales, products and revenue from the terminal
#[derive(Debug, Parser)]
#[command(name = "sales-dashboard", version)]
pub struct CliArgs {
    /// Directory holding sales.json, products.json and settings.json
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl CliArgs {
    /// The requested command, a daily summary when none was given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Summary {
            range: TimeRange::Daily,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Totals, streak, revenue chart and rollups
    Summary {
        #[arg(long, default_value = "daily")]
        range: TimeRange,
    },
    /// List recorded sales, newest first
    History(HistoryArgs),
    /// Record a sale pre-filled from a product
    Add(AddSaleArgs),
    /// Switch a sale between completed and pending
    Toggle { id: u64 },
    /// Remove a sale
    Delete { id: u64 },
    /// List the product catalog
    Products,
    /// Add a product to the catalog
    ProductAdd {
        name: String,
        price: f64,
        #[arg(default_value_t = 0)]
        robux: u64,
        #[arg(default_value_t = 0.0)]
        cost: f64,
    },
    /// Remove a product from the catalog
    ProductRemove { name: String },
    /// Show the display settings
    Settings,
    /// Set the accent color, as #rrggbb or a preset name
    Accent { color: String },
    /// Set the Robux color, as #rrggbb
    RobuxColor { color: String },
    /// Write the history as sales-YYYY-MM-DD.csv
    Export {
        /// Target directory, the current one by default
        directory: Option<PathBuf>,
    },
    /// Replace the stored sales with the demo data set
    SeedDemo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Completed,
    Pending,
}

impl From<StatusArg> for StatusFilter {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::All => StatusFilter::All,
            StatusArg::Completed => StatusFilter::Only(SaleStatus::Completed),
            StatusArg::Pending => StatusFilter::Only(SaleStatus::Pending),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct HistoryArgs {
    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,

    /// Text to look for in client, product and notes
    #[arg(long)]
    pub search: Option<String>,
}

impl HistoryArgs {
    pub fn filter(&self) -> HistoryFilter {
        HistoryFilter {
            status: self.status.into(),
            query: self.search.clone(),
        }
    }
}

/// Flags of the `add` command. Unset values come from the product.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct AddSaleArgs {
    pub client: String,

    /// Product name, the first catalog product by default
    #[arg(long)]
    pub product: Option<String>,

    #[arg(long)]
    pub amount: Option<f64>,

    #[arg(long)]
    pub robux: Option<u64>,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Record the sale as not yet paid
    #[arg(long)]
    pub pending: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Could not determine a data directory; pass --data-dir")]
    NoDataDirectory,
}

/// Pick the data directory: explicit flag or environment, then platform default
pub fn resolve_data_dir(
    explicit: Option<PathBuf>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    // tolerate quoted values pasted from a file manager
    let explicit = explicit
        .map(|path| path.to_string_lossy().trim().trim_matches('"').to_string())
        .filter(|path| !path.is_empty());
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    platform_dir
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoDataDirectory)
}

/// [`resolve_data_dir`] against the real platform directories
pub fn data_dir_for(args: &CliArgs) -> Result<PathBuf> {
    let directory = resolve_data_dir(args.data_dir.clone(), dirs::data_dir())?;
    info!("Using data directory {}", directory.display());
    Ok(directory)
}
