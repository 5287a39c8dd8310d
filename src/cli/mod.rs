mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::loader::SnapshotLoader;
use crate::logger;
use crate::reports::Aggregator;

/// Consumption and revenue reports for pet-care CRM snapshots
#[derive(Parser)]
#[command(name = "petreport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Snapshot JSON file exported by the store
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-customer consumption summary
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top-5 customers per facet, ranked by consumption value
    TopValue {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top-5 customers per facet, ranked by consumption quantity
    TopQuantity {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Most-consumed products and services
    MostConsumed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Consumption grouped by pet species and breed
    BySpecies {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        logger::init(self.verbose);

        let snapshot = SnapshotLoader::new(&self.snapshot).load()?;

        match self.command {
            Commands::Summary { json } => {
                let rows = Aggregator::customer_consumption(&snapshot);
                if json {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    print!("{}", render::summary(&rows));
                }
            }
            Commands::TopValue { json } => {
                let rows = Aggregator::customer_consumption(&snapshot);
                let report = Aggregator::top_customers_by_value(&rows);
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render::rankings("by value", &report));
                }
            }
            Commands::TopQuantity { json } => {
                let rows = Aggregator::customer_consumption(&snapshot);
                let report = Aggregator::top_customers_by_quantity(&rows);
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render::rankings("by quantity", &report));
                }
            }
            Commands::MostConsumed { json } => {
                let report = Aggregator::most_consumed(&snapshot);
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render::most_consumed(&report));
                }
            }
            Commands::BySpecies { json } => {
                let report = Aggregator::consumption_by_species(&snapshot);
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render::by_species(&report));
                }
            }
        }

        Ok(())
    }
}
