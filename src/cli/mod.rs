use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "hackfest")]
#[command(about = "HackFest 2026 registration desk")]
#[command(long_about = "The HackFest registration desk walks applicants through the \
                       five-step registration wizard, submits the form to the registration \
                       service, and hands off to the payment gateway. Start with 'hackfest register'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the five-step registration wizard and submit
    Register {
        /// Load a pre-filled form from a TOML file instead of prompting
        #[arg(long, help = "Path to a TOML file with the full form")]
        from_file: Option<PathBuf>,
        /// Validate every step but stop before submitting
        #[arg(long, help = "Run all validation without calling the registration API")]
        dry_run: bool,
    },
    /// Show the full detail of one registration (admin view)
    Show {
        /// The backend-assigned registration id
        registration_id: String,
        /// Print the raw record as JSON
        #[arg(long, help = "Emit the registration record as JSON")]
        json: bool,
    },
    /// Mark a registration's payment as completed (webhook fallback)
    PaymentSync {
        /// The backend-assigned registration id
        registration_id: String,
        /// The gateway transaction id
        transaction_id: String,
    },
    /// Display the committee finance dashboard (mock data)
    Finance {
        /// Include the line-item tables
        #[arg(long, help = "Show sponsorship and expense line items")]
        detailed: bool,
        /// Emit the dashboard dataset as JSON
        #[arg(long, help = "Print the dashboard as JSON for external tooling")]
        json: bool,
    },
    /// Show event dates, venue, tracks, fees, and schedule
    Info,
}
