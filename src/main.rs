use anyhow::Result;
use clap::Parser;

use hackfest_desk::cli::commands::{
    finance::FinanceCommand, info::InfoCommand, payment_sync::PaymentSyncCommand,
    register::RegisterCommand, show::ShowCommand, show_how_to_register, Command,
};
use hackfest_desk::cli::{Cli, Commands};
use hackfest_desk::config;
use hackfest_desk::telemetry::init_telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing stays opt-in; interactive wizard sessions shouldn't be
    // interleaved with JSON log lines unless someone asked for them.
    if let Ok(config) = config::config() {
        if config.observability.tracing_enabled {
            init_telemetry(&config.observability.log_level)?;
        }
    }

    match cli.command {
        // Default behavior: no subcommand - explain how to register
        None => tokio::runtime::Runtime::new()?.block_on(async { show_how_to_register().await }),
        Some(Commands::Register { from_file, dry_run }) => tokio::runtime::Runtime::new()?
            .block_on(async { RegisterCommand::new(from_file, dry_run).execute().await }),
        Some(Commands::Show {
            registration_id,
            json,
        }) => tokio::runtime::Runtime::new()?
            .block_on(async { ShowCommand::new(registration_id, json).execute().await }),
        Some(Commands::PaymentSync {
            registration_id,
            transaction_id,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            PaymentSyncCommand::new(registration_id, transaction_id)
                .execute()
                .await
        }),
        Some(Commands::Finance { detailed, json }) => tokio::runtime::Runtime::new()?
            .block_on(async { FinanceCommand::new(detailed, json).execute().await }),
        Some(Commands::Info) => {
            tokio::runtime::Runtime::new()?.block_on(async { InfoCommand::new().execute().await })
        }
    }
}
