use anyhow::Result;

use crate::api::RegistrationClient;
use crate::config::config;

pub mod finance;
pub mod info;
pub mod payment_sync;
pub mod register;
pub mod show;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Build the API client from the loaded configuration.
pub fn registration_client() -> Result<RegistrationClient> {
    let config = config()?;
    RegistrationClient::from_config(&config.api)
}

pub async fn show_how_to_register() -> Result<()> {
    println!("🎪 HackFest 2026 — Registration Desk");
    println!();
    println!("To get started:");
    println!("  📝 hackfest register            # Walk through the registration wizard");
    println!("  ℹ️  hackfest info                # Dates, venue, tracks, and fees");
    println!();
    println!("Admin commands:");
    println!("  🔎 hackfest show <id>           # Inspect one registration");
    println!("  💳 hackfest payment-sync <id> <txnid>   # Webhook fallback sync");
    println!("  📊 hackfest finance             # Committee budget dashboard");
    println!();
    println!("💡 Start with 'hackfest register' to sign up!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::finance::FinanceCommand;

    async fn run_command<C: Command>(command: C) -> Result<()> {
        command.execute().await
    }

    #[test]
    fn test_commands_dispatch_through_the_trait() {
        let finance = FinanceCommand::new(false, true);
        tokio_test::block_on(run_command(finance)).unwrap();
    }
}
