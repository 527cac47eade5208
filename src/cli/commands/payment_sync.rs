use anyhow::Result;

use crate::api::RegistrationApi;
use crate::cli::commands::{registration_client, Command};
use crate::observability::OperationTimer;

/// Backup sync for the payment-success path. The gateway webhook normally
/// marks the payment; this covers the case where it never arrived.
pub struct PaymentSyncCommand {
    pub registration_id: String,
    pub transaction_id: String,
}

impl PaymentSyncCommand {
    pub fn new(registration_id: String, transaction_id: String) -> Self {
        Self {
            registration_id,
            transaction_id,
        }
    }
}

impl Command for PaymentSyncCommand {
    async fn execute(&self) -> Result<()> {
        println!(
            "💳 Syncing payment for registration {} (txn {})...",
            self.registration_id, self.transaction_id
        );

        let client = registration_client()?;
        let timer = OperationTimer::new("payment_sync");

        match client
            .mark_payment_completed(&self.registration_id, &self.transaction_id)
            .await
        {
            Ok(message) => {
                timer.finish();
                if message.is_empty() {
                    println!("✅ Payment marked as completed.");
                } else {
                    println!("✅ {message}");
                }
                Ok(())
            }
            Err(err) => {
                println!("❌ {}", err.user_message());
                Err(err.into())
            }
        }
    }
}
