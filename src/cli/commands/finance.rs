use anyhow::Result;

use crate::cli::commands::Command;
use crate::finance::FinanceDashboard;

pub struct FinanceCommand {
    pub detailed: bool,
    pub json: bool,
}

impl FinanceCommand {
    pub fn new(detailed: bool, json: bool) -> Self {
        Self { detailed, json }
    }
}

impl Command for FinanceCommand {
    async fn execute(&self) -> Result<()> {
        let dashboard = FinanceDashboard::mock();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
            return Ok(());
        }

        println!("📊 {} — Finance Dashboard (mock data)", dashboard.edition);
        println!("===========================================");
        println!();
        println!(
            "🎟️  Registrations: {} paid, Rs. {:.0} collected ({:.0}% of Rs. {:.0} target)",
            dashboard.total_registrations(),
            dashboard.total_collections(),
            dashboard.collection_progress(),
            dashboard.collection_target
        );
        println!(
            "🤝 Sponsorships:  Rs. {:.0} received, Rs. {:.0} pending",
            dashboard.sponsorships_received(),
            dashboard.sponsorships_pending()
        );
        println!("💸 Expenses:      Rs. {:.0}", dashboard.total_expenses());
        println!();
        let balance = dashboard.balance();
        let icon = if balance >= 0.0 { "🟢" } else { "🔴" };
        println!("{icon} Balance: Rs. {balance:.0}");

        if self.detailed {
            println!();
            println!("── Collections ──");
            for line in &dashboard.collections {
                println!(
                    "   {:32} {:>5}  Rs. {:>10.0}",
                    line.category, line.registrations, line.amount
                );
            }
            println!();
            println!("── Sponsorships ──");
            for line in &dashboard.sponsorships {
                let mark = if line.received { "✅" } else { "⏳" };
                println!(
                    "   {mark} {:24} {:8} Rs. {:>10.0}",
                    line.sponsor, line.tier, line.amount
                );
            }
            println!();
            println!("── Expenses ──");
            for line in &dashboard.expenses {
                println!(
                    "   {:12} Rs. {:>10.0}  {}",
                    line.category, line.amount, line.description
                );
            }
        } else {
            println!();
            println!("💡 Run with --detailed for line items, --json for export.");
        }

        Ok(())
    }
}
