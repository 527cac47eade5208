use anyhow::Result;

use crate::cli::commands::Command;
use crate::config::config;
use crate::event_info::EventInfo;

pub struct InfoCommand;

impl InfoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for InfoCommand {
    async fn execute(&self) -> Result<()> {
        let info = EventInfo::current();
        let payment = &config()?.payment;

        println!("🎪 {} — {}", info.name, info.tagline);
        println!("==========================================");
        println!();
        println!("📅 {}", info.dates);
        println!("📍 {}", info.venue);
        println!("🏆 Prize pool: {}", info.prize_pool);
        println!();
        println!("🛤️  Tracks:");
        for track in info.tracks {
            println!("   → {track}");
        }
        println!();
        println!("💰 Fees:");
        for line in info.fee_lines(payment) {
            println!("   → {line}");
        }
        println!();
        println!("🗓️  Schedule:");
        for (time, item) in info.schedule {
            println!("   {time}  {item}");
        }
        println!();
        println!("💡 Ready? Run 'hackfest register' to claim your spot.");
        Ok(())
    }
}

impl Default for InfoCommand {
    fn default() -> Self {
        Self::new()
    }
}
