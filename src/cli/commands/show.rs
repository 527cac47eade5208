use anyhow::Result;

use crate::api::{ApiError, PaymentStatus, RegistrationApi, RegistrationRecord};
use crate::cli::commands::{registration_client, Command};

pub struct ShowCommand {
    pub registration_id: String,
    pub json: bool,
}

impl ShowCommand {
    pub fn new(registration_id: String, json: bool) -> Self {
        Self {
            registration_id,
            json,
        }
    }
}

impl Command for ShowCommand {
    async fn execute(&self) -> Result<()> {
        let client = registration_client()?;

        let record = match client.fetch_registration(&self.registration_id).await {
            Ok(record) => record,
            Err(err @ ApiError::NotFound { .. }) => {
                println!("🔍 {}", err.user_message());
                return Ok(());
            }
            Err(err) => {
                println!("❌ {}", err.user_message());
                return Err(err.into());
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
            return Ok(());
        }

        render_record(&record);
        Ok(())
    }
}

fn render_record(record: &RegistrationRecord) {
    let form = &record.form;

    println!("📋 Registration {}", record.registration_id);
    println!("==============================");
    println!();
    println!("👤 Identity");
    println!("   Name:    {}", form.name);
    println!("   Email:   {}", form.email);
    println!("   Mobile:  {}", form.mobile);
    println!("   Gender:  {}", form.gender);
    println!();
    println!("🎓 Academic");
    println!("   College: {}", form.college);
    println!("   City:    {}, {}", form.city, form.state);
    println!("   Course:  {} (year {})", form.course, form.year);
    println!();
    println!("👥 Participation: {}", form.participation_type);
    if form.is_team() {
        println!("   Team name: {}", form.team_name);
        for (label, member) in [
            ("Member 2", &form.member2),
            ("Member 3", &form.member3),
            ("Member 4", &form.member4),
        ] {
            if !member.is_empty() {
                println!(
                    "   {label}: {} <{}> {}",
                    member.name, member.email, member.mobile
                );
            }
        }
    }
    println!();
    println!("🧭 Profile");
    println!("   Skill level: {}", form.skill_level);
    if !form.interests.is_empty() {
        let interests: Vec<&str> = form.interests.iter().map(String::as_str).collect();
        println!("   Interests:   {}", interests.join(", "));
    }
    println!("   Heard via:   {}", form.referral_source);
    println!();
    println!("✍️  Consents");
    println!(
        "   Updates over email/WhatsApp: {}",
        if form.communication_consent { "yes" } else { "no" }
    );
    println!(
        "   Declaration accepted:        {}",
        if form.declaration { "yes" } else { "no" }
    );
    println!();
    let status_icon = match record.payment_status {
        PaymentStatus::Completed => "✅",
        PaymentStatus::Pending => "⏳",
        PaymentStatus::Failed => "❌",
    };
    println!(
        "{status_icon} Payment: {} — Rs. {:.2}",
        record.payment_status, record.payment_amount
    );
    if let Some(transaction_id) = &record.transaction_id {
        println!("   Transaction: {transaction_id}");
    }
    if let Some(created_at) = &record.created_at {
        println!("   Registered:  {}", created_at.format("%Y-%m-%d %H:%M UTC"));
    }
}
