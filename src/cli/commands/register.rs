use anyhow::{bail, Context, Result};
use statig::prelude::*;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::api::{RegisterData, RegistrationApi};
use crate::cli::commands::{registration_client, Command};
use crate::config::config;
use crate::payment::PaymentHandoff;
use crate::telemetry::generate_correlation_id;
use crate::wizard::{
    ParticipationType, RegistrationForm, RegistrationWizard, Step, StepInput, TeamMember,
    WizardEvent,
};

pub struct RegisterCommand {
    pub from_file: Option<PathBuf>,
    pub dry_run: bool,
}

impl RegisterCommand {
    pub fn new(from_file: Option<PathBuf>, dry_run: bool) -> Self {
        Self { from_file, dry_run }
    }
}

impl Command for RegisterCommand {
    async fn execute(&self) -> Result<()> {
        let correlation_id = generate_correlation_id();
        tracing::info!(correlation.id = %correlation_id, "registration session started");

        let mut sm = match &self.from_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read form file {}", path.display()))?;
                let form: RegistrationForm =
                    toml::from_str(&text).context("form file is not valid TOML")?;
                RegistrationWizard::with_form(form).state_machine()
            }
            None => RegistrationWizard::new().state_machine(),
        };

        if self.from_file.is_some() {
            // Non-interactive: the pre-filled form still walks every step so
            // nothing skips validation.
            for _ in 0..4 {
                let step = sm.current_step();
                sm.handle(&WizardEvent::Next);
                if sm.current_step() == step {
                    print_errors(sm.errors());
                    bail!("form file failed validation at {step}");
                }
            }
            sm.handle(&WizardEvent::Submit);
            if !sm.is_submitting() {
                print_errors(sm.errors());
                bail!("form file failed validation at {}", Step::Consent);
            }
        } else {
            println!("🎪 HackFest 2026 Registration");
            println!("=============================");
            println!();
            self.run_wizard(&mut sm)?;
        }

        if self.dry_run {
            println!();
            println!("✅ Form is valid. Dry run requested; nothing was submitted.");
            return Ok(());
        }

        let interactive = self.from_file.is_none();
        let data = self.submit(&mut sm, interactive).await?;

        let handoff = PaymentHandoff::from_submission(sm.form(), &data);
        let payment_url = handoff.url(&config()?.payment)?;

        sm.handle(&WizardEvent::SubmissionAccepted {
            registration_id: data.registration_id.clone(),
        });

        println!();
        println!("🎉 Registration confirmed!");
        println!("   Registration ID: {}", data.registration_id);
        println!("   Amount due:      Rs. {:.2}", data.payment_amount);
        println!();
        println!("💳 Complete your payment here:");
        println!("   {payment_url}");
        println!();
        println!(
            "💡 After paying, if your status doesn't update, run: hackfest payment-sync {} <txnid>",
            data.registration_id
        );
        Ok(())
    }
}

impl RegisterCommand {
    /// Prompt step by step until the final submit passes validation.
    fn run_wizard(
        &self,
        sm: &mut statig::blocking::StateMachine<RegistrationWizard>,
    ) -> Result<()> {
        loop {
            let step = sm.current_step();
            println!("── {step} ──");

            let input = match step {
                Step::Identity => prompt_identity()?,
                Step::Academic => prompt_academic()?,
                Step::Participation => prompt_participation()?,
                Step::Profile => prompt_profile()?,
                Step::Consent => prompt_consent()?,
            };
            sm.handle(&WizardEvent::Apply(input));

            if step == Step::Consent {
                sm.handle(&WizardEvent::Submit);
                if sm.is_submitting() {
                    return Ok(());
                }
            } else {
                sm.handle(&WizardEvent::Next);
            }

            if sm.current_step() == step && !sm.is_submitting() {
                print_errors(sm.errors());
                println!("   Let's fix that and try again.");
                println!();
            } else {
                println!();
            }
        }
    }

    /// One request in flight at a time; on rejection the submit path is
    /// re-enabled and, interactively, the user decides whether to retry.
    async fn submit(
        &self,
        sm: &mut statig::blocking::StateMachine<RegistrationWizard>,
        interactive: bool,
    ) -> Result<RegisterData> {
        let client = registration_client()?;

        loop {
            print!("📨 Submitting your registration... ");
            std::io::stdout().flush().ok();

            match client.register(sm.form()).await {
                Ok(data) => {
                    println!("✅");
                    return Ok(data);
                }
                Err(err) => {
                    println!("❌");
                    println!("   {}", err.user_message());
                    sm.handle(&WizardEvent::Previous);

                    if !interactive || !prompt_yes_no("Try submitting again?")? {
                        bail!("registration was not completed");
                    }
                    sm.handle(&WizardEvent::Submit);
                }
            }
        }
    }
}

fn print_errors(errors: &crate::wizard::FieldErrors) {
    println!();
    println!("⚠️  Please fix the following:");
    for (field, message) in errors {
        println!("   ✗ {field}: {message}");
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("  {label}: ");
    std::io::stdout().flush()?;
    read_trimmed_line(&mut std::io::stdin().lock())
}

/// A zero-byte read means stdin closed; abort instead of re-prompting.
fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("input ended before the form was complete");
    }
    Ok(line.trim().to_string())
}

fn prompt_yes_no(label: &str) -> Result<bool> {
    let answer = prompt(&format!("{label} [y/N]"))?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn prompt_identity() -> Result<StepInput> {
    Ok(StepInput::Identity {
        name: prompt("Full name")?,
        email: prompt("Email")?,
        mobile: prompt("Mobile (10 digits)")?,
        gender: prompt("Gender")?,
    })
}

fn prompt_academic() -> Result<StepInput> {
    Ok(StepInput::Academic {
        college: prompt("College")?,
        city: prompt("City")?,
        state: prompt("State")?,
        course: prompt("Course")?,
        year: prompt("Year of study")?,
    })
}

fn prompt_participation() -> Result<StepInput> {
    let participation_type = loop {
        match prompt("Participation [individual/team]")?.parse::<ParticipationType>() {
            Ok(value) => break value,
            Err(_) => println!("   Please answer 'individual' or 'team'."),
        }
    };

    let (team_name, member2, member3, member4) = if participation_type == ParticipationType::Team {
        let team_name = prompt("Team name")?;
        println!("  Member 2 (required):");
        let member2 = prompt_member()?;
        let member3 = if prompt_yes_no("Add a third member?")? {
            prompt_member()?
        } else {
            TeamMember::default()
        };
        let member4 = if !member3.is_empty() && prompt_yes_no("Add a fourth member?")? {
            prompt_member()?
        } else {
            TeamMember::default()
        };
        (team_name, member2, member3, member4)
    } else {
        (
            String::new(),
            TeamMember::default(),
            TeamMember::default(),
            TeamMember::default(),
        )
    };

    Ok(StepInput::Participation {
        participation_type,
        team_name,
        member2,
        member3,
        member4,
    })
}

fn prompt_member() -> Result<TeamMember> {
    Ok(TeamMember {
        name: prompt("  Name")?,
        email: prompt("  Email")?,
        mobile: prompt("  Mobile")?,
    })
}

fn prompt_profile() -> Result<StepInput> {
    let skill_level = prompt("Skill level [beginner/intermediate/advanced]")?;
    let interests: BTreeSet<String> = prompt("Interests (comma separated)")?
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let referral_source = prompt("How did you hear about HackFest?")?;
    Ok(StepInput::Profile {
        skill_level,
        interests,
        referral_source,
    })
}

fn prompt_consent() -> Result<StepInput> {
    let fee_note = config()
        .map(|c| {
            format!(
                "Rs. {:.0} (individual) / Rs. {:.0} (team)",
                c.payment.individual_amount, c.payment.team_amount
            )
        })
        .unwrap_or_default();
    println!("  Registration fee: {fee_note}");
    Ok(StepInput::Consent {
        communication_consent: prompt_yes_no(
            "May we send you event updates over email/WhatsApp?",
        )?,
        declaration: prompt_yes_no(
            "I confirm the details above are accurate and accept the event rules",
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_trimmed_line_strips_whitespace() {
        let mut input = Cursor::new("  Asha Verma  \n");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "Asha Verma");
    }

    #[test]
    fn test_closed_stdin_is_an_error_not_an_empty_answer() {
        let mut input = Cursor::new("");
        assert!(read_trimmed_line(&mut input).is_err());
    }
}
