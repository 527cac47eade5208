//! Static event facts: what the landing page says, minus the animations.

use crate::config::PaymentConfig;

#[derive(Debug, Clone)]
pub struct EventInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub dates: &'static str,
    pub venue: &'static str,
    pub prize_pool: &'static str,
    pub tracks: &'static [&'static str],
    pub schedule: &'static [(&'static str, &'static str)],
}

impl EventInfo {
    pub fn current() -> Self {
        Self {
            name: "HackFest 2026",
            tagline: "36 hours. One build. Zero sleep.",
            dates: "March 14-15, 2026",
            venue: "Innovation Block, Tech Park Campus",
            prize_pool: "Rs. 1,00,000",
            tracks: &[
                "AI & Machine Learning",
                "Web & Mobile",
                "FinTech",
                "Sustainability",
                "Open Innovation",
            ],
            schedule: &[
                ("Sat 09:00", "Check-in and team formation"),
                ("Sat 11:00", "Opening ceremony and problem reveal"),
                ("Sat 12:00", "Hacking begins"),
                ("Sun 00:00", "Midnight chai and surprise challenge"),
                ("Sun 12:00", "Code freeze"),
                ("Sun 14:00", "Demos and judging"),
                ("Sun 17:00", "Awards"),
            ],
        }
    }

    /// Fee lines as displayed on the landing page, sourced from config so
    /// they always agree with what the wizard charges.
    pub fn fee_lines(&self, payment: &PaymentConfig) -> Vec<String> {
        vec![
            format!("Individual entry: Rs. {:.0}", payment.individual_amount),
            format!(
                "Team entry (up to 4 members): Rs. {:.0}",
                payment.team_amount
            ),
        ]
    }
}
