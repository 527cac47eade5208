use serde::{Deserialize, Serialize};

/// Fee collections for one registration category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionLine {
    pub category: String,
    pub registrations: u64,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipLine {
    pub sponsor: String,
    pub tier: String,
    pub amount: f64,
    pub received: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// The full dashboard dataset. All amounts in INR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceDashboard {
    pub edition: String,
    pub collection_target: f64,
    pub collections: Vec<CollectionLine>,
    pub sponsorships: Vec<SponsorshipLine>,
    pub expenses: Vec<ExpenseLine>,
}

impl FinanceDashboard {
    /// Illustrative numbers for the committee preview.
    pub fn mock() -> Self {
        Self {
            edition: "HackFest 2026".to_string(),
            collection_target: 250_000.0,
            collections: vec![
                CollectionLine {
                    category: "Individual registrations".to_string(),
                    registrations: 312,
                    amount: 62_088.0,
                },
                CollectionLine {
                    category: "Team registrations".to_string(),
                    registrations: 147,
                    amount: 73_353.0,
                },
            ],
            sponsorships: vec![
                SponsorshipLine {
                    sponsor: "Raven Cloud".to_string(),
                    tier: "Title".to_string(),
                    amount: 100_000.0,
                    received: true,
                },
                SponsorshipLine {
                    sponsor: "Chai Point Express".to_string(),
                    tier: "Gold".to_string(),
                    amount: 40_000.0,
                    received: true,
                },
                SponsorshipLine {
                    sponsor: "DevTools Labs".to_string(),
                    tier: "Silver".to_string(),
                    amount: 25_000.0,
                    received: false,
                },
            ],
            expenses: vec![
                ExpenseLine {
                    category: "Venue".to_string(),
                    description: "Auditorium and labs, 2 days".to_string(),
                    amount: 80_000.0,
                },
                ExpenseLine {
                    category: "Catering".to_string(),
                    description: "Meals and midnight chai".to_string(),
                    amount: 55_000.0,
                },
                ExpenseLine {
                    category: "Prizes".to_string(),
                    description: "Prize pool and track awards".to_string(),
                    amount: 100_000.0,
                },
                ExpenseLine {
                    category: "Swag".to_string(),
                    description: "T-shirts, stickers, badges".to_string(),
                    amount: 30_000.0,
                },
                ExpenseLine {
                    category: "Operations".to_string(),
                    description: "AV, networking, volunteers".to_string(),
                    amount: 22_000.0,
                },
            ],
        }
    }

    pub fn total_collections(&self) -> f64 {
        self.collections.iter().map(|line| line.amount).sum()
    }

    pub fn total_registrations(&self) -> u64 {
        self.collections.iter().map(|line| line.registrations).sum()
    }

    /// Sponsorship money actually in the bank.
    pub fn sponsorships_received(&self) -> f64 {
        self.sponsorships
            .iter()
            .filter(|line| line.received)
            .map(|line| line.amount)
            .sum()
    }

    /// Committed but not yet received.
    pub fn sponsorships_pending(&self) -> f64 {
        self.sponsorships
            .iter()
            .filter(|line| !line.received)
            .map(|line| line.amount)
            .sum()
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|line| line.amount).sum()
    }

    pub fn total_income(&self) -> f64 {
        self.total_collections() + self.sponsorships_received()
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// Fee collection as a percentage of the target, capped at 100.
    pub fn collection_progress(&self) -> f64 {
        if self.collection_target <= 0.0 {
            return 0.0;
        }
        (self.total_collections() / self.collection_target * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_add_up() {
        let dashboard = FinanceDashboard::mock();
        assert_eq!(dashboard.total_registrations(), 312 + 147);
        assert!((dashboard.total_collections() - 135_441.0).abs() < f64::EPSILON);
        assert!((dashboard.sponsorships_received() - 140_000.0).abs() < f64::EPSILON);
        assert!((dashboard.sponsorships_pending() - 25_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let dashboard = FinanceDashboard::mock();
        let expected = dashboard.total_income() - dashboard.total_expenses();
        assert!((dashboard.balance() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collection_progress_is_capped() {
        let mut dashboard = FinanceDashboard::mock();
        assert!(dashboard.collection_progress() > 0.0);
        assert!(dashboard.collection_progress() <= 100.0);

        dashboard.collection_target = 1.0;
        assert_eq!(dashboard.collection_progress(), 100.0);

        dashboard.collection_target = 0.0;
        assert_eq!(dashboard.collection_progress(), 0.0);
    }

    #[test]
    fn test_dashboard_exports_as_json() {
        let dashboard = FinanceDashboard::mock();
        let json = serde_json::to_value(&dashboard).unwrap();
        assert!(json.get("collections").is_some());
        assert!(json.get("sponsorships").is_some());
        assert!(json.get("expenses").is_some());
    }
}
