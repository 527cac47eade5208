// Finance Dashboard Module - Mock Budget View
//
// The organizing-committee dashboard runs entirely on illustrative data; no
// API calls are made and nothing is persisted. Real ledgers live with the
// finance team.

pub mod dashboard;

pub use dashboard::{CollectionLine, ExpenseLine, FinanceDashboard, SponsorshipLine};
