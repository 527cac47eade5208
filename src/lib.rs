// HackFest Desk Library - Event Registration Toolkit
// This exposes the core components for testing and integration

pub mod api;
pub mod cli;
pub mod config;
pub mod event_info;
pub mod finance;
pub mod observability;
pub mod payment;
pub mod telemetry;
pub mod wizard;

// Re-export key types for easy access
pub use api::{ApiError, PaymentStatus, RegisterData, RegistrationApi, RegistrationClient, RegistrationRecord};
pub use config::{config, HackFestConfig};
pub use event_info::EventInfo;
pub use finance::FinanceDashboard;
pub use observability::{api_metrics, ApiMetrics, OperationTimer};
pub use payment::PaymentHandoff;
pub use telemetry::{generate_correlation_id, init_telemetry};
pub use wizard::{
    validate_step, FieldErrors, ParticipationType, RegistrationForm, RegistrationWizard, Step,
    StepInput, TeamMember, WizardEvent,
};
