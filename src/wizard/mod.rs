// Registration Wizard Module - Multi-Step Form State Machine
//
// Holds cumulative form state across the five registration steps, validates
// each step before advancing, and hands off to the payment gateway after the
// backend accepts the submission.

pub mod state_machine;
pub mod types;
pub mod validation;

pub use state_machine::{RegistrationWizard, StepInput, WizardEvent};
pub use types::{ParticipationType, RegistrationForm, Step, TeamMember};
pub use validation::{validate_step, FieldErrors};
