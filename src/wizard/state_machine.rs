use statig::prelude::*;
use std::collections::BTreeSet;

use super::types::{ParticipationType, RegistrationForm, Step, TeamMember};
use super::validation::{validate_step, FieldErrors};

/// Input collected for one wizard step. Events carry the data so the
/// machine owns the form exclusively; callers never reach into it.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    Identity {
        name: String,
        email: String,
        mobile: String,
        gender: String,
    },
    Academic {
        college: String,
        city: String,
        state: String,
        course: String,
        year: String,
    },
    Participation {
        participation_type: ParticipationType,
        team_name: String,
        member2: TeamMember,
        member3: TeamMember,
        member4: TeamMember,
    },
    Profile {
        skill_level: String,
        interests: BTreeSet<String>,
        referral_source: String,
    },
    Consent {
        communication_consent: bool,
        declaration: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Write the payload into the form. Only the input matching the current
    /// step is accepted; anything else is ignored.
    Apply(StepInput),
    /// Validate the current step and advance on success. Clamped at step 5.
    Next,
    /// Go back one step without validation. Clamped at step 1.
    Previous,
    /// Final submit, only meaningful on step 5.
    Submit,
    /// The registration API accepted the submission.
    SubmissionAccepted { registration_id: String },
}

/// The registration wizard. Holds cumulative form state across the five
/// steps, validates each step before advancing, and terminates once the
/// backend has accepted the submission.
#[derive(Default)]
pub struct RegistrationWizard {
    pub form: RegistrationForm,
    pub errors: FieldErrors,
    step: Step,
    registration_id: Option<String>,
    in_flight: bool,
    complete: bool,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-filled form (e.g. loaded from a file). The
    /// form still passes through every step's validation on the way out.
    pub fn with_form(form: RegistrationForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// The submit request is in flight; the submit control stays disabled.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn is_submitted(&self) -> bool {
        self.complete
    }

    pub fn registration_id(&self) -> Option<&str> {
        self.registration_id.as_deref()
    }

    /// Validate the current step, retaining the errors for display.
    fn check_step(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.form);
        if self.errors.is_empty() {
            true
        } else {
            tracing::debug!(
                step = self.step.number(),
                error_count = self.errors.len(),
                "step validation blocked advancement"
            );
            false
        }
    }

    fn advance_to(&mut self, step: Step) {
        self.errors.clear();
        self.step = step;
        tracing::info!(step = step.number(), title = step.title(), "wizard advanced");
    }

    fn retreat_to(&mut self, step: Step) {
        self.errors.clear();
        self.step = step;
        tracing::info!(step = step.number(), title = step.title(), "wizard went back");
    }
}

#[state_machine(initial = "State::identity()")]
impl RegistrationWizard {
    #[state]
    fn identity(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Apply(StepInput::Identity {
                name,
                email,
                mobile,
                gender,
            }) => {
                self.form.name = name.clone();
                self.form.email = email.clone();
                self.form.mobile = mobile.clone();
                self.form.gender = gender.clone();
                Handled
            }
            WizardEvent::Next => {
                if self.check_step() {
                    self.advance_to(Step::Academic);
                    Transition(State::academic())
                } else {
                    Handled
                }
            }
            // Already at step 1; retreat clamps here.
            WizardEvent::Previous => {
                self.errors.clear();
                Handled
            }
            _ => Handled,
        }
    }

    #[state]
    fn academic(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Apply(StepInput::Academic {
                college,
                city,
                state,
                course,
                year,
            }) => {
                self.form.college = college.clone();
                self.form.city = city.clone();
                self.form.state = state.clone();
                self.form.course = course.clone();
                self.form.year = year.clone();
                Handled
            }
            WizardEvent::Next => {
                if self.check_step() {
                    self.advance_to(Step::Participation);
                    Transition(State::participation())
                } else {
                    Handled
                }
            }
            WizardEvent::Previous => {
                self.retreat_to(Step::Identity);
                Transition(State::identity())
            }
            _ => Handled,
        }
    }

    #[state]
    fn participation(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Apply(StepInput::Participation {
                participation_type,
                team_name,
                member2,
                member3,
                member4,
            }) => {
                self.form.participation_type = *participation_type;
                self.form.team_name = team_name.clone();
                self.form.member2 = member2.clone();
                self.form.member3 = member3.clone();
                self.form.member4 = member4.clone();
                Handled
            }
            WizardEvent::Next => {
                if self.check_step() {
                    self.advance_to(Step::Profile);
                    Transition(State::profile())
                } else {
                    Handled
                }
            }
            WizardEvent::Previous => {
                self.retreat_to(Step::Academic);
                Transition(State::academic())
            }
            _ => Handled,
        }
    }

    #[state]
    fn profile(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Apply(StepInput::Profile {
                skill_level,
                interests,
                referral_source,
            }) => {
                self.form.skill_level = skill_level.clone();
                self.form.interests = interests.clone();
                self.form.referral_source = referral_source.clone();
                Handled
            }
            WizardEvent::Next => {
                if self.check_step() {
                    self.advance_to(Step::Consent);
                    Transition(State::consent())
                } else {
                    Handled
                }
            }
            WizardEvent::Previous => {
                self.retreat_to(Step::Participation);
                Transition(State::participation())
            }
            _ => Handled,
        }
    }

    #[state]
    fn consent(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Apply(StepInput::Consent {
                communication_consent,
                declaration,
            }) => {
                self.form.communication_consent = *communication_consent;
                self.form.declaration = *declaration;
                Handled
            }
            // Step 5 is the last one; Next clamps here.
            WizardEvent::Next => Handled,
            WizardEvent::Previous => {
                self.retreat_to(Step::Profile);
                Transition(State::profile())
            }
            WizardEvent::Submit => {
                if self.check_step() {
                    self.in_flight = true;
                    tracing::info!(
                        participation_type = %self.form.participation_type,
                        "registration submitted"
                    );
                    Transition(State::submitting())
                } else {
                    Handled
                }
            }
            _ => Handled,
        }
    }

    #[state]
    fn submitting(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::SubmissionAccepted { registration_id } => {
                self.in_flight = false;
                self.complete = true;
                self.registration_id = Some(registration_id.clone());
                tracing::info!(registration_id = %registration_id, "registration accepted");
                Transition(State::submitted())
            }
            // A rejected or failed submit re-enables the submit control.
            WizardEvent::Previous => {
                self.in_flight = false;
                self.step = Step::Consent;
                Transition(State::consent())
            }
            _ => Handled,
        }
    }

    #[state]
    fn submitted(&mut self, event: &WizardEvent) -> Outcome<State> {
        // Terminal. The browser equivalent navigated away to the gateway.
        let _ = event;
        Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_input() -> WizardEvent {
        WizardEvent::Apply(StepInput::Identity {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            gender: "female".to_string(),
        })
    }

    fn academic_input() -> WizardEvent {
        WizardEvent::Apply(StepInput::Academic {
            college: "NIT Trichy".to_string(),
            city: "Tiruchirappalli".to_string(),
            state: "Tamil Nadu".to_string(),
            course: "B.Tech CSE".to_string(),
            year: "3".to_string(),
        })
    }

    fn profile_input() -> WizardEvent {
        WizardEvent::Apply(StepInput::Profile {
            skill_level: "intermediate".to_string(),
            interests: ["web", "ai"].iter().map(|s| s.to_string()).collect(),
            referral_source: "instagram".to_string(),
        })
    }

    #[test]
    fn test_full_individual_walkthrough() {
        let mut sm = RegistrationWizard::new().state_machine();

        sm.handle(&identity_input());
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Academic);

        sm.handle(&academic_input());
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Participation);

        // Individual default needs no extra input on step 3
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Profile);

        sm.handle(&profile_input());
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Consent);

        sm.handle(&WizardEvent::Apply(StepInput::Consent {
            communication_consent: true,
            declaration: true,
        }));
        sm.handle(&WizardEvent::Submit);
        assert!(sm.is_submitting());

        sm.handle(&WizardEvent::SubmissionAccepted {
            registration_id: "HF26-0001".to_string(),
        });
        assert!(sm.is_submitted());
        assert_eq!(sm.registration_id(), Some("HF26-0001"));
    }

    #[test]
    fn test_invalid_step_blocks_advancement() {
        let mut sm = RegistrationWizard::new().state_machine();

        // Nothing filled in yet
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Identity);
        assert!(sm.errors().contains_key("email"));

        // Fixing the fields clears the way
        sm.handle(&identity_input());
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Academic);
        assert!(sm.errors().is_empty());
    }

    #[test]
    fn test_previous_is_clamped_at_step_one() {
        let mut sm = RegistrationWizard::new().state_machine();
        sm.handle(&WizardEvent::Previous);
        sm.handle(&WizardEvent::Previous);
        assert_eq!(sm.current_step(), Step::Identity);
    }

    #[test]
    fn test_next_is_clamped_at_step_five() {
        let mut sm = RegistrationWizard::new().state_machine();
        sm.handle(&identity_input());
        sm.handle(&WizardEvent::Next);
        sm.handle(&academic_input());
        sm.handle(&WizardEvent::Next);
        sm.handle(&WizardEvent::Next);
        sm.handle(&profile_input());
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Consent);

        sm.handle(&WizardEvent::Next);
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.current_step(), Step::Consent);
        assert!(!sm.is_submitted());
    }

    #[test]
    fn test_submit_requires_both_consents() {
        let mut sm = RegistrationWizard::with_form(RegistrationForm {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            gender: "female".to_string(),
            college: "NIT Trichy".to_string(),
            city: "Tiruchirappalli".to_string(),
            state: "Tamil Nadu".to_string(),
            course: "B.Tech CSE".to_string(),
            year: "3".to_string(),
            skill_level: "intermediate".to_string(),
            referral_source: "instagram".to_string(),
            communication_consent: true,
            declaration: false,
            ..Default::default()
        })
        .state_machine();

        for _ in 0..4 {
            sm.handle(&WizardEvent::Next);
        }
        assert_eq!(sm.current_step(), Step::Consent);

        sm.handle(&WizardEvent::Submit);
        assert!(!sm.is_submitting());
        assert!(sm.errors().contains_key("declaration"));

        sm.handle(&WizardEvent::Apply(StepInput::Consent {
            communication_consent: true,
            declaration: true,
        }));
        sm.handle(&WizardEvent::Submit);
        assert!(sm.is_submitting());
    }

    #[test]
    fn test_failed_submission_reenables_submit() {
        let mut sm = RegistrationWizard::with_form(RegistrationForm {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            gender: "female".to_string(),
            college: "NIT Trichy".to_string(),
            city: "Tiruchirappalli".to_string(),
            state: "Tamil Nadu".to_string(),
            course: "B.Tech CSE".to_string(),
            year: "3".to_string(),
            skill_level: "intermediate".to_string(),
            referral_source: "instagram".to_string(),
            communication_consent: true,
            declaration: true,
            ..Default::default()
        })
        .state_machine();

        for _ in 0..4 {
            sm.handle(&WizardEvent::Next);
        }
        sm.handle(&WizardEvent::Submit);
        assert!(sm.is_submitting());

        // Server rejected; the caller sends Previous to re-enable submit
        sm.handle(&WizardEvent::Previous);
        assert!(!sm.is_submitting());
        assert_eq!(sm.current_step(), Step::Consent);

        sm.handle(&WizardEvent::Submit);
        assert!(sm.is_submitting());
    }
}
