//! Per-step validation rules for the registration wizard.
//!
//! Each step validates to a field -> message map. A non-empty map blocks
//! advancement; the map is recomputed from scratch on every attempt so stale
//! errors never linger after the user fixes a field.

use super::types::{RegistrationForm, Step};
use std::collections::BTreeMap;

pub type FieldErrors = BTreeMap<&'static str, String>;

/// Pure validation of a single step against the current form.
pub fn validate_step(step: Step, form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        Step::Identity => {
            require(&mut errors, "name", &form.name, "Name is required");
            validate_email(&mut errors, "email", &form.email);
            validate_mobile(&mut errors, "mobile", &form.mobile);
            require(&mut errors, "gender", &form.gender, "Gender is required");
        }
        Step::Academic => {
            require(&mut errors, "college", &form.college, "College is required");
            require(&mut errors, "city", &form.city, "City is required");
            require(&mut errors, "state", &form.state, "State is required");
            require(&mut errors, "course", &form.course, "Course is required");
            require(&mut errors, "year", &form.year, "Year of study is required");
        }
        Step::Participation => {
            if form.is_team() {
                require(
                    &mut errors,
                    "teamName",
                    &form.team_name,
                    "Team name is required for team registration",
                );
                require(
                    &mut errors,
                    "member2Name",
                    &form.member2.name,
                    "Second member's name is required",
                );
                validate_email(&mut errors, "member2Email", &form.member2.email);
                validate_mobile(&mut errors, "member2Mobile", &form.member2.mobile);

                // Members 3 and 4 are optional, but anything typed in must
                // still be well formed.
                for (slot, member) in form.partial_optional_members() {
                    if !member.email.trim().is_empty() && !is_valid_email(&member.email) {
                        errors.insert(
                            optional_member_field(slot, "Email"),
                            "Enter a valid email address".to_string(),
                        );
                    }
                    if !member.mobile.trim().is_empty() && !is_valid_mobile(&member.mobile) {
                        errors.insert(
                            optional_member_field(slot, "Mobile"),
                            "Mobile number must be at least 10 digits".to_string(),
                        );
                    }
                }
            }
        }
        Step::Profile => {
            require(
                &mut errors,
                "skillLevel",
                &form.skill_level,
                "Skill level is required",
            );
            require(
                &mut errors,
                "referralSource",
                &form.referral_source,
                "Tell us how you heard about HackFest",
            );
        }
        Step::Consent => {
            if !form.communication_consent {
                errors.insert(
                    "communicationConsent",
                    "Consent to updates over email/WhatsApp is required".to_string(),
                );
            }
            if !form.declaration {
                errors.insert(
                    "declaration",
                    "You must accept the declaration to register".to_string(),
                );
            }
        }
    }

    errors
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

fn validate_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "Email is required".to_string());
    } else if !is_valid_email(value) {
        errors.insert(field, "Enter a valid email address".to_string());
    }
}

fn validate_mobile(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "Mobile number is required".to_string());
    } else if !is_valid_mobile(value) {
        errors.insert(
            field,
            "Mobile number must be at least 10 digits".to_string(),
        );
    }
}

/// Same shallow check the registration site performed: an address with an
/// `@` and a `.` somewhere. Real verification happens via the confirmation
/// mail on the backend.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    value.contains('@') && value.contains('.')
}

/// Digits only (a leading `+` is tolerated), at least 10 of them.
pub fn is_valid_mobile(value: &str) -> bool {
    let digits: String = value
        .trim()
        .strip_prefix('+')
        .unwrap_or(value.trim())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    digits.len() >= 10 && digits.chars().all(|c| c.is_ascii_digit())
}

fn optional_member_field(slot: &'static str, suffix: &'static str) -> &'static str {
    match (slot, suffix) {
        ("member3", "Email") => "member3Email",
        ("member3", "Mobile") => "member3Mobile",
        ("member4", "Email") => "member4Email",
        _ => "member4Mobile",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::types::ParticipationType;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
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
        }
    }

    #[test]
    fn test_every_step_passes_on_a_complete_individual_form() {
        let form = valid_form();
        for step in [
            Step::Identity,
            Step::Academic,
            Step::Participation,
            Step::Profile,
            Step::Consent,
        ] {
            let errors = validate_step(step, &form);
            assert!(errors.is_empty(), "unexpected errors at {step:?}: {errors:?}");
        }
    }

    #[test]
    fn test_identity_step_flags_every_missing_field() {
        let errors = validate_step(Step::Identity, &RegistrationForm::default());
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("mobile"));
        assert!(errors.contains_key("gender"));
    }

    #[test]
    fn test_email_format_check() {
        let mut form = valid_form();
        form.email = "asha-at-example".to_string();
        let errors = validate_step(Step::Identity, &form);
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn test_mobile_must_be_ten_digits() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("+91 98765 43210"));
        assert!(!is_valid_mobile("98765"));
        assert!(!is_valid_mobile("98765abcde"));
    }

    #[test]
    fn test_team_with_empty_member2_email_always_errors() {
        let mut form = valid_form();
        form.participation_type = ParticipationType::Team;
        form.team_name = "Null Pointers".to_string();
        form.member2.name = "Ravi".to_string();
        form.member2.mobile = "9123456780".to_string();
        form.member2.email = String::new();

        let errors = validate_step(Step::Participation, &form);
        assert!(errors.contains_key("member2Email"));
    }

    #[test]
    fn test_individual_skips_team_checks() {
        let mut form = valid_form();
        form.participation_type = ParticipationType::Individual;
        form.team_name = String::new();
        assert!(validate_step(Step::Participation, &form).is_empty());
    }

    #[test]
    fn test_optional_member_validated_only_when_partially_filled() {
        let mut form = valid_form();
        form.participation_type = ParticipationType::Team;
        form.team_name = "Null Pointers".to_string();
        form.member2 = crate::wizard::types::TeamMember {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            mobile: "9123456780".to_string(),
        };
        assert!(validate_step(Step::Participation, &form).is_empty());

        form.member3.email = "broken-address".to_string();
        let errors = validate_step(Step::Participation, &form);
        assert!(errors.contains_key("member3Email"));
    }

    #[test]
    fn test_consent_step_requires_both_flags() {
        let mut form = valid_form();
        form.declaration = false;
        let errors = validate_step(Step::Consent, &form);
        assert!(errors.contains_key("declaration"));
        assert!(!errors.contains_key("communicationConsent"));

        form.communication_consent = false;
        let errors = validate_step(Step::Consent, &form);
        assert_eq!(errors.len(), 2);
    }
}
