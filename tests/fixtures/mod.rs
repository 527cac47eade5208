//! Shared builders for registration test data.

use hackfest_desk::wizard::{ParticipationType, RegistrationForm, TeamMember};

/// A complete, valid individual registration.
pub fn valid_individual_form() -> RegistrationForm {
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
        interests: ["web", "ai"].iter().map(|s| s.to_string()).collect(),
        referral_source: "instagram".to_string(),
        communication_consent: true,
        declaration: true,
        ..Default::default()
    }
}

/// A complete, valid team registration with two filled members.
pub fn valid_team_form() -> RegistrationForm {
    let mut form = valid_individual_form();
    form.participation_type = ParticipationType::Team;
    form.team_name = "Null Pointers".to_string();
    form.member2 = TeamMember {
        name: "Ravi Kumar".to_string(),
        email: "ravi@example.com".to_string(),
        mobile: "9123456780".to_string(),
    };
    form
}
