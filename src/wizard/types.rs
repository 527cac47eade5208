use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Whether the applicant registers alone or brings a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationType {
    #[default]
    Individual,
    Team,
}

impl ParticipationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationType::Individual => "individual",
            ParticipationType::Team => "team",
        }
    }
}

impl std::fmt::Display for ParticipationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParticipationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" | "i" => Ok(ParticipationType::Individual),
            "team" | "t" => Ok(ParticipationType::Team),
            other => Err(format!("unknown participation type: {other}")),
        }
    }
}

/// Contact triple for an additional team member. Empty strings mean the
/// slot is unfilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl TeamMember {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.mobile.trim().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.mobile.trim().is_empty()
    }
}

/// The cumulative registration form. Lives only in memory for the duration
/// of the wizard session and is serialized once, as the register request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    // Step 1: identity
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gender: String,

    // Step 2: academic
    pub college: String,
    pub city: String,
    pub state: String,
    pub course: String,
    pub year: String,

    // Step 3: participation
    pub participation_type: ParticipationType,
    pub team_name: String,
    pub member2: TeamMember,
    pub member3: TeamMember,
    pub member4: TeamMember,

    // Step 4: profile
    pub skill_level: String,
    pub interests: BTreeSet<String>,
    pub referral_source: String,

    // Step 5: consent
    pub communication_consent: bool,
    pub declaration: bool,
}

impl RegistrationForm {
    pub fn is_team(&self) -> bool {
        self.participation_type == ParticipationType::Team
    }

    /// Optional members (3 and 4) that have at least one field filled in.
    pub fn partial_optional_members(
        &self,
    ) -> impl Iterator<Item = (&'static str, &TeamMember)> + '_ {
        [("member3", &self.member3), ("member4", &self.member4)]
            .into_iter()
            .filter(|(_, m)| !m.is_empty())
    }
}

/// Wizard steps, in order. The wire representation is never needed; the
/// numbering only exists for display and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Identity,
    Academic,
    Participation,
    Profile,
    Consent,
}

impl Step {
    pub const FIRST: Step = Step::Identity;
    pub const LAST: Step = Step::Consent;

    pub fn number(&self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Academic => 2,
            Step::Participation => 3,
            Step::Profile => 4,
            Step::Consent => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Identity => "About you",
            Step::Academic => "Your college",
            Step::Participation => "Solo or team",
            Step::Profile => "Your profile",
            Step::Consent => "Consent & declaration",
        }
    }

    /// Next step, clamped at the last one.
    pub fn next(&self) -> Step {
        match self {
            Step::Identity => Step::Academic,
            Step::Academic => Step::Participation,
            Step::Participation => Step::Profile,
            Step::Profile => Step::Consent,
            Step::Consent => Step::Consent,
        }
    }

    /// Previous step, clamped at the first one.
    pub fn previous(&self) -> Step {
        match self {
            Step::Identity => Step::Identity,
            Step::Academic => Step::Identity,
            Step::Participation => Step::Academic,
            Step::Profile => Step::Participation,
            Step::Consent => Step::Profile,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} of 5: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamping_at_both_ends() {
        assert_eq!(Step::Consent.next(), Step::Consent);
        assert_eq!(Step::Identity.previous(), Step::Identity);
        assert_eq!(Step::Identity.next(), Step::Academic);
        assert_eq!(Step::Consent.previous(), Step::Profile);
    }

    #[test]
    fn test_participation_type_wire_format() {
        let json = serde_json::to_string(&ParticipationType::Individual).unwrap();
        assert_eq!(json, "\"individual\"");
        let json = serde_json::to_string(&ParticipationType::Team).unwrap();
        assert_eq!(json, "\"team\"");
    }

    #[test]
    fn test_form_serializes_camel_case() {
        let form = RegistrationForm {
            name: "Asha".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("participationType").is_some());
        assert!(value.get("teamName").is_some());
        assert!(value.get("communicationConsent").is_some());
    }

    #[test]
    fn test_team_member_empty_and_complete() {
        let mut member = TeamMember::default();
        assert!(member.is_empty());
        assert!(!member.is_complete());

        member.name = "Ravi".to_string();
        assert!(!member.is_empty());
        assert!(!member.is_complete());

        member.email = "ravi@example.com".to_string();
        member.mobile = "9876543210".to_string();
        assert!(member.is_complete());
    }
}
