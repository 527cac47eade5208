//! Easebuzz payment handoff.
//!
//! After the backend accepts a registration, the applicant is sent to the
//! gateway's hosted page with the reconciliation fields in the query string.
//! Individual and team registrations use different hosted-page slugs; the
//! backend-assigned registration id doubles as the transaction id.

use url::Url;

use crate::api::RegisterData;
use crate::config::PaymentConfig;
use crate::wizard::{ParticipationType, RegistrationForm};

/// Everything the gateway URL embeds. UDF1 carries the participation type
/// and UDF2 the team name, both for payment reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentHandoff {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
    pub txnid: String,
    pub participation_type: ParticipationType,
    pub team_name: Option<String>,
}

impl PaymentHandoff {
    /// Combine the submitted form with the backend's register response.
    pub fn from_submission(form: &RegistrationForm, data: &RegisterData) -> Self {
        let team_name = match data.participation_type {
            ParticipationType::Team if !form.team_name.trim().is_empty() => {
                Some(form.team_name.trim().to_string())
            }
            _ => None,
        };
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.mobile.trim().to_string(),
            amount: data.payment_amount,
            txnid: data.registration_id.clone(),
            participation_type: data.participation_type,
            team_name,
        }
    }

    /// Build the full-page redirect target. The site navigated away to this
    /// URL; the desk prints it for the applicant to open.
    pub fn url(&self, config: &PaymentConfig) -> Result<Url, url::ParseError> {
        let slug = match self.participation_type {
            ParticipationType::Individual => &config.individual_slug,
            ParticipationType::Team => &config.team_slug,
        };
        let base = format!("{}/{}", config.gateway_base.trim_end_matches('/'), slug);
        let mut url = Url::parse(&base)?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("name", &self.name)
                .append_pair("email", &self.email)
                .append_pair("phone", &self.phone)
                .append_pair("amount", &format!("{:.2}", self.amount))
                .append_pair("txnid", &self.txnid)
                .append_pair("udf1", self.participation_type.as_str());
            if let Some(team_name) = &self.team_name {
                pairs.append_pair("udf2", team_name);
            }
        }

        tracing::info!(
            txnid = %self.txnid,
            gateway = %url.host_str().unwrap_or_default(),
            "payment handoff URL built"
        );
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config() -> PaymentConfig {
        PaymentConfig::default()
    }

    fn individual_data() -> RegisterData {
        RegisterData {
            registration_id: "HF26-0042".to_string(),
            payment_amount: 199.0,
            participation_type: ParticipationType::Individual,
        }
    }

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            ..Default::default()
        }
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_individual_url_uses_indi_slug_and_omits_udf2() {
        let handoff = PaymentHandoff::from_submission(&form(), &individual_data());
        let url = handoff.url(&config()).unwrap();

        assert!(url.path().ends_with("/Indi_HackFest2026"));
        let query = query_map(&url);
        assert_eq!(query.get("txnid").map(String::as_str), Some("HF26-0042"));
        assert_eq!(query.get("amount").map(String::as_str), Some("199.00"));
        assert_eq!(query.get("udf1").map(String::as_str), Some("individual"));
        assert!(!query.contains_key("udf2"));
    }

    #[test]
    fn test_team_url_uses_team_slug_and_carries_team_name() {
        let mut form = form();
        form.participation_type = ParticipationType::Team;
        form.team_name = "Null Pointers".to_string();
        let data = RegisterData {
            registration_id: "HF26-0043".to_string(),
            payment_amount: 499.0,
            participation_type: ParticipationType::Team,
        };

        let handoff = PaymentHandoff::from_submission(&form, &data);
        let url = handoff.url(&config()).unwrap();

        assert!(url.path().ends_with("/Team_HackFest2026"));
        let query = query_map(&url);
        assert_eq!(query.get("udf2").map(String::as_str), Some("Null Pointers"));
        assert_eq!(query.get("udf1").map(String::as_str), Some("team"));
    }

    #[test]
    fn test_team_without_a_team_name_omits_udf2() {
        let mut form = form();
        form.participation_type = ParticipationType::Team;
        form.team_name = "   ".to_string();
        let data = RegisterData {
            registration_id: "HF26-0044".to_string(),
            payment_amount: 499.0,
            participation_type: ParticipationType::Team,
        };

        let handoff = PaymentHandoff::from_submission(&form, &data);
        let url = handoff.url(&config()).unwrap();
        assert!(!query_map(&url).contains_key("udf2"));
    }

    #[test]
    fn test_query_values_are_url_encoded() {
        let mut form = form();
        form.name = "Asha & Ravi".to_string();
        let handoff = PaymentHandoff::from_submission(&form, &individual_data());
        let url = handoff.url(&config()).unwrap();

        assert!(url.as_str().contains("name=Asha+%26+Ravi"));
        assert_eq!(
            query_map(&url).get("name").map(String::as_str),
            Some("Asha & Ravi")
        );
    }
}
