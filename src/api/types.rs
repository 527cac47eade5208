use crate::wizard::{ParticipationType, RegistrationForm};
use serde::{Deserialize, Serialize};

/// Envelope returned by `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<RegisterData>,
}

/// The payload the payment handoff is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub registration_id: String,
    pub payment_amount: f64,
    pub participation_type: ParticipationType,
}

/// Envelope returned by `GET /registrations/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<RegistrationRecord>,
}

/// A stored registration as the backend reports it: the submitted form plus
/// the fields the backend assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub registration_id: String,
    #[serde(flatten)]
    pub form: RegistrationForm,
    pub payment_amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => f.write_str("pending"),
            PaymentStatus::Completed => f.write_str("completed"),
            PaymentStatus::Failed => f.write_str("failed"),
        }
    }
}

/// Body for `PATCH /registrations/:id/payment`, the client-side fallback to
/// the gateway webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSyncRequest {
    pub payment_status: PaymentStatus,
    pub transaction_id: String,
}

/// Minimal `{success, message}` envelope, used by the PATCH response and by
/// error bodies on any endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_parses_success_envelope() {
        let body = r#"{
            "success": true,
            "message": "Registration created",
            "data": {
                "registrationId": "HF26-0042",
                "paymentAmount": 499.0,
                "participationType": "team"
            }
        }"#;
        let parsed: RegisterResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        let data = parsed.data.unwrap();
        assert_eq!(data.registration_id, "HF26-0042");
        assert_eq!(data.participation_type, ParticipationType::Team);
    }

    #[test]
    fn test_register_response_tolerates_missing_data() {
        let body = r#"{"success": false, "message": "Email already registered"}"#;
        let parsed: RegisterResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.message, "Email already registered");
    }

    #[test]
    fn test_registration_record_flattens_form_fields() {
        let body = r#"{
            "registrationId": "HF26-0042",
            "name": "Asha Verma",
            "email": "asha@example.com",
            "mobile": "9876543210",
            "participationType": "individual",
            "paymentAmount": 199.0,
            "paymentStatus": "completed",
            "transactionId": "HF26-0042",
            "createdAt": "2026-01-12T09:30:00Z"
        }"#;
        let record: RegistrationRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.form.name, "Asha Verma");
        assert_eq!(record.payment_status, PaymentStatus::Completed);
        assert!(record.created_at.is_some());
    }
}
