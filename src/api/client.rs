use async_trait::async_trait;
use moka::future::Cache;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::api::errors::ApiError;
use crate::api::types::{
    ApiMessage, PaymentStatus, PaymentSyncRequest, RegisterData, RegisterResponse,
    RegistrationRecord, RegistrationResponse,
};
use crate::config::ApiConfig;
use crate::observability::api_metrics;
use crate::wizard::RegistrationForm;

/// Seam for the external registration service, so commands and tests can run
/// against mocks instead of the network.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// `POST /register` with the full form payload.
    async fn register(&self, form: &RegistrationForm) -> Result<RegisterData, ApiError>;

    /// `GET /registrations/:id` for the admin detail view.
    async fn fetch_registration(&self, id: &str) -> Result<RegistrationRecord, ApiError>;

    /// `PATCH /registrations/:id/payment`, the backup sync fired from the
    /// payment-success path as a fallback to the gateway webhook.
    async fn mark_payment_completed(
        &self,
        id: &str,
        transaction_id: &str,
    ) -> Result<String, ApiError>;
}

/// HTTP client for the registration backend. Carries a small response cache
/// for repeated admin lookups; writes invalidate the affected entry.
#[derive(Debug)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache<String, RegistrationRecord>,
}

impl RegistrationClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        // Admin lookups of the same registration within a couple of minutes
        // don't need to hit the backend again.
        let cache = Cache::builder()
            .max_capacity(500)
            .time_to_live(Duration::from_secs(120))
            .build();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Pull the server's message out of an error body, tolerating bodies
    /// that aren't the usual `{success, message}` envelope.
    async fn rejection(status: StatusCode, response: reqwest::Response) -> ApiError {
        api_metrics().record_rejection();
        let message = response
            .json::<ApiMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        ApiError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(&self, form: &RegistrationForm) -> Result<RegisterData, ApiError> {
        api_metrics().record_request();
        debug!(
            participation_type = %form.participation_type,
            "submitting registration"
        );

        let response = self
            .http
            .post(self.endpoint("register"))
            .json(form)
            .send()
            .await
            .map_err(|err| {
                api_metrics().record_transport_error();
                ApiError::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "register request rejected");
            return Err(Self::rejection(status, response).await);
        }

        let body: RegisterResponse = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        if !body.success {
            api_metrics().record_rejection();
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: body.message,
            });
        }

        let data = body.data.ok_or_else(|| {
            ApiError::Decode("register response had success=true but no data".to_string())
        })?;
        info!(
            registration_id = %data.registration_id,
            amount = data.payment_amount,
            "registration accepted by backend"
        );
        Ok(data)
    }

    async fn fetch_registration(&self, id: &str) -> Result<RegistrationRecord, ApiError> {
        if let Some(record) = self.cache.get(id).await {
            debug!(registration_id = %id, "registration served from cache");
            api_metrics().record_cache_hit();
            return Ok(record);
        }
        api_metrics().record_cache_miss();
        api_metrics().record_request();

        let response = self
            .http
            .get(self.endpoint(&format!("registrations/{id}")))
            .send()
            .await
            .map_err(|err| {
                api_metrics().record_transport_error();
                ApiError::from(err)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        let body: RegistrationResponse = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        match body.data {
            Some(record) if body.success => {
                self.cache.insert(id.to_string(), record.clone()).await;
                Ok(record)
            }
            _ => Err(ApiError::NotFound { id: id.to_string() }),
        }
    }

    async fn mark_payment_completed(
        &self,
        id: &str,
        transaction_id: &str,
    ) -> Result<String, ApiError> {
        api_metrics().record_request();
        let request = PaymentSyncRequest {
            payment_status: PaymentStatus::Completed,
            transaction_id: transaction_id.to_string(),
        };

        let response = self
            .http
            .patch(self.endpoint(&format!("registrations/{id}/payment")))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                api_metrics().record_transport_error();
                ApiError::from(err)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        let body: ApiMessage = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        // The stored record changed; don't serve the stale copy.
        self.cache.invalidate(id).await;
        info!(registration_id = %id, transaction_id = %transaction_id, "payment marked completed");
        Ok(body.message)
    }
}
