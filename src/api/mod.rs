pub mod client;
pub mod errors;
pub mod types;

pub use client::{RegistrationApi, RegistrationClient};
pub use errors::ApiError;
pub use types::{
    ApiMessage, PaymentStatus, PaymentSyncRequest, RegisterData, RegisterResponse,
    RegistrationRecord, RegistrationResponse,
};
