pub mod gateway;

pub use gateway::PaymentHandoff;
