//! Model provider adapters implementing the [`ModelClient`](slr_application::ModelClient) port.

pub mod mistral;

pub use mistral::MistralClient;
