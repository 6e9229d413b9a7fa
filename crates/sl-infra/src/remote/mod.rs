pub mod api_client;
mod dto;

pub use api_client::{HttpApiClient, DEFAULT_TIMEOUT};
