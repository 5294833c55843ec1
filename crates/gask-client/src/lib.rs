mod client;
mod config;
mod error;

pub use client::{DEFAULT_BASE_URL, GenerateClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, TransportErrorKind};
