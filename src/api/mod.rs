pub mod client;
pub mod declarations;

pub use client::{ApiClient, ApiError};
