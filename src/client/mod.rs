//! HTTP clients for external services

pub mod practicum;

pub use practicum::{PracticumClient, StatusApi, ENDPOINT};
