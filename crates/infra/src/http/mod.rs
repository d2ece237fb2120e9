//! HTTP transport

pub mod client;

pub use client::{decode_response, HttpClient, HttpClientBuilder};
