mod client;

pub use client::{HttpClient, USER_AGENT};
